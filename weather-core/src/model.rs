use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// The provider's "current weather" body, reduced to the fields the widget displays.
///
/// Unknown fields are ignored; nothing is range-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub name: String,
    pub sys: Sys,
    pub main: Main,
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub wind: Wind,
    /// Metres. Not every station reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
    /// Unix seconds of the observation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dt: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sys {
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Main {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub pressure: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

impl WeatherResult {
    /// "{name}, {country}"
    pub fn location(&self) -> String {
        format!("{}, {}", self.name, self.sys.country)
    }

    /// Description of the primary condition, empty if the provider sent none.
    pub fn description(&self) -> &str {
        self.weather
            .first()
            .map(|w| w.description.as_str())
            .unwrap_or_default()
    }

    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        self.dt.and_then(|ts| DateTime::from_timestamp(ts, 0))
    }
}

/// Where the controller is in its single request/response cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(WeatherResult),
    Failed(LookupError),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn result(&self) -> Option<&WeatherResult> {
        match self {
            RequestState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LookupError> {
        match self {
            RequestState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// The error banner text, if any.
    pub fn message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }
}
