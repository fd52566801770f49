//! Toolkit-independent rendering of a [`RequestState`].

use crate::{
    icon::WeatherIcon,
    model::{RequestState, WeatherResult},
};

pub const LOADING_LABEL: &str = "Getting Weather...";
pub const SUBMIT_LABEL: &str = "Get Weather";

/// What the widget should show for a given state.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// Empty form, nothing fetched yet.
    Form,
    /// Submit disabled, progress label shown.
    Loading { label: &'static str },
    /// Error banner, no result panel.
    Error { message: String },
    Result(ResultPanel),
}

/// Preformatted strings for the result panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanel {
    pub location: String,
    pub icon: WeatherIcon,
    pub description: String,
    pub temperature: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind_speed: String,
    pub pressure: String,
    /// Only present when the provider reported visibility.
    pub visibility: Option<String>,
}

impl View {
    pub fn from_state(state: &RequestState) -> Self {
        match state {
            RequestState::Idle => View::Form,
            RequestState::Loading => View::Loading { label: LOADING_LABEL },
            RequestState::Failed(err) => View::Error { message: err.to_string() },
            RequestState::Success(result) => View::Result(ResultPanel::from(result)),
        }
    }

    pub fn submit_enabled(&self) -> bool {
        !matches!(self, View::Loading { .. })
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            View::Loading { label } => *label,
            _ => SUBMIT_LABEL,
        }
    }
}

impl From<&WeatherResult> for ResultPanel {
    fn from(result: &WeatherResult) -> Self {
        Self {
            location: result.location(),
            icon: WeatherIcon::select(result.description(), result.main.temp),
            description: result.description().to_string(),
            temperature: format_celsius(result.main.temp),
            feels_like: format_celsius(result.main.feels_like),
            humidity: format!("{}%", result.main.humidity),
            wind_speed: format!("{} m/s", result.wind.speed),
            pressure: format!("{} hPa", result.main.pressure),
            visibility: result.visibility.map(format_visibility),
        }
    }
}

/// Round half up (toward positive infinity), so 25.5 -> 26 and -2.5 -> -2.
pub fn round_half_up(value: f64) -> i64 {
    // `f64::round` is exact but sends negative ties away from zero.
    let rounded = value.round();
    if value - rounded == 0.5 {
        (rounded + 1.0) as i64
    } else {
        rounded as i64
    }
}

pub fn format_celsius(value: f64) -> String {
    format!("{}°C", round_half_up(value))
}

/// Metres to kilometres with one decimal place.
pub fn format_visibility(metres: f64) -> String {
    format!("{:.1} km", metres / 1000.0)
}
