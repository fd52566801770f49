use reqwest::StatusCode;
use thiserror::Error;

/// Every way a lookup can fail. The `Display` output is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// API key missing, blank, or still the placeholder.
    #[error(
        "Please set your OpenWeather API key.\n\
         Hint: run `weather configure` or set OPENWEATHER_API_KEY."
    )]
    Configuration,

    /// Empty or whitespace-only city name.
    #[error("Please enter a city name")]
    Validation,

    /// HTTP 401 from the provider.
    #[error("Invalid API key. Please check your OpenWeather API key.")]
    Auth,

    /// HTTP 404 from the provider.
    #[error("City not found. Please check the city name.")]
    NotFound,

    /// Any other non-2xx status, transport failure, or unreadable body.
    #[error("{0}")]
    Provider(String),
}

/// Coarse classification of [`LookupError`], handy for matching without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Configuration,
    Validation,
    Auth,
    NotFound,
    Provider,
}

const FETCH_FAILED: &str = "Failed to fetch weather data";

impl LookupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::Configuration => ErrorKind::Configuration,
            LookupError::Validation => ErrorKind::Validation,
            LookupError::Auth => ErrorKind::Auth,
            LookupError::NotFound => ErrorKind::NotFound,
            LookupError::Provider(_) => ErrorKind::Provider,
        }
    }

    /// Map a non-success HTTP status to the error the user sees.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => LookupError::Auth,
            StatusCode::NOT_FOUND => LookupError::NotFound,
            _ => LookupError::Provider(FETCH_FAILED.to_string()),
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::Provider(err.to_string())
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::Provider(format!("Failed to parse weather data: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_uses_fixed_messages() {
        assert_eq!(
            LookupError::from_status(StatusCode::UNAUTHORIZED).to_string(),
            "Invalid API key. Please check your OpenWeather API key."
        );
        assert_eq!(
            LookupError::from_status(StatusCode::NOT_FOUND).to_string(),
            "City not found. Please check the city name."
        );

        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::TOO_MANY_REQUESTS,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::BAD_GATEWAY,
        ] {
            let err = LookupError::from_status(status);
            assert_eq!(err.kind(), ErrorKind::Provider);
            assert_eq!(err.to_string(), "Failed to fetch weather data");
        }
    }

    #[test]
    fn guard_messages() {
        assert_eq!(
            LookupError::Validation.to_string(),
            "Please enter a city name"
        );

        let msg = LookupError::Configuration.to_string();
        assert!(msg.contains("Please set your OpenWeather API key"));
        assert!(msg.contains("Hint: run `weather configure`"));
    }

    #[test]
    fn provider_error_carries_underlying_message() {
        let err = LookupError::Provider("connection refused".into());
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(err.kind(), ErrorKind::Provider);
    }

    #[test]
    fn json_errors_become_provider_errors() {
        let parsed: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err = LookupError::from(parsed.unwrap_err());

        assert_eq!(err.kind(), ErrorKind::Provider);
        assert!(err.to_string().starts_with("Failed to parse weather data"));
    }
}
