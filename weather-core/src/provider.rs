use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

use crate::{Config, LookupError, WeatherResult, provider::openweather::OpenWeatherProvider};

pub mod openweather;

/// Source of current conditions for a city.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Issue exactly one request for `city`. No retries.
    async fn current_weather(
        &self,
        city: &str,
        api_key: &str,
    ) -> Result<WeatherResult, LookupError>;
}

/// Construct the OpenWeather provider for the endpoint in `config`.
pub fn provider_from_config(config: &Config) -> Arc<dyn WeatherProvider> {
    Arc::new(OpenWeatherProvider::new(config.base_url.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_uses_configured_endpoint() {
        let cfg = Config {
            base_url: "http://localhost:1234".into(),
            ..Config::default()
        };

        let provider = provider_from_config(&cfg);
        assert!(format!("{provider:?}").contains("http://localhost:1234"));
    }

    #[test]
    fn provider_from_config_does_not_require_a_key() {
        // The key is checked per submission, not at construction.
        let provider = provider_from_config(&Config::default());
        assert!(format!("{provider:?}").contains("api.openweathermap.org"));
    }
}
