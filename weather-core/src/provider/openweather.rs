use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::{error::LookupError, model::WeatherResult};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    fn current_url(&self) -> String {
        format!("{}/weather", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip(self, api_key))]
    async fn current_weather(
        &self,
        city: &str,
        api_key: &str,
    ) -> Result<WeatherResult, LookupError> {
        let res = self
            .http
            .get(self.current_url())
            .query(&[("q", city), ("appid", api_key), ("units", "metric")])
            .send()
            .await
            .inspect_err(|e| warn!(error = %e, "OpenWeather request failed to send"))?;

        let status = res.status();
        debug!(%status, "OpenWeather responded");

        if !status.is_success() {
            return Err(LookupError::from_status(status));
        }

        let body = res.text().await?;
        let parsed: WeatherResult = serde_json::from_str(&body).inspect_err(|e| {
            warn!(error = %e, body = %truncate_body(&body), "unexpected body");
        })?;

        Ok(parsed)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_url_tolerates_trailing_slash() {
        let provider = OpenWeatherProvider::new("http://example.test/data/2.5/");
        assert_eq!(
            provider.current_url(),
            "http://example.test/data/2.5/weather"
        );
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let short = "short body";
        assert_eq!(truncate_body(short), short);

        let long = "°".repeat(300);
        let truncated = truncate_body(&long);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), 203);
    }
}
