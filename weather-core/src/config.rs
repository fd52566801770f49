use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

use crate::error::LookupError;

/// Value shipped in sample configs; treated the same as "no key".
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";

/// Environment variable that overrides the key stored on disk.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// base_url = "https://api.openweathermap.org/data/2.5"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// OpenWeather API key. Checked lazily, on each submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Provider endpoint root, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Return the API key if it has the required shape: present, non-blank, not the placeholder.
    pub fn credential(&self) -> Result<&str, LookupError> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() && key != PLACEHOLDER_API_KEY => Ok(key),
            _ => Err(LookupError::Configuration),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.credential().is_ok()
    }

    /// Store a trimmed API key.
    pub fn set_api_key(&mut self, api_key: &str) {
        self.api_key = Some(api_key.trim().to_string());
    }

    /// Replace the stored key with `OPENWEATHER_API_KEY` when that variable is set and non-empty.
    pub fn with_env_overrides(self) -> Self {
        self.with_api_key_override(env::var(API_KEY_ENV).ok())
    }

    fn with_api_key_override(mut self, value: Option<String>) -> Self {
        if let Some(key) = value.filter(|v| !v.trim().is_empty()) {
            self.set_api_key(&key);
        }
        self
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let mut cfg: Config = toml::from_str(contents)?;
        cfg.base_url = cfg.base_url.trim_end_matches('/').to_string();
        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(path)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-lookup", "weather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_credential() {
        let cfg = Config::default();

        assert_eq!(cfg.credential(), Err(LookupError::Configuration));
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn placeholder_and_blank_keys_are_rejected() {
        for key in [PLACEHOLDER_API_KEY, "", "   ", "  YOUR_API_KEY_HERE "] {
            let cfg = Config {
                api_key: Some(key.to_string()),
                ..Config::default()
            };
            assert!(!cfg.has_credential(), "key {key:?} should be rejected");
        }
    }

    #[test]
    fn real_key_is_returned_trimmed() {
        let mut cfg = Config::default();
        cfg.set_api_key("  abc123\n");

        assert_eq!(cfg.credential(), Ok("abc123"));
    }

    #[test]
    fn env_override_replaces_file_key() {
        let cfg = Config {
            api_key: Some("FROM_FILE".into()),
            ..Config::default()
        };

        let cfg = cfg.with_api_key_override(Some("FROM_ENV".into()));
        assert_eq!(cfg.credential(), Ok("FROM_ENV"));

        let cfg = cfg.with_api_key_override(Some("  ".into()));
        assert_eq!(cfg.credential(), Ok("FROM_ENV"));

        let cfg = cfg.with_api_key_override(None);
        assert_eq!(cfg.credential(), Ok("FROM_ENV"));
    }

    #[test]
    fn parses_toml_with_defaults() {
        let cfg = Config::from_toml(r#"api_key = "KEY""#).expect("valid toml");
        assert_eq!(cfg.credential(), Ok("KEY"));
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);

        let cfg = Config::from_toml(r#"base_url = "http://localhost:8080/""#)
            .expect("valid toml");
        assert_eq!(cfg.api_key, None);
        assert_eq!(cfg.base_url, "http://localhost:8080");
    }

    #[test]
    fn toml_roundtrip_preserves_key() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY");

        let text = toml::to_string_pretty(&cfg).expect("serializable");
        let back = Config::from_toml(&text).expect("parsable");
        assert_eq!(back, cfg);
    }
}
