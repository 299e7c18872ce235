use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{AppError, Result};

const DEFAULT_SUMMARIZE_URL: &str = "https://api-resumo-815414977002.us-central1.run.app";
const DEFAULT_LOOKUP_URL: &str = "https://get-summary-815414977002.us-central1.run.app";
const DEFAULT_SHARE_ORIGIN: &str = "https://resumido.app";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Endpoint that accepts `?url=` and returns `{ summary, id }`.
    #[serde(default = "default_summarize_url")]
    pub summarize_url: String,

    /// Endpoint that accepts `?id=` and returns the persisted record.
    #[serde(default = "default_lookup_url")]
    pub lookup_url: String,

    /// Origin used to build share links: `<origin>/resumo/<id>`.
    #[serde(default = "default_share_origin")]
    pub share_origin: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_summarize_url() -> String {
    DEFAULT_SUMMARIZE_URL.to_string()
}

fn default_lookup_url() -> String {
    DEFAULT_LOOKUP_URL.to_string()
}

fn default_share_origin() -> String {
    DEFAULT_SHARE_ORIGIN.to_string()
}

fn default_request_timeout() -> u64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            summarize_url: default_summarize_url(),
            lookup_url: default_lookup_url(),
            share_origin: default_share_origin(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("resumido")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.summarize_url, DEFAULT_SUMMARIZE_URL);
        assert_eq!(config.lookup_url, DEFAULT_LOOKUP_URL);
        assert_eq!(config.share_origin, DEFAULT_SHARE_ORIGIN);
        assert_eq!(config.request_timeout_secs, 60);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config: Config = toml::from_str(
            r#"
            summarize_url = "http://localhost:8080/summarize"
            share_origin = "http://localhost:3000"
            "#,
        )
        .unwrap();
        assert_eq!(config.summarize_url, "http://localhost:8080/summarize");
        assert_eq!(config.share_origin, "http://localhost:3000");
        assert_eq!(config.lookup_url, DEFAULT_LOOKUP_URL);
    }
}
