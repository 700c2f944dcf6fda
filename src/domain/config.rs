//! Service configuration domain models.

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use super::AppError;

/// Name of the optional configuration file read from the working directory.
pub const CONFIG_FILE: &str = "factboard.toml";

/// Environment variable holding the text-generation API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Text-generation service configuration loaded from `factboard.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Chat-completions endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier sent with each request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), model: default_model(), timeout_secs: default_timeout() }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("model must not be empty".to_string()));
        }
        Ok(())
    }

    /// Load from `factboard.toml` in `dir`, falling back to defaults when the
    /// file is absent.
    pub fn load(dir: &Path) -> Result<Self, AppError> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        Self::parse(&content)
    }

    /// Parse configuration from string content.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let config: ApiConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

/// Read the API key from the environment. Absence is fatal for any action
/// that contacts the service.
pub fn api_key_from_env() -> Result<String, AppError> {
    std::env::var(API_KEY_VAR).map_err(|_| AppError::MissingApiKey)
}

fn default_api_url() -> Url {
    Url::parse("https://api.openai.com/v1/chat/completions").expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.api_url.as_str(), "https://api.openai.com/v1/chat/completions");
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_keeps_defaults_for_missing_fields() {
        let config = ApiConfig::parse("model = \"gpt-4o-mini\"\n").unwrap();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn parse_rejects_zero_timeout() {
        let err = ApiConfig::parse("timeout_secs = 0\n").unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(msg) if msg.contains("timeout_secs")));
    }

    #[test]
    fn parse_rejects_empty_model() {
        let err = ApiConfig::parse("model = \"  \"\n").unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(msg) if msg.contains("model")));
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        assert!(matches!(
            ApiConfig::parse("api_token = \"nope\"\n"),
            Err(AppError::TomlParseError(_))
        ));
    }

    #[test]
    fn load_returns_defaults_when_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let config = ApiConfig::load(dir.path()).unwrap();
        assert_eq!(config.model, "gpt-3.5-turbo");
    }

    #[test]
    fn load_reads_the_config_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "timeout_secs = 5\n").unwrap();
        let config = ApiConfig::load(dir.path()).unwrap();
        assert_eq!(config.timeout_secs, 5);
    }
}
