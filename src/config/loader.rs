use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/lightboard/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("lightboard").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Timeouts are non-zero
    /// - Tick rate is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "request_timeout_seconds must be greater than zero".to_string(),
            });
        }

        if self.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "connect_timeout_seconds must be greater than zero".to_string(),
            });
        }

        if self.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        self
    }
}
