use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable overriding `server.base_url`.
pub const BASE_URL_ENV: &str = "CV_ANALYZER_BASE_URL";

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

/// Values that take precedence over the config file.
///
/// Command-line values beat the environment, which beats the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub log_level: Option<String>,
}

impl ConfigOverrides {
    /// Merge CLI values with the process environment.
    pub fn from_env(base_url: Option<String>, log_level: Option<String>) -> Self {
        let base_url = base_url.or_else(|| {
            std::env::var(BASE_URL_ENV)
                .ok()
                .filter(|value| !value.trim().is_empty())
        });
        Self {
            base_url,
            log_level,
        }
    }
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/cv-analyzer/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("cv-analyzer").join("config.toml")
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

    /// Apply overrides and re-validate.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(base_url) = overrides.base_url {
            self.server.base_url = base_url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The base URL parses and uses http or https
    /// - Endpoint paths are absolute
    /// - Timeouts are non-zero
    /// - Multipart field names are not empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        let server = &self.server;
        let url = reqwest::Url::parse(&server.base_url).map_err(|e| {
            ConfigError::ValidationError {
                message: format!("Invalid base_url '{}': {}", server.base_url, e),
            }
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "base_url '{}' must use http or https",
                    server.base_url
                ),
            });
        }

        for (name, path) in [
            ("status_path", &server.status_path),
            ("upload_path", &server.upload_path),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::ValidationError {
                    message: format!("{} '{}' must start with '/'", name, path),
                });
            }
        }

        if server.timeout_seconds == 0 || server.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Timeouts must be greater than zero".to_string(),
            });
        }

        if self.upload.file_field.trim().is_empty()
            || self.upload.description_field.trim().is_empty()
        {
            return Err(ConfigError::ValidationError {
                message: "Upload field names must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
