mod loader;
mod types;

pub use loader::{ConfigError, ConfigOverrides, BASE_URL_ENV};
pub use types::{Config, LoggingConfig, ServerConfig, UploadConfig};
