use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upload: UploadConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Location of the analysis service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Origin of the service (scheme + host + port).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the connectivity probe endpoint.
    #[serde(default = "default_status_path")]
    pub status_path: String,
    /// Path of the multipart upload endpoint.
    #[serde(default = "default_upload_path")]
    pub upload_path: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Shape of the multipart payload sent on submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Form field carrying the CV file.
    #[serde(default = "default_file_field")]
    pub file_field: String,
    /// Form field carrying the job description text.
    #[serde(default = "default_description_field")]
    pub description_field: String,
    /// Accepted file extensions, lowercase and without the dot.
    /// An empty list accepts any file.
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to the platform cache dir.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_status_path() -> String {
    "/api/test".to_string()
}

fn default_upload_path() -> String {
    "/api/upload".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_file_field() -> String {
    "cv".to_string()
}

fn default_description_field() -> String {
    "jobDescription".to_string()
}

fn default_allowed_extensions() -> Vec<String> {
    vec!["pdf".to_string(), "docx".to_string()]
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            status_path: default_status_path(),
            upload_path: default_upload_path(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            file_field: default_file_field(),
            description_field: default_description_field(),
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl ServerConfig {
    /// Full URL of the status probe endpoint.
    pub fn status_url(&self) -> String {
        join_url(&self.base_url, &self.status_path)
    }

    /// Full URL of the upload endpoint.
    pub fn upload_url(&self) -> String {
        join_url(&self.base_url, &self.upload_path)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }
}

impl UploadConfig {
    /// True if `file_name` carries one of the allowed extensions.
    pub fn accepts(&self, file_name: &str) -> bool {
        if self.allowed_extensions.is_empty() {
            return true;
        }
        let Some((_, ext)) = file_name.rsplit_once('.') else {
            return false;
        };
        self.allowed_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ext))
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
