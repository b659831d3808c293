//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the student-management REST API
    pub api_base_url: String,
    /// Path of the JSON file backing durable session storage
    pub storage_path: PathBuf,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_base_url = env::var("CAMPUSDESK_API_URL")
            .unwrap_or_else(|_| "http://localhost:5000/api".to_string());
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidApiUrl(api_base_url));
        }

        Ok(Self {
            api_base_url,
            storage_path: env::var("CAMPUSDESK_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_storage_path()),
            request_timeout_secs: env::var("CAMPUSDESK_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            storage_path: std::env::temp_dir().join("campus-desk-test-session.json"),
            request_timeout_secs: 5,
        }
    }
}

/// Default session file location: under the home directory, falling back
/// to the working directory when HOME is unset.
fn default_storage_path() -> PathBuf {
    let base = env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));
    base.join(".campusdesk").join("session.json")
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid API base URL (must be http(s)): {0}")]
    InvalidApiUrl(String),
}
