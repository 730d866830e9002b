//! Client configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use vendorhub_core::error::AppError;
use vendorhub_core::types::pagination::DEFAULT_PAGE_SIZE;

/// Prefix for client environment overrides (`VENDORHUB_CLIENT__API_BASE_URL`).
pub const CLIENT_ENV_PREFIX: &str = "VENDORHUB_CLIENT";

/// Settings for talking to a VendorHub server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the server, without the `/api` suffix.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Directory holding the persisted session entries.
    #[serde(default = "default_session_dir")]
    pub session_dir: PathBuf,
    /// Vendors per list page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            session_dir: default_session_dir(),
            page_size: default_page_size(),
            request_timeout_seconds: default_timeout(),
        }
    }
}

impl ClientConfig {
    /// Load from `path` (default `config/client`) and `VENDORHUB_CLIENT__*`
    /// variables.
    pub fn load(path: Option<&str>) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path.unwrap_or("config/client")).required(false))
            .add_source(
                config::Environment::with_prefix(CLIENT_ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build client config: {e}")))?;

        config.try_deserialize().map_err(|e| {
            AppError::configuration(format!("Failed to deserialize client config: {e}"))
        })
    }
}

fn default_api_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_session_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".vendorhub")
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

fn default_timeout() -> u64 {
    10
}
