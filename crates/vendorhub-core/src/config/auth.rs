//! Identity verification configuration.

use serde::{Deserialize, Serialize};

/// Google identity token verification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// OAuth client ID; tokens must carry it as their audience.
    #[serde(default)]
    pub google_client_id: String,
    /// URL of the provider's JSON Web Key Set.
    #[serde(default = "default_jwks_url")]
    pub jwks_url: String,
    /// Optional local JWKS document used instead of fetching `jwks_url`.
    #[serde(default)]
    pub jwks_file: Option<String>,
    /// Accepted `iss` claim values.
    #[serde(default = "default_allowed_issuers")]
    pub allowed_issuers: Vec<String>,
    /// Clock skew tolerance for `exp`/`nbf` in seconds.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
    /// How long fetched public keys are cached.
    #[serde(default = "default_cache_ttl")]
    pub jwks_cache_ttl_seconds: u64,
    /// Timeout for the JWKS HTTP request.
    #[serde(default = "default_fetch_timeout")]
    pub jwks_fetch_timeout_seconds: u64,
    /// Minimum gap between two JWKS fetches triggered by unknown key IDs.
    #[serde(default = "default_min_refresh")]
    pub jwks_min_refresh_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            google_client_id: String::new(),
            jwks_url: default_jwks_url(),
            jwks_file: None,
            allowed_issuers: default_allowed_issuers(),
            leeway_seconds: default_leeway(),
            jwks_cache_ttl_seconds: default_cache_ttl(),
            jwks_fetch_timeout_seconds: default_fetch_timeout(),
            jwks_min_refresh_seconds: default_min_refresh(),
        }
    }
}

fn default_jwks_url() -> String {
    "https://www.googleapis.com/oauth2/v3/certs".to_string()
}

fn default_allowed_issuers() -> Vec<String> {
    vec![
        "accounts.google.com".to_string(),
        "https://accounts.google.com".to_string(),
    ]
}

fn default_leeway() -> u64 {
    5
}

fn default_cache_ttl() -> u64 {
    3600
}

fn default_fetch_timeout() -> u64 {
    10
}

fn default_min_refresh() -> u64 {
    60
}
