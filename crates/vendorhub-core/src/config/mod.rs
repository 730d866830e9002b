//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! layered TOML files and environment variables. Every section has usable
//! defaults, so the server starts with no configuration file present.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;
pub mod store;

use serde::{Deserialize, Serialize};

use self::app::ServerConfig;
use self::auth::AuthConfig;
use self::database::DatabaseConfig;
use self::logging::LoggingConfig;
use self::store::StoreConfig;

use crate::error::AppError;

/// Prefix for structured environment overrides (`VENDORHUB__AUTH__...`).
pub const ENV_PREFIX: &str = "VENDORHUB";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Vendor store backend selection.
    #[serde(default)]
    pub store: StoreConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Identity verification settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default`, `config/{env}`, `VENDORHUB__*` variables and
    /// finally the conventional `CLIENT_ID`, `PORT` and `DATABASE_URL`
    /// variables.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => Some(raw.trim().parse::<u16>().map_err(|e| {
                AppError::configuration(format!("PORT must be a valid port number: {e}"))
            })?),
            Err(_) => None,
        };

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("auth.google_client_id", std::env::var("CLIENT_ID").ok())?
            .set_override_option("server.port", port.map(i64::from))?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?;

        let config = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        Self::from_config(config)
    }

    /// Deserialize an already-built `config::Config`.
    pub fn from_config(config: config::Config) -> Result<Self, AppError> {
        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sources_yield_defaults() {
        let config = config::Config::builder().build().expect("build");
        let app = AppConfig::from_config(config).expect("deserialize");
        assert_eq!(app.server.port, 8080);
        assert_eq!(app.server.max_body_bytes, 64 * 1024);
        assert_eq!(app.store.provider, "postgres");
        assert_eq!(app.auth.leeway_seconds, 5);
        assert!(app.auth.google_client_id.is_empty());
    }

    #[test]
    fn test_toml_overlay() {
        let toml = r#"
            [server]
            port = 5000

            [store]
            provider = "memory"

            [auth]
            google_client_id = "abc.apps.googleusercontent.com"
        "#;
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .expect("build");
        let app = AppConfig::from_config(config).expect("deserialize");
        assert_eq!(app.server.port, 5000);
        assert_eq!(app.store.provider, "memory");
        assert_eq!(app.auth.google_client_id, "abc.apps.googleusercontent.com");
        assert_eq!(app.auth.allowed_issuers.len(), 2);
    }
}
