//! Application assembly from configuration.

use std::sync::Arc;

use axum::Router;
use tracing::info;

use vendorhub_auth::GoogleTokenVerifier;
use vendorhub_core::config::AppConfig;
use vendorhub_core::result::AppResult;
use vendorhub_database::store::VendorStore;

use crate::router::build_router;
use crate::state::AppState;

/// Build the store, the identity verifier and the router.
pub async fn build_app(config: AppConfig) -> AppResult<Router> {
    // Fail on a missing client ID before touching the database.
    let verifier = GoogleTokenVerifier::from_config(&config.auth)?;
    info!(
        jwks = config.auth.jwks_file.as_deref().unwrap_or(&config.auth.jwks_url),
        "Identity verifier ready"
    );

    let store = VendorStore::new(&config).await?;
    let state = AppState::new(config, store, Arc::new(verifier));
    Ok(build_router(state))
}
