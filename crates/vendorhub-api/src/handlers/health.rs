//! Health check handlers.

use axum::Json;
use axum::extract::State;

use vendorhub_database::repositories::VendorRepository;

use crate::dto::response::HealthResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    state.store.health_check().await?;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: state.store.provider().to_string(),
    }))
}

/// GET /test
pub async fn liveness() -> &'static str {
    "It's working"
}
