//! Route definitions for the VendorHub HTTP API.
//!
//! Vendor and health routes are mounted under `/api`; the plain-text
//! liveness probe lives at `/test`.

use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::get,
};
use tower_http::compression::CompressionLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let server = &state.config.server;

    let api_routes = Router::new().merge(vendor_routes()).merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&server.cors);
    let opener_policy = middleware::headers::opener_policy_layer(server);

    let mut router = Router::new()
        .nest("/api", api_routes)
        .route("/test", get(handlers::health::liveness))
        .layer(DefaultBodyLimit::max(server.max_body_bytes))
        .layer(RequestBodyLimitLayer::new(server.max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_seconds)))
        .layer(CompressionLayer::new());

    if let Some(policy) = opener_policy {
        router = router.layer(policy);
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Vendor CRUD endpoints
fn vendor_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/vendors",
            get(handlers::vendor::list_vendors).post(handlers::vendor::create_vendor),
        )
        .route(
            "/vendors/{id}",
            get(handlers::vendor::get_vendor)
                .put(handlers::vendor::update_vendor)
                .delete(handlers::vendor::delete_vendor),
        )
}

/// Health check endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
