//! # vendorhub-api
//!
//! HTTP API layer for VendorHub built on Axum.
//!
//! Provides the vendor REST endpoints, the bearer-token `AuthUser`
//! extractor, middleware (CORS, opener policy, logging), DTOs, and the
//! mapping from `AppError` to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
