//! Axum middleware stack.

pub mod cors;
pub mod headers;
pub mod logging;
