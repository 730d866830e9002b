//! Custom Axum extractors.

pub mod auth;
pub mod json;
pub mod pagination;
pub mod path;

pub use auth::AuthUser;
pub use json::ValidJson;
pub use pagination::ListQuery;
pub use path::parse_vendor_id;
