//! # vendorhub-entity
//!
//! Domain models for VendorHub. Database entities derive `sqlx::FromRow`;
//! every model serializes with the camelCase field names used on the wire.

pub mod identity;
pub mod vendor;
