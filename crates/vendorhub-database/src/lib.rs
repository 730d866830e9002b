//! # vendorhub-database
//!
//! Persistence for vendor records. [`VendorStore`] selects a backend from
//! configuration: PostgreSQL through `sqlx`, or an in-process store used
//! for development and tests.

pub mod connection;
pub mod repositories;
pub mod schema;
pub mod store;

pub use connection::DatabasePool;
pub use repositories::VendorRepository;
pub use store::VendorStore;
