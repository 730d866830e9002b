//! # vendorhub-service
//!
//! Business logic for vendor records. Services take an explicit
//! [`RequestContext`] for every authenticated operation and enforce
//! validation and ownership before touching the store.

pub mod context;
pub mod vendor;

pub use context::RequestContext;
pub use vendor::VendorService;
