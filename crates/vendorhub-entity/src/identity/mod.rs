//! Identity of an authenticated caller.

pub mod model;

pub use model::IdentityUser;
