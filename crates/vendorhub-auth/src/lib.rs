//! # vendorhub-auth
//!
//! Authentication for VendorHub.
//!
//! ## Modules
//!
//! - `bearer` — `Authorization: Bearer <token>` header parsing
//! - `google` — Google identity-token verification against the provider's
//!   published signing keys
//! - `test_support` — RS256 token minting for tests (feature `test-support`)

pub mod bearer;
pub mod google;
pub mod verifier;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use bearer::extract_bearer;
pub use google::{GoogleTokenVerifier, KeySource, RemoteKeyStore, StaticKeyStore};
pub use verifier::IdentityVerifier;
