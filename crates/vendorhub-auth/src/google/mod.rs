//! Google identity-token verification.

pub mod claims;
pub mod jwks;
pub mod verifier;

pub use claims::GoogleClaims;
pub use jwks::{KeySource, RemoteKeyStore, StaticKeyStore};
pub use verifier::GoogleTokenVerifier;
