//! Identity verification seam.

use async_trait::async_trait;

use vendorhub_core::result::AppResult;
use vendorhub_entity::identity::IdentityUser;

/// Turns a raw bearer credential into a verified identity.
///
/// Implementations return `ErrorKind::InvalidToken` for any credential that
/// fails verification and never cache verification results.
#[async_trait]
pub trait IdentityVerifier: Send + Sync + std::fmt::Debug + 'static {
    /// Verify `token` and return the identity it asserts.
    async fn verify(&self, token: &str) -> AppResult<IdentityUser>;
}
