//! Request context carrying the verified caller identity.

use serde::{Deserialize, Serialize};

use vendorhub_entity::identity::IdentityUser;

/// Context for the current authenticated request.
///
/// Built by the API layer after identity verification and passed into
/// every service call that needs to know who is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The verified caller.
    pub user: IdentityUser,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user: IdentityUser) -> Self {
        Self { user }
    }

    /// The caller's verified email.
    pub fn email(&self) -> &str {
        &self.user.email
    }
}
