//! Decoded identity-token claims.

use serde::{Deserialize, Serialize};

/// The user described by a Google identity token.
///
/// Shared by the server (attached to each authenticated request) and the
/// client (persisted alongside the raw token in the session store).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityUser {
    /// Stable subject identifier issued by the provider.
    #[serde(default)]
    pub sub: String,
    /// Email address; the ownership key for vendor records.
    pub email: String,
    /// Whether the provider has verified the email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    /// Full display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
}

impl IdentityUser {
    /// Name to show in prompts and tables, falling back to the email.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }
}
