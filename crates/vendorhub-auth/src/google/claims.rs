//! Claims carried by a Google identity token.

use serde::{Deserialize, Serialize};

use vendorhub_core::error::AppError;
use vendorhub_entity::identity::IdentityUser;

use super::verifier::INVALID_TOKEN_MESSAGE;

/// Payload of a Google-issued ID token.
///
/// `aud`, `iss` and `exp` are checked by `jsonwebtoken` during decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleClaims {
    pub iss: String,
    pub sub: String,
    pub exp: i64,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: Option<bool>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
}

impl GoogleClaims {
    /// Convert into the identity attached to requests.
    ///
    /// Tokens without a usable email are rejected as invalid since the
    /// email is the ownership key.
    pub fn into_identity(self) -> Result<IdentityUser, AppError> {
        let email = self
            .email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .ok_or_else(|| AppError::invalid_token(INVALID_TOKEN_MESSAGE))?;

        Ok(IdentityUser {
            sub: self.sub,
            email,
            email_verified: self.email_verified,
            name: self.name,
            picture: self.picture,
            given_name: self.given_name,
            family_name: self.family_name,
        })
    }
}
