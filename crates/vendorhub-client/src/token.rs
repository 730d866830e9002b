//! Unverified identity-token decoding.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use vendorhub_core::error::AppError;
use vendorhub_core::result::AppResult;
use vendorhub_entity::identity::IdentityUser;

/// Read the user claims out of a JWT without checking its signature.
///
/// The client only uses this for display and ownership gating; the server
/// verifies every token it receives.
pub fn decode_unverified(token: &str) -> AppResult<IdentityUser> {
    let mut parts = token.trim().split('.');
    let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return Err(AppError::invalid_token("Token is not a JWT")),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| AppError::invalid_token("Token payload is not base64url"))?;

    serde_json::from_slice(&bytes)
        .map_err(|_| AppError::invalid_token("Token payload has no usable user claims"))
}
