//! `Authorization` header parsing.

use vendorhub_core::error::AppError;
use vendorhub_core::result::AppResult;

/// Message used for every missing or malformed credential.
pub const NO_TOKEN_MESSAGE: &str = "No token provided";

/// Extract the token from an `Authorization: Bearer <token>` header value.
///
/// A missing header, another scheme, or an empty token all count as no
/// token at all.
pub fn extract_bearer(header: Option<&str>) -> AppResult<&str> {
    let header = header.ok_or_else(|| AppError::missing_token(NO_TOKEN_MESSAGE))?;
    let (scheme, token) = header
        .trim()
        .split_once(' ')
        .ok_or_else(|| AppError::missing_token(NO_TOKEN_MESSAGE))?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AppError::missing_token(NO_TOKEN_MESSAGE));
    }
    let token = token.trim();
    if token.is_empty() {
        return Err(AppError::missing_token(NO_TOKEN_MESSAGE));
    }
    Ok(token)
}
