//! RS256 identity-token verification.

use std::sync::Arc;

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, Validation, decode, decode_header};
use tracing::debug;

use vendorhub_core::config::auth::AuthConfig;
use vendorhub_core::error::AppError;
use vendorhub_core::result::AppResult;
use vendorhub_entity::identity::IdentityUser;

use super::claims::GoogleClaims;
use super::jwks::{KeySource, RemoteKeyStore, StaticKeyStore};
use crate::verifier::IdentityVerifier;

/// Message used for every credential that fails verification.
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired token";

/// Verifies Google-issued ID tokens for one OAuth client.
#[derive(Clone)]
pub struct GoogleTokenVerifier {
    keys: Arc<dyn KeySource>,
    validation: Validation,
}

impl std::fmt::Debug for GoogleTokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleTokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl GoogleTokenVerifier {
    /// Build a verifier from configuration.
    ///
    /// Uses `jwks_file` when set, otherwise fetches keys from `jwks_url`.
    pub fn from_config(config: &AuthConfig) -> AppResult<Self> {
        let keys: Arc<dyn KeySource> = match config.jwks_file.as_deref() {
            Some(path) if !path.trim().is_empty() => Arc::new(StaticKeyStore::from_file(path)?),
            _ => Arc::new(RemoteKeyStore::new(config)?),
        };
        Self::with_key_source(config, keys)
    }

    /// Build a verifier that resolves keys through `keys`.
    pub fn with_key_source(config: &AuthConfig, keys: Arc<dyn KeySource>) -> AppResult<Self> {
        if config.google_client_id.trim().is_empty() {
            return Err(AppError::configuration(
                "auth.google_client_id must be set (or CLIENT_ID)",
            ));
        }

        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_seconds;
        validation.set_audience(&[config.google_client_id.trim()]);
        validation.set_issuer(config.allowed_issuers.as_slice());
        validation.set_required_spec_claims(&["exp", "aud", "iss", "sub"]);

        Ok(Self { keys, validation })
    }
}

#[async_trait]
impl IdentityVerifier for GoogleTokenVerifier {
    async fn verify(&self, token: &str) -> AppResult<IdentityUser> {
        let header = decode_header(token).map_err(|e| {
            debug!(error = %e, "Rejected token with unreadable header");
            AppError::invalid_token(INVALID_TOKEN_MESSAGE)
        })?;

        if header.alg != Algorithm::RS256 {
            debug!(alg = ?header.alg, "Rejected token with unexpected algorithm");
            return Err(AppError::invalid_token(INVALID_TOKEN_MESSAGE));
        }
        let kid = header
            .kid
            .ok_or_else(|| AppError::invalid_token(INVALID_TOKEN_MESSAGE))?;

        let Some(key) = self.keys.key(&kid).await? else {
            debug!(kid = %kid, "Rejected token signed with unknown key");
            return Err(AppError::invalid_token(INVALID_TOKEN_MESSAGE));
        };

        let data = decode::<GoogleClaims>(token, &key, &self.validation).map_err(|e| {
            debug!(error = %e, "Token validation failed");
            AppError::invalid_token(INVALID_TOKEN_MESSAGE)
        })?;

        data.claims.into_identity()
    }
}
