//! Token minting for tests.
//!
//! Signs RS256 tokens with a fixture key whose public half is published as
//! a JWKS document under the key ID `test-key`.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::{Map, Value, json};

use vendorhub_core::config::auth::AuthConfig;

use crate::google::{GoogleTokenVerifier, StaticKeyStore};

/// Audience accepted by verifiers built with [`TestTokenIssuer::verifier`].
pub const TEST_CLIENT_ID: &str = "vendorhub-test.apps.googleusercontent.com";
/// Key ID of the fixture signing key.
pub const TEST_KID: &str = "test-key";
/// Fixture JWKS document containing the public half of the signing key.
pub const TEST_JWKS: &str = include_str!("../fixtures/jwks.json");

const TEST_RSA_PEM: &str = include_str!("../fixtures/test_rsa.pem");

/// Claim set under construction.
#[derive(Debug, Clone)]
pub struct TestClaims(Map<String, Value>);

impl TestClaims {
    /// Overlay the fields of a JSON object onto these claims.
    pub fn merge(mut self, overrides: Value) -> Self {
        if let Value::Object(map) = overrides {
            self.0.extend(map);
        }
        self
    }

    /// Drop a claim.
    pub fn remove(&mut self, key: &str) {
        self.0.remove(key);
    }
}

/// Mints identity tokens the way the provider would.
#[derive(Clone)]
pub struct TestTokenIssuer {
    key: EncodingKey,
}

impl Default for TestTokenIssuer {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTokenIssuer {
    /// Load the fixture signing key.
    pub fn new() -> Self {
        let key = EncodingKey::from_rsa_pem(TEST_RSA_PEM.as_bytes())
            .expect("fixture RSA key must parse");
        Self { key }
    }

    /// Auth configuration matching the issued tokens.
    pub fn auth_config() -> AuthConfig {
        AuthConfig {
            google_client_id: TEST_CLIENT_ID.to_string(),
            ..AuthConfig::default()
        }
    }

    /// Key store publishing the fixture public key.
    pub fn key_store(&self) -> StaticKeyStore {
        StaticKeyStore::from_jwks(TEST_JWKS).expect("fixture JWKS must parse")
    }

    /// Verifier that accepts tokens from this issuer.
    pub fn verifier(&self) -> GoogleTokenVerifier {
        GoogleTokenVerifier::with_key_source(&Self::auth_config(), Arc::new(self.key_store()))
            .expect("test verifier")
    }

    /// Standard claims for `email`, valid for one hour.
    pub fn claims_for(&self, email: &str) -> TestClaims {
        let now = chrono::Utc::now().timestamp();
        let local = email.split('@').next().unwrap_or(email);
        let Value::Object(map) = json!({
            "iss": "https://accounts.google.com",
            "aud": TEST_CLIENT_ID,
            "sub": format!("sub-{local}"),
            "email": email,
            "email_verified": true,
            "name": local,
            "iat": now,
            "exp": now + 3600,
        }) else {
            unreachable!("json! object literal");
        };
        TestClaims(map)
    }

    /// A valid token for `email`.
    pub fn token_for(&self, email: &str) -> String {
        self.sign(self.claims_for(email))
    }

    /// A token for `email` that expired an hour ago.
    pub fn expired_token_for(&self, email: &str) -> String {
        let now = chrono::Utc::now().timestamp();
        self.sign(
            self.claims_for(email)
                .merge(json!({ "iat": now - 7200, "exp": now - 3600 })),
        )
    }

    /// Sign claims with the fixture key ID.
    pub fn sign(&self, claims: TestClaims) -> String {
        self.sign_with_kid(claims, TEST_KID)
    }

    /// Sign claims, advertising `kid` in the header.
    pub fn sign_with_kid(&self, claims: TestClaims, kid: &str) -> String {
        let mut header = Header::new(Algorithm::RS256);
        header.kid = Some(kid.to_string());
        encode(&header, &claims.0, &self.key).expect("signing must succeed")
    }
}
