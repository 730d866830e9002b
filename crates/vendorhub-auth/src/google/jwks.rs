//! Provider signing keys: fetching, parsing, and caching.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::DecodingKey;
use moka::future::Cache;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use vendorhub_core::config::auth::AuthConfig;
use vendorhub_core::error::{AppError, ErrorKind};
use vendorhub_core::result::AppResult;

/// A single JSON Web Key as published by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct Jwk {
    pub kid: String,
    pub kty: String,
    #[serde(default)]
    pub alg: Option<String>,
    #[serde(default)]
    pub n: Option<String>,
    #[serde(default)]
    pub e: Option<String>,
}

/// A JSON Web Key Set document.
#[derive(Debug, Clone, Deserialize)]
pub struct JwkSet {
    pub keys: Vec<Jwk>,
}

impl JwkSet {
    /// Parse a JWKS document.
    pub fn parse(raw: &str) -> AppResult<Self> {
        serde_json::from_str(raw).map_err(|e| {
            AppError::with_source(ErrorKind::Serialization, "Malformed JWKS document", e)
        })
    }

    /// Build decoding keys for every usable RSA key, keyed by `kid`.
    ///
    /// Keys with another type or algorithm are skipped.
    pub fn decoding_keys(&self) -> HashMap<String, Arc<DecodingKey>> {
        self.keys
            .iter()
            .filter(|k| k.kty == "RSA" && k.alg.as_deref().is_none_or(|a| a == "RS256"))
            .filter_map(|k| {
                let (n, e) = (k.n.as_deref()?, k.e.as_deref()?);
                match DecodingKey::from_rsa_components(n, e) {
                    Ok(key) => Some((k.kid.clone(), Arc::new(key))),
                    Err(err) => {
                        warn!(kid = %k.kid, error = %err, "Skipping unusable JWK");
                        None
                    }
                }
            })
            .collect()
    }
}

/// Lookup of provider public keys by key ID.
#[async_trait]
pub trait KeySource: Send + Sync + 'static {
    /// Return the key for `kid`, or `None` when the provider does not
    /// publish it.
    async fn key(&self, kid: &str) -> AppResult<Option<Arc<DecodingKey>>>;
}

/// Fixed key set loaded once at construction.
#[derive(Clone)]
pub struct StaticKeyStore {
    keys: HashMap<String, Arc<DecodingKey>>,
}

impl std::fmt::Debug for StaticKeyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticKeyStore")
            .field("kids", &self.keys.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl StaticKeyStore {
    /// Build from a JWKS document string.
    pub fn from_jwks(raw: &str) -> AppResult<Self> {
        let keys = JwkSet::parse(raw)?.decoding_keys();
        if keys.is_empty() {
            return Err(AppError::configuration("JWKS document contains no usable RSA keys"));
        }
        Ok(Self { keys })
    }

    /// Build from a JWKS file on disk.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Failed to read JWKS file '{path}'"),
                e,
            )
        })?;
        info!(path = %path, "Loaded static JWKS");
        Self::from_jwks(&raw)
    }
}

#[async_trait]
impl KeySource for StaticKeyStore {
    async fn key(&self, kid: &str) -> AppResult<Option<Arc<DecodingKey>>> {
        Ok(self.keys.get(kid).cloned())
    }
}

/// Keys fetched from the provider's JWKS endpoint and cached with a TTL.
///
/// A lookup miss triggers a refetch, which also picks up rotated keys.
/// Refetches are at least `min_refresh` apart; a miss inside that window
/// is answered from the cache alone.
pub struct RemoteKeyStore {
    client: reqwest::Client,
    url: String,
    cache: Cache<String, Arc<DecodingKey>>,
    min_refresh: Duration,
    last_fetch: Mutex<Option<Instant>>,
}

impl std::fmt::Debug for RemoteKeyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteKeyStore")
            .field("url", &self.url)
            .field("cached_keys", &self.cache.entry_count())
            .finish()
    }
}

impl RemoteKeyStore {
    /// Create a key store for the configured JWKS URL.
    pub fn new(config: &AuthConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.jwks_fetch_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;

        let cache = Cache::builder()
            .max_capacity(64)
            .time_to_live(Duration::from_secs(config.jwks_cache_ttl_seconds))
            .build();

        Ok(Self {
            client,
            url: config.jwks_url.clone(),
            cache,
            min_refresh: Duration::from_secs(config.jwks_min_refresh_seconds),
            last_fetch: Mutex::new(None),
        })
    }

    async fn fetch(&self) -> AppResult<()> {
        debug!(url = %self.url, "Fetching provider JWKS");
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Failed to fetch signing keys", e)
            })?;
        let body = response.text().await.map_err(|e| {
            AppError::with_source(ErrorKind::ExternalService, "Failed to read signing keys", e)
        })?;
        let keys = JwkSet::parse(&body)
            .map_err(|e| AppError::external_service(format!("Provider returned {}", e.message)))?
            .decoding_keys();

        info!(count = keys.len(), "Refreshed provider signing keys");
        for (kid, key) in keys {
            self.cache.insert(kid, key).await;
        }
        Ok(())
    }
}

#[async_trait]
impl KeySource for RemoteKeyStore {
    async fn key(&self, kid: &str) -> AppResult<Option<Arc<DecodingKey>>> {
        if let Some(key) = self.cache.get(kid).await {
            return Ok(Some(key));
        }

        let mut last_fetch = self.last_fetch.lock().await;
        // Another task may have refreshed while we waited.
        if let Some(key) = self.cache.get(kid).await {
            return Ok(Some(key));
        }
        if let Some(at) = *last_fetch
            && at.elapsed() < self.min_refresh
        {
            debug!(kid = %kid, "Unknown key ID inside the refresh window");
            return Ok(None);
        }

        *last_fetch = Some(Instant::now());
        self.fetch().await?;
        Ok(self.cache.get(kid).await)
    }
}
