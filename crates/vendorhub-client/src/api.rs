//! Typed HTTP client for the vendor endpoints.

use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use vendorhub_core::error::{AppError, ErrorKind};
use vendorhub_core::result::AppResult;
use vendorhub_core::types::id::VendorId;
use vendorhub_entity::vendor::model::{Vendor, VendorFields};

use crate::config::ClientConfig;
use crate::session::Session;

/// One page of the public vendor listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorPage {
    pub vendors: Vec<Vendor>,
    pub total: u64,
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub limit: u64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    details: Option<serde_json::Value>,
}

/// Client for `/api/vendors`.
///
/// Every call takes the session explicitly; `None` sends no credential and
/// lets the server reject gated operations.
#[derive(Debug, Clone)]
pub struct VendorApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl VendorApiClient {
    /// Build a client from configuration.
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;
        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one page of vendors. Needs no session.
    pub async fn list(&self, page: u64, limit: u64) -> AppResult<VendorPage> {
        let url = format!("{}/api/vendors?page={page}&limit={limit}", self.base_url);
        self.send(self.http.get(url), None).await
    }

    /// Fetch a single vendor.
    pub async fn get(&self, session: Option<&Session>, id: VendorId) -> AppResult<Vendor> {
        self.send(self.request(Method::GET, id), session).await
    }

    /// Create a vendor owned by the session user.
    pub async fn create(&self, session: Option<&Session>, fields: &VendorFields) -> AppResult<Vendor> {
        let url = format!("{}/api/vendors", self.base_url);
        self.send(self.http.post(url).json(fields), session).await
    }

    /// Replace a vendor's fields.
    pub async fn update(
        &self,
        session: Option<&Session>,
        id: VendorId,
        fields: &VendorFields,
    ) -> AppResult<Vendor> {
        self.send(self.request(Method::PUT, id).json(fields), session)
            .await
    }

    /// Delete a vendor.
    pub async fn delete(&self, session: Option<&Session>, id: VendorId) -> AppResult<()> {
        let _: serde_json::Value = self.send(self.request(Method::DELETE, id), session).await?;
        Ok(())
    }

    fn request(&self, method: Method, id: VendorId) -> RequestBuilder {
        self.http
            .request(method, format!("{}/api/vendors/{id}", self.base_url))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        session: Option<&Session>,
    ) -> AppResult<T> {
        let request = match session {
            Some(session) => request.bearer_auth(&session.token),
            None => request,
        };

        let response = request.send().await.map_err(|e| {
            AppError::with_source(ErrorKind::ExternalService, "VendorHub server unreachable", e)
        })?;

        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url().path(), "API response");
        if !status.is_success() {
            return Err(error_from_response(status, response).await);
        }

        response.json::<T>().await.map_err(|e| {
            AppError::with_source(ErrorKind::Serialization, "Unexpected response body", e)
        })
    }
}

async fn error_from_response(status: StatusCode, response: Response) -> AppError {
    let body = response.json::<ErrorBody>().await.ok();
    let kind = match body.as_ref().map(|b| b.error.as_str()) {
        Some("NO_TOKEN") => ErrorKind::MissingToken,
        Some("INVALID_TOKEN") => ErrorKind::InvalidToken,
        Some("FORBIDDEN") => ErrorKind::Authorization,
        Some("NOT_FOUND") => ErrorKind::NotFound,
        Some("VALIDATION_ERROR") => ErrorKind::Validation,
        Some("SERVICE_UNAVAILABLE") => ErrorKind::ServiceUnavailable,
        _ => match status {
            StatusCode::UNAUTHORIZED => ErrorKind::InvalidToken,
            StatusCode::FORBIDDEN => ErrorKind::Authorization,
            StatusCode::NOT_FOUND => ErrorKind::NotFound,
            StatusCode::BAD_REQUEST => ErrorKind::Validation,
            _ => ErrorKind::ExternalService,
        },
    };

    match body {
        Some(body) => {
            let message = if body.message.is_empty() {
                format!("Request failed with status {status}")
            } else {
                body.message
            };
            let err = AppError::new(kind, message);
            match body.details {
                Some(details) => err.with_details(details),
                None => err,
            }
        }
        None => AppError::new(kind, format!("Request failed with status {status}")),
    }
}
