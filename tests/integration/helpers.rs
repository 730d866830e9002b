//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use vendorhub_api::{AppState, build_router};
use vendorhub_auth::test_support::TestTokenIssuer;
use vendorhub_core::config::AppConfig;
use vendorhub_database::repositories::VendorRepository;
use vendorhub_database::store::VendorStore;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Store behind the router, for direct inspection
    pub store: Arc<VendorStore>,
    /// Mints tokens the router accepts
    pub issuer: TestTokenIssuer,
}

impl TestApp {
    /// Create a test application backed by the in-memory store
    pub fn new() -> Self {
        let issuer = TestTokenIssuer::new();
        let config = AppConfig {
            auth: TestTokenIssuer::auth_config(),
            ..AppConfig::default()
        };
        let state = AppState::new(config, VendorStore::memory(), Arc::new(issuer.verifier()));
        let store = Arc::clone(&state.store);

        Self {
            router: build_router(state),
            store,
            issuer,
        }
    }

    /// A valid token for `email`
    pub fn token(&self, email: &str) -> String {
        self.issuer.token_for(email)
    }

    /// Number of stored vendors
    pub async fn stored_count(&self) -> u64 {
        self.store.count().await.expect("count")
    }

    /// Create a vendor as `email` and return its JSON
    pub async fn create_vendor(&self, email: &str, name: &str) -> Value {
        let token = self.token(email);
        let response = self
            .request("POST", "/api/vendors", Some(vendor_body(name)), Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body
    }

    /// Make a JSON request against the router
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a prebuilt request through the router
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
            text,
        }
    }
}

/// Test response wrapper
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
    pub text: String,
}

/// A complete vendor payload with the given name
pub fn vendor_body(name: &str) -> Value {
    json!({
        "name": name,
        "accountNo": "12345678",
        "bankName": "First Bank",
        "addressLine1": "1 Main St",
        "city": "Springfield",
        "country": "US",
        "zipCode": "12345"
    })
}
