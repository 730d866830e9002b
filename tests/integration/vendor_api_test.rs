//! Integration tests for the vendor HTTP API.

mod helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;

use helpers::{TestApp, vendor_body};

const ALICE: &str = "alice@example.com";
const BOB: &str = "bob@example.com";

#[tokio::test]
async fn test_create_sets_creator_from_token() {
    let app = TestApp::new();
    let token = app.token(ALICE);

    let mut body = vendor_body("Acme");
    body["creatorEmail"] = json!("mallory@example.com");
    let response = app
        .request("POST", "/api/vendors", Some(body), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["creatorEmail"], ALICE);
    assert_eq!(response.body["name"], "Acme");
    assert_eq!(response.body["accountNo"], "12345678");
    assert!(response.body["id"].as_str().is_some());
    assert_eq!(app.stored_count().await, 1);
}

#[tokio::test]
async fn test_create_requires_token() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/vendors", Some(vendor_body("Acme")), None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "NO_TOKEN");
    assert_eq!(response.body["message"], "No token provided");
    assert_eq!(app.stored_count().await, 0);
}

#[tokio::test]
async fn test_create_rejects_expired_and_garbage_tokens() {
    let app = TestApp::new();
    let expired = app.issuer.expired_token_for(ALICE);

    for token in [expired.as_str(), "not-a-jwt"] {
        let response = app
            .request("POST", "/api/vendors", Some(vendor_body("Acme")), Some(token))
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body["error"], "INVALID_TOKEN");
        assert_eq!(response.body["message"], "Invalid or expired token");
    }
    assert_eq!(app.stored_count().await, 0);
}

#[tokio::test]
async fn test_create_rejects_non_bearer_scheme() {
    let app = TestApp::new();
    let token = app.token(ALICE);

    let req = Request::builder()
        .method("POST")
        .uri("/api/vendors")
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Basic {token}"))
        .body(Body::from(vendor_body("Acme").to_string()))
        .expect("request");
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "NO_TOKEN");
}

#[tokio::test]
async fn test_create_reports_missing_required_fields() {
    let app = TestApp::new();
    let token = app.token(ALICE);

    let response = app
        .request(
            "POST",
            "/api/vendors",
            Some(json!({ "name": "  ", "city": "Springfield" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    let details = &response.body["details"];
    assert_eq!(details["name"], "Vendor name is required");
    assert_eq!(details["accountNo"], "Bank account number is required");
    assert_eq!(details["bankName"], "Bank name is required");
    assert_eq!(app.stored_count().await, 0);
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let app = TestApp::new();
    let token = app.token(ALICE);

    let req = Request::builder()
        .method("POST")
        .uri("/api/vendors")
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::from("{\"name\": "))
        .expect("request");
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_list_is_public_and_paginated() {
    let app = TestApp::new();
    for i in 1..=13 {
        app.create_vendor(ALICE, &format!("Vendor {i:02}")).await;
    }

    let response = app
        .request("GET", "/api/vendors?page=3&limit=6", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 13);
    assert_eq!(response.body["page"], 3);
    assert_eq!(response.body["limit"], 6);
    let vendors = response.body["vendors"].as_array().expect("vendors");
    assert_eq!(vendors.len(), 1);
    assert_eq!(vendors[0]["name"], "Vendor 13");
}

#[tokio::test]
async fn test_list_first_page_keeps_insertion_order() {
    let app = TestApp::new();
    for name in ["A", "B", "C"] {
        app.create_vendor(ALICE, name).await;
    }

    let response = app
        .request("GET", "/api/vendors?page=1&limit=2", None, None)
        .await;

    let names: Vec<_> = response.body["vendors"]
        .as_array()
        .expect("vendors")
        .iter()
        .map(|v| v["name"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(names, ["A", "B"]);
    assert_eq!(response.body["total"], 3);
}

#[tokio::test]
async fn test_list_falls_back_to_defaults_on_bad_query() {
    let app = TestApp::new();
    app.create_vendor(ALICE, "Acme").await;

    for path in [
        "/api/vendors",
        "/api/vendors?page=abc&limit=xyz",
        "/api/vendors?page=0&limit=0",
        "/api/vendors?page=-2",
    ] {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert_eq!(response.body["page"], 1, "{path}");
        assert_eq!(response.body["limit"], 6, "{path}");
        assert_eq!(response.body["total"], 1, "{path}");
    }
}

#[tokio::test]
async fn test_list_past_end_is_empty() {
    let app = TestApp::new();
    app.create_vendor(ALICE, "Acme").await;

    let response = app
        .request("GET", "/api/vendors?page=9", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["vendors"], json!([]));
    assert_eq!(response.body["total"], 1);
}

#[tokio::test]
async fn test_get_requires_token() {
    let app = TestApp::new();
    let created = app.create_vendor(ALICE, "Acme").await;
    let path = format!("/api/vendors/{}", created["id"].as_str().expect("id"));

    let anonymous = app.request("GET", &path, None, None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
    assert_eq!(anonymous.body["error"], "NO_TOKEN");

    let bogus = app.request("GET", &path, None, Some("bogus")).await;
    assert_eq!(bogus.status, StatusCode::UNAUTHORIZED);
    assert_eq!(bogus.body["error"], "INVALID_TOKEN");

    let token = app.token(BOB);
    let ok = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(ok.status, StatusCode::OK);
    assert_eq!(ok.body, created);
}

#[tokio::test]
async fn test_get_unknown_or_malformed_id_is_not_found() {
    let app = TestApp::new();
    let token = app.token(ALICE);

    for path in [
        "/api/vendors/00000000-0000-4000-8000-000000000000",
        "/api/vendors/not-a-uuid",
    ] {
        let response = app.request("GET", path, None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
        assert_eq!(response.body["error"], "NOT_FOUND");
    }
}

#[tokio::test]
async fn test_update_by_creator_replaces_fields() {
    let app = TestApp::new();
    let created = app.create_vendor(ALICE, "Acme").await;
    let path = format!("/api/vendors/{}", created["id"].as_str().expect("id"));
    let token = app.token(ALICE);

    let mut body = vendor_body("Acme Renamed");
    body["creatorEmail"] = json!(BOB);
    let response = app.request("PUT", &path, Some(body), Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Acme Renamed");
    assert_eq!(response.body["creatorEmail"], ALICE);
    assert_eq!(response.body["id"], created["id"]);
    assert_eq!(response.body["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn test_update_without_token_leaves_record_unchanged() {
    let app = TestApp::new();
    let created = app.create_vendor(ALICE, "Acme").await;
    let path = format!("/api/vendors/{}", created["id"].as_str().expect("id"));

    let response = app
        .request("PUT", &path, Some(vendor_body("Hijacked")), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let token = app.token(ALICE);
    let current = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(current.body["name"], "Acme");
}

#[tokio::test]
async fn test_update_by_other_user_is_forbidden() {
    let app = TestApp::new();
    let created = app.create_vendor(ALICE, "Acme").await;
    let path = format!("/api/vendors/{}", created["id"].as_str().expect("id"));
    let token = app.token(BOB);

    let response = app
        .request("PUT", &path, Some(vendor_body("Hijacked")), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");

    let current = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(current.body["name"], "Acme");
}

#[tokio::test]
async fn test_update_with_invalid_fields_is_rejected() {
    let app = TestApp::new();
    let created = app.create_vendor(ALICE, "Acme").await;
    let path = format!("/api/vendors/{}", created["id"].as_str().expect("id"));
    let token = app.token(ALICE);

    let response = app
        .request("PUT", &path, Some(json!({ "name": "Acme" })), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["details"]["accountNo"],
        "Bank account number is required"
    );
}

#[tokio::test]
async fn test_delete_by_other_user_is_forbidden() {
    let app = TestApp::new();
    let created = app.create_vendor(ALICE, "Acme").await;
    let path = format!("/api/vendors/{}", created["id"].as_str().expect("id"));
    let token = app.token(BOB);

    let response = app.request("DELETE", &path, None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(app.stored_count().await, 1);
}

#[tokio::test]
async fn test_delete_twice_is_not_found() {
    let app = TestApp::new();
    let created = app.create_vendor(ALICE, "Acme").await;
    let path = format!("/api/vendors/{}", created["id"].as_str().expect("id"));
    let token = app.token(ALICE);

    let first = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body, json!({ "success": true }));
    assert_eq!(app.stored_count().await, 0);

    let second = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(second.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_responses_carry_opener_policy() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/vendors", None, None).await;

    assert_eq!(
        response
            .headers
            .get("cross-origin-opener-policy")
            .and_then(|v| v.to_str().ok()),
        Some("same-origin-allow-popups")
    );
}

#[tokio::test]
async fn test_liveness_and_health() {
    let app = TestApp::new();

    let live = app.request("GET", "/test", None, None).await;
    assert_eq!(live.status, StatusCode::OK);
    assert_eq!(live.text, "It's working");

    let health = app.request("GET", "/api/health", None, None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["status"], "ok");
    assert_eq!(health.body["store"], "memory");
}
