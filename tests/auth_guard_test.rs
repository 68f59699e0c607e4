mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{TestApp, TEST_EMAIL, TEST_PASSWORD};

#[tokio::test]
async fn protected_routes_reject_missing_token() {
    let app = TestApp::new().await;

    for uri in [
        "/api/v1/customers",
        "/api/v1/suppliers",
        "/api/v1/projects",
        "/api/v1/quotes",
        "/api/v1/sales-orders",
        "/api/v1/invoices",
        "/api/v1/delivery-notes",
        "/api/v1/delivery-logs",
        "/api/v1/dashboard",
        "/api/v1/navigation",
        "/api/v1/auth/me",
    ] {
        let (status, body) = app.request_unauthenticated(Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "expected 401 for {uri}");
        assert_eq!(body["error"], "Unauthorized");
    }
}

#[tokio::test]
async fn protected_routes_reject_garbage_token() {
    let app = TestApp::new().await;

    let (status, _) = app
        .request_with_token(
            Method::GET,
            "/api/v1/customers",
            None,
            Some("not-a-real-token"),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let app = TestApp::new().await;

    let (status, body) = app
        .request_unauthenticated(
            Method::POST,
            "/auth/login",
            Some(json!({"email": TEST_EMAIL, "password": "wrong"})),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");
}

#[tokio::test]
async fn login_issues_a_working_token() {
    let app = TestApp::new().await;

    let (status, body) = app
        .request_unauthenticated(
            Method::POST,
            "/auth/login",
            Some(json!({"email": TEST_EMAIL, "password": TEST_PASSWORD})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["user"]["email"], TEST_EMAIL);

    let token = body["access_token"].as_str().expect("token issued");
    let (status, me) = app
        .request_with_token(Method::GET, "/api/v1/auth/me", None, Some(token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], TEST_EMAIL);
    assert_eq!(me["display_name"], "テスト担当");
}

#[tokio::test]
async fn malformed_login_payload_is_rejected() {
    let app = TestApp::new().await;

    let (status, _) = app
        .request_unauthenticated(
            Method::POST,
            "/auth/login",
            Some(json!({"email": "not-an-email", "password": "x"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn sign_out_revokes_the_session() {
    let app = TestApp::new().await;

    // The harness token works before sign-out.
    let (status, _) = app.get("/api/v1/customers").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .request(Method::POST, "/api/v1/auth/logout", None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // The same token is dead afterwards.
    let (status, _) = app.get("/api/v1/customers").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // A fresh login opens a new session.
    let (status, body) = app
        .request_unauthenticated(
            Method::POST,
            "/auth/login",
            Some(json!({"email": TEST_EMAIL, "password": TEST_PASSWORD})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["access_token"].as_str().unwrap();
    let (status, _) = app
        .request_with_token(Method::GET, "/api/v1/customers", None, Some(token))
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn health_and_login_stay_outside_the_guard() {
    let app = TestApp::new().await;

    let (status, body) = app.request_unauthenticated(Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "reachable");
}
