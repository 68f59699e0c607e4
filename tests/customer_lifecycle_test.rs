mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::TestApp;

fn sample_customer() -> serde_json::Value {
    json!({
        "code": "C001",
        "name": "株式会社サンプル",
        "name_kana": "カブシキガイシャサンプル",
        "postal_code": "123-4567",
        "address": "東京都千代田区1-2-3",
        "phone": "03-1234-5678",
        "email": "info@sample.co.jp",
        "contact_person": "山田太郎",
        "notes": ""
    })
}

#[tokio::test]
async fn create_edit_delete_round_trip() {
    let app = TestApp::new().await;

    // Create
    let (status, created) = app.post("/api/v1/customers", sample_customer()).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().expect("created id").to_string();

    // The list shows exactly one card with the code
    let (status, list) = app.get("/api/v1/customers").await;
    assert_eq!(status, StatusCode::OK);
    let rows = list.as_array().expect("list is an array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["code"], "C001");
    assert_eq!(rows[0]["name"], "株式会社サンプル");

    // Edit the name, keep the code
    let mut updated_payload = sample_customer();
    updated_payload["name"] = json!("株式会社テスト");
    let (status, updated) = app
        .put(&format!("/api/v1/customers/{id}"), updated_payload)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "株式会社テスト");
    assert_eq!(updated["code"], "C001");

    let (_, list) = app.get("/api/v1/customers").await;
    let rows = list.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "株式会社テスト");

    // Delete empties the list and direct fetch reports no row
    let (status, _) = app.delete(&format!("/api/v1/customers/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, list) = app.get("/api/v1/customers").await;
    assert!(list.as_array().unwrap().is_empty());

    let (status, _) = app.get(&format!("/api/v1/customers/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_stamps_actor_on_both_audit_fields() {
    let app = TestApp::new().await;

    let (status, created) = app.post("/api/v1/customers", sample_customer()).await;
    assert_eq!(status, StatusCode::CREATED);

    let actor = created["created_by"].as_str().expect("created_by set");
    assert_eq!(created["updated_by"].as_str().unwrap(), actor);
    assert_eq!(created["created_at"], created["updated_at"]);
}

#[tokio::test]
async fn update_preserves_identity_and_creation_audit() {
    let app = TestApp::new().await;

    let (_, created) = app.post("/api/v1/customers", sample_customer()).await;
    let id = created["id"].as_str().unwrap().to_string();

    let mut payload = sample_customer();
    payload["notes"] = json!("支払条件: 月末締め翌月末払い");
    let (status, updated) = app.put(&format!("/api/v1/customers/{id}"), payload).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["created_at"], created["created_at"]);
    assert_eq!(updated["created_by"], created["created_by"]);
    assert_eq!(updated["updated_by"], created["created_by"]);

    let before = created["updated_at"].as_str().unwrap();
    let after = updated["updated_at"].as_str().unwrap();
    let before: chrono::DateTime<chrono::Utc> = before.parse().unwrap();
    let after: chrono::DateTime<chrono::Utc> = after.parse().unwrap();
    assert!(after > before, "updated_at must move forward");
}

#[tokio::test]
async fn list_filter_matches_name_or_code_case_insensitively() {
    let app = TestApp::new().await;

    for (code, name) in [
        ("C001", "株式会社サンプル"),
        ("C002", "Alpha Trading"),
        ("X900", "株式会社テスト"),
    ] {
        let mut payload = sample_customer();
        payload["code"] = json!(code);
        payload["name"] = json!(name);
        let (status, _) = app.post("/api/v1/customers", payload).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    // Matches code, ignoring case
    let (_, list) = app.get("/api/v1/customers?q=c00").await;
    assert_eq!(list.as_array().unwrap().len(), 2);

    // Matches name
    let (_, list) = app.get("/api/v1/customers?q=alpha").await;
    let rows = list.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["code"], "C002");

    // Japanese text
    let (_, list) = app.get("/api/v1/customers?q=テスト").await;
    let rows = list.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["code"], "X900");

    // Empty query yields the full set
    let (_, list) = app.get("/api/v1/customers?q=").await;
    assert_eq!(list.as_array().unwrap().len(), 3);

    // No match yields an empty list
    let (_, list) = app.get("/api/v1/customers?q=zzz").await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn list_orders_by_most_recent_update() {
    let app = TestApp::new().await;

    let mut first = sample_customer();
    first["code"] = json!("C001");
    let (_, first_created) = app.post("/api/v1/customers", first).await;

    let mut second = sample_customer();
    second["code"] = json!("C002");
    let (_, _) = app.post("/api/v1/customers", second).await;

    // Touching the first record moves it back to the top.
    let id = first_created["id"].as_str().unwrap();
    let mut payload = sample_customer();
    payload["code"] = json!("C001");
    payload["notes"] = json!("updated");
    app.put(&format!("/api/v1/customers/{id}"), payload).await;

    let (_, list) = app.get("/api/v1/customers").await;
    let codes: Vec<_> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["code"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(codes, ["C001", "C002"]);
}

#[tokio::test]
async fn blank_required_field_is_rejected_before_any_write() {
    let app = TestApp::new().await;

    let mut payload = sample_customer();
    payload["code"] = json!("");
    let (status, body) = app.post("/api/v1/customers", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad Request");

    // Nothing reached the database
    let (_, list) = app.get("/api/v1/customers").await;
    assert!(list.as_array().unwrap().is_empty());

    let mut payload = sample_customer();
    payload["name"] = json!("");
    let (status, _) = app.post("/api/v1/customers", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_of_missing_record_is_not_found() {
    let app = TestApp::new().await;

    let (status, body) = app
        .put(
            "/api/v1/customers/00000000-0000-0000-0000-000000000000",
            sample_customer(),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn delete_of_missing_record_succeeds_quietly() {
    let app = TestApp::new().await;

    let (status, _) = app
        .request(
            Method::DELETE,
            "/api/v1/customers/00000000-0000-0000-0000-000000000000",
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}
