mod common;

use axum::http::StatusCode;
use chrono::Utc;
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn navigation_lists_sections_in_shell_order() {
    let app = TestApp::new().await;

    let (status, sections) = app.get("/api/v1/navigation").await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<_> = sections
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        [
            "ダッシュボード",
            "得意先",
            "仕入先",
            "案件",
            "見積",
            "受注",
            "請求",
            "納品書",
            "送付ログ",
        ]
    );

    // Nothing is active without a location.
    assert!(sections
        .as_array()
        .unwrap()
        .iter()
        .all(|s| s["active"] == false));
}

#[tokio::test]
async fn navigation_flags_the_section_matching_the_location() {
    let app = TestApp::new().await;

    let (_, sections) = app.get("/api/v1/navigation?path=/suppliers").await;
    let active: Vec<_> = sections
        .as_array()
        .unwrap()
        .iter()
        .filter(|s| s["active"] == true)
        .collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0]["name"], "仕入先");
    assert_eq!(active[0]["icon"], "building-2");
}

#[tokio::test]
async fn dashboard_counts_reflect_stored_records() {
    let app = TestApp::new().await;

    let (status, summary) = app.get("/api/v1/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["customers"], 0);
    assert_eq!(summary["suppliers"], 0);
    assert_eq!(summary["active_projects"], 0);
    assert_eq!(summary["quotes_this_month"], 0);

    let (_, customer) = app
        .post(
            "/api/v1/customers",
            json!({"code": "C001", "name": "株式会社サンプル"}),
        )
        .await;
    let customer_id = customer["id"].as_str().unwrap().to_string();

    app.post(
        "/api/v1/suppliers",
        json!({"code": "S001", "name": "株式会社部品商会"}),
    )
    .await;

    // One active project, one completed: only the active one counts.
    for (code, status_value) in [("P001", "active"), ("P002", "completed")] {
        app.post(
            "/api/v1/projects",
            json!({
                "customer_id": customer_id,
                "code": code,
                "name": "社内システム更改",
                "status": status_value
            }),
        )
        .await;
    }

    // One quote issued today, one from a past month.
    let today = Utc::now().date_naive().to_string();
    for (number, date) in [("Q-NOW", today.as_str()), ("Q-OLD", "2024-01-15")] {
        app.post(
            "/api/v1/quotes",
            json!({
                "quote_number": number,
                "customer_id": customer_id,
                "issue_date": date,
                "status": "draft"
            }),
        )
        .await;
    }

    let (_, summary) = app.get("/api/v1/dashboard").await;
    assert_eq!(summary["customers"], 1);
    assert_eq!(summary["suppliers"], 1);
    assert_eq!(summary["active_projects"], 1);
    assert_eq!(summary["quotes_this_month"], 1);
}

#[tokio::test]
async fn project_lifecycle_follows_the_record_pattern() {
    let app = TestApp::new().await;

    let (_, customer) = app
        .post(
            "/api/v1/customers",
            json!({"code": "C001", "name": "株式会社サンプル"}),
        )
        .await;
    let customer_id = customer["id"].as_str().unwrap().to_string();

    let (status, project) = app
        .post(
            "/api/v1/projects",
            json!({
                "customer_id": customer_id,
                "code": "P001",
                "name": "基幹システム刷新",
                "status": "active",
                "start_date": "2025-04-01"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let project_id = project["id"].as_str().unwrap().to_string();
    assert_eq!(project["status"], "active");

    let (status, updated) = app
        .put(
            &format!("/api/v1/projects/{project_id}"),
            json!({
                "customer_id": customer_id,
                "code": "P001",
                "name": "基幹システム刷新",
                "status": "completed",
                "start_date": "2025-04-01",
                "end_date": "2025-09-30"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "completed");
    assert_eq!(updated["end_date"], "2025-09-30");

    // Deleting the customer leaves the project with its weak reference.
    app.delete(&format!("/api/v1/customers/{customer_id}"))
        .await;
    let (status, orphan) = app.get(&format!("/api/v1/projects/{project_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(orphan["customer_id"].as_str().unwrap(), customer_id);

    let (_, filtered) = app.get("/api/v1/projects?q=p001").await;
    assert_eq!(filtered.as_array().unwrap().len(), 1);
}
