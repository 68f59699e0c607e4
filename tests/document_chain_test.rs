mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::TestApp;

async fn seed_customer(app: &TestApp) -> String {
    let (status, customer) = app
        .post(
            "/api/v1/customers",
            json!({"code": "C001", "name": "株式会社サンプル"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    customer["id"].as_str().unwrap().to_string()
}

fn sample_quote(customer_id: &str) -> serde_json::Value {
    json!({
        "quote_number": "Q-2025-001",
        "customer_id": customer_id,
        "issue_date": "2025-06-01",
        "expiry_date": "2025-06-30",
        "subtotal": "100000",
        "tax": "10000",
        "total": "110000",
        "status": "draft",
        "notes": "初回お見積り"
    })
}

#[tokio::test]
async fn quote_line_items_are_numbered_and_ordered() {
    let app = TestApp::new().await;
    let customer_id = seed_customer(&app).await;

    let (status, quote) = app.post("/api/v1/quotes", sample_quote(&customer_id)).await;
    assert_eq!(status, StatusCode::CREATED);
    let quote_id = quote["id"].as_str().unwrap().to_string();

    // Add items out of order; the list comes back by line number.
    for (line, name) in [(2, "保守サポート"), (1, "設計作業")] {
        let (status, _) = app
            .post(
                &format!("/api/v1/quotes/{quote_id}/items"),
                json!({
                    "line_number": line,
                    "item_name": name,
                    "quantity": "10",
                    "unit_price": "5000",
                    "amount": "50000"
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, items) = app.get(&format!("/api/v1/quotes/{quote_id}/items")).await;
    assert_eq!(status, StatusCode::OK);
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["line_number"], 1);
    assert_eq!(items[0]["item_name"], "設計作業");
    assert_eq!(items[1]["line_number"], 2);
}

#[tokio::test]
async fn line_item_amount_is_stored_as_submitted() {
    let app = TestApp::new().await;
    let customer_id = seed_customer(&app).await;

    let (_, quote) = app.post("/api/v1/quotes", sample_quote(&customer_id)).await;
    let quote_id = quote["id"].as_str().unwrap();

    // amount deliberately disagrees with quantity * unit_price; the service
    // records it untouched.
    let (status, item) = app
        .post(
            &format!("/api/v1/quotes/{quote_id}/items"),
            json!({
                "line_number": 1,
                "item_name": "値引き調整",
                "quantity": "3",
                "unit_price": "1000",
                "amount": "2500"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(item["amount"], "2500");
}

#[tokio::test]
async fn adding_an_item_to_a_missing_quote_is_not_found() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post(
            "/api/v1/quotes/00000000-0000-0000-0000-000000000000/items",
            json!({
                "line_number": 1,
                "item_name": "x",
                "quantity": "1",
                "unit_price": "1",
                "amount": "1"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_quote_removes_its_items_but_not_referencing_orders() {
    let app = TestApp::new().await;
    let customer_id = seed_customer(&app).await;

    let (_, quote) = app.post("/api/v1/quotes", sample_quote(&customer_id)).await;
    let quote_id = quote["id"].as_str().unwrap().to_string();

    app.post(
        &format!("/api/v1/quotes/{quote_id}/items"),
        json!({
            "line_number": 1,
            "item_name": "設計作業",
            "quantity": "1",
            "unit_price": "100000",
            "amount": "100000"
        }),
    )
    .await;

    // An order raised from the quote keeps only a weak reference.
    let (status, order) = app
        .post(
            "/api/v1/sales-orders",
            json!({
                "order_number": "SO-2025-001",
                "customer_id": customer_id,
                "quote_id": quote_id,
                "order_date": "2025-06-10",
                "total_amount": "110000",
                "status": "pending"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let order_id = order["id"].as_str().unwrap().to_string();

    let (status, _) = app.delete(&format!("/api/v1/quotes/{quote_id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Quote and items are gone.
    let (status, _) = app.get(&format!("/api/v1/quotes/{quote_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, items) = app.get(&format!("/api/v1/quotes/{quote_id}/items")).await;
    assert!(items.as_array().unwrap().is_empty());

    // The order survives, still holding the dangling quote id.
    let (status, order) = app.get(&format!("/api/v1/sales-orders/{order_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["quote_id"].as_str().unwrap(), quote_id);
}

#[tokio::test]
async fn invoice_delivery_logs_follow_their_invoice() {
    let app = TestApp::new().await;
    let customer_id = seed_customer(&app).await;

    let (status, invoice) = app
        .post(
            "/api/v1/invoices",
            json!({
                "invoice_number": "INV-2025-001",
                "customer_id": customer_id,
                "issue_date": "2025-07-01",
                "due_date": "2025-07-31",
                "subtotal": "100000",
                "tax": "10000",
                "total": "110000",
                "status": "sent"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let invoice_id = invoice["id"].as_str().unwrap().to_string();

    let (status, log) = app
        .post(
            &format!("/api/v1/invoices/{invoice_id}/delivery-logs"),
            json!({
                "delivery_method": "email",
                "recipient_email": "keiri@sample.co.jp",
                "notes": "PDF添付で送付"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(log["delivery_method"], "email");
    assert!(log["delivered_by"].is_string());
    assert!(log["delivered_at"].is_string());

    // Visible both under the invoice and in the cross-invoice section.
    let (_, per_invoice) = app
        .get(&format!("/api/v1/invoices/{invoice_id}/delivery-logs"))
        .await;
    assert_eq!(per_invoice.as_array().unwrap().len(), 1);

    let (_, all_logs) = app.get("/api/v1/delivery-logs").await;
    assert_eq!(all_logs.as_array().unwrap().len(), 1);

    // Filter by recipient.
    let (_, filtered) = app.get("/api/v1/delivery-logs?q=keiri").await;
    assert_eq!(filtered.as_array().unwrap().len(), 1);
    let (_, filtered) = app.get("/api/v1/delivery-logs?q=nobody").await;
    assert!(filtered.as_array().unwrap().is_empty());

    // Logging against a missing invoice fails up front.
    let (status, _) = app
        .post(
            "/api/v1/invoices/00000000-0000-0000-0000-000000000000/delivery-logs",
            json!({"delivery_method": "post", "recipient_email": ""}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Deleting the invoice takes its logs with it.
    let (status, _) = app.delete(&format!("/api/v1/invoices/{invoice_id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, all_logs) = app.get("/api/v1/delivery-logs").await;
    assert!(all_logs.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn delivery_note_carries_its_own_items() {
    let app = TestApp::new().await;
    let customer_id = seed_customer(&app).await;

    let (status, note) = app
        .post(
            "/api/v1/delivery-notes",
            json!({
                "delivery_number": "DN-2025-001",
                "customer_id": customer_id,
                "delivery_date": "2025-07-15",
                "subtotal": "50000",
                "tax": "5000",
                "total": "55000"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let note_id = note["id"].as_str().unwrap().to_string();

    let (status, item) = app
        .post(
            &format!("/api/v1/delivery-notes/{note_id}/items"),
            json!({
                "line_number": 1,
                "item_name": "機材一式",
                "description": "設置込み",
                "quantity": "1",
                "unit_price": "50000",
                "amount": "50000"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let item_id = item["id"].as_str().unwrap().to_string();

    // Update a line in place.
    let (status, updated) = app
        .put(
            &format!("/api/v1/delivery-notes/{note_id}/items/{item_id}"),
            json!({
                "line_number": 1,
                "item_name": "機材一式",
                "description": "設置・調整込み",
                "quantity": "1",
                "unit_price": "52000",
                "amount": "52000"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["unit_price"], "52000");
    assert_eq!(updated["id"], item["id"]);

    // Remove it.
    let (status, _) = app
        .delete(&format!("/api/v1/delivery-notes/{note_id}/items/{item_id}"))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, items) = app
        .get(&format!("/api/v1/delivery-notes/{note_id}/items"))
        .await;
    assert!(items.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn document_numbers_are_required() {
    let app = TestApp::new().await;
    let customer_id = seed_customer(&app).await;

    let mut quote = sample_quote(&customer_id);
    quote["quote_number"] = json!("");
    let (status, _) = app.post("/api/v1/quotes", quote).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, quotes) = app.get("/api/v1/quotes").await;
    assert!(quotes.as_array().unwrap().is_empty());
}
