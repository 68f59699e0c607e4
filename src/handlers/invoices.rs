use axum::{
    extract::{Json, Path, Query, State},
    response::Response,
    routing::{delete, get, post, put},
    Router,
};
use uuid::Uuid;

use super::common::{
    created_response, no_content_response, success_response, validate_input, ListQuery,
};
use crate::auth::CurrentUser;
use crate::errors::ServiceError;
use crate::services::delivery_logs::DeliveryLogInput;
use crate::services::invoices::InvoiceInput;
use crate::services::LineItemInput;
use crate::AppState;

async fn list_invoices(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response, ServiceError> {
    let invoices = state.services.invoices.list(&query.q).await?;
    Ok(success_response(invoices))
}

async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ServiceError> {
    let invoice = state
        .services
        .invoices
        .get(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("invoice {id} not found")))?;
    Ok(success_response(invoice))
}

async fn create_invoice(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<InvoiceInput>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let created = state
        .services
        .invoices
        .create(user.user_id, payload)
        .await?;
    Ok(created_response(created))
}

async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<InvoiceInput>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let updated = state
        .services
        .invoices
        .update(user.user_id, id, payload)
        .await?;
    Ok(success_response(updated))
}

async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ServiceError> {
    state.services.invoices.delete(id).await?;
    Ok(no_content_response())
}

// Line items, scoped under the owning invoice

async fn list_invoice_items(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ServiceError> {
    let items = state.services.invoices.list_items(id).await?;
    Ok(success_response(items))
}

async fn add_invoice_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<LineItemInput>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let created = state.services.invoices.add_item(id, payload).await?;
    Ok(created_response(created))
}

async fn update_invoice_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<LineItemInput>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let updated = state
        .services
        .invoices
        .update_item(id, item_id, payload)
        .await?;
    Ok(success_response(updated))
}

async fn remove_invoice_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, ServiceError> {
    state.services.invoices.remove_item(id, item_id).await?;
    Ok(no_content_response())
}

// Delivery log entries recorded against this invoice

async fn list_invoice_delivery_logs(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ServiceError> {
    let logs = state.services.delivery_logs.list_for_invoice(id).await?;
    Ok(success_response(logs))
}

async fn log_invoice_delivery(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<DeliveryLogInput>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let created = state
        .services
        .delivery_logs
        .create(user.user_id, id, payload)
        .await?;
    Ok(created_response(created))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_invoices))
        .route("/", post(create_invoice))
        .route("/:id", get(get_invoice))
        .route("/:id", put(update_invoice))
        .route("/:id", delete(delete_invoice))
        .route("/:id/items", get(list_invoice_items))
        .route("/:id/items", post(add_invoice_item))
        .route("/:id/items/:item_id", put(update_invoice_item))
        .route("/:id/items/:item_id", delete(remove_invoice_item))
        .route("/:id/delivery-logs", get(list_invoice_delivery_logs))
        .route("/:id/delivery-logs", post(log_invoice_delivery))
}
