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
use crate::services::quotes::QuoteInput;
use crate::services::LineItemInput;
use crate::AppState;

async fn list_quotes(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response, ServiceError> {
    let quotes = state.services.quotes.list(&query.q).await?;
    Ok(success_response(quotes))
}

async fn get_quote(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ServiceError> {
    let quote = state
        .services
        .quotes
        .get(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("quote {id} not found")))?;
    Ok(success_response(quote))
}

async fn create_quote(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<QuoteInput>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let created = state.services.quotes.create(user.user_id, payload).await?;
    Ok(created_response(created))
}

async fn update_quote(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<QuoteInput>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let updated = state
        .services
        .quotes
        .update(user.user_id, id, payload)
        .await?;
    Ok(success_response(updated))
}

async fn delete_quote(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ServiceError> {
    state.services.quotes.delete(id).await?;
    Ok(no_content_response())
}

// Line items, scoped under the owning quote

async fn list_quote_items(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ServiceError> {
    let items = state.services.quotes.list_items(id).await?;
    Ok(success_response(items))
}

async fn add_quote_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<LineItemInput>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let created = state.services.quotes.add_item(id, payload).await?;
    Ok(created_response(created))
}

async fn update_quote_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<LineItemInput>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let updated = state
        .services
        .quotes
        .update_item(id, item_id, payload)
        .await?;
    Ok(success_response(updated))
}

async fn remove_quote_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, ServiceError> {
    state.services.quotes.remove_item(id, item_id).await?;
    Ok(no_content_response())
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_quotes))
        .route("/", post(create_quote))
        .route("/:id", get(get_quote))
        .route("/:id", put(update_quote))
        .route("/:id", delete(delete_quote))
        .route("/:id/items", get(list_quote_items))
        .route("/:id/items", post(add_quote_item))
        .route("/:id/items/:item_id", put(update_quote_item))
        .route("/:id/items/:item_id", delete(remove_quote_item))
}
