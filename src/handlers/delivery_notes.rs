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
use crate::services::delivery_notes::DeliveryNoteInput;
use crate::services::LineItemInput;
use crate::AppState;

async fn list_delivery_notes(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response, ServiceError> {
    let notes = state.services.delivery_notes.list(&query.q).await?;
    Ok(success_response(notes))
}

async fn get_delivery_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ServiceError> {
    let note = state
        .services
        .delivery_notes
        .get(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("delivery note {id} not found")))?;
    Ok(success_response(note))
}

async fn create_delivery_note(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<DeliveryNoteInput>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let created = state
        .services
        .delivery_notes
        .create(user.user_id, payload)
        .await?;
    Ok(created_response(created))
}

async fn update_delivery_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<DeliveryNoteInput>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let updated = state
        .services
        .delivery_notes
        .update(user.user_id, id, payload)
        .await?;
    Ok(success_response(updated))
}

async fn delete_delivery_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ServiceError> {
    state.services.delivery_notes.delete(id).await?;
    Ok(no_content_response())
}

// Line items, scoped under the owning delivery note

async fn list_delivery_note_items(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ServiceError> {
    let items = state.services.delivery_notes.list_items(id).await?;
    Ok(success_response(items))
}

async fn add_delivery_note_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<LineItemInput>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let created = state.services.delivery_notes.add_item(id, payload).await?;
    Ok(created_response(created))
}

async fn update_delivery_note_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<LineItemInput>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let updated = state
        .services
        .delivery_notes
        .update_item(id, item_id, payload)
        .await?;
    Ok(success_response(updated))
}

async fn remove_delivery_note_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, ServiceError> {
    state
        .services
        .delivery_notes
        .remove_item(id, item_id)
        .await?;
    Ok(no_content_response())
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_delivery_notes))
        .route("/", post(create_delivery_note))
        .route("/:id", get(get_delivery_note))
        .route("/:id", put(update_delivery_note))
        .route("/:id", delete(delete_delivery_note))
        .route("/:id/items", get(list_delivery_note_items))
        .route("/:id/items", post(add_delivery_note_item))
        .route("/:id/items/:item_id", put(update_delivery_note_item))
        .route("/:id/items/:item_id", delete(remove_delivery_note_item))
}
