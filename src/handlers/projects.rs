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
use crate::services::projects::ProjectInput;
use crate::AppState;

async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response, ServiceError> {
    let projects = state.services.projects.list(&query.q).await?;
    Ok(success_response(projects))
}

async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ServiceError> {
    let project = state
        .services
        .projects
        .get(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("project {id} not found")))?;
    Ok(success_response(project))
}

async fn create_project(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<ProjectInput>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let created = state
        .services
        .projects
        .create(user.user_id, payload)
        .await?;
    Ok(created_response(created))
}

async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<ProjectInput>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let updated = state
        .services
        .projects
        .update(user.user_id, id, payload)
        .await?;
    Ok(success_response(updated))
}

async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ServiceError> {
    state.services.projects.delete(id).await?;
    Ok(no_content_response())
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_projects))
        .route("/", post(create_project))
        .route("/:id", get(get_project))
        .route("/:id", put(update_project))
        .route("/:id", delete(delete_project))
}
