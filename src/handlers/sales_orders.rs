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
use crate::services::sales_orders::SalesOrderInput;
use crate::AppState;

async fn list_sales_orders(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response, ServiceError> {
    let orders = state.services.sales_orders.list(&query.q).await?;
    Ok(success_response(orders))
}

async fn get_sales_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ServiceError> {
    let order = state
        .services
        .sales_orders
        .get(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("sales order {id} not found")))?;
    Ok(success_response(order))
}

async fn create_sales_order(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<SalesOrderInput>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let created = state
        .services
        .sales_orders
        .create(user.user_id, payload)
        .await?;
    Ok(created_response(created))
}

async fn update_sales_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<SalesOrderInput>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let updated = state
        .services
        .sales_orders
        .update(user.user_id, id, payload)
        .await?;
    Ok(success_response(updated))
}

async fn delete_sales_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ServiceError> {
    state.services.sales_orders.delete(id).await?;
    Ok(no_content_response())
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_sales_orders))
        .route("/", post(create_sales_order))
        .route("/:id", get(get_sales_order))
        .route("/:id", put(update_sales_order))
        .route("/:id", delete(delete_sales_order))
}
