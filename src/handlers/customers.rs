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
use crate::services::customers::CustomerInput;
use crate::AppState;

/// List customers, most recently updated first, filtered by `q` against
/// name and code.
#[utoipa::path(
    get,
    path = "/api/v1/customers",
    params(ListQuery),
    responses(
        (status = 200, description = "Customers retrieved", body = [crate::entities::customer::Model]),
        (status = 401, description = "Unauthenticated", body = crate::errors::ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "customers"
)]
pub(crate) async fn list_customers(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response, ServiceError> {
    let customers = state.services.customers.list(&query.q).await?;
    Ok(success_response(customers))
}

/// Fetch a single customer by id.
#[utoipa::path(
    get,
    path = "/api/v1/customers/{id}",
    params(("id" = Uuid, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer retrieved", body = crate::entities::customer::Model),
        (status = 404, description = "No such customer", body = crate::errors::ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "customers"
)]
pub(crate) async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ServiceError> {
    let customer = state
        .services
        .customers
        .get(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("customer {id} not found")))?;
    Ok(success_response(customer))
}

/// Create a customer. The acting user becomes both `created_by` and
/// `updated_by`.
#[utoipa::path(
    post,
    path = "/api/v1/customers",
    request_body = CustomerInput,
    responses(
        (status = 201, description = "Customer created", body = crate::entities::customer::Model),
        (status = 400, description = "Validation failed", body = crate::errors::ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "customers"
)]
pub(crate) async fn create_customer(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CustomerInput>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let created = state
        .services
        .customers
        .create(user.user_id, payload)
        .await?;
    Ok(created_response(created))
}

/// Full-record update. Identifier and creation audit fields are preserved;
/// the update audit fields are refreshed to the acting user and now.
#[utoipa::path(
    put,
    path = "/api/v1/customers/{id}",
    params(("id" = Uuid, Path, description = "Customer id")),
    request_body = CustomerInput,
    responses(
        (status = 200, description = "Customer updated", body = crate::entities::customer::Model),
        (status = 400, description = "Validation failed", body = crate::errors::ErrorResponse),
        (status = 404, description = "No such customer", body = crate::errors::ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "customers"
)]
pub(crate) async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CustomerInput>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let updated = state
        .services
        .customers
        .update(user.user_id, id, payload)
        .await?;
    Ok(success_response(updated))
}

/// Unconditional delete.
#[utoipa::path(
    delete,
    path = "/api/v1/customers/{id}",
    params(("id" = Uuid, Path, description = "Customer id")),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 401, description = "Unauthenticated", body = crate::errors::ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "customers"
)]
pub(crate) async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ServiceError> {
    state.services.customers.delete(id).await?;
    Ok(no_content_response())
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers))
        .route("/", post(create_customer))
        .route("/:id", get(get_customer))
        .route("/:id", put(update_customer))
        .route("/:id", delete(delete_customer))
}
