use axum::{
    extract::{Path, Query, State},
    response::Response,
    routing::{delete, get},
    Router,
};
use uuid::Uuid;

use super::common::{no_content_response, success_response, ListQuery};
use crate::errors::ServiceError;
use crate::AppState;

/// The cross-invoice view of the delivery log section (送付ログ). Creation
/// happens under `/invoices/:id/delivery-logs`, next to the document the
/// log belongs to.
async fn list_delivery_logs(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response, ServiceError> {
    let logs = state.services.delivery_logs.list(&query.q).await?;
    Ok(success_response(logs))
}

async fn delete_delivery_log(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ServiceError> {
    state.services.delivery_logs.delete(id).await?;
    Ok(no_content_response())
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_delivery_logs))
        .route("/:id", delete(delete_delivery_log))
}
