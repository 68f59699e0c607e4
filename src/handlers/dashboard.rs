use axum::{extract::State, response::Response, routing::get, Router};

use super::common::success_response;
use crate::errors::ServiceError;
use crate::AppState;

async fn get_dashboard(State(state): State<AppState>) -> Result<Response, ServiceError> {
    let summary = state.services.dashboard.summary().await?;
    Ok(success_response(summary))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(get_dashboard))
}
