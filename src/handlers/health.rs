use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tracing::error;

use crate::db;
use crate::AppState;

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: &'static str,
    database: &'static str,
}

/// Liveness plus a database ping. Unreachable storage degrades the response
/// to 503 but never panics the process.
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match db::check_connection(&state.db).await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthStatus {
                status: "ok",
                database: "reachable",
            }),
        ),
        Err(err) => {
            error!("health check failed: {err}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthStatus {
                    status: "degraded",
                    database: "unreachable",
                }),
            )
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(health))
}
