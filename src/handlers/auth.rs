use axum::{
    extract::{Json, State},
    response::Response,
    routing::{get, post},
    Router,
};

use super::common::{no_content_response, success_response, validate_input};
use crate::auth::{CurrentUser, LoginRequest, UserInfo};
use crate::errors::ServiceError;
use crate::AppState;

/// Resolve credentials into a session token. This is the only route mounted
/// outside the session guard.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = crate::auth::LoginResponse),
        (status = 400, description = "Malformed credentials", body = crate::errors::ErrorResponse),
        (status = 401, description = "Unknown email or wrong password", body = crate::errors::ErrorResponse),
    ),
    tag = "auth"
)]
pub(crate) async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let response = state.auth.login(&payload.email, &payload.password).await?;
    Ok(success_response(response))
}

/// Revoke the presented token. Subsequent requests with it are rejected by
/// the guard until it would have expired anyway.
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    responses(
        (status = 204, description = "Session revoked"),
        (status = 401, description = "Unauthenticated", body = crate::errors::ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
pub(crate) async fn logout(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Response, ServiceError> {
    state.auth.sign_out(&user.token_id, user.expires_at);
    Ok(no_content_response())
}

/// The acting identity as seen by the guard.
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses(
        (status = 200, description = "Acting identity", body = UserInfo),
        (status = 401, description = "Unauthenticated", body = crate::errors::ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
pub(crate) async fn me(CurrentUser(user): CurrentUser) -> Result<Response, ServiceError> {
    Ok(success_response(UserInfo {
        id: user.user_id,
        email: user.email,
        display_name: user.name,
    }))
}

/// Routes reachable without a session.
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Routes mounted inside the session guard.
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/logout", post(logout))
        .route("/me", get(me))
}
