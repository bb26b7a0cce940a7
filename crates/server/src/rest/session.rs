use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use shared_types::{AppError, AuthUser, LoginRequest, LoginResponse, MessageResponse};
use std::sync::Arc;

use crate::auth::{auth_user, cookies, extractors::MaybeAuth};
use crate::roster::StaffRoster;

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful; session cookie set", body = LoginResponse),
        (status = 401, description = "Invalid username or password", body = LoginResponse),
        (status = 400, description = "A field is blank", body = AppError),
        (status = 422, description = "Validation error", body = AppError),
        (status = 429, description = "Too many login attempts", body = AppError)
    ),
    tag = "session"
)]
#[tracing::instrument(skip(roster, payload))]
pub async fn login(
    State(roster): State<Arc<StaffRoster>>,
    Json(payload): Json<LoginRequest>,
) -> Result<(StatusCode, HeaderMap, Json<LoginResponse>), AppError> {
    let outcome = crate::portal::sign_in(&roster, payload)?;

    let mut headers = HeaderMap::new();
    let status = match &outcome.session {
        Some((token, _)) => {
            cookies::set_session_cookie(&mut headers, token);
            StatusCode::OK
        }
        None => StatusCode::UNAUTHORIZED,
    };
    Ok((status, headers, Json(outcome.response)))
}

#[utoipa::path(
    post,
    path = "/api/logout",
    responses(
        (status = 200, description = "Session cookie cleared", body = MessageResponse)
    ),
    tag = "session"
)]
#[tracing::instrument(skip_all)]
pub async fn logout(MaybeAuth(claims): MaybeAuth) -> (HeaderMap, Json<MessageResponse>) {
    if let Some(claims) = claims {
        tracing::info!(username = %claims.sub, role = %claims.role, "Logout");
    }
    let mut headers = HeaderMap::new();
    cookies::clear_session_cookie(&mut headers);
    (
        headers,
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    )
}

#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "The signed-in staff member", body = AuthUser),
        (status = 401, description = "Not signed in", body = AppError)
    ),
    tag = "session"
)]
#[tracing::instrument(skip_all)]
pub async fn current_session(MaybeAuth(claims): MaybeAuth) -> Result<Json<AuthUser>, AppError> {
    claims
        .map(|claims| Json(auth_user(&claims)))
        .ok_or_else(|| AppError::unauthorized("Authentication required"))
}
