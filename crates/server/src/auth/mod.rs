pub mod cookies;
pub mod extractors;
pub mod jwt;
pub mod middleware;
pub mod password;

use jwt::Claims;
use shared_types::{AppError, AuthUser};

use crate::config::access_policy;

/// Read the session claims for the current server-function request.
///
/// The auth middleware normally leaves them in request extensions; when a
/// server function runs outside it, the session cookie is read directly.
pub fn current_claims() -> Option<Claims> {
    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();
    if let Some(claims) = parts.extensions.get::<Claims>() {
        return Some(claims.clone());
    }
    let token = cookies::extract_session_token(&parts.headers)?;
    jwt::validate_session_token(&token).ok()
}

/// Claims of the signed-in user, or `Unauthorized`.
pub fn require_auth() -> Result<Claims, AppError> {
    current_claims().ok_or_else(|| AppError::unauthorized("Authentication required"))
}

/// Client-facing view of a session.
pub fn auth_user(claims: &Claims) -> AuthUser {
    let policy = access_policy();
    AuthUser {
        username: claims.sub.clone(),
        role: claims.role.clone(),
        department: policy.home_department(&claims.role),
        accessible: policy.accessible_departments(&claims.role),
    }
}
