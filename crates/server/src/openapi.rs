use axum::Router;
use shared_types::{
    AppError, AppErrorKind, AuthUser, Department, DepartmentAccess, LoginRequest, LoginResponse,
    MessageResponse, MissingRolePolicy,
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::health;
use crate::rest;
use crate::roster::StaffRoster;
use crate::state::AppState;

/// OpenAPI documentation for the API.
#[derive(OpenApi)]
#[openapi(
    paths(
        rest::login,
        rest::logout,
        rest::current_session,
        rest::list_departments,
        rest::department_access,
        health::health_check,
    ),
    components(schemas(
        AppError,
        AppErrorKind,
        AuthUser,
        Department,
        DepartmentAccess,
        LoginRequest,
        LoginResponse,
        MessageResponse,
        MissingRolePolicy,
        health::HealthResponse,
    )),
    tags(
        (name = "session", description = "Staff login, logout and session lookup"),
        (name = "departments", description = "Department dashboard access checks"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "e-Clinic Portal API",
        description = "Staff portal sessions and role-based department access",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the API docs at `/docs`, the REST API
/// at `/api/*` and the health check.
pub fn api_router(roster: Arc<StaffRoster>) -> Router {
    let state = AppState::new(roster);

    Router::new()
        .merge(rest::api_router(state.clone()))
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_portal_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/login",
            "/api/logout",
            "/api/session",
            "/api/departments",
            "/api/departments/{slug}/access",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
