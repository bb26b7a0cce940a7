pub mod department;
pub mod session;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::rate_limit::rate_limit_middleware;
use crate::state::AppState;

pub use department::*;
pub use session::*;

/// Build the REST API router.
pub fn api_router(state: AppState) -> Router<AppState> {
    let login = Router::new()
        .route("/api/login", post(session::login))
        .route_layer(middleware::from_fn_with_state(
            state.login_limit.clone(),
            rate_limit_middleware,
        ));

    Router::new()
        .merge(login)
        .route("/api/logout", post(session::logout))
        .route("/api/session", get(session::current_session))
        .route("/api/departments", get(department::list_departments))
        .route(
            "/api/departments/{slug}/access",
            get(department::department_access),
        )
}
