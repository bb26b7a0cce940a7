use axum::extract::FromRef;
use std::sync::Arc;

use crate::rate_limit::RateLimitState;
use crate::roster::StaffRoster;

/// Shared application state passed to Axum handlers via `State`.
/// Derives `FromRef` so handlers can extract `State<Arc<StaffRoster>>`
/// or `State<RateLimitState>` directly.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub roster: Arc<StaffRoster>,
    pub login_limit: RateLimitState,
}

impl AppState {
    pub fn new(roster: Arc<StaffRoster>) -> Self {
        Self {
            roster,
            login_limit: RateLimitState::for_login(),
        }
    }
}
