use crate::config::portal_config;
use crate::roster::StaffRoster;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use shared_types::MissingRolePolicy;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Health check response.
///
/// `status` is `degraded` when no staff account is configured: the portal
/// serves pages but nobody can sign in.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Number of staff accounts loaded from the environment.
    pub roster: usize,
    /// Roles that have an account.
    pub roles: Vec<String>,
    /// How navigation treats a session with no readable role.
    pub missing_role: MissingRolePolicy,
    pub uptime_seconds: u64,
    pub version: String,
}

impl HealthResponse {
    fn for_roster(roster: &StaffRoster) -> Self {
        Self {
            status: if roster.is_empty() { "degraded" } else { "ok" }.to_string(),
            roster: roster.len(),
            roles: roster.roles(),
            missing_role: portal_config().access.missing_role,
            uptime_seconds: START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Portal is up; `degraded` without staff accounts", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(roster): State<Arc<StaffRoster>>) -> Json<HealthResponse> {
    Json(HealthResponse::for_roster(&roster))
}
