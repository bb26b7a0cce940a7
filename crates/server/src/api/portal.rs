use dioxus::prelude::*;
use shared_types::{DepartmentAccess, PortalConfig};

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

/// Portal configuration: feature flags and access settings. No auth
/// required; the client builds its navigation policy from it.
#[server]
pub async fn get_portal_config() -> Result<PortalConfig, ServerFnError> {
    Ok(crate::config::portal_config().clone())
}

/// Check that the session may open the dashboard at `slug`.
///
/// Fails with `Unauthorized` without a session, `NotFound` for an unknown
/// slug and `Forbidden` (carrying the advisory text) for another
/// department's dashboard.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn open_department(slug: String) -> Result<DepartmentAccess, ServerFnError> {
    let claims = crate::auth::require_auth().map_err(|e| e.into_server_fn_error())?;
    crate::portal::department_access(&claims.role, &slug).map_err(|e| e.into_server_fn_error())
}
