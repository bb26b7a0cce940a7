use dioxus::prelude::*;
use shared_types::{AuthUser, LoginResponse};

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

/// Sign in with role, username and password. On success the session cookie
/// is set on the response.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(
    role: String,
    username: String,
    password: String,
) -> Result<LoginResponse, ServerFnError> {
    use crate::auth::cookies;
    use crate::rate_limit::{client_key, login_limiter, rate_limited};
    use shared_types::LoginRequest;

    let key = dioxus::fullstack::FullstackContext::current()
        .map(|ctx| client_key(&ctx.parts_mut().headers))
        .unwrap_or_else(|| "anonymous".to_string());
    if !login_limiter().check(&key) {
        tracing::warn!(client = %key, "Login rate limit exceeded");
        return Err(rate_limited().into_server_fn_error());
    }

    let req = LoginRequest {
        role,
        username,
        password,
    };
    let outcome = crate::portal::sign_in(&crate::roster::roster(), req)
        .map_err(|e| e.into_server_fn_error())?;

    if let Some((token, _)) = &outcome.session {
        cookies::schedule_session_cookie(token);
    }
    Ok(outcome.response)
}

/// The signed-in staff member, or `None`.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    Ok(crate::auth::current_claims().map(|claims| crate::auth::auth_user(&claims)))
}

/// End the session by clearing the session cookie.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    if let Some(claims) = crate::auth::current_claims() {
        tracing::info!(username = %claims.sub, role = %claims.role, "Logout");
    }
    crate::auth::cookies::schedule_clear_cookie();
    Ok(())
}
