use axum::http::{header, HeaderMap, HeaderValue};
use cookie::Cookie;
use std::sync::{Arc, Mutex};

use super::jwt;

pub const SESSION_COOKIE: &str = "eclinic_session";

fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

fn cookie_domain() -> Option<String> {
    std::env::var("COOKIE_DOMAIN")
        .ok()
        .filter(|d| !d.is_empty())
}

fn session_cookie(value: &str, max_age: cookie::time::Duration) -> Option<HeaderValue> {
    let mut cookie = Cookie::build((SESSION_COOKIE, value))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(max_age)
        .secure(cookie_secure());

    if let Some(domain) = cookie_domain() {
        cookie = cookie.domain(domain);
    }

    match HeaderValue::from_str(&cookie.build().to_string()) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!(%e, "Session cookie is not a valid header value");
            None
        }
    }
}

/// Build a Set-Cookie header value for the session token.
pub fn build_session_cookie(token: &str, max_age_minutes: i64) -> Option<HeaderValue> {
    session_cookie(token, cookie::time::Duration::seconds(max_age_minutes * 60))
}

/// Build a Set-Cookie header value that clears the session cookie.
pub fn build_clear_cookie() -> Option<HeaderValue> {
    session_cookie("", cookie::time::Duration::ZERO)
}

/// Extract the session token from cookies (preferred) or Bearer header (fallback).
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extract_cookie(headers, SESSION_COOKIE) {
        return Some(token);
    }

    // REST clients
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(str::to_string)
}

/// Parse a specific cookie value from the Cookie header.
fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    for header_value in headers.get_all(header::COOKIE) {
        if let Ok(cookie_str) = header_value.to_str() {
            for piece in cookie_str.split(';') {
                if let Ok(c) = Cookie::parse(piece.trim().to_string()) {
                    if c.name() == name && !c.value().is_empty() {
                        return Some(c.value().to_string());
                    }
                }
            }
        }
    }
    None
}

/// Set the session cookie on the response using the configured expiry.
pub fn set_session_cookie(headers: &mut HeaderMap, token: &str) {
    if let Some(value) = build_session_cookie(token, jwt::session_expiry_minutes()) {
        headers.append(header::SET_COOKIE, value);
    }
}

/// Clear the session cookie on the response.
pub fn clear_session_cookie(headers: &mut HeaderMap) {
    if let Some(value) = build_clear_cookie() {
        headers.append(header::SET_COOKIE, value);
    }
}

/// Pending cookie action to be picked up by the auth middleware.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingCookieAction {
    Set { token: String },
    Clear,
}

/// Shared slot for server functions to communicate cookie actions to the
/// middleware. Stored in request extensions.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

impl CookieSlot {
    pub fn schedule(&self, action: PendingCookieAction) {
        if let Ok(mut slot) = self.0.lock() {
            *slot = Some(action);
        }
    }

    pub fn take(&self) -> Option<PendingCookieAction> {
        self.0.lock().ok().and_then(|mut slot| slot.take())
    }
}

fn schedule(action: PendingCookieAction) {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            slot.schedule(action);
        }
    }
}

/// Schedule the session cookie to be set by the middleware.
/// Called from server functions.
pub fn schedule_session_cookie(token: &str) {
    schedule(PendingCookieAction::Set {
        token: token.to_string(),
    });
}

/// Schedule the session cookie to be cleared by the middleware.
pub fn schedule_clear_cookie() {
    schedule(PendingCookieAction::Clear);
}
