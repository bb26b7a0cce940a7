use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    middleware,
    Router,
};
use serde_json::Value;
use server::rate_limit::RateLimitState;
use server::roster::StaffRoster;
use server::state::AppState;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::ServiceExt;

/// Serializes tests that touch process-wide environment variables.
static TEST_MUTEX: std::sync::LazyLock<Mutex<()>> = std::sync::LazyLock::new(|| Mutex::new(()));

pub const TEST_SECRET: &str = "integration-test-secret";

/// Accounts seeded into every test roster.
pub const STAFF: [(&str, &str, &str); 4] = [
    ("Pharmacy", "pharm01", "Pill$2025"),
    ("Customer Care", "frontdesk", "welcome"),
    ("Doctor", "house", "vicodin"),
    ("Admin", "root", "toor"),
];

fn test_roster() -> Arc<StaffRoster> {
    Arc::new(StaffRoster::from_entries(STAFF))
}

/// Build the full API router (REST, health, docs) over the test roster,
/// wrapped in the auth middleware as the server wires it.
/// The returned guard must be held for the duration of the test.
pub async fn test_app() -> (Router, tokio::sync::MutexGuard<'static, ()>) {
    let guard = TEST_MUTEX.lock().await;
    std::env::set_var("JWT_SECRET", TEST_SECRET);

    let router = server::openapi::api_router(test_roster())
        .layer(middleware::from_fn(server::auth::middleware::auth_middleware));

    (router, guard)
}

/// Like [`test_app`] with an empty roster.
pub async fn test_app_without_staff() -> (Router, tokio::sync::MutexGuard<'static, ()>) {
    let guard = TEST_MUTEX.lock().await;
    std::env::set_var("JWT_SECRET", TEST_SECRET);

    let router = server::openapi::api_router(Arc::new(StaffRoster::default()))
        .layer(middleware::from_fn(server::auth::middleware::auth_middleware));

    (router, guard)
}

/// Build a router whose login limiter allows `max_requests` per minute.
pub async fn test_app_rate_limited(
    max_requests: u32,
) -> (Router, tokio::sync::MutexGuard<'static, ()>) {
    let guard = TEST_MUTEX.lock().await;
    std::env::set_var("JWT_SECRET", TEST_SECRET);

    let state = AppState {
        roster: test_roster(),
        login_limit: RateLimitState::new(max_requests, std::time::Duration::from_secs(60)),
    };
    let router = server::rest::api_router(state.clone())
        .with_state(state)
        .layer(middleware::from_fn(server::auth::middleware::auth_middleware));

    (router, guard)
}

pub fn login_body(role: &str, username: &str, password: &str) -> String {
    serde_json::json!({ "role": role, "username": username, "password": password }).to_string()
}

/// POST JSON to a route.
pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, HeaderMap, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, req).await
}

/// POST a login from a given client address.
pub async fn post_login_from(app: &Router, client: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/api/login")
        .header("content-type", "application/json")
        .header("x-forwarded-for", client)
        .body(Body::from(body.to_string()))
        .unwrap();

    let (status, _, body) = send(app, req).await;
    (status, body)
}

/// GET a route with no credentials.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, HeaderMap, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// GET a route carrying the session cookie.
pub async fn get_with_cookie(app: &Router, uri: &str, cookie: &str) -> (StatusCode, HeaderMap, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// GET a route with a Bearer token.
pub async fn get_authed(app: &Router, uri: &str, token: &str) -> (StatusCode, HeaderMap, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// Mint a session token for `role` directly, skipping the login route.
/// Requires JWT_SECRET, which every `test_app*` builder sets.
pub fn create_test_token(username: &str, role: &str) -> String {
    server::auth::jwt::create_session_token(username, role).expect("Failed to create test JWT")
}

/// The `name=value` pair of the session cookie in a response, if one was set.
pub fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter(|v| v.starts_with(server::auth::cookies::SESSION_COOKIE))
        .filter_map(|v| v.split(';').next())
        .map(str::to_string)
        .next()
}

/// Log in through the REST route and return the session cookie pair.
pub async fn login_cookie(app: &Router, role: &str, username: &str, password: &str) -> String {
    let (status, headers, body) =
        post_json(app, "/api/login", &login_body(role, username, password)).await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    session_cookie(&headers).expect("login response should set the session cookie")
}

/// Send a request through the router and parse the response.
async fn send(app: &Router, req: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&body_bytes).to_string(),
        ))
    };

    (status, headers, body)
}
