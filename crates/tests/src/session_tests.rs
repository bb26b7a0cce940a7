use axum::http::{header, StatusCode};
use crate::common;

#[tokio::test]
async fn test_session_returns_user_after_login() {
    let (app, _guard) = common::test_app().await;
    let cookie = common::login_cookie(&app, "Pharmacy", "pharm01", "Pill$2025").await;

    let (status, _, body) = common::get_with_cookie(&app, "/api/session", &cookie).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "pharm01");
    assert_eq!(body["role"], "Pharmacy");
    assert_eq!(body["department"], "nursing");
    assert_eq!(body["accessible"], serde_json::json!(["nursing"]));
}

#[tokio::test]
async fn test_session_without_credentials_is_unauthorized() {
    let (app, _guard) = common::test_app().await;

    let (status, _, body) = common::get(&app, "/api/session").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["kind"], "Unauthorized");
}

#[tokio::test]
async fn test_bearer_token_is_accepted() {
    let (app, _guard) = common::test_app().await;
    let token = common::create_test_token("house", "Doctor");

    let (status, _, body) = common::get_authed(&app, "/api/session", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "Doctor");
}

#[tokio::test]
async fn test_invalid_cookie_is_cleared() {
    let (app, _guard) = common::test_app().await;

    let (status, headers, _) =
        common::get_with_cookie(&app, "/api/session", "eclinic_session=not-a-jwt").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let cleared = headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| v.starts_with("eclinic_session=;") && v.contains("Max-Age=0"));
    assert!(cleared, "Stale session cookie should be cleared: {headers:?}");
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let (app, _guard) = common::test_app().await;

    let (status, headers, body) = common::post_json(&app, "/api/logout", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Logged out");

    let cookie = common::session_cookie(&headers).expect("logout should send a clearing cookie");
    assert_eq!(cookie, "eclinic_session=");
}
