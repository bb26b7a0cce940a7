use axum::http::StatusCode;
use crate::common;

#[tokio::test]
async fn test_login_success_sets_session_cookie() {
    let (app, _guard) = common::test_app().await;

    let body = common::login_body("Pharmacy", "pharm01", "Pill$2025");
    let (status, headers, json) = common::post_json(&app, "/api/login", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Welcome Pharmacy!");
    assert!(common::session_cookie(&headers).is_some(), "Session cookie should be set");
}

#[tokio::test]
async fn test_login_matches_username_and_role_case_insensitively() {
    let (app, _guard) = common::test_app().await;

    let body = common::login_body("  customer care ", "FRONTDESK", "welcome");
    let (status, _, json) = common::post_json(&app, "/api/login", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Welcome Customer Care!");
}

#[tokio::test]
async fn test_login_wrong_password_is_rejected() {
    let (app, _guard) = common::test_app().await;

    let body = common::login_body("Pharmacy", "pharm01", "pill$2025");
    let (status, headers, json) = common::post_json(&app, "/api/login", &body).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Invalid username or password.");
    assert!(common::session_cookie(&headers).is_none());
}

#[tokio::test]
async fn test_login_wrong_role_is_rejected() {
    let (app, _guard) = common::test_app().await;

    let body = common::login_body("Doctor", "pharm01", "Pill$2025");
    let (status, _, json) = common::post_json(&app, "/api/login", &body).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_login_unknown_user_gets_same_message() {
    let (app, _guard) = common::test_app().await;

    let body = common::login_body("Pharmacy", "nobody", "Pill$2025");
    let (status, _, json) = common::post_json(&app, "/api/login", &body).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Invalid username or password.");
}

#[tokio::test]
async fn test_login_whitespace_field_is_bad_request() {
    let (app, _guard) = common::test_app().await;

    let body = common::login_body("Pharmacy", "   ", "Pill$2025");
    let (status, _, json) = common::post_json(&app, "/api/login", &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["kind"], "BadRequest");
    assert_eq!(json["message"], "Please fill in all fields.");
}

#[tokio::test]
async fn test_login_empty_field_is_validation_error() {
    let (app, _guard) = common::test_app().await;

    let body = common::login_body("", "pharm01", "Pill$2025");
    let (status, _, json) = common::post_json(&app, "/api/login", &body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["kind"], "ValidationError");
}
