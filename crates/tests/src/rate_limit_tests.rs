use axum::http::StatusCode;
use crate::common;

#[tokio::test]
async fn test_rate_limit_returns_429_when_exceeded() {
    // Allow only 2 login attempts per 60s window
    let (app, _guard) = common::test_app_rate_limited(2).await;
    let body = common::login_body("Pharmacy", "pharm01", "wrong");

    let (s1, _) = common::post_login_from(&app, "10.0.0.1", &body).await;
    assert_eq!(s1, StatusCode::UNAUTHORIZED, "First attempt reaches the handler");

    let (s2, _) = common::post_login_from(&app, "10.0.0.1", &body).await;
    assert_eq!(s2, StatusCode::UNAUTHORIZED, "Second attempt reaches the handler");

    let (s3, json) = common::post_login_from(&app, "10.0.0.1", &body).await;
    assert_eq!(s3, StatusCode::TOO_MANY_REQUESTS, "Third attempt should be rate limited");
    assert_eq!(json["kind"], "RateLimited");
}

#[tokio::test]
async fn test_rate_limit_separate_clients() {
    let (app, _guard) = common::test_app_rate_limited(1).await;
    let body = common::login_body("Pharmacy", "pharm01", "Pill$2025");

    let (s1, _) = common::post_login_from(&app, "10.0.0.1", &body).await;
    assert_eq!(s1, StatusCode::OK);

    // A different client has its own budget
    let (s2, _) = common::post_login_from(&app, "10.0.0.2", &body).await;
    assert_eq!(s2, StatusCode::OK);

    let (s3, _) = common::post_login_from(&app, "10.0.0.1", &body).await;
    assert_eq!(s3, StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_rate_limit_only_guards_login() {
    let (app, _guard) = common::test_app_rate_limited(1).await;
    let token = common::create_test_token("house", "Doctor");

    for _ in 0..3 {
        let (status, _, _) = common::get_authed(&app, "/api/session", &token).await;
        assert_eq!(status, StatusCode::OK);
    }
}
