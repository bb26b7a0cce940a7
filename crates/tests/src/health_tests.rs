use axum::http::StatusCode;
use crate::common;

#[tokio::test]
async fn test_health_reports_roster_size() {
    let (app, _guard) = common::test_app().await;

    let (status, _, body) = common::get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["roster"], common::STAFF.len());
    assert_eq!(body["missing_role"], "fail-open");
    assert_eq!(body["roles"][0], "Pharmacy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_health_degraded_without_staff() {
    let (app, _guard) = common::test_app_without_staff().await;

    let (status, _, body) = common::get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK, "Health stays reachable with no accounts");
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["roster"], 0);
}
