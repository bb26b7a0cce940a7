use axum::http::StatusCode;
use crate::common;

#[tokio::test]
async fn test_role_opens_its_own_department() {
    let (app, _guard) = common::test_app().await;
    let token = common::create_test_token("pharm01", "Pharmacy");

    let (status, _, body) =
        common::get_authed(&app, "/api/departments/nursing/access", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["department"], "nursing");
    assert_eq!(body["role"], "Pharmacy");
}

#[tokio::test]
async fn test_role_is_forbidden_from_other_departments() {
    let (app, _guard) = common::test_app().await;
    let token = common::create_test_token("pharm01", "Pharmacy");

    let (status, _, body) =
        common::get_authed(&app, "/api/departments/doctor/access", &token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["kind"], "Forbidden");
    assert_eq!(
        body["message"],
        "Access restricted — you can only access your nursing dashboard."
    );
}

#[tokio::test]
async fn test_unrestricted_roles_open_every_department() {
    let (app, _guard) = common::test_app().await;

    for (username, role) in [("house", "Doctor"), ("root", "Admin")] {
        let token = common::create_test_token(username, role);
        for slug in ["customer-care", "laboratory", "it", "accounts"] {
            let uri = format!("/api/departments/{slug}/access");
            let (status, _, _) = common::get_authed(&app, &uri, &token).await;
            assert_eq!(status, StatusCode::OK, "{role} should open {slug}");
        }
    }
}

#[tokio::test]
async fn test_unknown_department_is_not_found() {
    let (app, _guard) = common::test_app().await;
    let token = common::create_test_token("root", "Admin");

    let (status, _, body) =
        common::get_authed(&app, "/api/departments/radiology/access", &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "NotFound");
}

#[tokio::test]
async fn test_unmapped_role_opens_nothing() {
    let (app, _guard) = common::test_app().await;
    let token = common::create_test_token("visitor", "Porter");

    let (status, _, body) = common::get_authed(&app, "/api/departments", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));

    let (status, _, _) =
        common::get_authed(&app, "/api/departments/customer-care/access", &token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_department_list_follows_role() {
    let (app, _guard) = common::test_app().await;
    let cookie = common::login_cookie(&app, "Customer Care", "frontdesk", "welcome").await;

    let (status, _, body) = common::get_with_cookie(&app, "/api/departments", &cookie).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!(["customer care"]));
}

#[tokio::test]
async fn test_departments_require_a_session() {
    let (app, _guard) = common::test_app().await;

    let (status, _, _) = common::get(&app, "/api/departments/nursing/access").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
