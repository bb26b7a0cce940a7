use axum::{extract::Path, Json};
use shared_types::{AppError, Department, DepartmentAccess};

use crate::auth::extractors::AuthRequired;
use crate::config::access_policy;

#[utoipa::path(
    get,
    path = "/api/departments",
    responses(
        (status = 200, description = "Departments the session may open", body = Vec<Department>),
        (status = 401, description = "Not signed in", body = AppError)
    ),
    tag = "departments"
)]
#[tracing::instrument(skip_all)]
pub async fn list_departments(AuthRequired(claims): AuthRequired) -> Json<Vec<Department>> {
    Json(access_policy().accessible_departments(&claims.role))
}

#[utoipa::path(
    get,
    path = "/api/departments/{slug}/access",
    params(("slug" = String, Path, description = "Department slug, e.g. customer-care")),
    responses(
        (status = 200, description = "Access granted", body = DepartmentAccess),
        (status = 401, description = "Not signed in", body = AppError),
        (status = 403, description = "Another department's dashboard", body = AppError),
        (status = 404, description = "Unknown department", body = AppError)
    ),
    tag = "departments"
)]
#[tracing::instrument(skip_all, fields(slug = %slug))]
pub async fn department_access(
    AuthRequired(claims): AuthRequired,
    Path(slug): Path<String>,
) -> Result<Json<DepartmentAccess>, AppError> {
    crate::portal::department_access(&claims.role, &slug).map(Json)
}
