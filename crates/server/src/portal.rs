//! Login and department checks shared by server functions and REST handlers.

use shared_types::{
    AppError, AuthUser, Department, DepartmentAccess, LoginRequest, LoginResponse,
};

use crate::auth::{auth_user, jwt};
use crate::config::access_policy;
use crate::error_convert::ValidateRequest;
use crate::roster::StaffRoster;

/// Result of a login attempt that passed validation.
#[derive(Debug)]
pub struct SignIn {
    pub response: LoginResponse,
    /// Session token and user, present only on success.
    pub session: Option<(String, AuthUser)>,
}

/// Check credentials against the roster and mint a session token.
///
/// Blank fields are a validation error. Wrong credentials are not an error:
/// they produce `success: false` with the standard rejection text.
#[tracing::instrument(skip(roster, req), fields(role = %req.role, username = %req.username))]
pub fn sign_in(roster: &StaffRoster, req: LoginRequest) -> Result<SignIn, AppError> {
    req.validate_request()?;
    if req.has_blank_field() {
        return Err(AppError::bad_request("Please fill in all fields."));
    }
    let req = req.trimmed();

    let Some(member) = roster.verify(&req.role, &req.username, &req.password) else {
        tracing::warn!("Login rejected");
        return Ok(SignIn {
            response: LoginResponse::rejected(),
            session: None,
        });
    };

    let token = jwt::create_session_token(&member.username, &member.role)?;
    let claims = jwt::validate_session_token(&token)?;
    tracing::info!(role = %member.role, "Login succeeded");

    Ok(SignIn {
        response: LoginResponse::welcome(&member.role),
        session: Some((token, auth_user(&claims))),
    })
}

/// Resolve a dashboard slug and check that `role` may open it.
pub fn department_access(role: &str, slug: &str) -> Result<DepartmentAccess, AppError> {
    let department = Department::from_slug(slug)
        .ok_or_else(|| AppError::not_found(format!("Unknown department '{slug}'")))?;

    let policy = access_policy();
    if !policy.can_access(role, department) {
        tracing::warn!(role, department = %department, "Department access denied");
        return Err(AppError::forbidden(policy.restriction_message(Some(role))));
    }

    Ok(DepartmentAccess {
        department,
        role: role.to_string(),
    })
}
