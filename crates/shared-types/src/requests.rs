use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// Rejection text for any failed credential check.
pub const INVALID_CREDENTIALS: &str = "Invalid username or password.";

/// Login request: role, username and password, all required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Role is required"))
    )]
    pub role: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Username is required"))
    )]
    pub username: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

impl LoginRequest {
    /// Strip surrounding whitespace from role and username. The password is
    /// compared exactly and left alone.
    pub fn trimmed(self) -> Self {
        Self {
            role: self.role.trim().to_string(),
            username: self.username.trim().to_string(),
            password: self.password,
        }
    }

    /// True when any field is blank after trimming.
    pub fn has_blank_field(&self) -> bool {
        self.role.trim().is_empty() || self.username.trim().is_empty() || self.password.is_empty()
    }
}

/// Login outcome as the login form consumes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
}

impl LoginResponse {
    pub fn welcome(role: &str) -> Self {
        Self {
            success: true,
            message: format!("Welcome {role}!"),
        }
    }

    pub fn rejected() -> Self {
        Self {
            success: false,
            message: INVALID_CREDENTIALS.to_string(),
        }
    }
}

/// Generic message response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_keeps_password_exact() {
        let req = LoginRequest {
            role: "  Doctor ".into(),
            username: " house ".into(),
            password: " secret ".into(),
        }
        .trimmed();
        assert_eq!(req.role, "Doctor");
        assert_eq!(req.username, "house");
        assert_eq!(req.password, " secret ");
    }

    #[test]
    fn blank_fields_detected() {
        let req = LoginRequest {
            role: "Lab".into(),
            username: "   ".into(),
            password: "x".into(),
        };
        assert!(req.has_blank_field());
    }

    #[test]
    fn welcome_message_names_role() {
        let resp = LoginResponse::welcome("Pharmacy");
        assert!(resp.success);
        assert_eq!(resp.message, "Welcome Pharmacy!");
        assert_eq!(LoginResponse::rejected().message, INVALID_CREDENTIALS);
    }

    #[test]
    fn login_request_reads_form_json() {
        let req: LoginRequest = serde_json::from_str(
            r#"{"role":"Lab","username":"tech","password":"pw"}"#,
        )
        .unwrap();
        assert_eq!(req.role, "Lab");
    }
}
