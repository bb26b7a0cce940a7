use crate::department::Department;
use serde::{Deserialize, Serialize};

/// A staff role offered on the login form, with the environment key its
/// credentials are seeded from (`{KEY}_USER` / `{KEY}_PASS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaffRole {
    pub name: &'static str,
    pub env_key: &'static str,
}

/// Every staff role the portal knows, in login-form order.
pub const STAFF_ROLES: &[StaffRole] = &[
    StaffRole { name: "Admin", env_key: "ADMIN" },
    StaffRole { name: "HOP", env_key: "HOP" },
    StaffRole { name: "Doctor", env_key: "DOCTOR" },
    StaffRole { name: "Pharmacy", env_key: "PHARMACY" },
    StaffRole { name: "Inventory", env_key: "INVENTORY" },
    StaffRole { name: "Lab", env_key: "LAB" },
    StaffRole { name: "Diagnostics", env_key: "DIAGNOSTICS" },
    StaffRole { name: "Accounts", env_key: "ACCOUNTS" },
    StaffRole { name: "Nursing", env_key: "NURSING" },
    StaffRole { name: "Customer Care", env_key: "CUSTOMER" },
    StaffRole { name: "Staff", env_key: "STAFF" },
];

impl StaffRole {
    /// Look up a role by name, ignoring case and surrounding whitespace.
    pub fn find(name: &str) -> Option<&'static StaffRole> {
        let name = name.trim();
        STAFF_ROLES.iter().find(|r| r.name.eq_ignore_ascii_case(name))
    }
}

/// Signed-in staff member (safe to send to client).
///
/// `role` is the role string exactly as the roster holds it; it is the
/// value shown in the sidebar and fed to the navigation filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuthUser {
    pub username: String,
    pub role: String,
    /// Landing department for the role, if it has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    /// Departments this session may open.
    #[serde(default)]
    pub accessible: Vec<Department>,
}

/// Granted access to a department dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DepartmentAccess {
    pub department: Department,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_ignores_case() {
        assert_eq!(StaffRole::find(" customer care").map(|r| r.env_key), Some("CUSTOMER"));
        assert_eq!(StaffRole::find("hop").map(|r| r.name), Some("HOP"));
        assert!(StaffRole::find("janitor").is_none());
    }

    #[test]
    fn env_keys_are_unique() {
        let mut keys: Vec<_> = STAFF_ROLES.iter().map(|r| r.env_key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), STAFF_ROLES.len());
    }

    #[test]
    fn auth_user_omits_missing_department() {
        let user = AuthUser {
            username: "visitor".into(),
            role: "Visitor".into(),
            department: None,
            accessible: vec![],
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("department").is_none());
        assert_eq!(json["accessible"], serde_json::json!([]));
    }
}
