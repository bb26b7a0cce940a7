//! Role-based department access.
//!
//! An [`AccessPolicy`] bundles the alias table, the unrestricted role set
//! and the allowed-department map. It is built once from configuration and
//! handed to whoever needs to decide access: the header navigation filter
//! on the client and the department guard on the server. Every decision is
//! a pure function of the policy and the role string.

use crate::config::AccessSettings;
use crate::department::Department;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Tooltip attached to a restricted navigation entry.
pub const RESTRICTED_TOOLTIP: &str = "Access Restricted";

/// How to treat a request whose role could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum MissingRolePolicy {
    /// Leave every navigation entry open.
    #[default]
    FailOpen,
    /// Restrict every navigation entry.
    FailClosed,
}

/// A role token after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CanonicalRole {
    Known(Department),
    /// Present but known to neither the alias table nor the department set.
    Unknown(String),
}

impl CanonicalRole {
    pub fn name(&self) -> &str {
        match self {
            CanonicalRole::Known(dept) => dept.name(),
            CanonicalRole::Unknown(token) => token,
        }
    }
}

/// What a role is permitted to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Permission {
    /// No role was available. The policy's [`MissingRolePolicy`] decides.
    Undetermined,
    Unrestricted,
    Only(Department),
    /// The role maps to no department at all.
    Nothing,
}

/// Per-entry outcome of a navigation evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryDecision {
    Open,
    Restricted { message: String },
}

impl EntryDecision {
    pub fn is_open(&self) -> bool {
        matches!(self, EntryDecision::Open)
    }
}

/// Immutable access tables plus the missing-role policy.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessPolicy {
    aliases: HashMap<String, Department>,
    unrestricted: HashSet<String>,
    allowed: HashMap<Department, Department>,
    missing_role: MissingRolePolicy,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl AccessPolicy {
    /// The clinic's stock tables.
    pub fn standard() -> Self {
        let aliases = [
            ("customer", Department::CustomerCare),
            ("customer care", Department::CustomerCare),
            ("doctor", Department::Doctor),
            ("nurse", Department::Nursing),
            ("nursing", Department::Nursing),
            ("pharmacy", Department::Nursing),
            ("lab", Department::Laboratory),
            ("laboratory", Department::Laboratory),
            ("diagnostics", Department::Diagnostics),
            ("inv", Department::Inventory),
            ("inventory", Department::Inventory),
            ("accounts", Department::Accounts),
            ("it", Department::It),
            ("hop", Department::Operations),
            ("operations", Department::Operations),
            ("admin", Department::Admin),
            ("staff", Department::CustomerCare),
        ]
        .into_iter()
        .map(|(token, dept)| (token.to_string(), dept))
        .collect();

        let unrestricted = ["admin", "operations", "doctor"]
            .into_iter()
            .map(str::to_string)
            .collect();

        let allowed = Department::NAVIGABLE
            .into_iter()
            .map(|dept| (dept, dept))
            .collect();

        Self {
            aliases,
            unrestricted,
            allowed,
            missing_role: MissingRolePolicy::FailOpen,
        }
    }

    /// Build a policy from configuration. Tables omitted from the settings
    /// keep their stock contents.
    pub fn from_settings(settings: &AccessSettings) -> Self {
        let mut policy = Self::standard();
        policy.missing_role = settings.missing_role;

        if let Some(aliases) = &settings.aliases {
            policy.aliases = aliases
                .iter()
                .map(|(token, dept)| (normalize_token(token), *dept))
                .filter(|(token, _)| !token.is_empty())
                .collect();
        }
        if let Some(unrestricted) = &settings.unrestricted {
            policy.unrestricted = unrestricted
                .iter()
                .map(|token| normalize_token(token))
                .filter(|token| !token.is_empty())
                .collect();
        }
        if let Some(allowed) = &settings.allowed {
            policy.allowed = allowed.iter().map(|(k, v)| (*k, *v)).collect();
        }
        policy
    }

    pub fn with_missing_role(mut self, missing_role: MissingRolePolicy) -> Self {
        self.missing_role = missing_role;
        self
    }

    pub fn missing_role(&self) -> MissingRolePolicy {
        self.missing_role
    }

    /// Trim, lower-case and resolve a raw role string.
    ///
    /// Returns `None` for an absent or blank role. Tokens outside the alias
    /// table fall back to themselves, which only helps when they already are
    /// a canonical department name.
    pub fn normalize(&self, raw_role: Option<&str>) -> Option<CanonicalRole> {
        let token = normalize_token(raw_role?);
        if token.is_empty() {
            return None;
        }
        let role = match self.aliases.get(&token) {
            Some(dept) => CanonicalRole::Known(*dept),
            None => match Department::from_name(&token) {
                Some(dept) => CanonicalRole::Known(dept),
                None => CanonicalRole::Unknown(token),
            },
        };
        Some(role)
    }

    /// Resolve a raw role into what it may open.
    pub fn permission(&self, raw_role: Option<&str>) -> Permission {
        let Some(role) = self.normalize(raw_role) else {
            return Permission::Undetermined;
        };
        if self.unrestricted.contains(role.name()) {
            return Permission::Unrestricted;
        }
        match role {
            CanonicalRole::Known(dept) => match self.allowed.get(&dept) {
                Some(permitted) => Permission::Only(*permitted),
                None => Permission::Nothing,
            },
            CanonicalRole::Unknown(_) => Permission::Nothing,
        }
    }

    /// Whether a navigation entry with `label` stays open under `permission`.
    pub fn permits_label(&self, permission: &Permission, label: &str) -> bool {
        match permission {
            Permission::Undetermined => self.missing_role == MissingRolePolicy::FailOpen,
            Permission::Unrestricted => true,
            Permission::Only(dept) => label.trim().eq_ignore_ascii_case(dept.name()),
            Permission::Nothing => false,
        }
    }

    /// Decide every navigation label for one role. Output order matches
    /// input order; duplicate labels are decided independently.
    pub fn evaluate<'a, I>(&self, raw_role: Option<&str>, labels: I) -> Vec<EntryDecision>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let permission = self.permission(raw_role);
        let message = self.restriction_message(raw_role);
        labels
            .into_iter()
            .map(|label| {
                if self.permits_label(&permission, label) {
                    EntryDecision::Open
                } else {
                    EntryDecision::Restricted {
                        message: message.clone(),
                    }
                }
            })
            .collect()
    }

    /// Advisory text shown when a restricted entry is clicked.
    pub fn restriction_message(&self, raw_role: Option<&str>) -> String {
        match self.normalize(raw_role) {
            Some(role) => restriction_message(role.name()),
            None => "Access restricted — your role could not be determined.".to_string(),
        }
    }

    /// Server-side department check. A missing role never passes here,
    /// whatever the navigation policy says.
    pub fn can_access(&self, raw_role: &str, department: Department) -> bool {
        match self.permission(Some(raw_role)) {
            Permission::Unrestricted => true,
            Permission::Only(permitted) => permitted == department,
            Permission::Undetermined | Permission::Nothing => false,
        }
    }

    /// Departments the role may open, in navigation order.
    pub fn accessible_departments(&self, raw_role: &str) -> Vec<Department> {
        match self.permission(Some(raw_role)) {
            Permission::Unrestricted => Department::NAVIGABLE.to_vec(),
            Permission::Only(dept) => vec![dept],
            Permission::Undetermined | Permission::Nothing => Vec::new(),
        }
    }

    /// The department a role lands on after login, if it has one.
    pub fn home_department(&self, raw_role: &str) -> Option<Department> {
        match self.normalize(Some(raw_role))? {
            CanonicalRole::Known(dept) => Some(
                self.allowed.get(&dept).copied().unwrap_or(dept),
            ),
            CanonicalRole::Unknown(_) => None,
        }
    }
}

/// Advisory text for a role that tried to leave its own department.
pub fn restriction_message(role: &str) -> String {
    format!("Access restricted — you can only access your {role} dashboard.")
}

fn normalize_token(raw: &str) -> String {
    raw.trim().to_lowercase()
}
