use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical clinic departments.
///
/// This is the closed set every role alias resolves into. The serialized
/// form is the lower-case canonical name (`"customer care"`, `"it"`, ...),
/// which is also what navigation labels are compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Department {
    #[serde(rename = "customer care")]
    CustomerCare,
    #[serde(rename = "doctor")]
    Doctor,
    #[serde(rename = "nursing")]
    Nursing,
    #[serde(rename = "laboratory")]
    Laboratory,
    #[serde(rename = "diagnostics")]
    Diagnostics,
    #[serde(rename = "inventory")]
    Inventory,
    #[serde(rename = "accounts")]
    Accounts,
    #[serde(rename = "it")]
    It,
    #[serde(rename = "operations")]
    Operations,
    #[serde(rename = "admin")]
    Admin,
}

impl Department {
    pub const ALL: [Department; 10] = [
        Department::CustomerCare,
        Department::Doctor,
        Department::Nursing,
        Department::Laboratory,
        Department::Diagnostics,
        Department::Inventory,
        Department::Accounts,
        Department::It,
        Department::Operations,
        Department::Admin,
    ];

    /// Departments that appear in the header navigation and that an
    /// unrestricted role may open.
    pub const NAVIGABLE: [Department; 8] = [
        Department::CustomerCare,
        Department::Doctor,
        Department::Nursing,
        Department::Laboratory,
        Department::Diagnostics,
        Department::Inventory,
        Department::Accounts,
        Department::It,
    ];

    /// Lower-case canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Department::CustomerCare => "customer care",
            Department::Doctor => "doctor",
            Department::Nursing => "nursing",
            Department::Laboratory => "laboratory",
            Department::Diagnostics => "diagnostics",
            Department::Inventory => "inventory",
            Department::Accounts => "accounts",
            Department::It => "it",
            Department::Operations => "operations",
            Department::Admin => "admin",
        }
    }

    /// Display label used for navigation buttons and page titles.
    pub fn label(&self) -> &'static str {
        match self {
            Department::CustomerCare => "Customer Care",
            Department::Doctor => "Doctor",
            Department::Nursing => "Nursing",
            Department::Laboratory => "Laboratory",
            Department::Diagnostics => "Diagnostics",
            Department::Inventory => "Inventory",
            Department::Accounts => "Accounts",
            Department::It => "IT",
            Department::Operations => "Operations",
            Department::Admin => "Admin",
        }
    }

    /// URL path segment for the department dashboard.
    pub fn slug(&self) -> &'static str {
        match self {
            Department::CustomerCare => "customer-care",
            Department::Doctor => "doctor",
            Department::Nursing => "nursing",
            Department::Laboratory => "laboratory",
            Department::Diagnostics => "diagnostics",
            Department::Inventory => "inventory",
            Department::Accounts => "accounts",
            Department::It => "it",
            Department::Operations => "operations",
            Department::Admin => "admin",
        }
    }

    /// Parse a canonical name. Whitespace and case are ignored.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name))
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        let slug = slug.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.slug().eq_ignore_ascii_case(slug))
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_ignores_case_and_padding() {
        assert_eq!(
            Department::from_name("  Customer Care "),
            Some(Department::CustomerCare)
        );
        assert_eq!(Department::from_name("IT"), Some(Department::It));
        assert_eq!(Department::from_name("pharmacy"), None);
        assert_eq!(Department::from_name(""), None);
    }

    #[test]
    fn slugs_resolve_back() {
        for dept in Department::ALL {
            assert_eq!(Department::from_slug(dept.slug()), Some(dept));
        }
        assert_eq!(Department::from_slug("customer care"), None);
    }

    #[test]
    fn labels_match_names_case_insensitively() {
        for dept in Department::ALL {
            assert!(dept.label().eq_ignore_ascii_case(dept.name()));
        }
    }

    #[test]
    fn serializes_as_canonical_name() {
        let json = serde_json::to_string(&Department::CustomerCare).unwrap();
        assert_eq!(json, r#""customer care""#);
        let parsed: Department = serde_json::from_str(r#""it""#).unwrap();
        assert_eq!(parsed, Department::It);
    }

    #[test]
    fn navigable_excludes_oversight_departments() {
        assert!(!Department::NAVIGABLE.contains(&Department::Operations));
        assert!(!Department::NAVIGABLE.contains(&Department::Admin));
        assert_eq!(Department::NAVIGABLE.len(), 8);
    }
}
