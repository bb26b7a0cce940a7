use crate::access::MissingRolePolicy;
use crate::department::Department;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Feature flags controlling which optional portal surfaces are active.
///
/// Every field defaults to `false` so that a missing or incomplete config
/// file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    #[serde(default)]
    pub telemetry: bool,
    /// Floating staff chat on department pages.
    #[serde(default)]
    pub chat: bool,
    /// Notification bell and slide panel in the portal header.
    #[serde(default)]
    pub notifications: bool,
}

/// The `[access]` section of `config.toml`.
///
/// Omitted tables fall back to the clinic's stock tables when the policy
/// is built.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AccessSettings {
    #[serde(default)]
    pub missing_role: MissingRolePolicy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<BTreeMap<String, Department>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unrestricted: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<BTreeMap<Department, Department>>,
}

/// Top-level config file structure matching `config.toml`.
///
/// The same value is handed to clients so both sides build the access
/// policy from one source.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PortalConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub access: AccessSettings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::AccessPolicy;

    #[test]
    fn empty_toml_defaults_everything() {
        let config: PortalConfig = toml::from_str("").unwrap();
        assert_eq!(config, PortalConfig::default());
        assert_eq!(config.access.missing_role, MissingRolePolicy::FailOpen);
    }

    #[test]
    fn partial_features_default_missing_fields() {
        let config: PortalConfig = toml::from_str(
            r#"
            [features]
            chat = true
            "#,
        )
        .unwrap();
        assert!(config.features.chat);
        assert!(!config.features.notifications);
        assert!(!config.features.telemetry);
    }

    #[test]
    fn access_section_parses_tables() {
        let config: PortalConfig = toml::from_str(
            r#"
            [access]
            missing_role = "fail-closed"
            unrestricted = ["admin"]

            [access.aliases]
            pharmacy = "inventory"
            "front desk" = "customer care"

            [access.allowed]
            inventory = "inventory"
            "customer care" = "customer care"
            "#,
        )
        .unwrap();

        let access = &config.access;
        assert_eq!(access.missing_role, MissingRolePolicy::FailClosed);
        assert_eq!(access.unrestricted.as_deref(), Some(&["admin".to_string()][..]));
        let aliases = access.aliases.as_ref().unwrap();
        assert_eq!(aliases["front desk"], Department::CustomerCare);
        let allowed = access.allowed.as_ref().unwrap();
        assert_eq!(allowed[&Department::Inventory], Department::Inventory);

        let policy = AccessPolicy::from_settings(access);
        assert!(policy.can_access("front desk", Department::CustomerCare));
        assert!(!policy.can_access("doctor", Department::CustomerCare));
    }

    #[test]
    fn unknown_department_is_rejected() {
        let result: Result<PortalConfig, _> = toml::from_str(
            r#"
            [access.aliases]
            porter = "surgery"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn json_roundtrip_keeps_access_settings() {
        let mut config = PortalConfig::default();
        config.access.missing_role = MissingRolePolicy::FailClosed;
        config.features.notifications = true;
        let json = serde_json::to_string(&config).unwrap();
        let parsed: PortalConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
