//! Staff credentials seeded from the environment.
//!
//! Every staff role on the login form has a pair of variables,
//! `{KEY}_USER` and `{KEY}_PASS`. Roles missing either variable are left
//! out. Passwords are argon2-hashed at load; only the hash is kept.

use shared_types::{StaffRole, STAFF_ROLES};
use std::sync::{Arc, OnceLock};

use crate::auth::password;

/// One seeded staff account.
#[derive(Debug, Clone)]
pub struct StaffMember {
    pub username: String,
    pub role: String,
    password_hash: String,
}

#[derive(Debug, Clone, Default)]
pub struct StaffRoster {
    members: Vec<StaffMember>,
}

impl StaffRoster {
    /// Load the roster from `{KEY}_USER` / `{KEY}_PASS` variables.
    pub fn from_env() -> Self {
        // Load .env file if present (ignored where env vars are set directly).
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut roster = Self::default();
        for StaffRole { name, env_key } in STAFF_ROLES {
            let username = lookup(&format!("{env_key}_USER")).filter(|v| !v.trim().is_empty());
            let secret = lookup(&format!("{env_key}_PASS")).filter(|v| !v.is_empty());
            match (username, secret) {
                (Some(username), Some(secret)) => roster.add(name, &username, &secret),
                _ => tracing::debug!(role = name, "No credentials configured"),
            }
        }
        tracing::info!(accounts = roster.len(), "Staff roster loaded");
        roster
    }

    /// Build a roster from `(role, username, password)` triples.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str, &'a str)>) -> Self {
        let mut roster = Self::default();
        for (role, username, secret) in entries {
            roster.add(role, username, secret);
        }
        roster
    }

    fn add(&mut self, role: &str, username: &str, secret: &str) {
        // Known roles take their login-form spelling.
        let role = StaffRole::find(role).map_or(role.trim(), |r| r.name);
        match password::hash_password(secret) {
            Ok(password_hash) => self.members.push(StaffMember {
                username: username.trim().to_string(),
                role: role.to_string(),
                password_hash,
            }),
            Err(e) => tracing::error!(role, %e, "Could not hash staff password"),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Roles with an account, in roster order.
    pub fn roles(&self) -> Vec<String> {
        self.members.iter().map(|m| m.role.clone()).collect()
    }

    /// Check a login attempt. Username and role match case-insensitively
    /// after trimming; the password must match exactly.
    pub fn verify(&self, role: &str, username: &str, secret: &str) -> Option<&StaffMember> {
        let role = role.trim();
        let username = username.trim();
        let candidate = self.members.iter().find(|m| {
            m.role.eq_ignore_ascii_case(role) && m.username.eq_ignore_ascii_case(username)
        });

        match candidate {
            Some(member) => match password::verify_password(secret, &member.password_hash) {
                Ok(true) => Some(member),
                Ok(false) => None,
                Err(e) => {
                    tracing::error!(%e, "Stored password hash is unreadable");
                    None
                }
            },
            None => {
                password::verify_against_dummy(secret);
                None
            }
        }
    }
}

static ROSTER: OnceLock<Arc<StaffRoster>> = OnceLock::new();

/// The process-wide roster, loaded from the environment on first use.
pub fn roster() -> Arc<StaffRoster> {
    ROSTER
        .get_or_init(|| Arc::new(StaffRoster::from_env()))
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn sample() -> StaffRoster {
        StaffRoster::from_entries([
            ("Pharmacy", "pharm01", "Pill$2025"),
            ("Customer Care", "frontdesk", "welcome"),
        ])
    }

    #[test]
    fn verifies_case_insensitive_username_and_role() {
        let roster = sample();
        let member = roster.verify("pharmacy", " PHARM01 ", "Pill$2025").unwrap();
        assert_eq!(member.role, "Pharmacy");
        assert_eq!(member.username, "pharm01");
    }

    #[test]
    fn password_is_exact() {
        let roster = sample();
        assert!(roster.verify("Pharmacy", "pharm01", "pill$2025").is_none());
    }

    #[test]
    fn role_must_match_account() {
        let roster = sample();
        assert!(roster.verify("Doctor", "pharm01", "Pill$2025").is_none());
        assert!(roster.verify("customer care", "frontdesk", "welcome").is_some());
    }

    #[test]
    fn env_lookup_skips_incomplete_roles() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("DOCTOR_USER", "house"),
            ("DOCTOR_PASS", "vicodin"),
            ("LAB_USER", "tech"),
            ("CUSTOMER_USER", "desk"),
            ("CUSTOMER_PASS", "hello"),
        ]);
        let roster = StaffRoster::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(roster.len(), 2);
        assert!(roster.verify("Customer Care", "desk", "hello").is_some());
        assert!(roster.verify("Lab", "tech", "").is_none());
    }

    #[test]
    fn known_roles_take_form_spelling() {
        let roster = StaffRoster::from_entries([("customer care", "desk", "hi"), (" Porter ", "p", "x")]);
        assert_eq!(roster.roles(), vec!["Customer Care".to_string(), "Porter".to_string()]);
    }
}
