use crate::access::{
    AccessPolicy, EntryDecision, MissingRolePolicy, Permission, RESTRICTED_TOOLTIP,
};
use crate::department::Department;
use serde::{Deserialize, Serialize};

/// A link inside a navigation entry's dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Restriction marks applied to an entry. Marks are only ever added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestrictionState {
    pub restricted: bool,
    pub submenu_hidden: bool,
    pub tooltip: Option<String>,
    /// Message raised instead of navigating when the entry is clicked.
    pub advisory: Option<String>,
}

/// One department button in the header navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub label: String,
    pub href: String,
    pub links: Vec<NavLink>,
    #[serde(default)]
    pub state: RestrictionState,
}

/// Result of clicking an entry's top-level button.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    Navigate(String),
    /// Default navigation is suppressed; show the message instead.
    Blocked(String),
}

impl NavigationEntry {
    pub fn new(label: impl Into<String>, href: impl Into<String>, links: Vec<NavLink>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            links,
            state: RestrictionState::default(),
        }
    }

    pub fn is_restricted(&self) -> bool {
        self.state.restricted
    }

    /// Submenu links that are still reachable.
    pub fn visible_links(&self) -> &[NavLink] {
        if self.state.submenu_hidden {
            &[]
        } else {
            &self.links[..]
        }
    }

    pub fn click(&self) -> ClickOutcome {
        match (self.state.restricted, &self.state.advisory) {
            (true, Some(message)) => ClickOutcome::Blocked(message.clone()),
            (true, None) => ClickOutcome::Blocked(RESTRICTED_TOOLTIP.to_string()),
            (false, _) => ClickOutcome::Navigate(self.href.clone()),
        }
    }

    fn restrict(&mut self, message: String) {
        self.state.restricted = true;
        self.state.submenu_hidden = true;
        self.state.tooltip = Some(RESTRICTED_TOOLTIP.to_string());
        if self.state.advisory.is_none() {
            self.state.advisory = Some(message);
        }
    }
}

/// Header navigation for the clinic portal, one entry per navigable
/// department.
pub fn clinic_navigation() -> Vec<NavigationEntry> {
    Department::NAVIGABLE
        .into_iter()
        .map(|dept| {
            let base = format!("/departments/{}", dept.slug());
            let mut links = vec![NavLink::new("Dashboard", base.clone())];
            links.extend(
                department_sections(dept)
                    .iter()
                    .map(|(label, modal)| NavLink::new(*label, format!("{base}?modal={modal}"))),
            );
            NavigationEntry::new(dept.label(), base, links)
        })
        .collect()
}

fn department_sections(dept: Department) -> &'static [(&'static str, &'static str)] {
    match dept {
        Department::CustomerCare => &[
            ("New Patient", "modalNewPatient"),
            ("Patient Queue", "modalQueue"),
            ("Appointments", "modalAppointments"),
        ],
        Department::Doctor => &[
            ("Consultations", "modalConsultations"),
            ("Prescriptions", "modalPrescriptions"),
        ],
        Department::Nursing => &[("Vitals", "modalVitals"), ("Dispensary", "modalDispensary")],
        Department::Laboratory => &[("Test Requests", "modalTestRequests"), ("Results", "modalResults")],
        Department::Diagnostics => &[("Imaging", "modalImaging"), ("Referrals", "modalReferrals")],
        Department::Inventory => &[("Stock", "modalStock"), ("Orders", "modalOrders")],
        Department::Accounts => &[("Billing", "modalBilling"), ("Receipts", "modalReceipts")],
        Department::It => &[("Support Tickets", "modalTickets"), ("Systems", "modalSystems")],
        Department::Operations | Department::Admin => &[],
    }
}

/// How the filter treated the role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterMode {
    /// No role was readable and the policy left navigation open.
    MissingRoleOpen,
    /// No role was readable and the policy closed navigation.
    MissingRoleClosed,
    Unrestricted,
    Department(Department),
    /// The role maps to no department.
    Unmapped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub mode: FilterMode,
    pub open: usize,
    pub restricted: usize,
}

/// Applies an [`AccessPolicy`] to rendered navigation entries.
///
/// `apply` can run any number of times: it only adds restriction marks, so
/// a repeated pass with the same role leaves the entries as the first pass
/// did.
#[derive(Debug, Clone, Copy)]
pub struct NavigationFilter<'p> {
    policy: &'p AccessPolicy,
}

impl<'p> NavigationFilter<'p> {
    pub fn new(policy: &'p AccessPolicy) -> Self {
        Self { policy }
    }

    pub fn apply(&self, raw_role: Option<&str>, entries: &mut [NavigationEntry]) -> FilterOutcome {
        let mode = match self.policy.permission(raw_role) {
            Permission::Undetermined => match self.policy.missing_role() {
                MissingRolePolicy::FailOpen => FilterMode::MissingRoleOpen,
                MissingRolePolicy::FailClosed => FilterMode::MissingRoleClosed,
            },
            Permission::Unrestricted => FilterMode::Unrestricted,
            Permission::Only(dept) => FilterMode::Department(dept),
            Permission::Nothing => FilterMode::Unmapped,
        };

        let decisions = self
            .policy
            .evaluate(raw_role, entries.iter().map(|e| e.label.as_str()));

        for (entry, decision) in entries.iter_mut().zip(decisions) {
            if let EntryDecision::Restricted { message } = decision {
                entry.restrict(message);
            }
        }

        let restricted = entries.iter().filter(|e| e.is_restricted()).count();
        FilterOutcome {
            mode,
            open: entries.len() - restricted,
            restricted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(label: &str) -> NavigationEntry {
        NavigationEntry::new(
            label,
            format!("/{}", label.to_lowercase()),
            vec![NavLink::new("Dashboard", "/x")],
        )
    }

    #[test]
    fn pharmacy_keeps_nursing_and_blocks_doctor() {
        let policy = AccessPolicy::standard();
        let mut entries = vec![entry("nursing"), entry("doctor")];
        let outcome = NavigationFilter::new(&policy).apply(Some("pharmacy"), &mut entries);

        assert_eq!(outcome.mode, FilterMode::Department(Department::Nursing));
        assert_eq!((outcome.open, outcome.restricted), (1, 1));

        let nursing = &entries[0];
        assert!(!nursing.is_restricted());
        assert_eq!(nursing.visible_links().len(), 1);
        assert_eq!(nursing.click(), ClickOutcome::Navigate("/nursing".to_string()));

        let doctor = &entries[1];
        assert!(doctor.is_restricted());
        assert!(doctor.state.submenu_hidden);
        assert!(doctor.visible_links().is_empty());
        assert_eq!(doctor.state.tooltip.as_deref(), Some("Access Restricted"));
        assert_eq!(
            doctor.click(),
            ClickOutcome::Blocked(
                "Access restricted — you can only access your nursing dashboard.".to_string()
            )
        );
    }

    #[test]
    fn doctor_role_is_unrestricted() {
        let policy = AccessPolicy::standard();
        let mut entries = clinic_navigation();
        let outcome = NavigationFilter::new(&policy).apply(Some("Doctor"), &mut entries);
        assert_eq!(outcome.mode, FilterMode::Unrestricted);
        assert_eq!(outcome.restricted, 0);
        assert!(entries.iter().all(|e| e.state == RestrictionState::default()));
    }

    #[test]
    fn empty_role_is_a_no_op() {
        let policy = AccessPolicy::standard();
        let mut entries = clinic_navigation();
        let before = entries.clone();
        let outcome = NavigationFilter::new(&policy).apply(Some(""), &mut entries);
        assert_eq!(outcome.mode, FilterMode::MissingRoleOpen);
        assert_eq!(entries, before);
    }

    #[test]
    fn fail_closed_restricts_all_entries() {
        let policy = AccessPolicy::standard().with_missing_role(MissingRolePolicy::FailClosed);
        let mut entries = clinic_navigation();
        let outcome = NavigationFilter::new(&policy).apply(None, &mut entries);
        assert_eq!(outcome.mode, FilterMode::MissingRoleClosed);
        assert_eq!(outcome.open, 0);
        assert_eq!(outcome.restricted, entries.len());
    }

    #[test]
    fn unmapped_role_restricts_every_entry() {
        let policy = AccessPolicy::standard();
        let mut entries = clinic_navigation();
        let outcome = NavigationFilter::new(&policy).apply(Some("porter"), &mut entries);
        assert_eq!(outcome.mode, FilterMode::Unmapped);
        assert_eq!(outcome.open, 0);
    }

    #[test]
    fn at_most_one_entry_stays_open_for_department_roles() {
        let policy = AccessPolicy::standard();
        for role in ["nurse", "lab", "inv", "accounts", "it", "customer", "diagnostics"] {
            let mut entries = clinic_navigation();
            let outcome = NavigationFilter::new(&policy).apply(Some(role), &mut entries);
            assert_eq!(outcome.open, 1, "{role}");
        }
    }

    #[test]
    fn second_pass_keeps_terminal_state() {
        let policy = AccessPolicy::standard();
        let filter = NavigationFilter::new(&policy);
        let mut entries = clinic_navigation();

        let first = filter.apply(Some("lab"), &mut entries);
        let after_first = entries.clone();
        let second = filter.apply(Some("lab"), &mut entries);

        assert_eq!(first, second);
        assert_eq!(entries, after_first);
    }

    #[test]
    fn clinic_navigation_links_point_at_department_routes() {
        let entries = clinic_navigation();
        assert_eq!(entries.len(), Department::NAVIGABLE.len());
        let care = &entries[0];
        assert_eq!(care.label, "Customer Care");
        assert_eq!(care.href, "/departments/customer-care");
        assert!(care
            .links
            .iter()
            .any(|l| l.href == "/departments/customer-care?modal=modalNewPatient"));
    }
}
