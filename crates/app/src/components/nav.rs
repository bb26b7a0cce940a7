use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{ClickOutcome, NavigationEntry};

fn push_href(href: &str) {
    match href.parse::<Route>() {
        Ok(route) => {
            navigator().push(route);
        }
        Err(_) => tracing::warn!(%href, "Navigation link does not match a route"),
    }
}

/// One department button in the header navigation, with its dropdown.
///
/// A restricted entry keeps its markup but hides the dropdown, carries the
/// restriction tooltip and reports clicks through `on_blocked` instead of
/// navigating.
#[component]
pub fn NavDropdown(entry: NavigationEntry, on_blocked: EventHandler<String>) -> Element {
    let restricted = entry.is_restricted();
    let class = if restricted { "dropdown restricted" } else { "dropdown" };
    let menu_style = if entry.state.submenu_hidden { "display: none" } else { "" };
    let title = entry.state.tooltip.clone().unwrap_or_default();
    let outcome = entry.click();

    rsx! {
        li { class: class,
            a {
                class: "dropdown-toggle",
                href: "{entry.href}",
                title: "{title}",
                "aria-disabled": if restricted { "true" } else { "false" },
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    match &outcome {
                        ClickOutcome::Navigate(href) => push_href(href),
                        ClickOutcome::Blocked(message) => on_blocked.call(message.clone()),
                    }
                },
                "{entry.label}"
            }
            ul { class: "dropdown-menu", style: menu_style,
                for link in entry.visible_links().iter().cloned() {
                    NavSubLink { key: "{link.href}", label: link.label, href: link.href }
                }
            }
        }
    }
}

#[component]
fn NavSubLink(label: String, href: String) -> Element {
    let target = href.clone();
    rsx! {
        li {
            a {
                href: "{href}",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    push_href(&target);
                },
                "{label}"
            }
        }
    }
}

/// The single advisory overlay. Shown while `message` is set.
#[component]
pub fn AccessMessage(message: Option<String>) -> Element {
    let class = if message.is_some() {
        "access-message show error"
    } else {
        "access-message"
    };
    rsx! {
        div { id: "accessMessage", class: class, role: "alert",
            if let Some(message) = message {
                "{message}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{clinic_navigation, AccessPolicy, NavigationFilter};

    fn render_entries(role: &str) -> String {
        let policy = AccessPolicy::standard();
        let mut entries = clinic_navigation();
        NavigationFilter::new(&policy).apply(Some(role), &mut entries);
        dioxus_ssr::render_element(rsx! {
            ul {
                for entry in entries {
                    NavDropdown { entry: entry, on_blocked: move |_| {} }
                }
            }
        })
    }

    #[test]
    fn restricted_entries_render_hidden_menus() {
        let html = render_entries("lab");
        assert_eq!(html.matches("dropdown restricted").count(), 7, "{html}");
        assert_eq!(html.matches(r#"title="Access Restricted""#).count(), 7);
        assert_eq!(html.matches("display: none").count(), 7);
    }

    #[test]
    fn unrestricted_role_renders_every_submenu() {
        let html = render_entries("Admin");
        assert!(!html.contains("restricted"));
        assert!(html.contains("/departments/customer-care?modal=modalNewPatient"));
    }

    #[test]
    fn blocked_click_raises_one_advisory_until_expiry() {
        let policy = AccessPolicy::standard();
        let mut entries = clinic_navigation();
        NavigationFilter::new(&policy).apply(Some("pharmacy"), &mut entries);
        let doctor = entries.iter().find(|e| e.label == "Doctor").unwrap();

        let ClickOutcome::Blocked(message) = doctor.click() else {
            panic!("restricted entry navigated");
        };
        let mut advisory = crate::advisory::Advisory::default();
        let first = advisory.raise(message.clone());
        let second = advisory.raise(message.clone());

        let html = dioxus_ssr::render_element(rsx! {
            AccessMessage { message: advisory.message().map(str::to_string) }
        });
        assert_eq!(html.matches(r#"id="accessMessage""#).count(), 1);
        assert_eq!(html.matches("you can only access your nursing dashboard").count(), 1);

        assert!(!advisory.expire(first));
        assert!(advisory.is_showing());
        assert!(advisory.expire(second));
        assert!(!advisory.is_showing());
    }

    #[test]
    fn access_message_shows_only_with_text() {
        let hidden = dioxus_ssr::render_element(rsx! { AccessMessage { message: None } });
        assert!(!hidden.contains("show"));
        let shown = dioxus_ssr::render_element(rsx! {
            AccessMessage { message: Some("Access restricted".to_string()) }
        });
        assert!(shown.contains("access-message show error"));
        assert!(shown.contains("Access restricted"));
    }
}
