use crate::advisory::{Advisory, ADVISORY_MS};
use crate::auth::{use_access_policy, use_accessible_departments, use_auth};
use crate::components::{AccessMessage, ChatWidget, HeaderClock, NavDropdown, NotificationPanel};
use crate::routes::Route;
use crate::timer::sleep_ms;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdChevronsLeft, LdLayoutDashboard, LdLogOut, LdMenu, LdMoon, LdSun,
};
use dioxus_free_icons::Icon;
use shared_types::{clinic_navigation, FeatureFlags, NavigationFilter};
use shared_ui::theme::{use_theme, ThemeMode};
use shared_ui::{toast_for, use_toast, TOAST_MS};

/// Portal chrome around every signed-in page: sidebar, header navigation
/// with the access filter applied, notification panel, chat and the
/// access advisory overlay.
#[component]
pub fn PortalLayout() -> Element {
    let route: Route = use_route();
    let flags: FeatureFlags = use_context();
    let policy = use_access_policy();
    let mut auth = use_auth();
    let mut theme = use_theme();
    let toast = use_toast();
    let departments = use_accessible_departments();

    let role = auth.role();
    let role_label = role.clone().unwrap_or_else(|| "Staff".to_string());

    // The filter runs once per mount against the role known at that point.
    let entries = use_hook(move || {
        let mut entries = clinic_navigation();
        let outcome = NavigationFilter::new(&policy).apply(role.as_deref(), &mut entries);
        tracing::debug!(
            mode = ?outcome.mode,
            open = outcome.open,
            restricted = outcome.restricted,
            "Navigation filter applied"
        );
        entries
    });

    let mut advisory = use_signal(Advisory::default);
    let raise_advisory = move |message: String| {
        let generation = advisory.write().raise(message);
        spawn(async move {
            sleep_ms(ADVISORY_MS).await;
            advisory.write().expire(generation);
        });
    };

    let mut collapsed = use_signal(|| false);
    let mut mobile_open = use_signal(|| false);
    let mut notifications_open = use_signal(|| false);

    let sidebar_class = match (collapsed(), mobile_open()) {
        (_, true) => "sidebar open",
        (true, false) => "sidebar collapsed",
        (false, false) => "sidebar",
    };
    let main_class = if collapsed() { "portal-main expanded" } else { "portal-main" };
    let is_dark = theme.mode() == ThemeMode::Dark;
    let active_slug = match &route {
        Route::DepartmentPage { slug, .. } => Some(slug.clone()),
        _ => None,
    };

    let handle_logout = move |_| async move {
        if let Err(e) = server::api::logout().await {
            tracing::warn!(error = %e, "Logout request failed");
        }
        auth.clear_auth();
        navigator().push(Route::Login {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "portal",
            aside { id: "sidebar", class: sidebar_class,
                div { class: "sidebar-header",
                    span { class: "sidebar-brand", "e-Clinic" }
                    button {
                        id: "sidebarToggle",
                        class: "sidebar-toggle",
                        r#type: "button",
                        aria_label: "Collapse sidebar",
                        onclick: move |_| collapsed.toggle(),
                        Icon::<LdChevronsLeft> { icon: LdChevronsLeft, width: 18, height: 18 }
                    }
                }
                p { class: "sidebar-role", "{role_label}" }
                nav { class: "sidebar-menu",
                    SidebarLink {
                        to: Route::Home {},
                        active: matches!(route, Route::Home {}),
                        on_navigate: move |_| mobile_open.set(false),
                        Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                        span { "Home" }
                    }
                    for dept in departments {
                        SidebarLink {
                            key: "{dept.slug()}",
                            to: Route::DepartmentPage { slug: dept.slug().to_string(), modal: String::new() },
                            active: active_slug.as_deref() == Some(dept.slug()),
                            on_navigate: move |_| mobile_open.set(false),
                            span { class: "sidebar-dot" }
                            span { "{dept.label()}" }
                        }
                    }
                }
                div { class: "sidebar-footer",
                    button {
                        class: "sidebar-link logout",
                        r#type: "button",
                        onclick: handle_logout,
                        Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                        span { "Logout" }
                    }
                }
            }

            div { id: "mainContent", class: main_class,
                header { class: "portal-header",
                    button {
                        id: "mobileMenuBtn",
                        class: "mobile-menu-btn",
                        r#type: "button",
                        aria_label: "Open menu",
                        onclick: move |_| mobile_open.toggle(),
                        Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                    }
                    nav { class: "main-nav",
                        ul {
                            for entry in entries {
                                NavDropdown {
                                    key: "{entry.label}",
                                    entry: entry.clone(),
                                    on_blocked: raise_advisory,
                                }
                            }
                        }
                    }
                    div { class: "header-actions",
                        HeaderClock {}
                        if flags.notifications {
                            button {
                                id: "notifBtn",
                                class: "icon-btn",
                                r#type: "button",
                                aria_label: "Notifications",
                                onclick: move |_| notifications_open.set(true),
                                Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
                            }
                        }
                        button {
                            id: "themeToggle",
                            class: "icon-btn",
                            r#type: "button",
                            aria_label: "Toggle theme",
                            onclick: move |_| {
                                let mode = theme.toggle();
                                toast.info(mode.toggle_message().to_string(), toast_for(TOAST_MS));
                            },
                            if is_dark {
                                Icon::<LdSun> { icon: LdSun, width: 18, height: 18 }
                            } else {
                                Icon::<LdMoon> { icon: LdMoon, width: 18, height: 18 }
                            }
                        }
                    }
                }

                main { class: "portal-content",
                    Outlet::<Route> {}
                }
            }

            AccessMessage { message: advisory.read().message().map(str::to_string) }

            if flags.notifications {
                NotificationPanel {
                    open: notifications_open(),
                    on_close: move |_| notifications_open.set(false),
                }
            }
            if flags.chat {
                ChatWidget {}
            }
        }
    }
}

#[component]
fn SidebarLink(to: Route, active: bool, on_navigate: EventHandler<()>, children: Element) -> Element {
    let class = if active { "sidebar-link active" } else { "sidebar-link" };
    rsx! {
        Link { to: to, class: "{class}", onclick: move |_| on_navigate.call(()), {children} }
    }
}
