mod customer_care;
mod doctor;
mod generic;
mod new_patient;

use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{AppError, AppErrorKind, Department};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardFooter, CardHeader, CardTitle, Skeleton,
    SkeletonText,
};

use customer_care::CustomerCareDashboard;
use doctor::DoctorDashboard;
use generic::GenericDashboard;

/// `/departments/:slug?modal=`. Remounts the dashboard whenever the slug or
/// the requested section changes. An empty `modal` means no section.
#[component]
pub fn DepartmentPage(slug: String, modal: String) -> Element {
    let view_key = format!("{slug}?{modal}");
    let modal = Some(modal).filter(|m| !m.trim().is_empty());
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./department.css") }
        DepartmentView { key: "{view_key}", slug: slug.clone(), modal }
    }
}

/// Asks the server whether this session may open the department, then
/// renders the matching dashboard or the restriction notice.
#[component]
fn DepartmentView(slug: String, modal: Option<String>) -> Element {
    let mut auth = use_auth();
    let requested = slug.clone();
    let access = use_server_future(move || {
        let slug = requested.clone();
        async move { server::api::open_department(slug).await }
    })?;

    let result = access.read().as_ref().cloned();

    match result {
        None => rsx! {
            div { class: "dept-page",
                div { class: "grid grid-stats",
                    for i in 0..4 {
                        Skeleton { key: "{i}", class: "dept-skeleton" }
                    }
                }
                SkeletonText { lines: 4 }
            }
        },
        Some(Ok(granted)) => match granted.department {
            Department::Doctor => rsx! { DoctorDashboard { modal } },
            Department::CustomerCare => rsx! { CustomerCareDashboard { modal } },
            department => rsx! { GenericDashboard { department, modal } },
        },
        Some(Err(e)) => {
            let err = AppError::from_server_error(&e.to_string());
            match err {
                Some(AppError { kind: AppErrorKind::Unauthorized, .. }) => {
                    auth.clear_auth();
                    navigator().push(Route::Login {});
                    rsx! {}
                }
                Some(AppError { kind: AppErrorKind::Forbidden, message, .. }) => rsx! {
                    DepartmentNotice { title: "Access Restricted", message }
                },
                Some(AppError { kind: AppErrorKind::NotFound, .. }) => rsx! {
                    DepartmentNotice {
                        title: "Unknown Department",
                        message: format!("There is no department dashboard at \"{slug}\"."),
                    }
                },
                _ => rsx! {
                    DepartmentNotice {
                        title: "Something went wrong",
                        message: AppError::friendly_message(&e.to_string()),
                    }
                },
            }
        }
    }
}

#[component]
fn DepartmentNotice(title: String, message: String) -> Element {
    rsx! {
        Card { class: "dept-notice",
            CardHeader {
                CardTitle { "{title}" }
            }
            CardContent {
                p { class: "dept-notice-message", "{message}" }
            }
            CardFooter {
                Link { to: Route::Home {},
                    Button { variant: ButtonVariant::Secondary, "Back to Home" }
                }
            }
        }
    }
}
