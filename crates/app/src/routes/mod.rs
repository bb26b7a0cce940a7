pub mod department;
pub mod home;
pub mod layout;
pub mod login;
pub mod not_found;

use crate::auth::use_auth;
use dioxus::prelude::*;

use department::DepartmentPage;
use home::Home;
use layout::PortalLayout;
use login::Login;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(PortalLayout)]
    #[route("/")]
    Home {},
    #[route("/departments/:slug?:modal")]
    DepartmentPage { slug: String, modal: String },
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout: redirects to /login when there is no session.
///
/// Suspends on the session lookup during SSR so the resolved user is
/// embedded in the HTML and available immediately on hydration.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();

    let resource = use_server_future(move || async move { server::api::get_current_user().await })?;

    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(Some(user))) => {
            if !auth.is_authenticated() {
                auth.set_user(user);
            }
            rsx! { Outlet::<Route> {} }
        }
        Some(Ok(None)) | Some(Err(_)) => {
            auth.clear_auth();
            navigator().push(Route::Login {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        None => {
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            }
        }
    }
}
