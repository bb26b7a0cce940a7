use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            shared_ui::Card { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message",
                    code { "{path}" }
                    " is not part of the e-Clinic portal."
                }
                Link { to: Route::Home {}, class: "not-found-link", "Back to your dashboard" }
            }
        }
    }
}
