use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdX};
use dioxus_free_icons::Icon;

/// Fixed notifications shown in the slide panel.
pub const NOTIFICATIONS: [&str; 4] = [
    "Dr. Ade updated patient diagnosis.",
    "Pharmacy restocked essential drugs.",
    "Staff report uploaded successfully.",
    "Meeting with Head of Operations at 2:00PM.",
];

/// Slide-in notification panel with a blurred backdrop.
#[component]
pub fn NotificationPanel(open: bool, on_close: EventHandler<()>) -> Element {
    let panel_class = if open { "notif-slide-panel show" } else { "notif-slide-panel" };
    let overlay_class = if open { "notif-overlay active" } else { "notif-overlay" };

    rsx! {
        div { class: overlay_class, onclick: move |_| on_close.call(()) }
        aside { class: panel_class, "aria-hidden": if open { "false" } else { "true" },
            div { class: "notif-header",
                h2 {
                    Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
                    " Notifications"
                }
                button {
                    id: "closeNotif",
                    r#type: "button",
                    aria_label: "Close notifications",
                    onclick: move |_| on_close.call(()),
                    Icon::<LdX> { icon: LdX, width: 18, height: 18 }
                }
            }
            div { class: "notif-body",
                for item in NOTIFICATIONS {
                    div { class: "notif-item", key: "{item}", span { "{item}" } }
                }
            }
            div { class: "notif-footer",
                button {
                    class: "view-all",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "View All Notifications"
                }
            }
        }
    }
}
