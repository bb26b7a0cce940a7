use crate::format_helpers::readable_modal_name;
use crate::stats::{roll_metric, DEPARTMENT_METRICS, METRIC_DELAY_MS, PLACEHOLDER};
use crate::timer::sleep_ms;
use dioxus::prelude::*;
use shared_types::Department;
use shared_ui::{
    toast_for, use_toast, Card, CardContent, CardHeader, CardTitle, PageHeader, StatCard, TOAST_MS,
};

const WELCOME_DELAY_MS: u64 = 800;
const WELCOME: &str = "Welcome to your Department Dashboard!";

/// Toast for a `?modal=` section this dashboard has no modal for.
pub(super) fn coming_soon(modal_id: &str) -> String {
    format!("Coming soon: {}", readable_modal_name(modal_id))
}

/// Dashboard shared by departments without a dedicated page.
#[component]
pub fn GenericDashboard(department: Department, modal: Option<String>) -> Element {
    let toast = use_toast();
    let mut metrics = use_signal(|| [None::<u32>; DEPARTMENT_METRICS.len()]);

    use_effect(move || {
        spawn(async move {
            sleep_ms(METRIC_DELAY_MS).await;
            let mut rng = rand::thread_rng();
            let mut values = metrics.write();
            for value in values.iter_mut() {
                *value = Some(roll_metric(&mut rng));
            }
        });
    });

    let pending_modal = modal.clone();
    use_effect(move || {
        let pending = pending_modal.clone();
        spawn(async move {
            sleep_ms(WELCOME_DELAY_MS).await;
            toast.success(WELCOME.to_string(), toast_for(TOAST_MS));
            if let Some(id) = pending {
                toast.info(coming_soon(&id), toast_for(TOAST_MS));
            }
        });
    });

    let values = metrics();

    rsx! {
        div { class: "dept-page",
            PageHeader {
                title: format!("{} Dashboard", department.label()),
                subtitle: "Live overview for your department".to_string(),
            }

            div { class: "grid grid-stats",
                for ((id, label), value) in DEPARTMENT_METRICS.iter().zip(values) {
                    StatCard {
                        key: "{id}",
                        id: *id,
                        label: *label,
                        value: value.map(|v| v.to_string()).unwrap_or_else(|| PLACEHOLDER.to_string()),
                    }
                }
            }

            div { class: "grid grid-split",
                Card {
                    CardHeader { CardTitle { "Live Activity" } }
                    CardContent {
                        ul { id: "liveActivityFeed", class: "feed-list",
                            li { class: "muted", "Awaiting live activities..." }
                        }
                    }
                }
                Card {
                    CardHeader { CardTitle { "Queue" } }
                    CardContent {
                        ul { id: "ccQueueList", class: "feed-list",
                            li { class: "muted", "No patient in queue." }
                        }
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "Reports" } }
                CardContent {
                    div { id: "deptReportFeed",
                        p { class: "muted", "Reports will appear here after Supabase sync." }
                    }
                }
            }
        }
    }
}
