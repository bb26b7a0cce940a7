use super::generic::coming_soon;
use super::new_patient::{NewPatientModal, MODAL_ID};
use crate::feed::{Activity, Feed};
use crate::format_helpers::feed_time;
use crate::stats::CareStats;
use crate::timer::sleep_ms;
use chrono::Local;
use dioxus::prelude::*;
use shared_types::{FileCounter, NewPatientForm, PatientSummary};
use shared_ui::{
    toast_for, use_toast, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader,
    StatCard, SHORT_TOAST_MS,
};

const URL_MODAL_DELAY_MS: u64 = 200;

/// Dashboard tiles: title, blurb and the modal they open, if any.
const TILES: [(&str, &str, Option<&str>); 5] = [
    ("New Patient", "Register a new patient record.", Some(MODAL_ID)),
    ("Patient Queue", "See who is waiting to be seen.", None),
    ("Appointments", "Book and reschedule visits.", None),
    ("Route to Doctor", "Hand a patient over for consultation.", None),
    ("Send to Accounts", "Forward a bill for payment.", None),
];

/// Modal ids this dashboard can open.
fn is_known_modal(id: &str) -> bool {
    id == MODAL_ID
}

fn now_stamp() -> String {
    feed_time(&Local::now().naive_local())
}

#[component]
pub fn CustomerCareDashboard(modal: Option<String>) -> Element {
    let toast = use_toast();
    let mut stats = use_signal(CareStats::default);
    let mut activity = use_signal(Feed::<Activity>::unbounded);
    let mut counter = use_signal(FileCounter::default);
    let mut summary = use_signal(|| Option::<PatientSummary>::None);
    let mut open_modal = use_signal(|| Option::<String>::None);

    let mut add_activity = move |title: String, detail: String| {
        activity.write().push(Activity::new(title, detail, now_stamp()));
    };

    let notify = move |message: String| {
        toast.info(message, toast_for(SHORT_TOAST_MS));
    };

    let pending_modal = modal.clone();
    use_effect(move || {
        add_activity(
            "Customer Care dashboard ready".to_string(),
            "All modules loaded.".to_string(),
        );
        let Some(id) = pending_modal.clone() else {
            return;
        };
        if is_known_modal(&id) {
            spawn(async move {
                sleep_ms(URL_MODAL_DELAY_MS).await;
                open_modal.set(Some(id.clone()));
                add_activity(
                    format!("Opened via URL: {id}"),
                    format!("Modal \"{id}\" loaded from header link."),
                );
            });
        } else {
            notify(coming_soon(&id));
        }
    });

    let handle_submit = move |form: NewPatientForm| {
        let record = form.register(&mut counter.write(), &Local::now());
        stats.write().new_patients += 1;
        add_activity(
            format!("New patient: {}", record.full_name),
            format!("Registered as {}", record.patient_id),
        );
        tracing::info!(patient_id = %record.patient_id, file_no = record.file_no, "Patient registered");
        summary.set(Some(record));
        toast.success(
            "Patient record saved successfully!".to_string(),
            toast_for(SHORT_TOAST_MS),
        );
    };

    let current = stats();

    rsx! {
        div { class: "dept-page cc-page",
            PageHeader { title: "Customer Care Dashboard", subtitle: "Front desk and patient flow".to_string() }

            div { class: "grid grid-stats",
                StatCard { id: "statNewPatients", label: "New Patients", value: current.new_patients.to_string() }
                StatCard { id: "statQueue", label: "In Queue", value: current.queue.to_string() }
                StatCard { id: "statRouted", label: "Routed", value: current.routed.to_string() }
                StatCard { id: "statSentAccounts", label: "Sent to Accounts", value: current.sent_accounts.to_string() }
            }

            div { class: "grid grid-split",
                div { class: "grid grid-tiles",
                    for (title, blurb, target) in TILES {
                        button {
                            key: "{title}",
                            class: "cc-tile",
                            r#type: "button",
                            onclick: move |_| match target {
                                Some(id) => open_modal.set(Some(id.to_string())),
                                None => notify(format!("Coming soon: {title}")),
                            },
                            Card {
                                CardHeader {
                                    CardTitle { "{title}" }
                                    CardDescription { "{blurb}" }
                                }
                            }
                        }
                    }
                }

                Card {
                    CardHeader { CardTitle { "Activity" } }
                    CardContent {
                        ul { id: "activityFeed", class: "feed-list",
                            for item in activity.read().iter() {
                                li { key: "{item.id}", class: "feed-item",
                                    h4 { "{item.title}" }
                                    p { "{item.detail}" }
                                    span { class: "time", "{item.time}" }
                                }
                            }
                        }
                    }
                }
            }

            NewPatientModal {
                open: open_modal.read().as_deref() == Some(MODAL_ID),
                on_close: move |_| open_modal.set(None),
                on_submit: handle_submit,
                on_invalid: move |missing: Vec<&'static str>| {
                    toast.error(
                        format!("Please complete: {}", missing.join(", ")),
                        toast_for(SHORT_TOAST_MS),
                    );
                },
                summary: summary(),
            }
        }
    }
}
