use super::generic::coming_soon;
use crate::feed::{Feed, MessageCycle, DOCTOR_FEED_CAP, DOCTOR_FEED_INTERVAL_MS, DOCTOR_FEED_MESSAGES};
use crate::stats::{count_up, roll_progress, DoctorStats, COUNT_UP_TICK_MS};
use crate::timer::sleep_ms;
use dioxus::prelude::*;
use shared_ui::{
    toast_for, use_toast, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card,
    CardContent, CardHeader, CardTitle, PageHeader, StatCard, TOAST_MS,
};

const QUEUE: [&str; 4] = ["EPN-045", "EPN-046", "EPN-047", "EPN-048"];
const QUEUE_STATUS: &str = "Waiting";
const MOODS: [(&str, &str); 4] = [
    ("Great", "😄"),
    ("Good", "🙂"),
    ("Tired", "😴"),
    ("Stressed", "😣"),
];
const PROGRESS_BARS: [&str; 3] = ["Consultations", "Prescriptions", "Referrals"];

/// Spawn a task that walks `slot` through the count-up frames for `target`.
fn animate(mut slot: Signal<u32>, target: u32) {
    spawn(async move {
        for frame in count_up(target) {
            sleep_ms(COUNT_UP_TICK_MS).await;
            slot.set(frame);
        }
    });
}

#[component]
pub fn DoctorDashboard(modal: Option<String>) -> Element {
    let toast = use_toast();
    let stats = use_hook(|| DoctorStats::roll(&mut rand::thread_rng()));
    let progress = use_hook(|| {
        let mut rng = rand::thread_rng();
        PROGRESS_BARS.map(|_| roll_progress(&mut rng))
    });

    let patients = use_signal(|| 0u32);
    let queue = use_signal(|| 0u32);
    let prescriptions = use_signal(|| 0u32);
    let referrals = use_signal(|| 0u32);
    let mut feed = use_signal(|| Feed::<&'static str>::capped(DOCTOR_FEED_CAP));
    let mut announcement_open = use_signal(|| true);

    let pending_modal = modal.clone();
    use_effect(move || {
        animate(patients, stats.patients);
        animate(queue, stats.queue);
        animate(prescriptions, stats.prescriptions);
        animate(referrals, stats.referrals);

        toast.success("Doctor Dashboard loaded successfully".to_string(), toast_for(TOAST_MS));
        if let Some(id) = pending_modal.clone() {
            toast.info(coming_soon(&id), toast_for(TOAST_MS));
        }

        spawn(async move {
            let mut cycle = MessageCycle::default();
            loop {
                sleep_ms(DOCTOR_FEED_INTERVAL_MS).await;
                if let Some(message) = cycle.next_from(&DOCTOR_FEED_MESSAGES) {
                    feed.write().push(message);
                }
            }
        });
    });

    rsx! {
        div { class: "dept-page doctor-page",
            PageHeader { title: "Doctor Dashboard", subtitle: "Today's clinical overview".to_string() }

            if announcement_open() {
                div { class: "dc-announcement",
                    p {
                        strong { "Announcement: " }
                        "Grand rounds hold in the main conference room every Friday at 9:00AM."
                    }
                    button {
                        class: "announcement-close",
                        r#type: "button",
                        aria_label: "Dismiss announcement",
                        onclick: move |_| {
                            announcement_open.set(false);
                            toast.info("Announcement dismissed".to_string(), toast_for(TOAST_MS));
                        },
                        "×"
                    }
                }
            }

            div { class: "grid grid-stats",
                StatCard { id: "statPatientsSeen", label: "Patients Seen", value: patients().to_string() }
                StatCard { id: "statQueue", label: "In Queue", value: queue().to_string() }
                StatCard { id: "statPrescriptions", label: "Prescriptions", value: prescriptions().to_string() }
                StatCard { id: "statReferrals", label: "Referrals", value: referrals().to_string() }
            }

            div { class: "grid grid-split",
                Card {
                    CardHeader { CardTitle { "Live Feed" } }
                    CardContent {
                        ul { id: "doctorFeed", class: "feed-list",
                            if feed.read().is_empty() {
                                li { class: "muted", "Awaiting live activities..." }
                            }
                            for (i, item) in feed.read().iter().enumerate() {
                                li { key: "{i}-{item}", class: "feed-item", "{item}" }
                            }
                        }
                    }
                }
                Card {
                    CardHeader { CardTitle { "Patient Queue" } }
                    CardContent {
                        ul { id: "doctorQueue", class: "feed-list",
                            for id in QUEUE {
                                li { key: "{id}", class: "feed-item queue-item",
                                    span { "{id}" }
                                    Badge { variant: BadgeVariant::for_status(QUEUE_STATUS), "{QUEUE_STATUS}" }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "grid grid-split",
                Card {
                    CardHeader { CardTitle { "Performance" } }
                    CardContent {
                        for (label, width) in PROGRESS_BARS.iter().zip(progress) {
                            div { key: "{label}", class: "progress",
                                span { class: "progress-label", "{label}" }
                                div { class: "progress-track",
                                    div { class: "bar", style: "width: {width}%" }
                                }
                            }
                        }
                    }
                }
                Card {
                    CardHeader { CardTitle { "How are you feeling?" } }
                    CardContent {
                        div { class: "mood-row",
                            for (mood, face) in MOODS {
                                Button {
                                    key: "{mood}",
                                    variant: ButtonVariant::Ghost,
                                    size: ButtonSize::Small,
                                    class: "mood-btn",
                                    onclick: move |_| {
                                        toast.success(format!("Mood set to {mood}"), toast_for(TOAST_MS));
                                    },
                                    "{face} {mood}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
