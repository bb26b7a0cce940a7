use crate::auth::{use_accessible_departments, use_auth};
use crate::components::clock::use_local_clock;
use crate::format_helpers::{greeting, greeting_color, long_date, weekday_name, TwelveHourClock};
use crate::routes::Route;
use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader};

const HOME_TICK_MS: u64 = 250;

fn department_blurb(slug: &str) -> &'static str {
    match slug {
        "customer-care" => "Register patients and manage the front-desk queue.",
        "doctor" => "Consultations, prescriptions and referrals.",
        "nursing" => "Vitals, ward rounds and dispensary.",
        "laboratory" => "Test requests and results.",
        "diagnostics" => "Imaging and diagnostic referrals.",
        "inventory" => "Stock levels and purchase orders.",
        "accounts" => "Billing and receipts.",
        "it" => "Support tickets and systems.",
        _ => "Department dashboard.",
    }
}

/// Landing page after sign-in.
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let departments = use_accessible_departments();
    let now = use_local_clock(HOME_TICK_MS);

    let role = auth.role().unwrap_or_default();
    let color = greeting_color(&role);
    let welcome = greeting(&role);
    let clock = TwelveHourClock::at(&now.read().time());
    let date = long_date(&now.read());
    let weekday = weekday_name(&now.read());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        div { class: "home-page",
            PageHeader { title: "e-Clinic Portal", subtitle: "Your departments at a glance".to_string() }

            Card { class: "home-hero",
                h2 { id: "loggedUser", class: "home-greeting", style: "color: {color}", "{welcome}" }
                div { id: "clockWrapper", class: "home-clock",
                    span { id: "clockMain", class: "clock-fixed", "{clock.main}" }
                    span { id: "clockSeconds", class: "clock-seconds", "{clock.seconds}" }
                    span { id: "clockAmPm", class: "clock-ampm", "{clock.meridiem}" }
                }
                p { class: "home-date",
                    span { id: "dayName", "{weekday}" }
                    " "
                    span { id: "fullDate", "{date}" }
                }
            }

            if departments.is_empty() {
                p { class: "muted", "No department dashboards are assigned to your role." }
            } else {
                div { class: "grid grid-tiles",
                    for dept in departments {
                        Link {
                            key: "{dept.slug()}",
                            to: Route::DepartmentPage { slug: dept.slug().to_string(), modal: String::new() },
                            class: "home-tile",
                            Card {
                                CardHeader {
                                    CardTitle { "{dept.label()}" }
                                    CardDescription { "{department_blurb(dept.slug())}" }
                                }
                                CardContent {
                                    span { class: "home-tile-open", "Open dashboard →" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
