use crate::format_helpers::{header_date, header_time};
use crate::timer::sleep_ms;
use chrono::{Local, NaiveDateTime};
use dioxus::prelude::*;

pub const CLOCK_TICK_MS: u64 = 1000;

/// Current local time, refreshed every `tick_ms` while the caller is mounted.
pub fn use_local_clock(tick_ms: u64) -> Signal<NaiveDateTime> {
    let mut now = use_signal(|| Local::now().naive_local());
    use_effect(move || {
        spawn(async move {
            loop {
                now.set(Local::now().naive_local());
                sleep_ms(tick_ms).await;
            }
        });
    });
    now
}

/// Live 24-hour clock and date for the portal header.
#[component]
pub fn HeaderClock() -> Element {
    let now = use_local_clock(CLOCK_TICK_MS);
    let time = header_time(&now.read());
    let date = header_date(&now.read());

    rsx! {
        div { class: "header-clock",
            span { id: "deptClock", class: "header-clock-time", "{time}" }
            span { id: "deptDate", class: "header-clock-date", "{date}" }
        }
    }
}
