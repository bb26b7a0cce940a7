//! Clock, date and greeting formatting for the portal chrome.
//!
//! Every function takes the instant to format so the ticking components
//! stay thin and the output can be pinned in tests.

use chrono::{NaiveDateTime, NaiveTime, Timelike};

/// Header clock time, en-GB 24-hour `HH:MM:SS`.
pub fn header_time(now: &NaiveDateTime) -> String {
    now.format("%H:%M:%S").to_string()
}

/// Header clock date, `{Wkd} {d} {Mon} {yyyy}`.
pub fn header_date(now: &NaiveDateTime) -> String {
    now.format("%a %-d %b %Y").to_string()
}

/// 12-hour clock split the way the home page renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwelveHourClock {
    /// `hh:mm`, zero padded.
    pub main: String,
    /// `:ss`
    pub seconds: String,
    pub meridiem: &'static str,
}

impl TwelveHourClock {
    pub fn at(time: &NaiveTime) -> Self {
        let (is_pm, hour) = time.hour12();
        Self {
            main: format!("{:02}:{:02}", hour, time.minute()),
            seconds: format!(":{:02}", time.second()),
            meridiem: if is_pm { "PM" } else { "AM" },
        }
    }
}

/// Long date, `{d} {Month} {yyyy}`.
pub fn long_date(now: &NaiveDateTime) -> String {
    now.format("%-d %B %Y").to_string()
}

pub fn weekday_name(now: &NaiveDateTime) -> String {
    now.format("%A").to_string()
}

/// Timestamp shown next to activity feed entries.
pub fn feed_time(now: &NaiveDateTime) -> String {
    now.format("%H:%M:%S").to_string()
}

pub fn greeting(role: &str) -> String {
    format!("Welcome, {}", role.trim())
}

/// Accent color for the home greeting, picked by substring of the role.
pub fn greeting_color(role: &str) -> &'static str {
    let lower = role.to_lowercase();
    if lower.contains("doctor") {
        "#00e0ff"
    } else if lower.contains("nurse") {
        "#00ff88"
    } else if lower.contains("admin") {
        "#ffcc70"
    } else {
        "#ffffff"
    }
}

/// Turn a modal id such as `modalNewPatient` into `New Patient`.
pub fn readable_modal_name(modal_id: &str) -> String {
    let trimmed = modal_id.trim();
    let rest = match trimmed.get(..5) {
        Some(prefix) if prefix.eq_ignore_ascii_case("modal") => &trimmed[5..],
        _ => trimmed,
    };
    let mut out = String::with_capacity(rest.len() + 4);
    for c in rest.chars() {
        if c.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out.trim().to_string()
}
