//! Prepend-only feeds used by the dashboards.

use std::collections::VecDeque;
use uuid::Uuid;

/// A list where new items go on top, optionally capped so the oldest item
/// falls off the bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct Feed<T> {
    items: VecDeque<T>,
    cap: Option<usize>,
}

impl<T> Default for Feed<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T> Feed<T> {
    pub fn unbounded() -> Self {
        Self {
            items: VecDeque::new(),
            cap: None,
        }
    }

    pub fn capped(cap: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(cap + 1),
            cap: Some(cap),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push_front(item);
        if let Some(cap) = self.cap {
            self.items.truncate(cap);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A timestamped activity entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: Uuid,
    pub title: String,
    pub detail: String,
    pub time: String,
}

impl Activity {
    pub fn new(title: impl Into<String>, detail: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            detail: detail.into(),
            time: time.into(),
        }
    }
}

/// Messages the doctor's live feed cycles through.
pub const DOCTOR_FEED_MESSAGES: [&str; 5] = [
    "Consultation completed — EPN-045",
    "New patient added to queue (EPN-046)",
    "Prescription sent to Pharmacy",
    "Diagnostics referral created",
    "Follow-up scheduled for tomorrow",
];

pub const DOCTOR_FEED_CAP: usize = 6;
pub const DOCTOR_FEED_INTERVAL_MS: u64 = 5000;

/// Endless cycle over a fixed message list.
#[derive(Debug, Clone, Default)]
pub struct MessageCycle {
    index: usize,
}

impl MessageCycle {
    pub fn next_from(&mut self, messages: &[&'static str]) -> Option<&'static str> {
        if messages.is_empty() {
            return None;
        }
        let message = messages[self.index % messages.len()];
        self.index += 1;
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_item_is_first() {
        let mut feed = Feed::unbounded();
        feed.push("a");
        feed.push("b");
        assert_eq!(feed.iter().copied().collect::<Vec<_>>(), ["b", "a"]);
    }

    #[test]
    fn capped_feed_drops_oldest() {
        let mut feed = Feed::capped(DOCTOR_FEED_CAP);
        let mut cycle = MessageCycle::default();
        for _ in 0..8 {
            if let Some(message) = cycle.next_from(&DOCTOR_FEED_MESSAGES) {
                feed.push(message);
            }
        }
        assert_eq!(feed.len(), DOCTOR_FEED_CAP);
        // eighth message wraps to the third entry
        assert_eq!(feed.iter().next(), Some(&DOCTOR_FEED_MESSAGES[2]));
        assert_eq!(feed.iter().last(), Some(&DOCTOR_FEED_MESSAGES[2]));
    }

    #[test]
    fn cycle_over_empty_list_yields_nothing() {
        let mut cycle = MessageCycle::default();
        assert_eq!(cycle.next_from(&[]), None);
    }

    #[test]
    fn activities_get_distinct_ids() {
        let a = Activity::new("New patient: Ada", "Registered as EPN-2026-00001", "09:00:00");
        let b = Activity::new("New patient: Ada", "Registered as EPN-2026-00001", "09:00:00");
        assert_ne!(a.id, b.id);
    }
}
