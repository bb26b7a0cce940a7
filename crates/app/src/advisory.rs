/// How long an access advisory stays visible.
pub const ADVISORY_MS: u64 = 3000;

/// The single access-advisory overlay.
///
/// Every raise bumps a generation counter; an expiry only clears the
/// message it was scheduled for, so a stale timer never hides a newer
/// message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Advisory {
    generation: u64,
    message: Option<String>,
}

impl Advisory {
    /// Show `message`, replacing whatever was showing. Returns the
    /// generation to pass to [`Advisory::expire`].
    pub fn raise(&mut self, message: impl Into<String>) -> u64 {
        self.generation += 1;
        self.message = Some(message.into());
        self.generation
    }

    /// Hide the message raised as `generation`. Returns whether anything
    /// was hidden.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.message.is_some() {
            self.message = None;
            true
        } else {
            false
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_showing(&self) -> bool {
        self.message.is_some()
    }
}
