/// Lines cycled under the login heading.
pub const TAGLINES: [&str; 3] = [
    "Select your department and log in to continue...",
    "Secure access to your e-Clinic dashboard...",
    "Stay connected to your Epiconsult team.",
];

pub const TYPE_MS: u64 = 80;
pub const HOLD_MS: u64 = 1200;
pub const DELETE_MS: u64 = 45;

/// Type-hold-delete cycle over a fixed set of lines.
///
/// Each [`Typewriter::tick`] yields the text to show and how long to wait
/// before the next tick.
#[derive(Debug, Clone)]
pub struct Typewriter {
    lines: Vec<&'static str>,
    line: usize,
    shown: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(lines: &[&'static str]) -> Self {
        Self {
            lines: lines.to_vec(),
            line: 0,
            shown: 0,
            deleting: false,
        }
    }

    pub fn tick(&mut self) -> (String, u64) {
        let Some(text) = self.lines.get(self.line).copied() else {
            return (String::new(), HOLD_MS);
        };
        let visible: String = text.chars().take(self.shown).collect();
        let len = text.chars().count();

        if !self.deleting {
            self.shown += 1;
            if self.shown > len {
                self.deleting = true;
                return (visible, HOLD_MS);
            }
        } else {
            self.shown = self.shown.saturating_sub(1);
            if self.shown == 0 {
                self.deleting = false;
                self.line = (self.line + 1) % self.lines.len();
            }
        }

        let delay = if self.deleting { DELETE_MS } else { TYPE_MS };
        (visible, delay)
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(&TAGLINES)
    }
}
