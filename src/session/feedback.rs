//! Last-answer feedback with a timed expiry

use super::round::Slot;
use std::time::{Duration, Instant};

/// How long feedback stays on screen by default
pub const DEFAULT_FEEDBACK_TTL: Duration = Duration::from_millis(1500);

/// Whether the player picked the real tweet
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// Message about the previous answer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub verdict: Verdict,
    pub message: String,
    pub shown_at: Instant,
}

impl Feedback {
    pub fn new(verdict: Verdict, chosen: Slot, shown_at: Instant) -> Self {
        let message = match verdict {
            Verdict::Correct => format!("✅ Correct! Tweet {} was real.", chosen.number()),
            Verdict::Incorrect => format!("❌ Nope. Tweet {} was fake.", chosen.number()),
        };

        Feedback {
            verdict,
            message,
            shown_at,
        }
    }

    pub fn is_correct(&self) -> bool {
        self.verdict == Verdict::Correct
    }

    /// Strictly older than `ttl` at `now`
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.shown_at) > ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let now = Instant::now();
        assert_eq!(
            Feedback::new(Verdict::Correct, Slot::First, now).message,
            "✅ Correct! Tweet 1 was real."
        );
        assert_eq!(
            Feedback::new(Verdict::Incorrect, Slot::Second, now).message,
            "❌ Nope. Tweet 2 was fake."
        );
    }

    #[test]
    fn test_expiry_boundary() {
        let shown = Instant::now();
        let feedback = Feedback::new(Verdict::Correct, Slot::First, shown);

        assert!(!feedback.is_expired(shown, DEFAULT_FEEDBACK_TTL));
        assert!(!feedback.is_expired(shown + DEFAULT_FEEDBACK_TTL, DEFAULT_FEEDBACK_TTL));
        assert!(feedback.is_expired(
            shown + DEFAULT_FEEDBACK_TTL + Duration::from_millis(1),
            DEFAULT_FEEDBACK_TTL
        ));
    }
}
