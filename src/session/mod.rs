//! Session Management: round selection, game state and scoring
//!
//! # Components
//! - `round.rs`: Round selection and real/fake slot assignment
//! - `state.rs`: SessionState and its pure transitions
//! - `feedback.rs`: Last-answer feedback with timed expiry
//! - `accuracy.rs`: Accuracy percentage and summary rating

pub mod accuracy;
pub mod feedback;
pub mod round;
pub mod state;

#[cfg(test)]
mod proptests;

pub use accuracy::SessionSummary;
pub use feedback::{Feedback, DEFAULT_FEEDBACK_TTL};
pub use round::Slot;
pub use state::{
    expire_feedback, reset, submit_answer, GamePhase, SessionState, DEFAULT_TOTAL_ROUNDS,
};
