//! Session state machine
//!
//! Maintains:
//! - Score and 1-based round counter
//! - The pre-selected rounds for this session
//! - Feedback about the last answer
//! - Game phase (in progress, game over)
//!
//! The state is a plain value. Transitions take it by value and hand back
//! the next state, so the event loop owns exactly one copy.

use super::accuracy::SessionSummary;
use super::feedback::{Feedback, Verdict};
use super::round::{select_rounds, Round, Slot};
use crate::data::TweetPair;
use crate::error::GameError;
use rand::Rng;
use std::time::{Duration, Instant};

/// Rounds in a standard session
pub const DEFAULT_TOTAL_ROUNDS: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    InProgress,
    GameOver,
}

/// Complete session state
#[derive(Clone, Debug)]
pub struct SessionState {
    score: u32,
    current_round: u32,
    total_rounds: u32,
    last_feedback: Option<Feedback>,
    phase: GamePhase,
    rounds: Vec<Round>,
}

/// Outcome of `submit_answer`
#[derive(Clone, Debug)]
pub struct Transition {
    pub state: SessionState,
    /// `None` when the answer was ignored because the game is over
    pub verdict: Option<Verdict>,
}

impl SessionState {
    /// Start a fresh session with rounds drawn from the pool
    pub fn start<R: Rng + ?Sized>(
        pool: &[TweetPair],
        total_rounds: u32,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let rounds = select_rounds(pool, total_rounds as usize, rng)?;
        tracing::info!(rounds = total_rounds, pool = pool.len(), "session started");
        Self::from_rounds(rounds)
    }

    /// Start a session over a fixed set of rounds
    pub fn from_rounds(rounds: Vec<Round>) -> Result<Self, GameError> {
        if rounds.is_empty() {
            return Err(GameError::InvalidRoundCount(0));
        }

        Ok(SessionState {
            score: 0,
            current_round: 1,
            total_rounds: rounds.len() as u32,
            last_feedback: None,
            phase: GamePhase::InProgress,
            rounds,
        })
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// 1-based; `total_rounds + 1` once the game is over
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn last_feedback(&self) -> Option<&Feedback> {
        self.last_feedback.as_ref()
    }

    /// Round awaiting an answer
    pub fn current(&self) -> Option<&Round> {
        match self.phase {
            GamePhase::InProgress => self.rounds.get(self.current_round as usize - 1),
            GamePhase::GameOver => None,
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary::new(self.score, self.total_rounds)
    }
}

/// Answer the current round with the chosen slot
pub fn submit_answer(state: SessionState, chosen: Slot, now: Instant) -> Transition {
    let Some(round) = state.current() else {
        return Transition {
            state,
            verdict: None,
        };
    };

    let verdict = if round.is_real(chosen) {
        Verdict::Correct
    } else {
        Verdict::Incorrect
    };

    let mut next = state;
    if verdict == Verdict::Correct {
        next.score += 1;
    }
    tracing::debug!(
        round = next.current_round,
        chosen = chosen.number(),
        ?verdict,
        score = next.score,
        "answer submitted"
    );

    next.current_round += 1;
    next.last_feedback = Some(Feedback::new(verdict, chosen, now));

    if next.current_round > next.total_rounds {
        next.phase = GamePhase::GameOver;
        tracing::info!(
            score = next.score,
            total = next.total_rounds,
            "game over"
        );
    }

    Transition {
        state: next,
        verdict: Some(verdict),
    }
}

/// Throw the session away and start over with freshly selected rounds
pub fn reset<R: Rng + ?Sized>(
    state: SessionState,
    pool: &[TweetPair],
    rng: &mut R,
) -> Result<SessionState, GameError> {
    tracing::info!(previous_score = state.score, "session reset");
    SessionState::start(pool, state.total_rounds, rng)
}

/// Clear feedback that has been on screen longer than `ttl`
pub fn expire_feedback(mut state: SessionState, now: Instant, ttl: Duration) -> SessionState {
    if state
        .last_feedback
        .as_ref()
        .is_some_and(|feedback| feedback.is_expired(now, ttl))
    {
        state.last_feedback = None;
    }
    state
}
