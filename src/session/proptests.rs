//! Property-based tests for the session state machine
//!
//! These tests check that the scoring invariants hold for any pool and any
//! sequence of answers.

use super::round::{select_rounds, Slot};
use super::state::*;
use crate::data::TweetPair;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::time::Instant;

// ============================================================================
// Generators
// ============================================================================

fn arb_slot() -> impl Strategy<Value = Slot> {
    prop_oneof![Just(Slot::First), Just(Slot::Second)]
}

fn arb_pool() -> impl Strategy<Value = Vec<TweetPair>> {
    (1usize..30).prop_map(|n| {
        (0..n)
            .map(|i| TweetPair::new(format!("real {}", i), format!("fake {}", i)))
            .collect()
    })
}

// ============================================================================
// Invariants
// ============================================================================

proptest! {
    #[test]
    fn score_never_exceeds_answered_rounds(
        pool in arb_pool(),
        total in 1u32..20,
        seed in any::<u64>(),
        answers in prop::collection::vec(arb_slot(), 0..40),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = SessionState::start(&pool, total, &mut rng).unwrap();

        for slot in answers {
            let before = state.current_round();
            let was_over = state.is_game_over();
            state = submit_answer(state, slot, Instant::now()).state;

            prop_assert!(state.score() <= state.total_rounds());
            prop_assert!(state.score() <= state.current_round() - 1);
            if was_over {
                prop_assert_eq!(state.current_round(), before);
            } else {
                prop_assert_eq!(state.current_round(), before + 1);
            }
            prop_assert_eq!(state.is_game_over(), state.current_round() > state.total_rounds());
        }
    }

    #[test]
    fn game_over_exactly_after_total_rounds(
        pool in arb_pool(),
        total in 1u32..20,
        seed in any::<u64>(),
        slot in arb_slot(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = SessionState::start(&pool, total, &mut rng).unwrap();

        for _ in 0..total {
            prop_assert!(!state.is_game_over());
            state = submit_answer(state, slot, Instant::now()).state;
        }
        prop_assert!(state.is_game_over());
        prop_assert_eq!(state.current_round(), total + 1);
    }

    #[test]
    fn reset_always_returns_to_start(
        pool in arb_pool(),
        seed in any::<u64>(),
        answers in prop::collection::vec(arb_slot(), 0..15),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = SessionState::start(&pool, DEFAULT_TOTAL_ROUNDS, &mut rng).unwrap();
        for slot in answers {
            state = submit_answer(state, slot, Instant::now()).state;
        }

        let state = reset(state, &pool, &mut rng).unwrap();
        prop_assert_eq!(state.score(), 0);
        prop_assert_eq!(state.current_round(), 1);
        prop_assert_eq!(state.phase(), GamePhase::InProgress);
        prop_assert!(state.last_feedback().is_none());
    }

    #[test]
    fn selection_has_no_repeats_within_a_pass(
        pool in arb_pool(),
        count in 1usize..60,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let rounds = select_rounds(&pool, count, &mut rng).unwrap();
        prop_assert_eq!(rounds.len(), count);

        for pass in rounds.chunks(pool.len()) {
            let distinct: HashSet<&str> = pass.iter().map(|r| r.pair().real.as_str()).collect();
            prop_assert_eq!(distinct.len(), pass.len());
        }
    }
}
