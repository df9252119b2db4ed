//! Round selection
//!
//! Picks the pairs for a session and flips a coin per round for which slot
//! shows the real tweet. Pairs are sampled without replacement: a session
//! longer than the pool walks through successive shuffled passes, so no
//! pair repeats before every pair has been shown.

use crate::data::TweetPair;
use crate::error::GameError;
use rand::seq::SliceRandom;
use rand::Rng;

/// Display position of a tweet within a round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    /// 1-based number shown to the player
    pub fn number(self) -> usize {
        match self {
            Slot::First => 1,
            Slot::Second => 2,
        }
    }

    #[cfg(test)]
    pub fn other(self) -> Slot {
        match self {
            Slot::First => Slot::Second,
            Slot::Second => Slot::First,
        }
    }
}

/// One comparison of two texts, exactly one real
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Round {
    pair: TweetPair,
    real_slot: Slot,
}

impl Round {
    pub fn new(pair: TweetPair, real_slot: Slot) -> Self {
        Round { pair, real_slot }
    }

    #[cfg(test)]
    pub fn real_slot(&self) -> Slot {
        self.real_slot
    }

    pub fn is_real(&self, slot: Slot) -> bool {
        slot == self.real_slot
    }

    /// Text displayed in the given slot
    pub fn text(&self, slot: Slot) -> &str {
        if self.is_real(slot) {
            &self.pair.real
        } else {
            &self.pair.fake
        }
    }

    #[cfg(test)]
    pub fn pair(&self) -> &TweetPair {
        &self.pair
    }
}

/// Build `count` rounds from the pool
pub fn select_rounds<R: Rng + ?Sized>(
    pool: &[TweetPair],
    count: usize,
    rng: &mut R,
) -> Result<Vec<Round>, GameError> {
    if pool.is_empty() {
        return Err(GameError::EmptyPool);
    }
    if count == 0 {
        return Err(GameError::InvalidRoundCount(count));
    }

    let mut order: Vec<&TweetPair> = Vec::with_capacity(count);
    while order.len() < count {
        let mut pass: Vec<&TweetPair> = pool.iter().collect();
        pass.shuffle(rng);
        pass.truncate(count - order.len());
        order.extend(pass);
    }

    if count > pool.len() {
        tracing::debug!(
            pool = pool.len(),
            rounds = count,
            "pool shorter than session, pairs will repeat across passes"
        );
    }

    Ok(order
        .into_iter()
        .map(|pair| Round::new(pair.clone(), assign_slot(rng)))
        .collect())
}

/// Fair coin flip for the real tweet's slot
pub fn assign_slot<R: Rng + ?Sized>(rng: &mut R) -> Slot {
    if rng.gen_bool(0.5) {
        Slot::First
    } else {
        Slot::Second
    }
}
