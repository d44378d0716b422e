//! Shuffled word pool.
//!
//! The front of the pool is the next word to guess. When the pool is drained
//! it is refilled from the full vocabulary and reshuffled, so callers never
//! observe an empty queue.

use std::collections::VecDeque;

use tracing::debug;

use crate::core::GameRng;

use super::Vocabulary;

/// Ordered pool of candidate words.
#[derive(Clone, Debug)]
pub struct WordQueue {
    vocabulary: Vocabulary,
    pool: VecDeque<String>,
    rng: GameRng,
    refills: u64,
}

impl WordQueue {
    /// Create a queue over `vocabulary`, already filled and shuffled.
    #[must_use]
    pub fn new(vocabulary: Vocabulary, rng: GameRng) -> Self {
        let mut queue = Self {
            vocabulary,
            pool: VecDeque::new(),
            rng,
            refills: 0,
        };
        queue.reset();
        queue
    }

    /// Refill the pool from the vocabulary and shuffle it.
    pub fn reset(&mut self) {
        let mut words = self.vocabulary.words().to_vec();
        self.rng.shuffle(&mut words);
        self.pool = words.into();
        self.refills += 1;
        debug!(size = self.pool.len(), refills = self.refills, "word pool refilled");
    }

    /// Remove and return the next word, refilling first if the pool is empty.
    pub fn take_next(&mut self) -> String {
        loop {
            if let Some(word) = self.pool.pop_front() {
                return word;
            }
            // Vocabulary is never empty, so one reset is enough.
            self.reset();
        }
    }

    /// Words left before the next refill.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    /// How many times the pool has been filled, including the initial fill.
    #[must_use]
    pub fn refills(&self) -> u64 {
        self.refills
    }

    /// The vocabulary this queue draws from.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}
