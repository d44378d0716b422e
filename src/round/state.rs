//! The round state machine.
//!
//! [`Round`] holds everything a timed round knows: the current word, the
//! score, the clock and the two one-shot signals (pending buzz and the
//! finished flag). It is purely synchronous; time only moves when someone
//! calls [`Round::tick`]. The tokio driver in
//! [`controller`](super::controller) is the usual caller.
//!
//! ## Lifecycle
//!
//! ```text
//! Running --tick reaches 0--> Finished (terminal)
//! ```
//!
//! Commands on a `Finished` round are ignored.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::error::Result;
use crate::core::{GameRng, RoundConfig};
use crate::words::{Vocabulary, WordQueue};

use super::observer::{ObserverId, ObserverRegistry, RoundObserver};
use super::time::format_elapsed;
use super::{BuzzKind, RoundEvent};

/// Where a round is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// The clock is running and commands are accepted.
    #[default]
    Running,
    /// Time is up. Terminal.
    Finished,
}

/// Consistent view of a round at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    /// Word currently up for guessing.
    pub word: String,
    /// Accepted minus skipped words.
    pub score: i64,
    /// Time left on the clock.
    pub remaining: Duration,
    /// Lifecycle phase.
    pub phase: RoundPhase,
    /// One-shot "round finished" flag, cleared by acknowledgement.
    pub finished: bool,
    /// One-shot buzz cue, reset to `None` by acknowledgement.
    pub pending_buzz: BuzzKind,
}

impl RoundSnapshot {
    /// Remaining time as `MM:SS`.
    #[must_use]
    pub fn remaining_display(&self) -> String {
        format_elapsed(self.remaining)
    }

    /// Check if the round has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == RoundPhase::Finished
    }
}

/// A single timed word-guessing round.
#[derive(Debug)]
pub struct Round {
    config: RoundConfig,
    queue: WordQueue,
    word: String,
    score: i64,
    remaining: Duration,
    phase: RoundPhase,
    finished: bool,
    pending_buzz: BuzzKind,
    observers: ObserverRegistry,
}

impl Round {
    /// Start a round: draw the first word and put the full duration on the
    /// clock.
    pub fn new(config: RoundConfig, vocabulary: Vocabulary) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!(
            seed = rng.seed(),
            duration_secs = config.round_duration.as_secs_f64(),
            words = vocabulary.len(),
            "round started"
        );

        let mut queue = WordQueue::new(vocabulary, rng);
        let word = queue.take_next();

        Ok(Self {
            remaining: config.round_duration,
            config,
            queue,
            word,
            score: 0,
            phase: RoundPhase::Running,
            finished: false,
            pending_buzz: BuzzKind::None,
            observers: ObserverRegistry::new(),
        })
    }

    // === Observers ===

    /// Register an observer for every subsequent change.
    pub fn subscribe(&mut self, observer: impl RoundObserver + 'static) -> ObserverId {
        self.observers.register(observer)
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unregister(id)
    }

    // === Commands ===

    /// The player guessed the word: +1, `Correct` buzz, next word.
    pub fn accept(&mut self) {
        if self.is_finished() {
            debug!("accept ignored, round finished");
            return;
        }

        self.score += 1;
        self.pending_buzz = BuzzKind::Correct;
        let guessed = std::mem::replace(&mut self.word, self.queue.take_next());
        debug!(score = self.score, word = %guessed, "word accepted");

        self.emit([
            RoundEvent::ScoreChanged(self.score),
            RoundEvent::Buzz(BuzzKind::Correct),
            RoundEvent::WordChanged(self.word.clone()),
        ]);
    }

    /// The player passed on the word: -1, next word. Leaves the buzz alone.
    pub fn skip(&mut self) {
        if self.is_finished() {
            debug!("skip ignored, round finished");
            return;
        }

        self.score -= 1;
        let skipped = std::mem::replace(&mut self.word, self.queue.take_next());
        debug!(score = self.score, word = %skipped, "word skipped");

        self.emit([
            RoundEvent::ScoreChanged(self.score),
            RoundEvent::WordChanged(self.word.clone()),
        ]);
    }

    /// Take one tick off the clock.
    ///
    /// Arms `CountdownPanic` while `0 < remaining <= panic_threshold`. On
    /// reaching zero arms `GameOver`, raises the finished flag and moves to
    /// `Finished`. No effect once finished.
    pub fn tick(&mut self) {
        if self.is_finished() {
            return;
        }

        self.remaining = self.remaining.saturating_sub(self.config.tick);
        debug!(remaining_secs = self.remaining.as_secs_f64(), "tick");

        if self.remaining.is_zero() {
            self.pending_buzz = BuzzKind::GameOver;
            self.phase = RoundPhase::Finished;
            self.finished = true;
            info!(final_score = self.score, "round finished");

            self.emit([
                RoundEvent::TimeChanged(Duration::ZERO),
                RoundEvent::Buzz(BuzzKind::GameOver),
                RoundEvent::Finished {
                    final_score: self.score,
                },
            ]);
        } else if self.remaining <= self.config.panic_threshold {
            self.pending_buzz = BuzzKind::CountdownPanic;
            self.emit([
                RoundEvent::TimeChanged(self.remaining),
                RoundEvent::Buzz(BuzzKind::CountdownPanic),
            ]);
        } else {
            self.emit([RoundEvent::TimeChanged(self.remaining)]);
        }
    }

    /// Clear the finished flag. Idempotent.
    pub fn acknowledge_finished(&mut self) {
        self.finished = false;
    }

    /// Reset the pending buzz to `None`. Idempotent.
    pub fn acknowledge_buzz(&mut self) {
        self.pending_buzz = BuzzKind::None;
    }

    // === Queries ===

    /// Word currently up for guessing.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Current score. May be negative.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Time left on the clock.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Check if the round has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == RoundPhase::Finished
    }

    /// Unacknowledged "round finished" signal.
    #[must_use]
    pub fn finished_pending(&self) -> bool {
        self.finished
    }

    /// Unacknowledged buzz cue.
    #[must_use]
    pub fn pending_buzz(&self) -> BuzzKind {
        self.pending_buzz
    }

    /// Configuration the round was started with.
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Capture the current state.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            word: self.word.clone(),
            score: self.score,
            remaining: self.remaining,
            phase: self.phase,
            finished: self.finished,
            pending_buzz: self.pending_buzz,
        }
    }

    // === Internals ===

    /// Notify observers once the state already reflects every event.
    fn emit<const N: usize>(&mut self, events: [RoundEvent; N]) {
        for event in &events {
            self.observers.notify(event);
        }
    }
}
