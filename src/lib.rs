//! # guess-the-word
//!
//! Engine for a timed, single-player word guessing round.
//!
//! A countdown runs while the player accepts (+1) or skips (-1) successive
//! words. When the clock reaches zero the round finishes and the
//! presentation layer moves on to a results view carrying the final score.
//!
//! ## Architecture
//!
//! - **Synchronous core**: [`Round`] is a plain state machine. Time only
//!   advances through [`Round::tick`], which keeps it fully testable.
//!
//! - **Single owner**: [`RoundController`] moves the round onto one tokio
//!   task that serializes countdown ticks and player commands. Dropping the
//!   controller cancels the countdown.
//!
//! - **Edge-triggered signals**: the pending buzz and the finished flag stay
//!   set until the presentation layer acknowledges them. Every change is
//!   also pushed as a [`RoundEvent`].
//!
//! ## Modules
//!
//! - `core`: RNG, round configuration, errors
//! - `words`: vocabulary and the self-refilling word queue
//! - `round`: state machine, events, observers, tokio controller
//!
//! ```
//! use std::time::Duration;
//! use guess_the_word::{Round, RoundConfig, Vocabulary, BuzzKind};
//!
//! let config = RoundConfig::default().with_seed(1);
//! let mut round = Round::new(config, Vocabulary::default()).unwrap();
//!
//! round.accept();
//! assert_eq!(round.score(), 1);
//! assert_eq!(round.pending_buzz(), BuzzKind::Correct);
//!
//! for _ in 0..20 {
//!     round.tick();
//! }
//! assert!(round.is_finished());
//! assert_eq!(round.remaining(), Duration::ZERO);
//! ```

pub mod core;
pub mod round;
pub mod words;

// Re-export commonly used types
pub use crate::core::{GameError, GameRng, Result, RoundConfig};

pub use crate::words::{Vocabulary, WordQueue};

pub use crate::round::{
    format_elapsed, BuzzKind, ObserverId, Round, RoundController, RoundEvent, RoundObserver,
    RoundPhase, RoundResult, RoundSnapshot,
};
