//! Round change notifications.
//!
//! A [`Round`](super::Round) emits one event per observable change. Value
//! events (`WordChanged`, `ScoreChanged`, `TimeChanged`) carry the new value;
//! `Buzz` and `Finished` are the discrete one-shot signals.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::BuzzKind;

/// Something observable changed in a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A new word is up for guessing.
    WordChanged(String),
    /// The score moved.
    ScoreChanged(i64),
    /// The countdown ticked.
    TimeChanged(Duration),
    /// A buzz cue was armed. Never carries `BuzzKind::None`.
    Buzz(BuzzKind),
    /// The clock reached zero. Emitted once per round.
    Finished {
        /// Score at the moment the round ended.
        final_score: i64,
    },
}

impl RoundEvent {
    /// Check if this is the terminal event.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, RoundEvent::Finished { .. })
    }
}
