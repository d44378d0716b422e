//! Payload for the results view.

use serde::{Deserialize, Serialize};

use super::RoundSnapshot;

/// What the results view needs once a round is over.
///
/// Defaults to a score of 0 for a round that never started.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Score when the clock ran out.
    pub final_score: i64,

    /// One-shot "play again" request, cleared by acknowledgement.
    #[serde(skip)]
    play_again: bool,
}

impl RoundResult {
    /// Results for a given final score.
    #[must_use]
    pub fn new(final_score: i64) -> Self {
        Self {
            final_score,
            play_again: false,
        }
    }

    /// Take the score from a snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: &RoundSnapshot) -> Self {
        Self::new(snapshot.score)
    }

    /// The player asked for another round.
    pub fn request_play_again(&mut self) {
        self.play_again = true;
    }

    /// The host has started a new round.
    pub fn acknowledge_play_again(&mut self) {
        self.play_again = false;
    }

    /// Unacknowledged "play again" request.
    #[must_use]
    pub fn play_again_requested(&self) -> bool {
        self.play_again
    }
}
