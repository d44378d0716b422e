//! Buzz cues signalled to the presentation layer.

use serde::{Deserialize, Serialize};

/// Kind of haptic/feedback cue the round is asking for.
///
/// `None` is the idle value a pending buzz returns to once acknowledged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuzzKind {
    /// Nothing pending.
    #[default]
    None,
    /// The player got a word right.
    Correct,
    /// Time is nearly up; re-signalled on every tick in the panic window.
    CountdownPanic,
    /// The clock hit zero.
    GameOver,
}

const CORRECT_PATTERN: &[u64] = &[100, 100, 100, 100, 100, 100];
const PANIC_PATTERN: &[u64] = &[0, 200];
const GAME_OVER_PATTERN: &[u64] = &[0, 2000];
const NO_PATTERN: &[u64] = &[0];

impl BuzzKind {
    /// Alternating off/on durations in milliseconds for a vibration motor.
    #[must_use]
    pub fn pattern(self) -> &'static [u64] {
        match self {
            BuzzKind::None => NO_PATTERN,
            BuzzKind::Correct => CORRECT_PATTERN,
            BuzzKind::CountdownPanic => PANIC_PATTERN,
            BuzzKind::GameOver => GAME_OVER_PATTERN,
        }
    }

    /// True for every kind except `None`.
    #[must_use]
    pub fn is_pending(self) -> bool {
        self != BuzzKind::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_none() {
        assert_eq!(BuzzKind::default(), BuzzKind::None);
        assert!(!BuzzKind::None.is_pending());
        assert!(BuzzKind::GameOver.is_pending());
    }

    #[test]
    fn test_patterns_are_distinct() {
        let kinds = [
            BuzzKind::None,
            BuzzKind::Correct,
            BuzzKind::CountdownPanic,
            BuzzKind::GameOver,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.pattern(), b.pattern());
            }
        }
        assert_eq!(BuzzKind::GameOver.pattern(), &[0, 2000]);
    }
}
