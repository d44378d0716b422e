//! The fixed word list a round draws from.

use std::sync::Arc;

use crate::core::error::{GameError, Result};

/// Words shipped with the game.
pub const DEFAULT_WORDS: [&str; 21] = [
    "queen",
    "hospital",
    "basketball",
    "cat",
    "change",
    "snail",
    "soup",
    "calendar",
    "sad",
    "desk",
    "guitar",
    "home",
    "railway",
    "zebra",
    "jelly",
    "car",
    "crow",
    "trade",
    "bag",
    "roll",
    "bubble",
];

/// An immutable, non-empty list of words.
///
/// Cloning is cheap: the words are shared behind an `Arc`, so a queue can
/// keep its own handle for refills.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary {
    words: Arc<[String]>,
}

impl Vocabulary {
    /// Build a vocabulary from the given words.
    ///
    /// Surrounding whitespace is trimmed and blank entries are dropped.
    /// Fails with [`GameError::EmptyVocabulary`] if nothing is left.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            return Err(GameError::EmptyVocabulary);
        }

        Ok(Self {
            words: words.into(),
        })
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words in their original order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Check if a word is part of this vocabulary.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }
}
