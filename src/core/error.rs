//! Crate error type.
//!
//! The round itself is a total state machine; errors only come from bad
//! construction input or from talking to a controller that is gone.

use thiserror::Error;

/// Errors raised by the round engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A vocabulary needs at least one non-blank word.
    #[error("vocabulary must contain at least one word")]
    EmptyVocabulary,

    /// The round configuration cannot drive a countdown.
    #[error("invalid round config: {0}")]
    InvalidConfig(String),

    /// The controller task has been shut down.
    #[error("round controller is closed")]
    RoundClosed,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GameError>;
