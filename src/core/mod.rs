//! Engine building blocks: RNG, configuration, errors.
//!
//! Nothing here knows about words or scoring; the `words` and `round`
//! modules build on top of it.

pub mod config;
pub mod error;
pub mod rng;

pub use config::RoundConfig;
pub use error::{GameError, Result};
pub use rng::GameRng;
