//! Round configuration.
//!
//! Hosts build a [`RoundConfig`] from `Default` and adjust it with the
//! builder methods. The engine never hardcodes timings outside of the
//! defaults here.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Default length of a round.
pub const ROUND_DURATION: Duration = Duration::from_secs(20);

/// Default countdown granularity.
pub const TICK: Duration = Duration::from_secs(1);

/// Default remaining time at or below which every tick buzzes.
pub const PANIC_THRESHOLD: Duration = Duration::from_secs(10);

/// Timing and seeding parameters for a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Total time on the clock when the round starts.
    pub round_duration: Duration,

    /// Time removed from the clock on each countdown tick.
    pub tick: Duration,

    /// Ticks that leave this much time or less (but more than zero) buzz
    /// with `CountdownPanic`.
    pub panic_threshold: Duration,

    /// Seed for the word shuffle. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            round_duration: ROUND_DURATION,
            tick: TICK,
            panic_threshold: PANIC_THRESHOLD,
            seed: None,
        }
    }
}

impl RoundConfig {
    /// Set the round duration.
    #[must_use]
    pub fn with_round_duration(mut self, duration: Duration) -> Self {
        self.round_duration = duration;
        self
    }

    /// Set the tick length.
    #[must_use]
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Set the panic threshold.
    #[must_use]
    pub fn with_panic_threshold(mut self, threshold: Duration) -> Self {
        self.panic_threshold = threshold;
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the config can drive a countdown to completion.
    pub fn validate(&self) -> Result<()> {
        if self.tick.is_zero() {
            return Err(GameError::InvalidConfig("tick must be non-zero".into()));
        }
        if self.round_duration.is_zero() {
            return Err(GameError::InvalidConfig(
                "round duration must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RoundConfig::default();
        assert_eq!(config.round_duration, Duration::from_secs(20));
        assert_eq!(config.tick, Duration::from_secs(1));
        assert_eq!(config.panic_threshold, Duration::from_secs(10));
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = RoundConfig::default()
            .with_round_duration(Duration::from_secs(60))
            .with_tick(Duration::from_millis(500))
            .with_panic_threshold(Duration::from_secs(5))
            .with_seed(123);

        assert_eq!(config.round_duration, Duration::from_secs(60));
        assert_eq!(config.tick, Duration::from_millis(500));
        assert_eq!(config.panic_threshold, Duration::from_secs(5));
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_zero_tick_rejected() {
        let config = RoundConfig::default().with_tick(Duration::ZERO);
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let config = RoundConfig::default().with_round_duration(Duration::ZERO);
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_threshold_above_duration_is_allowed() {
        let config = RoundConfig::default()
            .with_round_duration(Duration::from_secs(5))
            .with_panic_threshold(Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serde() {
        let config = RoundConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RoundConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
