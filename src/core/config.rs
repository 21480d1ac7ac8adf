//! Game configuration.
//!
//! The engine never hardcodes the number of pins or turns: a `GameConfig`
//! is built once (by the CLI, or by tests) and validated before use.

use serde::{Deserialize, Serialize};

use super::error::{BowlingError, Result};

/// Default number of pins in a frame.
pub const DEFAULT_TOTAL_PINS: u8 = 10;

/// Default number of turns in a tournament.
pub const DEFAULT_TURNS: usize = 5;

/// Complete configuration for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Pins set up at the start of every frame.
    pub total_pins: u8,
    /// Turns played by a tournament.
    pub turns: usize,
    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_pins: DEFAULT_TOTAL_PINS,
            turns: DEFAULT_TURNS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the number of pins per frame.
    #[must_use]
    pub fn with_total_pins(mut self, total_pins: u8) -> Self {
        self.total_pins = total_pins;
        self
    }

    /// Set the number of turns.
    #[must_use]
    pub fn with_turns(mut self, turns: usize) -> Self {
        self.turns = turns;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<()> {
        if self.total_pins == 0 {
            return Err(BowlingError::InvalidConfig("total pins must be positive".to_string()));
        }
        if self.turns == 0 {
            return Err(BowlingError::InvalidConfig("turns must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.total_pins, 10);
        assert_eq!(config.turns, 5);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = GameConfig::default().with_total_pins(5).with_turns(3).with_seed(7);
        assert_eq!(config.total_pins, 5);
        assert_eq!(config.turns, 3);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(matches!(
            GameConfig::default().with_total_pins(0).validate(),
            Err(BowlingError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::default().with_turns(0).validate(),
            Err(BowlingError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::default().with_seed(42);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
