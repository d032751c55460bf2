//! Game tuning configuration.
//!
//! A `GameConfig` is fixed for the lifetime of a game. The defaults are the
//! shipped balance; alternative tunings can be built with the `with_*`
//! setters or loaded from TOML, where missing keys keep their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a tuning is rejected.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// A `[min, max]` range has `min > max` or a non-positive lower bound.
    #[error("invalid {field} range: [{min}, {max}]")]
    InvalidRange {
        /// Name of the range (`tree_hp` or `wood`).
        field: &'static str,
        /// Configured lower bound.
        min: i64,
        /// Configured upper bound.
        max: i64,
    },

    /// Critical chance or multiplier outside its domain.
    #[error("invalid critical tuning: chance {chance}, multiplier {multiplier}")]
    InvalidCritical {
        /// Configured chance.
        chance: f64,
        /// Configured multiplier.
        multiplier: f64,
    },

    /// TOML could not be parsed into a config.
    #[error("malformed config: {0}")]
    Malformed(String),
}

/// Tuning constants for one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Lowest hit points a fresh tree can spawn with.
    pub tree_min_hp: i64,

    /// Highest hit points a fresh tree can spawn with.
    pub tree_max_hp: i64,

    /// Lowest base wood yield of a harvest.
    pub wood_min: i64,

    /// Highest base wood yield of a harvest.
    pub wood_max: i64,

    /// Base probability of a critical chop.
    pub critical_chance: f64,

    /// Base damage multiplier of a critical chop.
    pub critical_multiplier: f64,

    /// Harvest bonus per beer owned (0.015 = +1.5% per beer).
    pub beer_bonus_per_beer: f64,

    /// Beers needed for the game to count as won.
    pub target_beers: i64,

    /// Beers needed before prestige is allowed.
    pub prestige_beers: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tree_min_hp: 2,
            tree_max_hp: 6,
            wood_min: 1,
            wood_max: 3,
            critical_chance: 0.1,
            critical_multiplier: 2.5,
            beer_bonus_per_beer: 0.015,
            target_beers: 420,
            prestige_beers: 1000,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) tuning from TOML.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig =
            toml::from_str(text).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every range can be sampled and the critical tuning makes sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tree_min_hp < 1 || self.tree_min_hp > self.tree_max_hp {
            return Err(ConfigError::InvalidRange {
                field: "tree_hp",
                min: self.tree_min_hp,
                max: self.tree_max_hp,
            });
        }
        if self.wood_min < 0 || self.wood_min > self.wood_max {
            return Err(ConfigError::InvalidRange {
                field: "wood",
                min: self.wood_min,
                max: self.wood_max,
            });
        }
        if !(0.0..=1.0).contains(&self.critical_chance) || self.critical_multiplier < 1.0 {
            return Err(ConfigError::InvalidCritical {
                chance: self.critical_chance,
                multiplier: self.critical_multiplier,
            });
        }
        Ok(())
    }

    /// Set the tree hit point range.
    #[must_use]
    pub fn with_tree_hp(mut self, min: i64, max: i64) -> Self {
        self.tree_min_hp = min;
        self.tree_max_hp = max;
        self
    }

    /// Set the base wood yield range.
    #[must_use]
    pub fn with_wood(mut self, min: i64, max: i64) -> Self {
        self.wood_min = min;
        self.wood_max = max;
        self
    }

    /// Set the base critical chance and multiplier.
    #[must_use]
    pub fn with_critical(mut self, chance: f64, multiplier: f64) -> Self {
        self.critical_chance = chance;
        self.critical_multiplier = multiplier;
        self
    }

    /// Set the win and prestige beer thresholds.
    #[must_use]
    pub fn with_beer_goals(mut self, target: i64, prestige: i64) -> Self {
        self.target_beers = target;
        self.prestige_beers = prestige;
        self
    }
}
