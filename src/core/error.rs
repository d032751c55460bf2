//! Error types for engine operations.
//!
//! Every failure is an expected, recoverable business condition. An
//! operation that returns an error has left the game state untouched.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Resource a player can run short of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    /// Wood, spent on every purchase.
    Wood,
    /// Beer, required for prestige.
    Beer,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Wood => write!(f, "wood"),
            Resource::Beer => write!(f, "beers"),
        }
    }
}

/// Errors returned by `Game` operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Chop attempted while the current tree has no hit points left.
    #[error("tree already destroyed")]
    TreeAlreadyDestroyed,

    /// Balance below the cost or threshold of the requested action.
    #[error("not enough {resource}: need {need}, have {have}")]
    InsufficientResources {
        /// Which balance fell short.
        resource: Resource,
        /// Amount required.
        need: i64,
        /// Amount available.
        have: i64,
    },

    /// Worker identifier outside the fixed roster.
    #[error("unknown worker type: {0}")]
    UnknownWorkerType(String),

    /// Upgrade identifier outside the fixed catalog.
    #[error("unknown upgrade type: {0}")]
    UnknownUpgradeType(String),
}

impl GameError {
    pub(crate) fn not_enough_wood(need: i64, have: i64) -> Self {
        GameError::InsufficientResources {
            resource: Resource::Wood,
            need,
            have,
        }
    }
}

/// Result type for engine operations.
pub type GameResult<T> = Result<T, GameError>;
