//! # lumberjack-idle
//!
//! An incremental lumberjack game. Players chop trees for wood, spend wood
//! on axe upgrades, workers, upgrades and beer, and eventually prestige
//! their beer into permanent bonuses.
//!
//! ## Design Principles
//!
//! 1. **Pure Formulas**: Prices and yields are functions of the player state.
//!    Only `Game` mutates anything.
//!
//! 2. **Injected Time and Randomness**: Every game owns a seedable `GameRng`
//!    and a `Clock`, so tests and simulations are reproducible.
//!
//! 3. **All or Nothing**: A failed operation leaves the state untouched.
//!
//! ## Modules
//!
//! - `core`: Player state, worker and upgrade catalogs, tuning, RNG, clock, errors
//! - `rules`: Price curves, production formulas and the `Game` engine
//! - `service`: Per-player game registry and the request/response boundary

pub mod core;
pub mod rules;
pub mod service;

// Re-export commonly used types
pub use crate::core::{
    Clock, ManualClock, Millis, SystemClock,
    ConfigError, GameConfig,
    GameError, GameResult, Resource,
    UpgradeKind, WorkerKind,
    GameRng,
    PlayerState, Stats, Upgrades, Workers,
};

pub use crate::rules::{ChopOutcome, Game, GameBuilder, Prices};

pub use crate::service::{
    format_duration, ActionRequest, ApiResponse, GameRegistry, GameService, GameStateView,
    Health, Request, ScoreEntry, ServiceError,
};
