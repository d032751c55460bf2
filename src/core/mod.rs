//! Core engine types: state, catalogs, configuration, RNG, clock, errors.
//!
//! This module holds plain data and the primitives the rules build on.
//! Nothing here mutates a game on its own; see `rules` for the operations.

pub mod clock;
pub mod config;
pub mod error;
pub mod kinds;
pub mod rng;
pub mod state;

pub use clock::{Clock, ManualClock, Millis, SystemClock, SECOND_MS};
pub use config::{ConfigError, GameConfig};
pub use error::{GameError, GameResult, Resource};
pub use kinds::{UpgradeKind, WorkerKind};
pub use rng::GameRng;
pub use state::{PlayerState, Stats, Upgrades, Workers};
