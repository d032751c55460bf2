//! Game rules: price curves, production formulas and the engine.
//!
//! - `pricing`: what every purchase costs
//! - `production`: chop damage, criticals, harvest yield, worker ticks
//! - `engine`: `Game`, which applies player actions and passive production
//!
//! Formulas are pure functions of `PlayerState` and `GameConfig`; only the
//! engine mutates state.

pub mod engine;
pub mod pricing;
pub mod production;

pub use engine::{ChopOutcome, Game, GameBuilder};
pub use pricing::Prices;
