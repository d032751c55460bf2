//! The game service: per-player games behind a request/response boundary.
//!
//! ## Endpoints
//!
//! - `state`: current view of a player's game (applies a due worker tick)
//! - `action`: chop, upgrade the axe, hire, buy upgrades or beer, prestige
//! - `reset`: start a player's game over
//! - `scores`: one row per player
//! - `health`: liveness and active game count
//!
//! Every endpoint answers with an `ApiResponse` envelope. The service is
//! transport-agnostic; the `lumberjack` binary drives it over JSON lines.

pub mod dispatch;
pub mod duration;
pub mod error;
pub mod protocol;
pub mod registry;

pub use dispatch::GameService;
pub use duration::format_duration;
pub use error::ServiceError;
pub use protocol::{
    ActionData, ActionRequest, ActionResult, ApiResponse, GameStateView, Health, Request,
    ScoreEntry,
};
pub use registry::{lock_game, GameRegistry, SharedGame};
