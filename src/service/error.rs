//! Service-level errors.

use thiserror::Error;

use crate::core::GameError;

/// Errors raised while handling a request.
///
/// Engine failures are wrapped unchanged; the other variants come from the
/// request itself being unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Player name is required")]
    MissingPlayerName,

    /// `buy_worker` / `buy_upgrade` without a target. Holds the target kind
    /// ("Worker" or "Upgrade").
    #[error("{0} type is required")]
    MissingTarget(&'static str),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Game(#[from] GameError),
}
