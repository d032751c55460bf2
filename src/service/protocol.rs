//! Request and response shapes of the service boundary.
//!
//! Every response is an `ApiResponse` envelope. Field names are the JSON
//! keys clients see.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::duration::format_duration;
use super::error::ServiceError;
use crate::core::{Clock, Millis, PlayerState};
use crate::rules::{ChopOutcome, Game, Prices};

/// A player action.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequest {
    #[serde(default)]
    pub player_name: String,
    #[serde(default)]
    pub action: String,
    /// Worker or upgrade identifier for `buy_worker` / `buy_upgrade`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl ActionRequest {
    pub fn new(player_name: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            action: action.into(),
            target: None,
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}

/// One request of the session protocol, tagged by endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "endpoint", rename_all = "snake_case")]
pub enum Request {
    State {
        #[serde(default)]
        player_name: String,
    },
    Action(ActionRequest),
    Reset {
        #[serde(default)]
        player_name: String,
    },
    Scores,
    Health,
}

/// Response envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    /// Successful envelope carrying `data`.
    pub fn ok<T: Serialize>(data: &T) -> Self {
        match serde_json::to_value(data) {
            Ok(value) => Self {
                success: true,
                data: Some(value),
                error: None,
            },
            Err(e) => Self::failure(e.to_string()),
        }
    }

    /// Failed envelope carrying `message`.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

impl<T: Serialize> From<Result<T, ServiceError>> for ApiResponse {
    fn from(result: Result<T, ServiceError>) -> Self {
        match result {
            Ok(data) => Self::ok(&data),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

/// Everything a client needs to render one player's game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameStateView {
    #[serde(flatten)]
    pub state: PlayerState,
    pub prices: Prices,
    pub can_prestige: bool,
    pub is_game_won: bool,
    pub game_duration: String,
    pub target_beers: i64,
    pub prestige_beers: i64,
}

impl GameStateView {
    /// Snapshot `game` as it stands now.
    pub fn of<C: Clock>(game: &Game<C>) -> Self {
        Self {
            state: game.state().clone(),
            prices: game.prices(),
            can_prestige: game.can_prestige(),
            is_game_won: game.is_game_won(),
            game_duration: format_duration(game.game_duration_ms()),
            target_beers: game.config().target_beers,
            prestige_beers: game.config().prestige_beers,
        }
    }
}

/// What an action produced: chop details, or a confirmation message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionResult {
    Chop(ChopOutcome),
    Message(String),
}

/// Payload of a successful action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionData {
    pub action_result: ActionResult,
    pub game_state: GameStateView,
}

/// One row of the scoreboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub player_name: String,
    pub beer: i64,
    pub prestige_points: i64,
    pub game_duration: String,
    pub is_game_won: bool,
    pub total_wood: i64,
    pub total_clicks: i64,
}

impl ScoreEntry {
    pub fn of<C: Clock>(game: &Game<C>) -> Self {
        let state = game.state();
        Self {
            player_name: state.player_name.clone(),
            beer: state.beer,
            prestige_points: state.prestige_points,
            game_duration: format_duration(game.game_duration_ms()),
            is_game_won: game.is_game_won(),
            total_wood: state.stats.total_wood_gained,
            total_clicks: state.stats.total_clicks,
        }
    }
}

/// Liveness summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: Millis,
    pub active_games: usize,
}
