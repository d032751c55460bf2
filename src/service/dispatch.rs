//! Endpoint handlers.
//!
//! `GameService` maps each endpoint onto registry lookups and engine calls.
//! Handlers return typed results; `handle` wraps them in the envelope.

use log::{debug, warn};

use super::error::ServiceError;
use super::protocol::{
    ActionData, ActionRequest, ActionResult, ApiResponse, GameStateView, Health, Request,
    ScoreEntry,
};
use super::registry::{lock_game, GameRegistry};
use crate::core::{Clock, SystemClock};
use crate::rules::Game;

/// The game service: a registry plus the endpoints over it.
pub struct GameService<C = SystemClock> {
    registry: GameRegistry<C>,
}

impl GameService {
    /// Service with the default tuning and the wall clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: GameRegistry::new(),
        }
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock + Clone> GameService<C> {
    pub fn with_registry(registry: GameRegistry<C>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &GameRegistry<C> {
        &self.registry
    }

    /// Route a parsed request to its endpoint.
    pub fn handle(&self, request: Request) -> ApiResponse {
        match request {
            Request::State { player_name } => self.state(&player_name).into(),
            Request::Action(req) => self.action(&req).into(),
            Request::Reset { player_name } => self.reset(&player_name).into(),
            Request::Scores => ApiResponse::ok(&self.scores()),
            Request::Health => ApiResponse::ok(&self.health()),
        }
    }

    /// Parse one JSON request and route it. Malformed input yields an error
    /// envelope rather than failing.
    pub fn handle_line(&self, line: &str) -> ApiResponse {
        match serde_json::from_str::<Request>(line) {
            Ok(request) => self.handle(request),
            Err(e) => {
                warn!("rejecting malformed request: {e}");
                ApiResponse::failure(ServiceError::InvalidRequest(e.to_string()).to_string())
            }
        }
    }

    /// Current view of a player's game, after applying any due worker tick.
    pub fn state(&self, player_name: &str) -> Result<GameStateView, ServiceError> {
        require_player(player_name)?;
        let game = self.registry.get_or_create(player_name);
        let mut game = lock_game(&game);
        game.process_workers();
        Ok(GameStateView::of(&game))
    }

    /// Apply one player action.
    pub fn action(&self, req: &ActionRequest) -> Result<ActionData, ServiceError> {
        require_player(&req.player_name)?;
        let game = self.registry.get_or_create(&req.player_name);
        let mut game = lock_game(&game);

        let action_result = apply(&mut game, req)?;
        debug!("{} performed {}", req.player_name, req.action);

        Ok(ActionData {
            action_result,
            game_state: GameStateView::of(&game),
        })
    }

    /// Discard a player's game and start over.
    pub fn reset(&self, player_name: &str) -> Result<GameStateView, ServiceError> {
        require_player(player_name)?;
        let game = self.registry.reset(player_name);
        let game = lock_game(&game);
        Ok(GameStateView::of(&game))
    }

    /// Scoreboard ordered by beer, then prestige points (both descending),
    /// then player name.
    pub fn scores(&self) -> Vec<ScoreEntry> {
        let mut scores: Vec<ScoreEntry> = self
            .registry
            .snapshot()
            .iter()
            .map(|game| ScoreEntry::of(&lock_game(game)))
            .collect();

        scores.sort_by(|a, b| {
            b.beer
                .cmp(&a.beer)
                .then_with(|| b.prestige_points.cmp(&a.prestige_points))
                .then_with(|| a.player_name.cmp(&b.player_name))
        });
        scores
    }

    pub fn health(&self) -> Health {
        Health {
            status: "ok".to_string(),
            timestamp: self.registry.clock().now_ms(),
            active_games: self.registry.len(),
        }
    }
}

fn require_player(player_name: &str) -> Result<(), ServiceError> {
    if player_name.is_empty() {
        return Err(ServiceError::MissingPlayerName);
    }
    Ok(())
}

fn require_target<'a>(
    req: &'a ActionRequest,
    kind: &'static str,
) -> Result<&'a str, ServiceError> {
    match req.target.as_deref() {
        Some(target) if !target.is_empty() => Ok(target),
        _ => Err(ServiceError::MissingTarget(kind)),
    }
}

fn apply<C: Clock>(
    game: &mut Game<C>,
    req: &ActionRequest,
) -> Result<ActionResult, ServiceError> {
    let message = match req.action.as_str() {
        "chop" => return Ok(ActionResult::Chop(game.chop_tree()?)),
        "upgrade_axe" => {
            game.upgrade_axe()?;
            "Axe upgraded successfully".to_string()
        }
        "buy_worker" => {
            let target = require_target(req, "Worker")?;
            game.buy_worker(target)?;
            format!("Worker {target} hired successfully")
        }
        "buy_upgrade" => {
            let target = require_target(req, "Upgrade")?;
            game.buy_upgrade(target)?;
            format!("Upgrade {target} purchased successfully")
        }
        "buy_beer" => {
            game.buy_beer()?;
            "Beer purchased successfully".to_string()
        }
        "prestige" => {
            let gained = game.prestige()?;
            format!("Prestige activated successfully (+{gained} points)")
        }
        other => return Err(ServiceError::UnknownAction(other.to_string())),
    };
    Ok(ActionResult::Message(message))
}
