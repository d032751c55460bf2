//! Per-player game registry.
//!
//! ## Locking
//!
//! The map sits behind a `RwLock`: lookups share the read lock, creation and
//! reset take the write lock. Each game has its own `Mutex`, so players never
//! contend with each other once their game exists. Poisoned locks are
//! recovered; the engine never leaves a half-applied operation behind.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, info};
use rustc_hash::FxHashMap;

use crate::core::{Clock, ConfigError, GameConfig, GameRng, SystemClock};
use crate::rules::Game;

/// A game shared between the registry and request handlers.
pub type SharedGame<C> = Arc<Mutex<Game<C>>>;

/// Lock a shared game, recovering from poisoning.
pub fn lock_game<C>(game: &Mutex<Game<C>>) -> MutexGuard<'_, Game<C>> {
    game.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Games keyed by player name, created lazily.
pub struct GameRegistry<C = SystemClock> {
    games: RwLock<FxHashMap<String, SharedGame<C>>>,
    config: GameConfig,
    clock: C,
}

impl GameRegistry {
    /// Registry with the default tuning and the wall clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            games: RwLock::new(FxHashMap::default()),
            config: GameConfig::default(),
            clock: SystemClock,
        }
    }
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock + Clone> GameRegistry<C> {
    /// Registry whose games all use `config` and share `clock`.
    pub fn with_config(config: GameConfig, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            games: RwLock::new(FxHashMap::default()),
            config,
            clock,
        })
    }

    /// Tuning given to every new game.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Time source shared by every game.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Existing game for `player_name`, if any.
    pub fn get(&self, player_name: &str) -> Option<SharedGame<C>> {
        self.read().get(player_name).cloned()
    }

    /// Game for `player_name`, creating it on first reference.
    pub fn get_or_create(&self, player_name: &str) -> SharedGame<C> {
        if let Some(game) = self.get(player_name) {
            return game;
        }

        // Another caller may have created it between the two locks.
        self.write()
            .entry(player_name.to_string())
            .or_insert_with(|| {
                debug!("creating game for {player_name}");
                self.spawn(player_name)
            })
            .clone()
    }

    /// Replace the game for `player_name` with a fresh one.
    pub fn reset(&self, player_name: &str) -> SharedGame<C> {
        let game = self.spawn(player_name);
        self.write().insert(player_name.to_string(), Arc::clone(&game));
        info!("reset game for {player_name}");
        game
    }

    /// Drop the game for `player_name`. Returns whether one existed.
    pub fn remove(&self, player_name: &str) -> bool {
        self.write().remove(player_name).is_some()
    }

    /// Number of active games.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Handles to every game, taken under a single read lock.
    pub fn snapshot(&self) -> Vec<SharedGame<C>> {
        self.read().values().cloned().collect()
    }

    fn spawn(&self, player_name: &str) -> SharedGame<C> {
        Arc::new(Mutex::new(Game::from_parts(
            player_name.to_string(),
            self.config.clone(),
            GameRng::from_clock(),
            self.clock.clone(),
        )))
    }

    fn read(&self) -> RwLockReadGuard<'_, FxHashMap<String, SharedGame<C>>> {
        self.games.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FxHashMap<String, SharedGame<C>>> {
        self.games.write().unwrap_or_else(PoisonError::into_inner)
    }
}
