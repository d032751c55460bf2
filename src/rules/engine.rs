//! The game engine: one player's state and the operations that change it.
//!
//! ## Atomicity
//!
//! Every operation either applies completely or returns an error with the
//! state untouched. Checks happen before the first write.
//!
//! ## Concurrency
//!
//! A `Game` is not synchronized. Callers that share one across threads must
//! serialize access themselves (the service keeps each game behind its own
//! mutex).

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::pricing::{self, Prices};
use super::production;
use crate::core::{
    Clock, ConfigError, GameConfig, GameError, GameResult, GameRng, Millis,
    PlayerState, Resource, UpgradeKind, Upgrades, WorkerKind, Workers, SECOND_MS,
};

/// Result of a single chop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChopOutcome {
    /// Wood harvested; 0 unless the chop felled the tree.
    pub wood_gained: i64,
    /// Whether the chop was a critical hit.
    pub is_critical: bool,
}

/// Builder for creating a `Game` with a custom tuning, seed or clock.
pub struct GameBuilder<C = crate::core::SystemClock> {
    player_name: String,
    config: GameConfig,
    seed: Option<u64>,
    clock: C,
}

impl GameBuilder {
    /// Start building a game for `player_name` with default settings.
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            config: GameConfig::default(),
            seed: None,
            clock: crate::core::SystemClock,
        }
    }
}

impl<C: Clock> GameBuilder<C> {
    /// Use a custom tuning.
    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a fixed RNG seed instead of a clock-derived one.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a different time source.
    #[must_use]
    pub fn clock<C2: Clock>(self, clock: C2) -> GameBuilder<C2> {
        GameBuilder {
            player_name: self.player_name,
            config: self.config,
            seed: self.seed,
            clock,
        }
    }

    /// Validate the tuning and create the game.
    pub fn build(self) -> Result<Game<C>, ConfigError> {
        self.config.validate()?;
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_clock(),
        };
        Ok(Game::from_parts(self.player_name, self.config, rng, self.clock))
    }
}

/// One player's game.
pub struct Game<C = crate::core::SystemClock> {
    /// Player state. Public for serialization and for tests that need to
    /// stage a scenario.
    pub state: PlayerState,
    config: GameConfig,
    rng: GameRng,
    clock: C,
}

impl Game {
    /// Create a game with the default tuning, wall clock and a clock-seeded RNG.
    #[must_use]
    pub fn new(player_name: impl Into<String>) -> Self {
        Self::from_parts(
            player_name.into(),
            GameConfig::default(),
            GameRng::from_clock(),
            crate::core::SystemClock,
        )
    }

    /// Start building a customized game.
    pub fn builder(player_name: impl Into<String>) -> GameBuilder {
        GameBuilder::new(player_name)
    }
}

impl<C: Clock> Game<C> {
    /// Assemble a game from an already validated config.
    pub(crate) fn from_parts(
        player_name: String,
        config: GameConfig,
        rng: GameRng,
        clock: C,
    ) -> Self {
        let now = clock.now_ms();
        let mut game = Self {
            state: PlayerState::new(player_name, now),
            config,
            rng,
            clock,
        };
        game.respawn_tree();
        game
    }

    /// Current player state.
    #[must_use]
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Tuning this game was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Time source of this game.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    // === Player Actions ===

    /// Hit the current tree once.
    ///
    /// Damage is the axe level scaled by prestige, multiplied on a critical
    /// roll. Felling the tree harvests it and spawns the next one.
    pub fn chop_tree(&mut self) -> GameResult<ChopOutcome> {
        if !self.state.tree_alive() {
            return Err(GameError::TreeAlreadyDestroyed);
        }

        self.state.stats.total_clicks = self.state.stats.total_clicks.saturating_add(1);

        let mut damage = production::chop_damage(&self.state);
        let is_critical = self
            .rng
            .roll(production::critical_chance(&self.config, &self.state));
        if is_critical {
            let multiplier = production::critical_multiplier(&self.config, &self.state);
            damage = (damage as f64 * multiplier) as i64;
            self.state.stats.critical_hits = self.state.stats.critical_hits.saturating_add(1);
        }

        let wood_gained = self.damage_tree(damage);
        trace!(
            "{} chopped for {} (critical: {}), tree at {}/{}",
            self.state.player_name,
            damage,
            is_critical,
            self.state.tree_hp,
            self.state.max_tree_hp
        );

        self.touch();
        Ok(ChopOutcome {
            wood_gained,
            is_critical,
        })
    }

    /// Raise the axe level by one.
    pub fn upgrade_axe(&mut self) -> GameResult<()> {
        self.spend_wood(pricing::axe_upgrade_cost(self.state.axe_level))?;
        self.state.axe_level = self.state.axe_level.saturating_add(1);
        self.touch();
        Ok(())
    }

    /// Hire a worker by wire identifier (`ptit_lu`, `mathieu`, `vico`).
    pub fn buy_worker(&mut self, worker: &str) -> GameResult<()> {
        let kind: WorkerKind = worker.parse()?;
        self.hire(kind)
    }

    /// Hire one worker of `kind`.
    pub fn hire(&mut self, kind: WorkerKind) -> GameResult<()> {
        let owned = self.state.workers.count(kind);
        self.spend_wood(pricing::worker_cost(kind, owned))?;
        let slot = self.state.workers.count_mut(kind);
        *slot = slot.saturating_add(1);
        self.state.stats.workers_hired = self.state.stats.workers_hired.saturating_add(1);
        self.touch();
        Ok(())
    }

    /// Buy an upgrade level by wire identifier (`auto_clicker`,
    /// `lumberjack_school`, `brewery_bonus`, `golden_axe`).
    pub fn buy_upgrade(&mut self, upgrade: &str) -> GameResult<()> {
        let kind: UpgradeKind = upgrade.parse()?;
        self.purchase_upgrade(kind)
    }

    /// Buy one level of `kind`.
    pub fn purchase_upgrade(&mut self, kind: UpgradeKind) -> GameResult<()> {
        let level = self.state.upgrades.level(kind);
        self.spend_wood(pricing::upgrade_cost(kind, level))?;
        let slot = self.state.upgrades.level_mut(kind);
        *slot = slot.saturating_add(1);
        self.touch();
        Ok(())
    }

    /// Trade wood for one beer.
    pub fn buy_beer(&mut self) -> GameResult<()> {
        self.spend_wood(pricing::beer_cost(self.state.beer))?;
        self.state.beer = self.state.beer.saturating_add(1);
        self.state.stats.total_beers_consumed =
            self.state.stats.total_beers_consumed.saturating_add(1);
        self.touch();
        Ok(())
    }

    /// Whether enough beer has been brewed to prestige.
    #[must_use]
    pub fn can_prestige(&self) -> bool {
        self.state.beer >= self.config.prestige_beers
    }

    /// Trade the current run for permanent prestige points.
    ///
    /// Grants one point per hundred beers, then resets resources, axe,
    /// workers and upgrades. Statistics and existing points carry over.
    /// Returns the points gained.
    pub fn prestige(&mut self) -> GameResult<i64> {
        if !self.can_prestige() {
            return Err(GameError::InsufficientResources {
                resource: Resource::Beer,
                need: self.config.prestige_beers,
                have: self.state.beer,
            });
        }

        let gained = self.state.beer / 100;
        self.state.prestige_points = self.state.prestige_points.saturating_add(gained);
        self.state.stats.prestige_count = self.state.stats.prestige_count.saturating_add(1);

        self.state.wood = 0;
        self.state.beer = 0;
        self.state.axe_level = 1;
        self.state.workers = Workers::default();
        self.state.upgrades = Upgrades::default();
        self.respawn_tree();
        self.touch();

        debug!(
            "{} prestiged for {} points ({} total)",
            self.state.player_name, gained, self.state.prestige_points
        );
        Ok(gained)
    }

    /// Whether the beer target has been reached. Informational only.
    #[must_use]
    pub fn is_game_won(&self) -> bool {
        self.state.beer >= self.config.target_beers
    }

    // === Passive Production ===

    /// Apply one tick of worker damage if at least a second has passed
    /// since the last update.
    ///
    /// At most one tick is applied per call no matter how long the gap was.
    /// The timestamp only moves when workers actually deal damage, so an
    /// idle player's next tick stays due. Returns the wood harvested.
    pub fn process_workers(&mut self) -> i64 {
        if self.clock.now_ms() - self.state.last_update < SECOND_MS {
            return 0;
        }

        let damage = production::worker_tick_damage(&self.state);
        if damage <= 0 {
            return 0;
        }

        let wood_gained = self.damage_tree(damage);
        self.touch();
        wood_gained
    }

    // === Queries ===

    /// Current price of every purchase.
    #[must_use]
    pub fn prices(&self) -> Prices {
        Prices::for_state(&self.state)
    }

    /// Milliseconds since the game started. Negative if the start time lies
    /// in the future.
    #[must_use]
    pub fn game_duration_ms(&self) -> Millis {
        self.clock.now_ms() - self.state.start_time
    }

    // === Internals ===

    /// Deal `damage` to the tree, harvesting and respawning it if felled.
    fn damage_tree(&mut self, damage: i64) -> i64 {
        self.state.tree_hp = self.state.tree_hp.saturating_sub(damage);
        if self.state.tree_alive() {
            return 0;
        }
        let wood_gained = self.harvest();
        self.respawn_tree();
        wood_gained
    }

    fn harvest(&mut self) -> i64 {
        let base = self
            .rng
            .gen_range_inclusive(self.config.wood_min, self.config.wood_max);
        let wood_gained = production::harvest_yield(&self.config, &self.state, base);

        self.state.wood = self.state.wood.saturating_add(wood_gained);
        self.state.stats.total_trees_chopped =
            self.state.stats.total_trees_chopped.saturating_add(1);
        self.state.stats.total_wood_gained =
            self.state.stats.total_wood_gained.saturating_add(wood_gained);

        debug!(
            "{} harvested a tree for {} wood",
            self.state.player_name, wood_gained
        );
        wood_gained
    }

    fn respawn_tree(&mut self) {
        self.state.max_tree_hp = self
            .rng
            .gen_range_inclusive(self.config.tree_min_hp, self.config.tree_max_hp);
        self.state.tree_hp = self.state.max_tree_hp;
    }

    fn spend_wood(&mut self, cost: i64) -> GameResult<()> {
        if self.state.wood < cost {
            return Err(GameError::not_enough_wood(cost, self.state.wood));
        }
        self.state.wood -= cost;
        Ok(())
    }

    fn touch(&mut self) {
        self.state.last_update = self.clock.now_ms();
    }
}
