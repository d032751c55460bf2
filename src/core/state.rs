//! Player state: resources, progression, current tree, statistics.
//!
//! ## PlayerState
//!
//! Everything that belongs to one player:
//! - Resources (wood, beer)
//! - Progression (prestige points, axe level, workers, upgrades)
//! - The tree currently being chopped
//! - Append-only statistics
//! - Start and last-update timestamps
//!
//! Field names double as the JSON keys exposed by the service.

use serde::{Deserialize, Serialize};

use super::clock::Millis;
use super::kinds::{UpgradeKind, WorkerKind};

/// Owned worker counts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workers {
    pub ptit_lu: i64,
    pub mathieu: i64,
    pub vico: i64,
}

impl Workers {
    /// Number of workers of `kind`.
    #[must_use]
    pub fn count(&self, kind: WorkerKind) -> i64 {
        match kind {
            WorkerKind::PtitLu => self.ptit_lu,
            WorkerKind::Mathieu => self.mathieu,
            WorkerKind::Vico => self.vico,
        }
    }

    /// Mutable count of workers of `kind`.
    pub fn count_mut(&mut self, kind: WorkerKind) -> &mut i64 {
        match kind {
            WorkerKind::PtitLu => &mut self.ptit_lu,
            WorkerKind::Mathieu => &mut self.mathieu,
            WorkerKind::Vico => &mut self.vico,
        }
    }
}

/// Owned upgrade levels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upgrades {
    pub auto_clicker: i64,
    pub lumberjack_school: i64,
    pub brewery_bonus: i64,
    pub golden_axe: i64,
}

impl Upgrades {
    /// Level of `kind`.
    #[must_use]
    pub fn level(&self, kind: UpgradeKind) -> i64 {
        match kind {
            UpgradeKind::AutoClicker => self.auto_clicker,
            UpgradeKind::LumberjackSchool => self.lumberjack_school,
            UpgradeKind::BreweryBonus => self.brewery_bonus,
            UpgradeKind::GoldenAxe => self.golden_axe,
        }
    }

    /// Mutable level of `kind`.
    pub fn level_mut(&mut self, kind: UpgradeKind) -> &mut i64 {
        match kind {
            UpgradeKind::AutoClicker => &mut self.auto_clicker,
            UpgradeKind::LumberjackSchool => &mut self.lumberjack_school,
            UpgradeKind::BreweryBonus => &mut self.brewery_bonus,
            UpgradeKind::GoldenAxe => &mut self.golden_axe,
        }
    }
}

/// Lifetime statistics. Counters only ever grow; prestige does not reset them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_trees_chopped: i64,
    pub total_wood_gained: i64,
    pub total_beers_consumed: i64,
    pub total_clicks: i64,
    pub workers_hired: i64,
    pub critical_hits: i64,
    /// Reserved; nothing unlocks achievements yet.
    pub achievements_unlocked: Vec<String>,
    pub prestige_count: i64,
}

/// Complete state of one player's game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Opaque player identifier.
    pub player_name: String,

    // === Resources ===
    pub wood: i64,
    pub beer: i64,

    // === Progression ===
    /// Permanent bonus points earned by prestiging.
    pub prestige_points: i64,
    /// Base chop damage; starts at 1.
    pub axe_level: i64,
    pub workers: Workers,
    pub upgrades: Upgrades,

    // === Current Tree ===
    pub tree_hp: i64,
    pub max_tree_hp: i64,

    pub stats: Stats,

    // === Timestamps (ms since epoch) ===
    pub start_time: Millis,
    /// Touched by every state-changing operation; gates passive production.
    pub last_update: Millis,
}

impl PlayerState {
    /// Fresh state for `player_name` at time `now`.
    ///
    /// The tree is a placeholder until the engine spawns a real one.
    #[must_use]
    pub fn new(player_name: impl Into<String>, now: Millis) -> Self {
        Self {
            player_name: player_name.into(),
            wood: 0,
            beer: 0,
            prestige_points: 0,
            axe_level: 1,
            workers: Workers::default(),
            upgrades: Upgrades::default(),
            tree_hp: 5,
            max_tree_hp: 5,
            stats: Stats::default(),
            start_time: now,
            last_update: now,
        }
    }

    /// Whether the current tree still stands.
    #[must_use]
    pub fn tree_alive(&self) -> bool {
        self.tree_hp > 0
    }
}
