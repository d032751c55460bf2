//! Damage and yield formulas.
//!
//! Pure functions of the player state and tuning. Multipliers stack
//! multiplicatively; every result is truncated toward zero only at the end
//! of its formula.

use crate::core::{GameConfig, PlayerState, WorkerKind};

/// Chop damage bonus per prestige point.
pub const PRESTIGE_DAMAGE_BONUS: f64 = 0.02;
/// Harvest yield bonus per prestige point.
pub const PRESTIGE_HARVEST_BONUS: f64 = 0.05;
/// Harvest yield bonus per brewery level.
pub const BREWERY_BONUS_PER_LEVEL: f64 = 0.5;
/// Worker damage bonus per lumberjack school level.
pub const SCHOOL_BONUS_PER_LEVEL: f64 = 0.25;
/// Flat passive damage per auto-clicker level.
pub const AUTO_CLICKER_DAMAGE: f64 = 0.5;
/// Critical chance added per golden axe level.
pub const GOLDEN_AXE_CRIT_CHANCE: f64 = 0.15;
/// Critical multiplier added per golden axe level.
pub const GOLDEN_AXE_CRIT_MULTIPLIER: f64 = 1.0;

/// Damage multiplier from prestige, shared by chops and workers.
#[must_use]
pub fn prestige_damage_multiplier(state: &PlayerState) -> f64 {
    1.0 + state.prestige_points as f64 * PRESTIGE_DAMAGE_BONUS
}

/// Non-critical chop damage.
#[must_use]
pub fn chop_damage(state: &PlayerState) -> i64 {
    (state.axe_level as f64 * prestige_damage_multiplier(state)) as i64
}

/// Probability that a chop is critical. May exceed 1.0 with enough golden axes.
#[must_use]
pub fn critical_chance(config: &GameConfig, state: &PlayerState) -> f64 {
    config.critical_chance + state.upgrades.golden_axe as f64 * GOLDEN_AXE_CRIT_CHANCE
}

/// Damage multiplier of a critical chop.
#[must_use]
pub fn critical_multiplier(config: &GameConfig, state: &PlayerState) -> f64 {
    config.critical_multiplier + state.upgrades.golden_axe as f64 * GOLDEN_AXE_CRIT_MULTIPLIER
}

/// Combined beer, prestige and brewery multiplier applied to a harvest.
#[must_use]
pub fn harvest_multiplier(config: &GameConfig, state: &PlayerState) -> f64 {
    let beer = 1.0 + state.beer as f64 * config.beer_bonus_per_beer;
    let prestige = 1.0 + state.prestige_points as f64 * PRESTIGE_HARVEST_BONUS;
    let brewery = 1.0 + state.upgrades.brewery_bonus as f64 * BREWERY_BONUS_PER_LEVEL;
    beer * prestige * brewery
}

/// Wood produced by a harvest whose base roll was `base_wood`.
#[must_use]
pub fn harvest_yield(config: &GameConfig, state: &PlayerState, base_wood: i64) -> i64 {
    (base_wood as f64 * harvest_multiplier(config, state)) as i64
}

/// Passive damage dealt by workers and auto-clickers in one tick.
///
/// The school and prestige bonuses scale workers only; auto-clickers add a
/// flat amount afterwards.
#[must_use]
pub fn worker_tick_damage(state: &PlayerState) -> i64 {
    let workers: f64 = WorkerKind::ALL
        .iter()
        .map(|kind| state.workers.count(*kind) as f64 * kind.damage_per_tick())
        .sum();
    let school = 1.0 + state.upgrades.lumberjack_school as f64 * SCHOOL_BONUS_PER_LEVEL;
    let auto_clicker = state.upgrades.auto_clicker as f64 * AUTO_CLICKER_DAMAGE;

    (workers * (school * prestige_damage_multiplier(state)) + auto_clicker) as i64
}
