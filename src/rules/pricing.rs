//! Price curves.
//!
//! Every purchasable follows `trunc(base * growth^owned)`. Worker, upgrade
//! and axe prices strictly increase with the number owned; beer only
//! never decreases, since its small base truncates to the same value for
//! the first few purchases.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerState, UpgradeKind, WorkerKind};

const AXE_BASE_COST: f64 = 15.0;
const AXE_COST_GROWTH: f64 = 1.3;
const BEER_BASE_COST: f64 = 4.0;
const BEER_COST_GROWTH: f64 = 1.08;

fn curve(base: f64, growth: f64, owned: i64) -> i64 {
    (base * growth.powf(owned as f64)) as i64
}

/// Cost to raise the axe from `axe_level` to `axe_level + 1`.
#[must_use]
pub fn axe_upgrade_cost(axe_level: i64) -> i64 {
    curve(AXE_BASE_COST, AXE_COST_GROWTH, axe_level.saturating_sub(1))
}

/// Cost of the next worker of `kind` when `owned` are already hired.
#[must_use]
pub fn worker_cost(kind: WorkerKind, owned: i64) -> i64 {
    curve(kind.base_cost(), kind.cost_growth(), owned)
}

/// Cost of the next level of `kind` at `level`.
#[must_use]
pub fn upgrade_cost(kind: UpgradeKind, level: i64) -> i64 {
    curve(kind.base_cost(), kind.cost_growth(), level)
}

/// Cost of the next beer when `beer` are already owned.
#[must_use]
pub fn beer_cost(beer: i64) -> i64 {
    curve(BEER_BASE_COST, BEER_COST_GROWTH, beer)
}

/// Snapshot of every current price, keyed by purchase name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prices {
    pub axe_upgrade: i64,
    pub ptit_lu: i64,
    pub mathieu: i64,
    pub vico: i64,
    pub beer: i64,
    pub auto_clicker: i64,
    pub lumberjack_school: i64,
    pub brewery_bonus: i64,
    pub golden_axe: i64,
}

impl Prices {
    /// Evaluate all price curves against `state`.
    #[must_use]
    pub fn for_state(state: &PlayerState) -> Self {
        let worker = |kind| worker_cost(kind, state.workers.count(kind));
        let upgrade = |kind| upgrade_cost(kind, state.upgrades.level(kind));

        Self {
            axe_upgrade: axe_upgrade_cost(state.axe_level),
            ptit_lu: worker(WorkerKind::PtitLu),
            mathieu: worker(WorkerKind::Mathieu),
            vico: worker(WorkerKind::Vico),
            beer: beer_cost(state.beer),
            auto_clicker: upgrade(UpgradeKind::AutoClicker),
            lumberjack_school: upgrade(UpgradeKind::LumberjackSchool),
            brewery_bonus: upgrade(UpgradeKind::BreweryBonus),
            golden_axe: upgrade(UpgradeKind::GoldenAxe),
        }
    }
}
