//! Worker and upgrade catalogs.
//!
//! Both catalogs are fixed: each kind carries its identifier, its price
//! curve (`base * growth^owned`) and, for workers, the damage it deals per
//! passive tick.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Hireable worker types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerKind {
    /// Cheap apprentice.
    PtitLu,
    /// Seasoned woodcutter.
    Mathieu,
    /// Heavy hitter.
    Vico,
}

impl WorkerKind {
    /// All worker kinds in catalog order.
    pub const ALL: [WorkerKind; 3] = [WorkerKind::PtitLu, WorkerKind::Mathieu, WorkerKind::Vico];

    /// Wire identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            WorkerKind::PtitLu => "ptit_lu",
            WorkerKind::Mathieu => "mathieu",
            WorkerKind::Vico => "vico",
        }
    }

    /// Cost of the first worker of this kind.
    #[must_use]
    pub const fn base_cost(self) -> f64 {
        match self {
            WorkerKind::PtitLu => 25.0,
            WorkerKind::Mathieu => 100.0,
            WorkerKind::Vico => 300.0,
        }
    }

    /// Price growth per worker already owned.
    #[must_use]
    pub const fn cost_growth(self) -> f64 {
        match self {
            WorkerKind::PtitLu => 1.6,
            WorkerKind::Mathieu => 1.5,
            WorkerKind::Vico => 1.35,
        }
    }

    /// Tree damage dealt per passive tick by one worker.
    #[must_use]
    pub const fn damage_per_tick(self) -> f64 {
        match self {
            WorkerKind::PtitLu => 0.8,
            WorkerKind::Mathieu => 2.5,
            WorkerKind::Vico => 8.0,
        }
    }
}

impl fmt::Display for WorkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for WorkerKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkerKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| GameError::UnknownWorkerType(s.to_string()))
    }
}

/// Purchasable upgrade types. Each can be bought repeatedly; the owned
/// count is its level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeKind {
    /// Flat passive damage per tick.
    AutoClicker,
    /// Multiplies worker damage.
    LumberjackSchool,
    /// Multiplies harvest yield.
    BreweryBonus,
    /// Raises critical chance and multiplier.
    GoldenAxe,
}

impl UpgradeKind {
    /// All upgrade kinds in catalog order.
    pub const ALL: [UpgradeKind; 4] = [
        UpgradeKind::AutoClicker,
        UpgradeKind::LumberjackSchool,
        UpgradeKind::BreweryBonus,
        UpgradeKind::GoldenAxe,
    ];

    /// Wire identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            UpgradeKind::AutoClicker => "auto_clicker",
            UpgradeKind::LumberjackSchool => "lumberjack_school",
            UpgradeKind::BreweryBonus => "brewery_bonus",
            UpgradeKind::GoldenAxe => "golden_axe",
        }
    }

    /// Cost of the first level.
    #[must_use]
    pub const fn base_cost(self) -> f64 {
        match self {
            UpgradeKind::AutoClicker => 75.0,
            UpgradeKind::LumberjackSchool => 500.0,
            UpgradeKind::BreweryBonus => 200.0,
            UpgradeKind::GoldenAxe => 1000.0,
        }
    }

    /// Price growth per level already owned.
    #[must_use]
    pub const fn cost_growth(self) -> f64 {
        match self {
            UpgradeKind::AutoClicker => 1.4,
            UpgradeKind::LumberjackSchool => 1.8,
            UpgradeKind::BreweryBonus => 2.0,
            UpgradeKind::GoldenAxe => 1.2,
        }
    }
}

impl fmt::Display for UpgradeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for UpgradeKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UpgradeKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| GameError::UnknownUpgradeType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_ids_round_trip() {
        for kind in WorkerKind::ALL {
            assert_eq!(kind.id().parse::<WorkerKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_upgrade_ids_round_trip() {
        for kind in UpgradeKind::ALL {
            assert_eq!(kind.id().parse::<UpgradeKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_ids() {
        assert_eq!(
            "lumberjack".parse::<WorkerKind>(),
            Err(GameError::UnknownWorkerType("lumberjack".into()))
        );
        assert_eq!(
            "PTIT_LU".parse::<WorkerKind>(),
            Err(GameError::UnknownWorkerType("PTIT_LU".into()))
        );
        assert_eq!(
            "".parse::<UpgradeKind>(),
            Err(GameError::UnknownUpgradeType(String::new()))
        );
    }

    #[test]
    fn test_serde_uses_wire_ids() {
        let json = serde_json::to_string(&UpgradeKind::LumberjackSchool).unwrap();
        assert_eq!(json, "\"lumberjack_school\"");

        let kind: WorkerKind = serde_json::from_str("\"ptit_lu\"").unwrap();
        assert_eq!(kind, WorkerKind::PtitLu);
    }

    #[test]
    fn test_growth_above_one() {
        assert!(WorkerKind::ALL.iter().all(|k| k.cost_growth() > 1.0));
        assert!(UpgradeKind::ALL.iter().all(|k| k.cost_growth() > 1.0));
    }
}
