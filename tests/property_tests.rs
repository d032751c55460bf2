//! Property-based tests for engine invariants.
//!
//! Random action sequences are applied to seeded games; after every step
//! the tree, the balances and the statistics must stay consistent.

use proptest::prelude::*;

use lumberjack_idle::rules::pricing::{axe_upgrade_cost, beer_cost, upgrade_cost, worker_cost};
use lumberjack_idle::{Game, GameConfig, ManualClock, Stats, UpgradeKind, WorkerKind};

#[derive(Clone, Debug)]
enum Step {
    Chop,
    UpgradeAxe,
    Hire(WorkerKind),
    Upgrade(UpgradeKind),
    Beer,
    Prestige,
    Wait(i64),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        6 => Just(Step::Chop),
        1 => Just(Step::UpgradeAxe),
        1 => prop::sample::select(WorkerKind::ALL.to_vec()).prop_map(Step::Hire),
        1 => prop::sample::select(UpgradeKind::ALL.to_vec()).prop_map(Step::Upgrade),
        1 => Just(Step::Beer),
        1 => Just(Step::Prestige),
        2 => (0i64..3_000).prop_map(Step::Wait),
    ]
}

fn stats_never_shrink(before: &Stats, after: &Stats) -> bool {
    after.total_trees_chopped >= before.total_trees_chopped
        && after.total_wood_gained >= before.total_wood_gained
        && after.total_beers_consumed >= before.total_beers_consumed
        && after.total_clicks >= before.total_clicks
        && after.workers_hired >= before.workers_hired
        && after.critical_hits >= before.critical_hits
        && after.prestige_count >= before.prestige_count
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Any sequence of actions keeps the tree alive and within bounds,
    /// never drives wood negative and never shrinks a statistic.
    #[test]
    fn prop_action_sequences_keep_invariants(
        seed in any::<u64>(),
        starting_wood in 0i64..5_000,
        steps in prop::collection::vec(step(), 1..200),
    ) {
        let mut game = Game::builder("prop")
            .seed(seed)
            .clock(ManualClock::new(0))
            .build()
            .unwrap();
        game.state.wood = starting_wood;
        let config = GameConfig::default();

        for step in steps {
            let before = game.state.clone();
            match step {
                Step::Chop => { game.chop_tree().unwrap(); }
                Step::UpgradeAxe => { let _ = game.upgrade_axe(); }
                Step::Hire(kind) => { let _ = game.hire(kind); }
                Step::Upgrade(kind) => { let _ = game.purchase_upgrade(kind); }
                Step::Beer => { let _ = game.buy_beer(); }
                Step::Prestige => { let _ = game.prestige(); }
                Step::Wait(ms) => {
                    game.clock().advance(ms);
                    game.process_workers();
                }
            }

            let state = game.state();
            prop_assert!(state.tree_hp > 0);
            prop_assert!(state.tree_hp <= state.max_tree_hp);
            prop_assert!(state.max_tree_hp >= config.tree_min_hp);
            prop_assert!(state.max_tree_hp <= config.tree_max_hp);
            prop_assert!(state.wood >= 0);
            prop_assert!(state.axe_level >= 1);
            prop_assert!(stats_never_shrink(&before.stats, &state.stats));
        }
    }

    /// A failed purchase leaves the state exactly as it was.
    #[test]
    fn prop_failed_purchase_is_atomic(seed in any::<u64>(), wood in 0i64..25) {
        let mut game = Game::builder("prop")
            .seed(seed)
            .clock(ManualClock::new(0))
            .build()
            .unwrap();
        game.state.wood = wood;
        let before = game.state.clone();

        prop_assert!(game.hire(WorkerKind::PtitLu).is_err());
        prop_assert!(game.purchase_upgrade(UpgradeKind::AutoClicker).is_err());
        prop_assert!(game.prestige().is_err());
        prop_assert_eq!(&game.state, &before);
    }

    /// Worker, upgrade and axe prices strictly increase; beer never decreases.
    #[test]
    fn prop_cost_curves_increase(owned in 0i64..50) {
        for kind in WorkerKind::ALL {
            prop_assert!(worker_cost(kind, owned + 1) > worker_cost(kind, owned));
        }
        for kind in UpgradeKind::ALL {
            prop_assert!(upgrade_cost(kind, owned + 1) > upgrade_cost(kind, owned));
        }
        prop_assert!(axe_upgrade_cost(owned + 2) > axe_upgrade_cost(owned + 1));
        prop_assert!(beer_cost(owned + 1) >= beer_cost(owned));
    }
}
