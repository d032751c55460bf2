//! Benchmarks for the hot engine paths.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use lumberjack_idle::{ActionRequest, Game, GameConfig, GameRegistry, GameService, ManualClock};

fn bench_chop(c: &mut Criterion) {
    let mut game = Game::builder("bench").seed(42).build().unwrap();

    c.bench_function("chop_tree", |b| {
        b.iter(|| black_box(game.chop_tree()));
    });
}

fn bench_process_workers(c: &mut Criterion) {
    let mut game = Game::builder("bench")
        .seed(42)
        .clock(ManualClock::new(0))
        .build()
        .unwrap();
    game.state.workers.vico = 10;
    game.state.upgrades.lumberjack_school = 3;

    c.bench_function("process_workers_tick", |b| {
        b.iter(|| {
            game.clock().advance(1_000);
            black_box(game.process_workers())
        });
    });
}

fn bench_prices(c: &mut Criterion) {
    let game = Game::builder("bench").seed(42).build().unwrap();

    c.bench_function("prices", |b| {
        b.iter(|| black_box(game.prices()));
    });
}

fn bench_service_action(c: &mut Criterion) {
    let registry = GameRegistry::with_config(GameConfig::default(), ManualClock::new(0)).unwrap();
    let service = GameService::with_registry(registry);
    let chop = ActionRequest::new("bench", "chop");

    c.bench_function("service_chop", |b| {
        b.iter(|| black_box(service.action(&chop)));
    });
}

criterion_group!(
    benches,
    bench_chop,
    bench_process_workers,
    bench_prices,
    bench_service_action
);
criterion_main!(benches);
