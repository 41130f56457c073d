//! Criterion micro-benchmarks for dealing and pouring.
//!
//! Focus:
//! - Deal generation across catalog difficulty
//! - Hint-driven pour cascades with history recording
//! - Legal-move enumeration on mid-game boards

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use water_sort::core::GameRng;
use water_sort::level::{LevelCatalog, LevelGenerator};
use water_sort::session::GameSession;

fn session_mid_game(level: u32, seed: u64) -> GameSession {
    let mut session = GameSession::standard(seed);
    session
        .start_level(level)
        .expect("standard level loads");
    for _ in 0..8 {
        let Some((s, t)) = session.hint() else { break };
        let _ = session.attempt_pour(s, t);
    }
    session
}

fn bench_deal(c: &mut Criterion) {
    let catalog = LevelCatalog::standard();
    for level in [10u32, 50, 100] {
        let spec = catalog.get(level).expect("standard level").clone();
        c.bench_function(&format!("generator.deal.level_{level}"), |b| {
            b.iter_batched(
                || GameRng::new(u64::from(level)),
                |mut rng| black_box(LevelGenerator::generate(&spec, &mut rng)),
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_pour_cascade(c: &mut Criterion) {
    c.bench_function("session.pour_cascade.level_50", |b| {
        b.iter_batched(
            || {
                let mut session = GameSession::standard(0xC0FFEE);
                session.start_level(50).expect("standard level loads");
                session
            },
            |mut session| {
                for _ in 0..64 {
                    let Some((s, t)) = session.hint() else { break };
                    black_box(session.attempt_pour(s, t).ok());
                }
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_legal_pours(c: &mut Criterion) {
    c.bench_function("session.legal_pours.level_100", |b| {
        b.iter_batched(
            || session_mid_game(100, 777),
            |session| {
                black_box(session.legal_pours());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(pour_benches, bench_deal, bench_pour_cascade, bench_legal_pours);
criterion_main!(pour_benches);