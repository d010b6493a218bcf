//! Assignment throughput benchmarks: prepare + place for roster sizes typical of an event.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rallypoint::assignment::normalize::TeamLimits;
use rallypoint::assignment::preparer::prepare_players_for_assignment;
use rallypoint::assignment::strategy::{place_aggressive, place_balanced_round_robin};
use rallypoint::data::directory::{Candidate, PlayerDirectory};
use rallypoint::data::selection::Selection;

fn directory(size: usize) -> PlayerDirectory {
    (0..size)
        .map(|i| Candidate {
            name: format!("player{i:03}"),
            power: ((i * 7919) % 1000) as f64 * 1_000.0,
            secondary_stat: (i % 13) as f64,
            category: ["infantry", "lancer", "marksman"][i % 3].to_string(),
        })
        .collect()
}

fn selections(size: usize) -> Vec<Selection> {
    (0..size)
        .map(|i| {
            let name = format!("player{i:03}");
            if i % 4 == 3 {
                Selection::substitute(name)
            } else {
                Selection::starter(name)
            }
        })
        .collect()
}

fn bench_assignment(c: &mut Criterion) {
    let limits = TeamLimits::default();
    let mut group = c.benchmark_group("assignment");

    for size in [20usize, 60, 200] {
        let directory = directory(size);
        let selections = selections(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("prepare", size), &size, |b, _| {
            b.iter(|| black_box(prepare_players_for_assignment(&selections, &directory)));
        });

        let prepared = prepare_players_for_assignment(&selections, &directory);
        group.bench_with_input(
            BenchmarkId::new("balanced_round_robin", size),
            &size,
            |b, _| {
                b.iter(|| {
                    black_box(place_balanced_round_robin(
                        &prepared.starters,
                        &prepared.substitutes,
                        &limits,
                    ))
                });
            },
        );
        group.bench_with_input(BenchmarkId::new("aggressive", size), &size, |b, _| {
            b.iter(|| {
                black_box(place_aggressive(
                    &prepared.starters,
                    &prepared.substitutes,
                    &limits,
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_assignment);
criterion_main!(benches);
