//! Criterion benchmarks for the knapsack solvers.
//!
//! Uses deterministic synthetic catalogs so results are comparable across
//! runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_knapsack::exhaustive::{ExhaustiveIterativeSolver, ExhaustiveRecursiveSolver};
use u_knapsack::model::{Item, ItemCatalog, KnapsackState};
use u_knapsack::random::{RandomImprovementSolver, RandomRestartSolver};
use u_knapsack::solver::{create_rng, Solver};

// ===========================================================================
// Synthetic instances
// ===========================================================================

/// `n` items with pseudo-random numbers and capacities at ~40% of the
/// totals.
fn instance(n: i64) -> (KnapsackState, ItemCatalog) {
    let catalog: ItemCatalog = (0..n)
        .map(|i| {
            Item::new(
                format!("item{i}"),
                (i * 37) % 50 + 1,
                (i * 17) % 13 + 1,
                (i * 29) % 11 + 1,
            )
        })
        .collect();
    let state = KnapsackState::new(
        catalog.total_weight() * 2 / 5,
        catalog.total_volume() * 2 / 5,
    );
    (state, catalog)
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_exhaustive(c: &mut Criterion) {
    let mut group = c.benchmark_group("exhaustive");
    group.sample_size(10);

    for &n in &[10i64, 14, 18] {
        let (initial, catalog) = instance(n);
        group.bench_with_input(
            BenchmarkId::new("recursive", n),
            &(&initial, &catalog),
            |b, (s, cat)| {
                b.iter(|| {
                    let result = ExhaustiveRecursiveSolver
                        .solve(black_box(s), black_box(cat), &mut create_rng(Some(0)))
                        .unwrap();
                    black_box(result)
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("iterative", n),
            &(&initial, &catalog),
            |b, (s, cat)| {
                b.iter(|| {
                    let result = ExhaustiveIterativeSolver
                        .solve(black_box(s), black_box(cat), &mut create_rng(Some(0)))
                        .unwrap();
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("random");
    group.sample_size(10);

    for &n in &[50i64, 200, 1000] {
        let (initial, catalog) = instance(n);
        let restart = RandomRestartSolver::new(100);
        let improvement = RandomImprovementSolver::new(500);

        group.bench_with_input(
            BenchmarkId::new("restart", n),
            &(&initial, &catalog),
            |b, (s, cat)| {
                let mut rng = create_rng(Some(42));
                b.iter(|| {
                    black_box(
                        restart
                            .solve(black_box(s), black_box(cat), &mut rng)
                            .unwrap(),
                    )
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("improvement", n),
            &(&initial, &catalog),
            |b, (s, cat)| {
                let mut rng = create_rng(Some(42));
                b.iter(|| {
                    black_box(
                        improvement
                            .solve(black_box(s), black_box(cat), &mut rng)
                            .unwrap(),
                    )
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_exhaustive, bench_random);
criterion_main!(benches);
