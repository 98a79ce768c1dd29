//! Criterion benchmarks for allocation resolution.
//!
//! Uses randomly generated preference lists over a shared artist pool so
//! that conflict density grows with the number of designers.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use u_allot::allocation::{AllocationResolver, FilterMode, ResolverConfig};
use u_allot::conflict::detect_all;
use u_allot::model::{ArtistId, Designer, DesignerId};

// ===========================================================================
// Instance generation
// ===========================================================================

fn random_designers(designers: usize, artists: usize, max_favorites: usize, seed: u64) -> Vec<Designer> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pool: Vec<u128> = (0..artists as u128).collect();
    (0..designers)
        .map(|i| {
            pool.shuffle(&mut rng);
            let k = rng.random_range(0..=max_favorites.min(artists));
            Designer::with_artists(
                DesignerId::from_u128(i as u128 + 1),
                pool[..k].iter().map(|&n| ArtistId::from_u128(n)),
            )
        })
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_all");
    group.sample_size(20);

    for &n in &[10usize, 50, 100] {
        let designers = random_designers(n, 40, 10, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &designers, |b, ds| {
            b.iter(|| black_box(detect_all(black_box(ds), false)))
        });
    }
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    group.sample_size(10);

    let configs = [
        ("symmetric", ResolverConfig::default()),
        // back-reference expansion grows without bound on dense instances
        (
            "legacy",
            ResolverConfig::legacy().with_filter_mode(FilterMode::PairLocal),
        ),
    ];
    for &n in &[10usize, 50, 100] {
        let designers = random_designers(n, 40, 10, 42);
        for (name, config) in &configs {
            group.bench_with_input(
                BenchmarkId::new(*name, n),
                &(designers.clone(), config.clone()),
                |b, (ds, cfg)| {
                    b.iter(|| {
                        let result = AllocationResolver::resolve(black_box(ds), black_box(cfg));
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_detect, bench_resolve);
criterion_main!(benches);
