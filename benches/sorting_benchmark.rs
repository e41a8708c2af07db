use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use decsort::prelude::*;
use rand::Rng;
use std::hint::black_box;

fn parse_key(s: &str) -> i64 {
    s.parse().unwrap()
}

fn bench_parsed_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("Parsed Key Sort");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 10_000;

    let numbers: Vec<String> = (0..count)
        .map(|_| rng.random_range(-1_000_000_000i64..1_000_000_000).to_string())
        .collect();

    // Decsort (one extraction per element)
    group.bench_function("decsort_mut (key once)", |b| {
        b.iter_batched(
            || numbers.clone(),
            |mut data| decsort_mut(black_box(&mut data), |s| parse_key(s)),
            BatchSize::SmallInput,
        )
    });

    // Std cached-key sort
    group.bench_function("slice::sort_by_cached_key", |b| {
        b.iter_batched(
            || numbers.clone(),
            |mut data| data.sort_by_cached_key(|s| parse_key(s)),
            BatchSize::SmallInput,
        )
    });

    // Std comparator sort, re-parsing on every comparison
    group.bench_function("slice::sort_by (recompute)", |b| {
        b.iter_batched(
            || numbers.clone(),
            |mut data| data.sort_by(|a, b| parse_key(a).cmp(&parse_key(b))),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_derived_geometry_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("Derived Geometry Key");
    group.sample_size(10);

    let mut rng = rand::rng();
    let count = 10_000;

    let points: Vec<(f64, f64)> = (0..count)
        .map(|_| (rng.random_range(-100.0..100.0), rng.random_range(-100.0..100.0)))
        .collect();

    group.bench_function("decsort_mut_by (key once)", |b| {
        b.iter_batched(
            || points.clone(),
            |mut data| {
                decsort_mut_by(black_box(&mut data), |p| p.0.hypot(p.1), |a, b| a < b)
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("slice::sort_by (recompute)", |b| {
        b.iter_batched(
            || points.clone(),
            |mut data| data.sort_by(|a, b| a.0.hypot(a.1).total_cmp(&b.0.hypot(b.1))),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_parsed_keys, bench_derived_geometry_keys);
criterion_main!(benches);
