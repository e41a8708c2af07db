use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use decsort::prelude::*;
use rand::Rng;
use std::hint::black_box;
use std::time::Duration;

fn parse_key(s: &str) -> i64 {
    s.parse().unwrap()
}

fn bench_1m_parsed(c: &mut Criterion) {
    let mut group = c.benchmark_group("1M Parsed Keys");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(60)); // Increase time for large sort setup overhead

    // Dataset generation
    let mut rng = rand::rng();
    let count = 1_000_000;

    let numbers: Vec<String> = (0..count)
        .map(|_| rng.random_range(-1_000_000_000i64..1_000_000_000).to_string())
        .collect();

    // Calculate approximate size for throughput
    let total_bytes: usize = numbers.iter().map(|s| s.len()).sum();
    group.throughput(Throughput::Bytes(total_bytes as u64));

    group.bench_function("decsort_mut (key once)", |b| {
        b.iter_batched(
            || numbers.clone(),
            |mut data| decsort_mut(black_box(&mut data), |s| parse_key(s)),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("slice::sort_by_cached_key", |b| {
        b.iter_batched(
            || numbers.clone(),
            |mut data| data.sort_by_cached_key(|s| parse_key(s)),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("slice::sort_by (recompute)", |b| {
        b.iter_batched(
            || numbers.clone(),
            |mut data| data.sort_by(|a, b| parse_key(a).cmp(&parse_key(b))),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_1m_parsed);
criterion_main!(benches);
