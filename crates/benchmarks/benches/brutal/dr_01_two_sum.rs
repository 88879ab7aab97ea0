//! # DR-01 Two Sum Brutal Benchmarks
//!
//! Claims to validate:
//! - Single pass: time grows linearly with input length
//! - Early exit: a pair near the front returns without scanning the rest
//! - Preallocating the seen-map beats growing it on demand
//!
//! Brutal Conditions:
//! - 1,000,000 element inputs
//! - No pair present (full scan, full seen-map)
//! - Every value repeated (seen-map never grows past one entry)

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use dr_01_two_sum::domain::{find_pair_indices, find_pair_indices_lazy};
use dr_benchmarks::utils::{generate_pairless_sequence, generate_sequence};

pub fn brutal_full_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("dr-01/brutal/full_scan");
    group.measurement_time(Duration::from_secs(10));

    for len in [1_000usize, 100_000, 1_000_000] {
        let sequence = generate_pairless_sequence(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("preallocated", len), &sequence, |b, seq| {
            b.iter(|| black_box(find_pair_indices(black_box(seq), 1)))
        });
        group.bench_with_input(BenchmarkId::new("lazy", len), &sequence, |b, seq| {
            b.iter(|| black_box(find_pair_indices_lazy(black_box(seq), 1)))
        });
    }

    group.finish();
}

pub fn brutal_early_exit(c: &mut Criterion) {
    let mut group = c.benchmark_group("dr-01/brutal/early_exit");

    let mut sequence = generate_pairless_sequence(1_000_000);
    sequence[0] = 1;
    sequence[1] = 0;

    group.bench_function("pair_at_front_of_1m", |b| {
        b.iter(|| black_box(find_pair_indices(black_box(&sequence), 1)))
    });

    group.finish();
}

pub fn brutal_repeated_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("dr-01/brutal/repeated_values");

    let sequence = vec![7i64; 1_000_000];
    group.throughput(Throughput::Elements(sequence.len() as u64));
    group.bench_function("all_equal_no_pair", |b| {
        b.iter(|| black_box(find_pair_indices_lazy(black_box(&sequence), 1)))
    });

    group.finish();
}

pub fn brutal_random_inputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("dr-01/brutal/random");

    let sequence = generate_sequence(100_000, 1_000_000_000, 42);
    group.bench_function("random_100k_unlikely_target", |b| {
        b.iter(|| black_box(find_pair_indices(black_box(&sequence), i64::MAX)))
    });

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    brutal_full_scan(c);
    brutal_early_exit(c);
    brutal_repeated_values(c);
    brutal_random_inputs(c);
}
