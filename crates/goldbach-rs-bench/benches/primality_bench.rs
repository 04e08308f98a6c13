//! Primality oracle benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use goldbach_rs_bench::{BENCH_COMPOSITES, BENCH_PRIMES};
use goldbach_rs_core::primality::is_prime;
use goldbach_rs_harness::reference::is_prime_naive;

fn bench_is_prime(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_prime");
    group.throughput(Throughput::Elements(1));

    for &n in &BENCH_PRIMES {
        group.bench_with_input(BenchmarkId::new("prime", n), &n, |b, &n| {
            b.iter(|| black_box(is_prime(black_box(n))));
        });
    }
    for &n in &BENCH_COMPOSITES {
        group.bench_with_input(BenchmarkId::new("composite", n), &n, |b, &n| {
            b.iter(|| black_box(is_prime(black_box(n))));
        });
    }
    group.finish();
}

fn bench_against_trial_division(c: &mut Criterion) {
    // The naive scan is only tractable for the smaller corpus entries.
    let values: &[u64] = &[9_973, 104_729, 1_000_003];
    let mut group = c.benchmark_group("is_prime_vs_naive");
    group.throughput(Throughput::Elements(1));

    for &n in values {
        group.bench_with_input(BenchmarkId::new("witness", n), &n, |b, &n| {
            b.iter(|| black_box(is_prime(black_box(n))));
        });
        group.bench_with_input(BenchmarkId::new("trial_division", n), &n, |b, &n| {
            b.iter(|| black_box(is_prime_naive(black_box(n))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_is_prime, bench_against_trial_division);
criterion_main!(benches);
