//! Benchmark for raw mixing throughput.
//!
//! TARGET: 100,000,000 draws per second per core
//!
//! Run with: cargo bench --package kismet_hash --bench mix_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use kismet_hash::{derive_key, get_u128, noise_2d, noise_3d, KeyVariant, MixAlgorithm};

fn benchmark_mixers(c: &mut Criterion) {
    let mut group = c.benchmark_group("mix32");

    for algorithm in MixAlgorithm::ALL {
        group.bench_function(algorithm.name(), |b| {
            let mut index = 0u32;
            b.iter(|| {
                index = index.wrapping_add(1);
                black_box(algorithm.mix32(black_box(index), black_box(42)))
            });
        });
    }

    group.finish();
}

fn benchmark_million_folded_draws(c: &mut Criterion) {
    let mut group = c.benchmark_group("million_draws");
    group.throughput(Throughput::Elements(1_000_000));
    group.sample_size(10);

    group.bench_function("noise_2d", |b| {
        b.iter(|| {
            for i in 0..1_000_000 {
                black_box(noise_2d(i % 1000, i / 1000, 7, MixAlgorithm::BalancedMix));
            }
        });
    });

    group.bench_function("noise_3d", |b| {
        b.iter(|| {
            for i in 0..1_000_000 {
                black_box(noise_3d(i % 100, (i / 100) % 100, i / 10_000, 7, MixAlgorithm::BalancedMix));
            }
        });
    });

    group.finish();
}

fn benchmark_wide_and_keys(c: &mut Criterion) {
    c.bench_function("get_u128", |b| {
        let mut index = 0u32;
        b.iter(|| {
            index = index.wrapping_add(1);
            black_box(get_u128(black_box(index), 9, MixAlgorithm::RotationalMix))
        });
    });

    c.bench_function("derive_key_advanced", |b| {
        let mut position = 0u32;
        b.iter(|| {
            position = position.wrapping_add(1);
            black_box(derive_key(black_box(position), 9, KeyVariant::Advanced))
        });
    });
}

criterion_group!(
    benches,
    benchmark_mixers,
    benchmark_million_folded_draws,
    benchmark_wide_and_keys
);
criterion_main!(benches);
