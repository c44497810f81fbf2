//! Benchmark for noise sampling performance.
//!
//! TARGET: 1,000,000 gradient samples per second
//!
//! Run with: cargo bench --package kismet_noise --bench noise_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use kismet_noise::{
    cellular_2d, fbm, gradient_2d, gradient_3d_deriv, ridge, simplex_2d, simplex_3d, uber,
    CellularParams, FractalParams, MixAlgorithm, RidgeParams, UberParams, Vec2, Vec3,
};

const ALG: MixAlgorithm = MixAlgorithm::BalancedMix;

fn benchmark_single_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_sample");

    group.bench_function("gradient_2d", |b| {
        let mut x = 0.0f32;
        b.iter(|| {
            x += 0.1;
            black_box(gradient_2d(black_box(Vec2::new(x, x * 0.7)), 42, ALG))
        });
    });

    group.bench_function("gradient_3d_deriv", |b| {
        let mut x = 0.0f32;
        b.iter(|| {
            x += 0.1;
            black_box(gradient_3d_deriv(black_box(Vec3::new(x, x * 0.7, x * 0.3)), 42, ALG))
        });
    });

    group.bench_function("simplex_2d", |b| {
        let mut x = 0.0f32;
        b.iter(|| {
            x += 0.1;
            black_box(simplex_2d(black_box(Vec2::new(x, x * 0.7)), 42, ALG))
        });
    });

    group.bench_function("simplex_3d", |b| {
        let mut x = 0.0f32;
        b.iter(|| {
            x += 0.1;
            black_box(simplex_3d(black_box(Vec3::new(x, x * 0.7, x * 0.3)), 42, ALG))
        });
    });

    group.finish();
}

fn benchmark_million_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("million_samples");
    group.throughput(Throughput::Elements(1_000_000));
    group.sample_size(10);

    group.bench_function("1M_gradient_samples", |b| {
        b.iter(|| {
            for i in 0..1_000_000 {
                let x = (i % 1000) as f32 * 0.1;
                let y = (i / 1000) as f32 * 0.1;
                black_box(gradient_2d(Vec2::new(x, y), 42, ALG));
            }
        });
    });

    group.finish();
}

fn benchmark_fractals(c: &mut Criterion) {
    let params = FractalParams {
        octaves: 6,
        ..FractalParams::default()
    };

    c.bench_function("fbm_6_octaves", |b| {
        let mut x = 0.0f32;
        b.iter(|| {
            x += 0.1;
            black_box(fbm(black_box(Vec2::new(x, x * 0.7)), 42, &params))
        });
    });

    c.bench_function("ridge_6_octaves", |b| {
        let mut x = 0.0f32;
        b.iter(|| {
            x += 0.1;
            black_box(ridge(black_box(Vec2::new(x, x * 0.7)), 42, &params, RidgeParams::default()))
        });
    });

    let layers = UberParams::default();
    c.bench_function("uber_3d", |b| {
        let mut x = 0.0f32;
        b.iter(|| {
            x += 0.1;
            black_box(uber(black_box(Vec3::new(x, x * 0.7, x * 0.3)), 42, &params, &layers))
        });
    });
}

fn benchmark_cellular(c: &mut Criterion) {
    for (name, params) in [
        ("cellular_wormy", CellularParams::wormy()),
        ("cellular_blocky", CellularParams::blocky()),
    ] {
        c.bench_function(name, |b| {
            let mut x = 0.0f32;
            b.iter(|| {
                x += 0.01;
                black_box(cellular_2d(black_box(Vec2::new(x, x * 0.7)), 42, &params))
            });
        });
    }
}

criterion_group!(
    benches,
    benchmark_single_samples,
    benchmark_million_samples,
    benchmark_fractals,
    benchmark_cellular,
);
criterion_main!(benches);
