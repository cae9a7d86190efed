//! MAP fitting benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (13 to 10K observations)
//! - Iteration budget
//! - Optimizers (Adam, gradient descent)
//! - Heteroscedastic vs. homoscedastic fits
//! - Prediction throughput
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use rand_distr::{LogNormal, Uniform};
use rangefit::prelude::*;
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate range estimates whose outcomes scatter log-normally around the
/// geometric mean of the range, with wider ranges scattering more.
fn generate_estimates(size: usize, seed: u64) -> Vec<Observation> {
    let mut rng = StdRng::seed_from_u64(seed);
    let low_dist = Uniform::new(1.0, 30.0).unwrap();
    let width_dist = Uniform::new(1.05, 2.0).unwrap();

    (0..size)
        .map(|_| {
            let low: f64 = low_dist.sample(&mut rng);
            let high = low * width_dist.sample(&mut rng);
            let spread = 0.3 + 0.5 * (high / low).ln();
            let noise = LogNormal::new(0.0, spread).unwrap().sample(&mut rng);
            Observation::new(low, high, (low * high).sqrt() * noise)
        })
        .collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(20);

    for size in [13, 100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        let data = generate_estimates(size, 42);

        group.bench_with_input(BenchmarkId::new("adam", size), &size, |b, _| {
            b.iter(|| {
                RangeFit::new()
                    .iterations(500)
                    .build()
                    .unwrap()
                    .fit(black_box(&data))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_iterations(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterations");
    group.sample_size(30);

    let data = generate_estimates(100, 42);

    for iterations in [100, 1_000, 5_000] {
        group.bench_with_input(
            BenchmarkId::new("adam", iterations),
            &iterations,
            |b, &iterations| {
                b.iter(|| {
                    RangeFit::new()
                        .iterations(iterations)
                        .build()
                        .unwrap()
                        .fit(black_box(&data))
                        .unwrap()
                })
            },
        );
    }
    group.finish();
}

fn bench_optimizers(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimizers");
    group.sample_size(30);

    let data = generate_estimates(100, 7);

    for (name, optimizer, rate) in [("adam", Adam, 0.05), ("gradient_descent", GradientDescent, 1e-3)] {
        group.bench_function(name, |b| {
            b.iter(|| {
                RangeFit::new()
                    .iterations(1_000)
                    .optimizer(optimizer)
                    .learning_rate(rate)
                    .build()
                    .unwrap()
                    .fit(black_box(&data))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_heteroscedastic(c: &mut Criterion) {
    let mut group = c.benchmark_group("heteroscedastic");
    group.sample_size(30);

    let data = generate_estimates(1_000, 11);

    for enabled in [true, false] {
        group.bench_with_input(BenchmarkId::new("fit", enabled), &enabled, |b, &enabled| {
            b.iter(|| {
                RangeFit::new()
                    .iterations(500)
                    .heteroscedastic(enabled)
                    .build()
                    .unwrap()
                    .fit(black_box(&data))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_prediction(c: &mut Criterion) {
    let mut group = c.benchmark_group("prediction");

    let data = generate_estimates(100, 3);
    let model = RangeFit::new().iterations(1_000).build().unwrap().fit(&data).unwrap();
    let queries: Vec<(f64, f64)> = data.iter().map(|o| (o.low, o.high)).collect();

    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("predict_many", |b| {
        b.iter(|| model.predict_many(black_box(&queries), 0.95).unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_iterations,
    bench_optimizers,
    bench_heteroscedastic,
    bench_prediction,
);

criterion_main!(benches);
