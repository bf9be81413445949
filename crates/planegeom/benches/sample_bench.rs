//! Criterion benchmarks for area-weighted polygon sampling.
//! Compares the one-shot path with a reused `FanSampler`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::{vector, Vector3};
use planegeom::sample::{poly_random_point, FanSampler};
use rand::{rngs::StdRng, SeedableRng};

fn regular_polygon(n: usize) -> Vec<Vector3<f64>> {
    (0..n)
        .map(|k| {
            let a = k as f64 * std::f64::consts::TAU / n as f64;
            vector![64.0 * a.cos(), 64.0 * a.sin(), 0.0]
        })
        .collect()
}

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    for &n in &[4usize, 16, 64] {
        let poly = regular_polygon(n);
        group.bench_with_input(BenchmarkId::new("poly_random_point", n), &poly, |b, poly| {
            b.iter_batched(
                || StdRng::seed_from_u64(45),
                |mut rng| poly_random_point(poly, &mut rng),
                BatchSize::SmallInput,
            )
        });
        let sampler = FanSampler::new(&poly).expect("regular polygon has area");
        group.bench_with_input(BenchmarkId::new("fan_sampler", n), &sampler, |b, s| {
            b.iter_batched(
                || StdRng::seed_from_u64(46),
                |mut rng| s.sample(&mut rng),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sample);
criterion_main!(benches);
