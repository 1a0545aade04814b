//! Criterion benchmarks for the approximate kernels against std.
//! Inputs: 1024 log-uniform samples in [1e-4, 1e4], fixed seed.
//! Results: by default under target/criterion.

use advmath::api::{
    approx_inverse, approx_inverse_sqrt, approx_sqrt, magnitude, quick_magnitude, vec3,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn samples(n: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| 10f32.powf(rng.gen_range(-4.0..4.0)))
        .collect()
}

fn bench_kernels(c: &mut Criterion) {
    let xs = samples(1024, 41);
    let mut group = c.benchmark_group("fastmath");
    group.bench_function("approx_inverse", |b| {
        b.iter(|| xs.iter().map(|&x| approx_inverse(black_box(x))).sum::<f32>())
    });
    group.bench_function("std_inverse", |b| {
        b.iter(|| xs.iter().map(|&x| 1.0 / black_box(x)).sum::<f32>())
    });
    group.bench_function("approx_sqrt", |b| {
        b.iter(|| xs.iter().map(|&x| approx_sqrt(black_box(x))).sum::<f32>())
    });
    group.bench_function("std_sqrt", |b| {
        b.iter(|| xs.iter().map(|&x| black_box(x).sqrt()).sum::<f32>())
    });
    group.bench_function("approx_inverse_sqrt", |b| {
        b.iter(|| xs.iter().map(|&x| approx_inverse_sqrt(black_box(x))).sum::<f32>())
    });
    group.bench_function("std_inverse_sqrt", |b| {
        b.iter(|| xs.iter().map(|&x| 1.0 / black_box(x).sqrt()).sum::<f32>())
    });
    group.finish();

    let vs: Vec<_> = xs.chunks_exact(3).map(|c| vec3(c[0], c[1], c[2])).collect();
    let mut group = c.benchmark_group("geom3");
    group.bench_function("magnitude", |b| {
        b.iter(|| vs.iter().map(|v| magnitude(black_box(v))).sum::<f32>())
    });
    group.bench_function("quick_magnitude", |b| {
        b.iter(|| vs.iter().map(|v| quick_magnitude(black_box(v))).sum::<f32>())
    });
    group.finish();
}

criterion_group!(benches, bench_kernels);
criterion_main!(benches);
