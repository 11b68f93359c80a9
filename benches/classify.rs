//! A benchmark for the classifier.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, Geometric};
use walkclass::Classifier;

/// Sample run lengths the way a fair coin produces them.
fn get_run_lengths(items: usize, p: f64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(11);
    let geo = Geometric::new(p).unwrap();
    (0..items)
        .map(|_| 1 + geo.sample(&mut rng) as usize)
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let classifier = Classifier::default();
    let short = get_run_lengths(50, 0.5);
    let long = get_run_lengths(100_000, 0.1);
    c.bench_function("classify walk", |b| {
        b.iter(|| black_box(classifier.classify(&short).unwrap()))
    });
    c.bench_function("classify long sequence", |b| {
        b.iter(|| black_box(classifier.classify(&long).unwrap()))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
