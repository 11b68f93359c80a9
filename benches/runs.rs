//! A benchmark for run extraction.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use walkclass::{extract_runs, RunExtractor, Step};

fn get_walk(items: usize) -> Vec<Step> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..items)
        .map(|_| if rng.gen_bool(0.5) { Step::Right } else { Step::Left })
        .collect()
}

fn batch_extract(walk: &[Step]) {
    black_box(extract_runs(walk).len());
}

fn incremental_extract(walk: &[Step]) {
    let mut extractor = RunExtractor::new();
    for step in walk {
        extractor.push(*step);
    }
    black_box(extractor.runs().len());
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let walk = get_walk(1_000_000);
    c.bench_function("extract batch", |b| b.iter(|| batch_extract(&walk)));
    c.bench_function("extract incremental", |b| {
        b.iter(|| incremental_extract(&walk))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
