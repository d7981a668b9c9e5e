//! Criterion benchmarks for tree construction and backward induction.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mf_lattice::{american, european, PriceTree};

fn bench_tree_build(c: &mut Criterion) {
    c.bench_function("price_tree_build_n15", |b| {
        b.iter(|| PriceTree::build(black_box(15), 100.0, 0.1, -0.05).unwrap())
    });
}

fn bench_american_put(c: &mut Criterion) {
    c.bench_function("american_put_n15", |b| {
        b.iter(|| american::price(0.05, 0.1, -0.05, black_box(100.0), 100.0, 15).unwrap())
    });
}

fn bench_european_closed_form(c: &mut Criterion) {
    c.bench_function("european_closed_form_n100", |b| {
        b.iter(|| {
            european::price_closed_form(0.05, 0.1, -0.05, black_box(100.0), 100.0, 100).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_tree_build,
    bench_american_put,
    bench_european_closed_form
);
criterion_main!(benches);
