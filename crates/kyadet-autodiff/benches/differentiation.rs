//! Benchmarks for evaluation and both differentiation modes.
//!
//! The benchmarked graph is a chain of `depth` blocks, each reusing the
//! previous block twice, so sharing is exercised at every level.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kyadet_autodiff::prelude::*;

/// Builds `depth` nested blocks of `b = exp(a / 4) * a + y`.
fn build_chain(x: &Expr<f64>, y: &Expr<f64>, depth: usize) -> Expr<f64> {
    let mut a = x.clone();
    for _ in 0..depth {
        a = exp(&a / 4.0) * &a + y;
    }
    a
}

fn bench_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluation");

    for depth in [2, 4, 8] {
        let x = Expr::new(0.1_f64);
        let y = Expr::new(0.2_f64);
        let f = build_chain(&x, &y, depth);

        group.bench_with_input(BenchmarkId::new("value", depth), &f, |b, f| {
            b.iter(|| black_box(f.value()))
        });
    }

    group.finish();
}

fn bench_value_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_mode");

    for depth in [2, 4, 8] {
        let x = Expr::new(0.1_f64);
        let y = Expr::new(0.2_f64);
        let f = build_chain(&x, &y, depth);
        let target = x.id();

        group.bench_with_input(BenchmarkId::new("diff", depth), &f, |b, f| {
            b.iter(|| black_box(f.diff(target)))
        });
    }

    group.finish();
}

fn bench_graph_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_mode");

    for depth in [2, 4] {
        let x = Expr::new(0.1_f64);
        let y = Expr::new(0.2_f64);
        let f = build_chain(&x, &y, depth);
        let target = x.id();

        group.bench_with_input(BenchmarkId::new("diff_graph", depth), &f, |b, f| {
            b.iter(|| black_box(f.diff_graph(target)))
        });

        group.bench_with_input(BenchmarkId::new("second_order", depth), &f, |b, f| {
            b.iter(|| black_box(f.nth_derivative(target, 2).value()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_evaluation, bench_value_mode, bench_graph_mode);
criterion_main!(benches);
