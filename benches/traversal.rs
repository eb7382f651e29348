use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use graphbench::graph::{compare, DualGraph, Generator, Variant};

// Size configurations for benchmarks
const TINY_SIZE: usize = 16;
const SMALL_SIZE: usize = 64;
const MEDIUM_SIZE: usize = 256;

// Edge probabilities
const SPARSE: f64 = 0.05;
const DENSE: f64 = 0.5;

// Helper to build a reproducible benchmark graph
fn build_graph(n: usize, edge_prob: f64) -> DualGraph {
    Generator::new()
        .generate(n, edge_prob, 0.1, 42)
        .expect("valid benchmark parameters")
}

// Benchmark graph generation at different sizes and densities
fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");

    let configs = [
        ("tiny_dense", TINY_SIZE, DENSE),
        ("small_sparse", SMALL_SIZE, SPARSE),
        ("small_dense", SMALL_SIZE, DENSE),
        ("medium_sparse", MEDIUM_SIZE, SPARSE),
    ];

    for (name, size, prob) in configs {
        group.bench_with_input(
            BenchmarkId::new("generate", name),
            &(size, prob),
            |b, &(size, prob)| {
                let mut generator = Generator::new();
                b.iter(|| {
                    generator
                        .generate(size, prob, 0.1, 42)
                        .expect("valid benchmark parameters")
                });
            },
        );
    }

    group.finish();
}

// Benchmark each traversal variant from random sources
fn bench_traversal_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    let configs = [
        ("small_sparse", SMALL_SIZE, SPARSE),
        ("small_dense", SMALL_SIZE, DENSE),
        ("medium_sparse", MEDIUM_SIZE, SPARSE),
        ("medium_dense", MEDIUM_SIZE, DENSE),
    ];

    for (name, size, prob) in configs {
        let graph = build_graph(size, prob);
        for variant in Variant::COMPARE_ORDER {
            group.bench_with_input(BenchmarkId::new(variant.label(), name), &graph, |b, graph| {
                let mut rng = rand::rng();
                b.iter(|| {
                    let source = rng.random_range(0..graph.order());
                    variant.run(graph, source)
                });
            });
        }
    }

    group.finish();
}

// Benchmark the full all-sources comparison sweep
fn bench_full_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison");

    let configs = [
        ("tiny_dense", TINY_SIZE, DENSE),
        ("small_sparse", SMALL_SIZE, SPARSE),
    ];

    for (name, size, prob) in configs {
        let graph = build_graph(size, prob);
        group.bench_with_input(BenchmarkId::new("compare", name), &graph, |b, graph| {
            b.iter(|| compare(graph));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_generation,
    bench_traversal_variants,
    bench_full_comparison
);
criterion_main!(benches);
