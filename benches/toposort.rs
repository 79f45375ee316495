//! Benchmarks for topological sorting
//!
//! Compares the dense and sparse representations on layered DAGs, where
//! every vertex points at a few vertices of the next layer.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dagsort::graph::{Graph, Representation};
use dagsort::sort::topological_sort;

/// Build a layered DAG with `layers * width` vertices
fn create_layered_dag(repr: Representation, layers: usize, width: usize) -> Box<dyn Graph> {
    let mut graph = repr.build(layers * width, true);

    for layer in 0..layers.saturating_sub(1) {
        for i in 0..width {
            let source = layer * width + i;
            for step in 0..3 {
                let target = (layer + 1) * width + (i + step) % width;
                graph
                    .add_edge(source, target, 1)
                    .expect("layered edges are in bounds");
            }
        }
    }

    graph
}

/// Benchmark topological sort per representation and size
fn bench_topological_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("topological_sort");

    for &(layers, width) in &[(10, 10), (20, 25), (40, 25)] {
        let size = layers * width;
        for repr in [Representation::Dense, Representation::Sparse] {
            let graph = create_layered_dag(repr, layers, width);
            group.bench_with_input(
                BenchmarkId::new(repr.to_string(), size),
                &graph,
                |b, graph| b.iter(|| topological_sort(black_box(&**graph))),
            );
        }
    }

    group.finish();
}

/// Benchmark indegree lookups, which dominate the sort's setup phase
fn bench_indegree(c: &mut Criterion) {
    let mut group = c.benchmark_group("indegree");

    for repr in [Representation::Dense, Representation::Sparse] {
        let graph = create_layered_dag(repr, 20, 25);
        group.bench_function(repr.to_string(), |b| {
            b.iter(|| {
                graph
                    .vertices()
                    .map(|v| graph.get_indegree(black_box(v)).unwrap_or(0))
                    .sum::<usize>()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_topological_sort, bench_indegree);
criterion_main!(benches);
