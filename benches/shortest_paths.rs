use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use weighted_paths::graph::generators::random_undirected;
use weighted_paths::{BellmanFord, Dijkstra, Selection, ShortestPathAlgorithm};

fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_source");

    for &n in &[100usize, 1_000] {
        let graph = random_undirected(n, 4.0, 42).expect("generated weights are valid");

        group.bench_with_input(BenchmarkId::new("bellman_ford", n), &graph, |b, g| {
            let algorithm = BellmanFord::new();
            b.iter(|| algorithm.compute_shortest_paths(g, black_box(&0usize)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("dijkstra_scan", n), &graph, |b, g| {
            let algorithm = Dijkstra::new().with_selection(Selection::LinearScan);
            b.iter(|| algorithm.compute_shortest_paths(g, black_box(&0usize)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("dijkstra_heap", n), &graph, |b, g| {
            let algorithm = Dijkstra::new();
            b.iter(|| algorithm.compute_shortest_paths(g, black_box(&0usize)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_solvers);
criterion_main!(benches);
