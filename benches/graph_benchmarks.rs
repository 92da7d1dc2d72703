use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use wgraph::{GraphMode, GraphStore};

/// Ring plus deterministic chords, so every vertex is reachable from every other
fn build_graph(size: u64, mode: GraphMode) -> GraphStore {
    let mut store = GraphStore::with_mode(mode);
    for i in 0..size {
        let from = format!("v{}", i);
        store.connect(&from, &format!("v{}", (i + 1) % size), (i * 7) % 13 + 1);
        store.connect(&from, &format!("v{}", (i * 31 + 17) % size), (i * 11) % 29 + 1);
    }
    store
}

/// Benchmark edge insertion throughput
fn bench_connect(c: &mut Criterion) {
    let mut group = c.benchmark_group("connect");

    for size in [100u64, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| build_graph(size, GraphMode::Directed));
        });
    }
    group.finish();
}

/// Benchmark full traversals from a single start
fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for size in [100u64, 1000, 10_000].iter() {
        let store = build_graph(*size, GraphMode::Directed);

        group.bench_with_input(BenchmarkId::new("dfs", size), size, |b, _| {
            b.iter(|| {
                let mut visited = 0usize;
                store.dfs("v0", |_| visited += 1);
                criterion::black_box(visited);
            });
        });

        group.bench_with_input(BenchmarkId::new("bfs", size), size, |b, _| {
            b.iter(|| {
                let mut visited = 0usize;
                store.bfs("v0", |_| visited += 1);
                criterion::black_box(visited);
            });
        });
    }
    group.finish();
}

/// Benchmark single-source shortest paths
fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");

    for size in [100u64, 1000, 10_000].iter() {
        let store = build_graph(*size, GraphMode::Directed);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| criterion::black_box(store.dijkstra("v0").distances.len()));
        });
    }
    group.finish();
}

/// Benchmark Prim against Kruskal on the same undirected graph
fn bench_spanning_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("spanning_tree");

    for size in [100u64, 1000, 10_000].iter() {
        let store = build_graph(*size, GraphMode::Undirected);

        group.bench_with_input(BenchmarkId::new("prim", size), size, |b, _| {
            b.iter(|| criterion::black_box(store.mst_prim("v0", |_, _, _| {})));
        });

        group.bench_with_input(BenchmarkId::new("kruskal", size), size, |b, _| {
            b.iter(|| criterion::black_box(store.mst_kruskal(|_, _, _| {})));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_connect,
    bench_traversal,
    bench_dijkstra,
    bench_spanning_tree
);
criterion_main!(benches);
