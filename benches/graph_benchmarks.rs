use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use labelgraph::{Graph, LoadConfig};

/// Grid-like graph: each vertex links to the next one and to the one `width` ahead
fn build_graph(size: usize, width: usize) -> Graph {
    let labels: Vec<String> = (0..size).map(|i| format!("v{:06}", i)).collect();
    let mut graph = Graph::new();
    for i in 0..size {
        if i + 1 < size {
            graph.add(&labels[i], &labels[i + 1], ((i % 7) + 1) as i64);
        }
        if i + width < size {
            graph.add(&labels[i], &labels[i + width], ((i % 5) + 3) as i64);
        }
    }
    graph
}

/// Benchmark edge insertion throughput
fn bench_edge_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_insertion");

    for size in [100, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| criterion::black_box(build_graph(size, 10).num_edges()));
        });
    }
    group.finish();
}

/// Benchmark DFS and BFS over the whole graph
fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for size in [1000, 10_000].iter() {
        let mut graph = build_graph(*size, 10);

        group.bench_with_input(BenchmarkId::new("dfs", size), size, |b, _| {
            b.iter(|| {
                let mut count = 0usize;
                graph.depth_first_traversal("v000000", |_| count += 1).unwrap();
                criterion::black_box(count);
            });
        });

        group.bench_with_input(BenchmarkId::new("bfs", size), size, |b, _| {
            b.iter(|| {
                let mut count = 0usize;
                graph.breadth_first_traversal("v000000", |_| count += 1).unwrap();
                criterion::black_box(count);
            });
        });
    }
    group.finish();
}

/// Benchmark single-source shortest paths
fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");

    for size in [1000, 10_000].iter() {
        let graph = build_graph(*size, 10);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let paths = graph.dijkstra_cost_to_all_vertices("v000000").unwrap();
                criterion::black_box(paths.len());
            });
        });
    }
    group.finish();
}

/// Benchmark edge-list parsing and loading
fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    let edges = 10_000;
    let mut input = format!("{}\n", edges);
    for i in 0..edges {
        input.push_str(&format!("v{} v{} {}\n", i, i + 1, i % 9));
    }

    group.bench_function("edge_list_10k", |b| {
        b.iter(|| {
            let mut graph = Graph::new();
            let added = graph.load_from_str(&input, &LoadConfig::default()).unwrap();
            criterion::black_box(added);
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_edge_insertion,
    bench_traversal,
    bench_dijkstra,
    bench_load,
);
criterion_main!(benches);
