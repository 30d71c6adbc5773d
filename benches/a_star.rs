extern crate road_pathfinding;
use env_logger::Env;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use nanorand::{Rng, WyRand};
use road_pathfinding::prelude::*;

/// A jittered grid of intersections, connected to their right and lower neighbors.
///
/// Roads are slightly longer than the straight line between their ends, like real roads, so the
/// Euclidean Heuristic stays admissible.
fn road_grid(width: usize, height: usize, seed: u64) -> Graph {
    let mut rng = WyRand::new_seed(seed);
    let mut graph = Graph::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let jitter_x = rng.generate_range(0..100u32) as f64 / 400.0;
            let jitter_y = rng.generate_range(0..100u32) as f64 / 400.0;
            graph.add_node((y as f64 + jitter_y, x as f64 + jitter_x));
        }
    }
    let id = |x: usize, y: usize| (x + y * width) as NodeID;
    let mut connect = |graph: &mut Graph, a: NodeID, b: NodeID| {
        // leave some roads out to force detours
        if rng.generate_range(0..10u32) == 0 {
            return;
        }
        let detour = 1.0 + rng.generate_range(0..50u32) as f64 / 100.0;
        let length = graph[a].value.planar_distance(graph[b].value) * detour;
        graph.add_bidirectional_edge(a, b, length);
    };
    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                connect(&mut graph, id(x, y), id(x + 1, y));
            }
            if y + 1 < height {
                connect(&mut graph, id(x, y), id(x, y + 1));
            }
        }
    }
    graph
}

#[allow(unused)]
// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "debug") // Change this from debug to trace to log every single search.
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_single_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Single Search");
    group.sample_size(20);

    // init();

    for size in [64, 256] {
        let graph = road_grid(size, size, 4);
        let (start, goal) = (0, (size * size - 1) as NodeID);

        group.bench_with_input(
            BenchmarkId::new("Euclidean", size * size),
            &graph,
            |b, graph| {
                let engine = AStarEngine::new(graph, euclidean);
                b.iter(|| engine.find_path(start, goal))
            },
        );
        group.bench_with_input(BenchmarkId::new("Zero", size * size), &graph, |b, graph| {
            let engine = AStarEngine::new(graph, zero);
            b.iter(|| engine.find_path(start, goal))
        });
        group.bench_with_input(
            BenchmarkId::new("Euclidean, size hint", size * size),
            &graph,
            |b, graph| {
                let engine = AStarEngine::new(graph, euclidean)
                    .with_config(SearchConfig::with_size_hint(size * size / 4));
                b.iter(|| engine.find_path(start, goal))
            },
        );
    }
}

fn bench_many_searches(c: &mut Criterion) {
    let mut group = c.benchmark_group("Many Searches");
    group.sample_size(10);

    let size = 128;
    let graph = road_grid(size, size, 7);
    let mut rng = WyRand::new_seed(1);
    let node_count = (size * size) as NodeID;
    let queries: Vec<(NodeID, NodeID)> = (0..64)
        .map(|_| {
            (
                rng.generate_range(0..node_count),
                rng.generate_range(0..node_count),
            )
        })
        .collect();
    let engine = AStarEngine::new(&graph, euclidean);

    group.bench_function("Sequential", |b| b.iter(|| engine.find_paths(&queries)));

    #[cfg(feature = "parallel")]
    group.bench_function("Parallel", |b| {
        b.iter(|| engine.find_paths_parallel(&queries))
    });
}

criterion_group!(benches, bench_single_search, bench_many_searches);
criterion_main!(benches);
