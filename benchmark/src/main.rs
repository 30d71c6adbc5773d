use rand::Rng;
use rayon::prelude::*;
use road_pathfinding::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

const SIZE: usize = 256;
const QUERIES: usize = 200;

/// Usage:
/// - `benchmark <node file> <edge file> [start] [goal]`: a single search on a loaded network
/// - `benchmark`: random searches on a generated road grid
fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [nodes, edges, rest @ ..] => {
            let start = rest.first().map_or(Ok(7261), |s| s.parse());
            let goal = rest.get(1).map_or(Ok(20286), |s| s.parse());
            match (start, goal) {
                (Ok(start), Ok(goal)) => single_search(nodes, edges, start, goal),
                _ => eprintln!("start and goal must be Node indices"),
            }
        }
        [] => random_searches(),
        _ => eprintln!("usage: benchmark [<node file> <edge file> [start] [goal]]"),
    }
}

fn single_search(nodes: &str, edges: &str, start: NodeID, goal: NodeID) {
    let load_time = Instant::now();
    let graph = match load_graph(nodes, edges) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("Couldn't load the network: {}", err);
            return;
        }
    };
    println!(
        "Loaded {} Nodes and {} Edges in {:?}",
        graph.len(),
        graph.edge_count(),
        load_time.elapsed()
    );

    let start_time = Instant::now();
    let result = a_star_search(&graph, start, goal, euclidean);
    println!("Finished search in: {:?}", start_time.elapsed());

    match result {
        Ok(result) => {
            println!("Nodes visited: {}", result.visited_count);
            println!("Path len: {}", result.cost);
            println!("Path: {:?}", result.path);
        }
        Err(err) => println!("{}", err),
    }
}

fn road_grid(rng: &mut impl Rng) -> Graph {
    let mut graph = Graph::with_capacity(SIZE * SIZE);
    for y in 0..SIZE {
        for x in 0..SIZE {
            graph.add_node((
                y as f64 + rng.gen_range(0.0..0.25),
                x as f64 + rng.gen_range(0.0..0.25),
            ));
        }
    }
    let id = |x: usize, y: usize| (x + y * SIZE) as NodeID;
    for y in 0..SIZE {
        for x in 0..SIZE {
            let mut neighbors = vec![];
            if x + 1 < SIZE {
                neighbors.push(id(x + 1, y));
            }
            if y + 1 < SIZE {
                neighbors.push(id(x, y + 1));
            }
            for other in neighbors {
                if rng.gen_bool(0.1) {
                    continue;
                }
                let from = id(x, y);
                let length = graph[from].value.planar_distance(graph[other].value);
                graph.add_bidirectional_edge(from, other, length * rng.gen_range(1.0..1.5));
            }
        }
    }
    graph
}

fn random_searches() {
    let mut rng = rand::thread_rng();

    let graph = road_grid(&mut rng);
    println!(
        "finished Graph gen: {} Nodes, {} Edges",
        graph.len(),
        graph.edge_count()
    );

    let queries: Vec<(NodeID, NodeID)> = (0..QUERIES)
        .map(|_| {
            (
                rng.gen_range(0..graph.len() as NodeID),
                rng.gen_range(0..graph.len() as NodeID),
            )
        })
        .collect();

    let mut results: HashMap<&str, Vec<(Duration, Result<SearchResult, SearchError>)>> =
        HashMap::new();

    for (name, heuristic) in [("euclidean", euclidean as fn(_, _) -> _), ("zero", zero)] {
        let engine = AStarEngine::new(&graph, heuristic);
        let timed = queries
            .iter()
            .map(|&(start, goal)| {
                let start_time = Instant::now();
                let result = engine.find_path(start, goal);
                (start_time.elapsed(), result)
            })
            .collect();
        results.insert(name, timed);
    }

    let (sequential, parallel) = {
        let engine = AStarEngine::new(&graph, euclidean);

        let start_time = Instant::now();
        let sequential = engine.find_paths(&queries);
        let sequential_time = start_time.elapsed();

        let start_time = Instant::now();
        let parallel: Vec<_> = queries
            .par_iter()
            .map(|&(start, goal)| engine.find_path(start, goal))
            .collect();
        let parallel_time = start_time.elapsed();

        assert_eq!(sequential, parallel);
        (sequential_time, parallel_time)
    };

    let best = &results["zero"];
    for (name, results) in &results {
        let times = results.iter().map(|r| r.0);
        let min_time = times.clone().min().unwrap_or_default();
        let max_time = times.clone().max().unwrap_or_default();
        let avg_time = times.sum::<Duration>() / results.len() as u32;

        let found = results.iter().filter(|r| r.1.is_ok()).count();
        assert!(results
            .iter()
            .zip(best.iter())
            .all(|(a, b)| a.1.is_ok() == b.1.is_ok()));

        let mismatched = results
            .iter()
            .zip(best.iter())
            .filter_map(|(a, b)| Some((a.1.as_ref().ok()?, b.1.as_ref().ok()?)))
            .filter(|(a, b)| (a.cost - b.cost).abs() > 1e-9)
            .count();

        let visited = results
            .iter()
            .filter_map(|r| r.1.as_ref().ok())
            .map(|r| r.visited_count)
            .sum::<usize>()
            / found.max(1);

        println!(
            "{} | {:?} - {:?}; {:?} | {}/{} found, {} worse than Dijkstra | {} visited on average",
            name,
            min_time,
            max_time,
            avg_time,
            found,
            results.len(),
            mismatched,
            visited,
        );
    }

    println!(
        "{} searches | sequential {:?} | parallel {:?}",
        queries.len(),
        sequential,
        parallel
    );
}
