use super::{
	FrontierEntry, PriorityFrontier, SearchConfig, SearchError, SearchResult, VisitedSet,
};
use crate::{heuristic::Heuristic, Coordinate, Cost, Graph, NodeID};

use std::time::Instant;

/// Searches a [`Graph`] using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// The Engine only borrows the Graph, so any number of Engines (or searches of one Engine) can
/// run on the same Graph at the same time. Every call to [`find_path`](AStarEngine::find_path)
/// uses its own Frontier and VisitedSet and leaves no state behind.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use road_pathfinding::{AStarEngine, Graph, SearchError, heuristic::zero};
/// // A--1--B
/// // |     |
/// // 5     1
/// // |     |
/// // D--1--C     E
/// let mut graph = Graph::new();
/// let [a, b, c, d, e] = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (1.0, 3.0)]
/// 	.map(|pos| graph.add_node(pos));
/// graph.add_bidirectional_edge(a, b, 1.0);
/// graph.add_bidirectional_edge(b, c, 1.0);
/// graph.add_bidirectional_edge(c, d, 1.0);
/// graph.add_bidirectional_edge(d, a, 5.0);
///
/// let engine = AStarEngine::new(&graph, zero);
///
/// let result = engine.find_path(a, c).unwrap();
/// assert_eq!(result.path, vec![a, b, c]);
/// assert_eq!(result.cost, 2.0);
///
/// // E has no Edges
/// assert!(matches!(engine.find_path(a, e), Err(SearchError::Unreachable { .. })));
/// ```
///
/// ## Optimality
/// The returned Path is a cheapest one as long as the Heuristic is admissible and no Edge has a
/// negative weight. If the Heuristic is also consistent, no Node is expanded twice.
///
/// When several cheapest Paths exist, the one whose entries were queued first wins, so repeated
/// searches always return the same Path.
#[derive(Clone, Debug)]
pub struct AStarEngine<'g, H> {
	graph: &'g Graph,
	heuristic: H,
	config: SearchConfig,
}

impl<'g, H: Heuristic> AStarEngine<'g, H> {
	/// Creates a new Engine on `graph` with the default [`SearchConfig`]
	pub fn new(graph: &'g Graph, heuristic: H) -> AStarEngine<'g, H> {
		AStarEngine {
			graph,
			heuristic,
			config: SearchConfig::default(),
		}
	}

	/// Replaces the [`SearchConfig`] of the Engine
	pub fn with_config(mut self, config: SearchConfig) -> AStarEngine<'g, H> {
		self.config = config;
		self
	}

	/// The current config
	pub fn config(&self) -> &SearchConfig {
		&self.config
	}

	/// The Graph this Engine searches
	pub fn graph(&self) -> &'g Graph {
		self.graph
	}

	/// Finds a cheapest Path from `start` to `goal`.
	///
	/// ## Returns
	/// The Path (starting with `start` and ending with `goal`), its Cost and the number of entries
	/// popped from the Frontier. `start == goal` results in the Path `[start]` with Cost `0`.
	///
	/// ## Errors
	/// - [`SearchError::InvalidIndex`] if `start` or `goal` is not in the Graph
	/// - [`SearchError::Unreachable`] if there is no Path
	/// - [`SearchError::ExpansionLimit`], [`SearchError::DeadlineExceeded`] or
	///   [`SearchError::MalformedHeuristic`] depending on the [`SearchConfig`]
	pub fn find_path(&self, start: NodeID, goal: NodeID) -> Result<SearchResult, SearchError> {
		self.check_index(start)?;
		self.check_index(goal)?;
		log_trace!("A* search from {} to {}", start, goal);

		let timer = Instant::now();
		let result = self.search(start, goal, &timer);

		log_debug!(
			"A* search from {} to {} finished in {:?}: {}",
			start,
			goal,
			timer.elapsed(),
			match &result {
				Ok(found) => format!("cost {} after {} pops", found.cost, found.visited_count),
				Err(err) => err.to_string(),
			}
		);
		result
	}

	/// Runs [`find_path`](AStarEngine::find_path) for every `(start, goal)` pair, one after the
	/// other.
	pub fn find_paths(&self, queries: &[(NodeID, NodeID)]) -> Vec<Result<SearchResult, SearchError>> {
		queries
			.iter()
			.map(|&(start, goal)| self.find_path(start, goal))
			.collect()
	}

	fn search(
		&self,
		start: NodeID,
		goal: NodeID,
		timer: &Instant,
	) -> Result<SearchResult, SearchError> {
		let goal_value = self.graph[goal].value;

		let mut frontier = PriorityFrontier::with_capacity(self.config.size_hint / 2);
		let mut visited = VisitedSet::with_capacity(self.config.size_hint);
		let mut visited_count = 0;

		frontier.push(FrontierEntry {
			node: start,
			predecessor: None,
			cost_to_come: 0.0,
			cost_to_go: self.estimate(start, goal_value)?,
		});

		let mut reached_goal = false;
		while let Some(best) = frontier.pop_min() {
			self.check_limits(visited_count, timer)?;
			visited_count += 1;

			// outdated entry
			if !visited.record_or_improve(best.node, best.predecessor, best.cost_to_come) {
				continue;
			}

			if best.node == goal {
				reached_goal = true;
				break;
			}

			for edge in self.graph.edges(best.node) {
				let child_cost = best.cost_to_come + edge.weight;
				// the child's record is only written once its entry is popped
				if visited.is_improvement(edge.to, child_cost) {
					frontier.push(FrontierEntry {
						node: edge.to,
						predecessor: Some(best.node),
						cost_to_come: child_cost,
						cost_to_go: self.estimate(edge.to, goal_value)?,
					});
				}
			}
		}

		let unreachable = SearchError::Unreachable {
			start,
			goal,
			visited_count,
		};
		if !reached_goal {
			return Err(unreachable);
		}
		let cost = match visited.get(goal) {
			Some(record) => record.cost_to_come,
			None => return Err(unreachable),
		};
		let path = visited.reconstruct_path(goal).ok_or(unreachable)?;

		Ok(SearchResult::new(path, cost, visited_count))
	}

	fn estimate(&self, node: NodeID, goal: Coordinate) -> Result<Cost, SearchError> {
		let estimate = self.heuristic.estimate(self.graph[node].value, goal);
		if self.config.check_heuristic && !(estimate >= 0.0) {
			return Err(SearchError::MalformedHeuristic { node, estimate });
		}
		debug_assert!(
			estimate >= 0.0,
			"Heuristic returned {} for Node {}",
			estimate,
			node
		);
		Ok(estimate)
	}

	fn check_index(&self, index: NodeID) -> Result<(), SearchError> {
		if self.graph.contains(index) {
			Ok(())
		} else {
			Err(SearchError::InvalidIndex {
				index,
				node_count: self.graph.len(),
			})
		}
	}

	fn check_limits(&self, visited_count: usize, timer: &Instant) -> Result<(), SearchError> {
		if let Some(limit) = self.config.max_expansions {
			if visited_count >= limit {
				return Err(SearchError::ExpansionLimit { limit });
			}
		}
		if let Some(limit) = self.config.time_limit {
			if timer.elapsed() >= limit {
				return Err(SearchError::DeadlineExceeded { limit });
			}
		}
		Ok(())
	}
}

#[cfg(feature = "parallel")]
impl<'g, H: Heuristic + Sync> AStarEngine<'g, H> {
	/// Runs [`find_path`](AStarEngine::find_path) for every `(start, goal)` pair in parallel.
	///
	/// The results are in the same order as the queries.
	pub fn find_paths_parallel(
		&self,
		queries: &[(NodeID, NodeID)],
	) -> Vec<Result<SearchResult, SearchError>> {
		use rayon::prelude::*;

		queries
			.par_iter()
			.map(|&(start, goal)| self.find_path(start, goal))
			.collect()
	}
}

/// Shorthand for `AStarEngine::new(graph, heuristic).find_path(start, goal)`.
///
/// See [`AStarEngine`] for details.
///
/// ## Examples
/// ```
/// # use road_pathfinding::{a_star_search, Graph, SearchError, heuristic::euclidean};
/// let mut graph = Graph::new();
/// let a = graph.add_node((0.0, 0.0));
/// let b = graph.add_node((3.0, 4.0));
/// graph.add_directed_edge(a, b, 5.0);
///
/// let result = a_star_search(&graph, a, b, euclidean).unwrap();
/// assert_eq!(result.path, vec![a, b]);
/// assert_eq!(result.cost, 5.0);
///
/// // the Edge is one-way
/// assert_eq!(
/// 	a_star_search(&graph, b, a, euclidean),
/// 	Err(SearchError::Unreachable { start: b, goal: a, visited_count: 1 })
/// );
/// ```
pub fn a_star_search<H: Heuristic>(
	graph: &Graph,
	start: NodeID,
	goal: NodeID,
	heuristic: H,
) -> Result<SearchResult, SearchError> {
	AStarEngine::new(graph, heuristic).find_path(start, goal)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::heuristic::{euclidean, zero};
	use std::time::Duration;

	/// A--1--B--1--C, C--1--D, D--5--A
	fn square() -> (Graph, [NodeID; 4]) {
		let mut graph = Graph::new();
		let nodes = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)].map(|pos| graph.add_node(pos));
		let [a, b, c, d] = nodes;
		graph.add_bidirectional_edge(a, b, 1.0);
		graph.add_bidirectional_edge(b, c, 1.0);
		graph.add_bidirectional_edge(c, d, 1.0);
		graph.add_bidirectional_edge(d, a, 5.0);
		(graph, nodes)
	}

	#[test]
	fn basic() {
		let (graph, [a, b, c, _]) = square();

		let result = a_star_search(&graph, a, c, zero).unwrap();

		assert_eq!(result.path, vec![a, b, c]);
		assert_eq!(result.cost, 2.0);
	}

	#[test]
	fn cheap_detour_beats_expensive_edge() {
		let (graph, [a, b, c, d]) = square();

		let result = a_star_search(&graph, a, d, euclidean).unwrap();

		assert_eq!(result.path, vec![a, b, c, d]);
		assert_eq!(result.cost, 3.0);
	}

	#[test]
	fn start_is_goal() {
		let (graph, [_, b, _, _]) = square();

		let result = a_star_search(&graph, b, b, euclidean).unwrap();

		assert_eq!(result, SearchResult::new(vec![b], 0.0, 1));
	}

	#[test]
	fn unreachable_goal() {
		let (mut graph, [a, _, _, _]) = square();
		let island = graph.add_node((5.0, 5.0));

		let result = a_star_search(&graph, a, island, zero);

		// A, B, C, D and the outdated entry for D through the 5-Edge
		assert_eq!(
			result,
			Err(SearchError::Unreachable {
				start: a,
				goal: island,
				visited_count: 5
			})
		);
	}

	#[test]
	fn invalid_index() {
		let (graph, [a, _, _, _]) = square();

		assert_eq!(
			a_star_search(&graph, a, 4, zero),
			Err(SearchError::InvalidIndex {
				index: 4,
				node_count: 4
			})
		);
		assert_eq!(
			a_star_search(&graph, 9, a, zero),
			Err(SearchError::InvalidIndex {
				index: 9,
				node_count: 4
			})
		);
	}

	#[test]
	fn outdated_entries_are_counted() {
		// A--5--B, A--1--C--1--B, B--10--D
		let mut graph = Graph::new();
		let [a, b, c, d] = [(0.0, 0.0); 4].map(|pos| graph.add_node(pos));
		graph.add_directed_edge(a, b, 5.0);
		graph.add_directed_edge(a, c, 1.0);
		graph.add_directed_edge(c, b, 1.0);
		graph.add_directed_edge(b, d, 10.0);

		let result = a_star_search(&graph, a, d, zero).unwrap();

		assert_eq!(result.path, vec![a, c, b, d]);
		assert_eq!(result.cost, 12.0);
		// A, C, B (cost 2), B (cost 5, discarded), D
		assert_eq!(result.visited_count, 5);
	}

	#[test]
	fn ties_prefer_first_queued() {
		// A->B->D and A->C->D both cost 2
		let mut graph = Graph::new();
		let [a, b, c, d] = [(0.0, 0.0); 4].map(|pos| graph.add_node(pos));
		graph.add_directed_edge(a, b, 1.0);
		graph.add_directed_edge(a, c, 1.0);
		graph.add_directed_edge(b, d, 1.0);
		graph.add_directed_edge(c, d, 1.0);

		let result = a_star_search(&graph, a, d, zero).unwrap();
		assert_eq!(result.path, vec![a, b, d]);

		let mut flipped = Graph::new();
		let [a, b, c, d] = [(0.0, 0.0); 4].map(|pos| flipped.add_node(pos));
		flipped.add_directed_edge(a, c, 1.0);
		flipped.add_directed_edge(a, b, 1.0);
		flipped.add_directed_edge(b, d, 1.0);
		flipped.add_directed_edge(c, d, 1.0);

		let result = a_star_search(&flipped, a, d, zero).unwrap();
		assert_eq!(result.path, vec![a, c, d]);
	}

	#[test]
	fn start_on_cycle() {
		// A->B->C->A, C->D: A is reachable again through the cycle
		let mut graph = Graph::new();
		let [a, b, c, d] = [(0.0, 0.0); 4].map(|pos| graph.add_node(pos));
		graph.add_directed_edge(a, b, 1.0);
		graph.add_directed_edge(b, c, 1.0);
		graph.add_directed_edge(c, a, 1.0);
		graph.add_directed_edge(c, d, 1.0);

		let result = a_star_search(&graph, a, d, zero).unwrap();

		assert_eq!(result.path, vec![a, b, c, d]);
		assert_eq!(result.cost, 3.0);
	}

	#[test]
	fn expansion_limit() {
		let (graph, [a, _, c, _]) = square();

		let engine =
			AStarEngine::new(&graph, zero).with_config(SearchConfig::with_expansion_limit(2));
		assert_eq!(
			engine.find_path(a, c),
			Err(SearchError::ExpansionLimit { limit: 2 })
		);

		let engine =
			AStarEngine::new(&graph, zero).with_config(SearchConfig::with_expansion_limit(3));
		assert_eq!(engine.find_path(a, c).map(|r| r.visited_count), Ok(3));
	}

	#[test]
	fn deadline() {
		let (graph, [a, _, c, _]) = square();

		let engine = AStarEngine::new(&graph, zero)
			.with_config(SearchConfig::with_time_limit(Duration::ZERO));
		assert_eq!(
			engine.find_path(a, c),
			Err(SearchError::DeadlineExceeded {
				limit: Duration::ZERO
			})
		);

		let engine = AStarEngine::new(&graph, zero)
			.with_config(SearchConfig::with_time_limit(Duration::from_secs(60)));
		assert!(engine.find_path(a, c).is_ok());
	}

	#[test]
	fn malformed_heuristic() {
		let (graph, [a, _, c, _]) = square();

		let config = SearchConfig {
			check_heuristic: true,
			..Default::default()
		};
		let engine =
			AStarEngine::new(&graph, |_: Coordinate, _: Coordinate| -1.0).with_config(config);

		assert_eq!(
			engine.find_path(a, c),
			Err(SearchError::MalformedHeuristic {
				node: a,
				estimate: -1.0
			})
		);
	}

	#[test]
	fn batch() {
		let (graph, [a, b, c, d]) = square();
		let engine = AStarEngine::new(&graph, euclidean);
		let queries = [(a, c), (d, b), (c, c), (a, 7)];

		let results = engine.find_paths(&queries);

		assert_eq!(results.len(), 4);
		assert_eq!(results[0].as_ref().map(|r| r.cost), Ok(2.0));
		assert_eq!(results[1].as_ref().map(|r| r.cost), Ok(2.0));
		assert_eq!(results[2].as_ref().map(|r| r.path.clone()), Ok(vec![c]));
		assert!(results[3].is_err());

		#[cfg(feature = "parallel")]
		assert_eq!(engine.find_paths_parallel(&queries), results);
	}
}
