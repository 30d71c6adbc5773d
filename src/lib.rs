#![warn(
	missing_docs,
	missing_debug_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find shortest Paths on large, static Road Networks.
//!
//! ## Introduction
//! A Road Network is a [`Graph`] of tens of thousands of Nodes, each with a geographic
//! [`Coordinate`], connected by weighted Edges. This crate finds the cheapest Path between two
//! Nodes of such a Graph using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm),
//! guided by a [`Heuristic`](heuristic::Heuristic) that estimates the remaining distance to the
//! goal.
//!
//! The Graph is built once and never changes afterwards. Searches only borrow it, so a single
//! Graph can serve any number of searches, including concurrent ones (see
//! [`AStarEngine::find_paths_parallel`] with the `parallel` feature).
//!
//! ## Examples
//! Building the Graph:
//! ```
//! use road_pathfinding::{Graph, Coordinate};
//!
//! // A--1--B
//! // |     |
//! // 5     1
//! // |     |
//! // D--1--C
//! let mut graph = Graph::new();
//! let a = graph.add_node(Coordinate::new(0.0, 0.0));
//! let b = graph.add_node(Coordinate::new(0.0, 1.0));
//! let c = graph.add_node(Coordinate::new(1.0, 1.0));
//! let d = graph.add_node(Coordinate::new(1.0, 0.0));
//!
//! graph.add_bidirectional_edge(a, b, 1.0);
//! graph.add_bidirectional_edge(b, c, 1.0);
//! graph.add_bidirectional_edge(c, d, 1.0);
//! graph.add_bidirectional_edge(d, a, 5.0);
//! ```
//! Node IDs are handed out in insertion order, starting at `0`. Edges are directed;
//! `add_bidirectional_edge` simply adds one Edge in each direction.
//!
//! Real networks are usually read from files using the [`loader`] Module.
//!
//! ### Pathfinding
//! ```
//! # use road_pathfinding::{Graph, Coordinate};
//! use road_pathfinding::{AStarEngine, heuristic::euclidean};
//! # let mut graph = Graph::new();
//! # let a = graph.add_node(Coordinate::new(0.0, 0.0));
//! # let b = graph.add_node(Coordinate::new(0.0, 1.0));
//! # let c = graph.add_node(Coordinate::new(1.0, 1.0));
//! # let d = graph.add_node(Coordinate::new(1.0, 0.0));
//! # graph.add_bidirectional_edge(a, b, 1.0);
//! # graph.add_bidirectional_edge(b, c, 1.0);
//! # graph.add_bidirectional_edge(c, d, 1.0);
//! # graph.add_bidirectional_edge(d, a, 5.0);
//!
//! let engine = AStarEngine::new(&graph, euclidean);
//! let result = engine.find_path(a, d).unwrap();
//!
//! assert_eq!(result.path, vec![a, b, c, d]);
//! assert_eq!(result.cost, 3.0);
//! println!("visited {} Nodes", result.visited_count);
//! ```
//! If there is no Path, an [`SearchError::Unreachable`] is returned instead.
//!
//! ### Configuration
//! [`SearchConfig`] adds limits to a search, for example to give up after a number of
//! expansions:
//! ```
//! # use road_pathfinding::{Graph, Coordinate};
//! use road_pathfinding::{AStarEngine, SearchConfig, SearchError, heuristic::zero};
//! # let mut graph = Graph::new();
//! # let a = graph.add_node(Coordinate::new(0.0, 0.0));
//! # let b = graph.add_node(Coordinate::new(0.0, 1.0));
//! # let c = graph.add_node(Coordinate::new(1.0, 1.0));
//! # graph.add_bidirectional_edge(a, b, 1.0);
//! # graph.add_bidirectional_edge(b, c, 1.0);
//!
//! let engine = AStarEngine::new(&graph, zero).with_config(SearchConfig::with_expansion_limit(1));
//!
//! assert_eq!(engine.find_path(a, c), Err(SearchError::ExpansionLimit { limit: 1 }));
//! ```
//!
//! ## Features
//! - `parallel` (default): [`AStarEngine::find_paths_parallel`] using rayon
//! - `log`: internal timings and counts through the `log` crate

/// The Type used to reference a Node in the Graph
pub type NodeID = u32;

/// The Type used for Edge weights and Path costs
pub type Cost = f64;

#[allow(unused_macros)]
macro_rules! log_trace {
	($($arg:tt)*) => {
		#[cfg(feature = "log")]
		log::trace!($($arg)*);
	};
}

#[allow(unused_macros)]
macro_rules! log_debug {
	($($arg:tt)*) => {
		#[cfg(feature = "log")]
		log::debug!($($arg)*);
	};
}

mod node_id;

mod graph;
pub use self::graph::{Coordinate, Edge, Graph, Node};

pub mod heuristic;

pub mod loader;

pub mod search;
pub use self::search::{a_star_search, AStarEngine, SearchConfig, SearchError, SearchResult};

/// The most commonly used Types and Functions
pub mod prelude {
	pub use crate::heuristic::{euclidean, zero, Heuristic};
	pub use crate::loader::{load_graph, LoadError};
	pub use crate::{
		a_star_search, AStarEngine, Coordinate, Cost, Graph, NodeID, SearchConfig, SearchError,
		SearchResult,
	};
}
