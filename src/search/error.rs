use crate::{Cost, NodeID};
use std::time::Duration;
use thiserror::Error;

/// The ways a search can end without a Path
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
	/// `start` or `goal` is not a Node of the Graph. No search was attempted.
	#[error("Invalid NodeID {index} (Graph has {node_count} Nodes)")]
	InvalidIndex {
		/// the offending ID
		index: NodeID,
		/// the number of Nodes in the Graph
		node_count: usize,
	},
	/// The Frontier ran empty before `goal` was reached.
	#[error("No Path from {start} to {goal} ({visited_count} Nodes visited)")]
	Unreachable {
		/// the start of the search
		start: NodeID,
		/// the goal of the search
		goal: NodeID,
		/// the number of Frontier pops before giving up
		visited_count: usize,
	},
	/// The search popped more entries than [`SearchConfig::max_expansions`](super::SearchConfig::max_expansions) allows.
	#[error("Search cancelled after {limit} expansions")]
	ExpansionLimit {
		/// the configured limit
		limit: usize,
	},
	/// The search ran longer than [`SearchConfig::time_limit`](super::SearchConfig::time_limit).
	#[error("Search exceeded its time limit of {limit:?}")]
	DeadlineExceeded {
		/// the configured limit
		limit: Duration,
	},
	/// The Heuristic returned a negative or NaN estimate.
	#[error("Heuristic returned {estimate} for Node {node}")]
	MalformedHeuristic {
		/// the Node that was estimated
		node: NodeID,
		/// the returned estimate
		estimate: Cost,
	},
}
