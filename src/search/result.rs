use crate::{Cost, NodeID};

/// The outcome of a successful search
///
/// Stores the sequence of Nodes from start to goal (both inclusive) in `path`, the total Cost of
/// walking along it in `cost`, and the number of entries popped from the Frontier in
/// `visited_count`. Outdated entries that were discarded when popped are included in that count.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
	/// the Path
	pub path: Vec<NodeID>,
	/// the total Cost of the Path
	pub cost: Cost,
	/// the number of Frontier pops performed
	pub visited_count: usize,
}

impl SearchResult {
	/// creates a new SearchResult
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use road_pathfinding::SearchResult;
	/// let result = SearchResult::new(vec![4, 2, 0], 4.5, 7);
	///
	/// assert_eq!(result.path, vec![4, 2, 0]);
	/// assert_eq!(result.cost, 4.5);
	/// assert_eq!(result.start(), 4);
	/// assert_eq!(result.goal(), 0);
	/// ```
	pub fn new(path: Vec<NodeID>, cost: Cost, visited_count: usize) -> SearchResult {
		debug_assert!(!path.is_empty(), "a Path contains at least the start");
		SearchResult {
			path,
			cost,
			visited_count,
		}
	}

	/// The first Node of the Path
	pub fn start(&self) -> NodeID {
		self.path[0]
	}

	/// The last Node of the Path
	pub fn goal(&self) -> NodeID {
		self.path[self.path.len() - 1]
	}
}

use std::ops::{Deref, Index};

impl Index<usize> for SearchResult {
	type Output = NodeID;
	fn index(&self, index: usize) -> &NodeID {
		&self.path[index]
	}
}

impl Deref for SearchResult {
	type Target = [NodeID];
	fn deref(&self) -> &[NodeID] {
		&self.path
	}
}

use std::fmt;
impl fmt::Display for SearchResult {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(
			fmt,
			"Path[Cost = {}, Visited = {}]: ",
			self.cost, self.visited_count
		)?;
		write!(fmt, "{}", self.path[0])?;
		for p in self.path.iter().skip(1) {
			write!(fmt, " -> {}", p)?;
		}
		Ok(())
	}
}
