use crate::{Cost, NodeID};
use ordered_float::OrderedFloat;

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A candidate waiting in the [`PriorityFrontier`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrontierEntry {
	/// the Node this entry would expand
	pub node: NodeID,
	/// the Node it was reached from, `None` for the start
	pub predecessor: Option<NodeID>,
	/// the Cost of the Path from the start to `node` through `predecessor` (g-score)
	pub cost_to_come: Cost,
	/// the estimated remaining Cost from `node` to the goal (h-score)
	pub cost_to_go: Cost,
}

impl FrontierEntry {
	/// The ordering key of the entry: `cost_to_come + cost_to_go`
	pub fn f_score(&self) -> Cost {
		self.cost_to_come + self.cost_to_go
	}
}

/// An entry together with its insertion sequence number.
///
/// `BinaryHeap` is a max-heap, so the comparison is reversed: the smallest f-score is the greatest
/// element, and among equal f-scores the one pushed first wins.
struct Prioritized(FrontierEntry, OrderedFloat<Cost>, u64);

impl PartialEq for Prioritized {
	fn eq(&self, rhs: &Self) -> bool {
		self.cmp(rhs) == Ordering::Equal
	}
}
impl Eq for Prioritized {}
impl PartialOrd for Prioritized {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl Ord for Prioritized {
	fn cmp(&self, rhs: &Self) -> Ordering {
		rhs.1.cmp(&self.1).then_with(|| rhs.2.cmp(&self.2))
	}
}

/// A min-priority Queue of [`FrontierEntry`]s, ordered by f-score.
///
/// There is no decrease-key: a Node may be queued several times with different costs, and
/// outdated entries are discarded by the search when they are popped.
///
/// Ties are broken by insertion order (first in, first out), which makes the search
/// deterministic when several optimal Paths exist.
#[derive(Default)]
pub struct PriorityFrontier {
	heap: BinaryHeap<Prioritized>,
	next_sequence: u64,
}

impl PriorityFrontier {
	/// Creates an empty Frontier
	pub fn new() -> PriorityFrontier {
		PriorityFrontier::default()
	}

	/// Creates an empty Frontier with room for `capacity` entries
	pub fn with_capacity(capacity: usize) -> PriorityFrontier {
		PriorityFrontier {
			heap: BinaryHeap::with_capacity(capacity),
			next_sequence: 0,
		}
	}

	/// Queues an entry in `O(log n)`
	pub fn push(&mut self, entry: FrontierEntry) {
		let key = OrderedFloat(entry.f_score());
		self.heap.push(Prioritized(entry, key, self.next_sequence));
		self.next_sequence += 1;
	}

	/// Removes and returns the entry with the smallest f-score, or `None` if the Frontier is empty
	pub fn pop_min(&mut self) -> Option<FrontierEntry> {
		self.heap.pop().map(|Prioritized(entry, _, _)| entry)
	}

	/// `true` if there are no entries left
	pub fn is_empty(&self) -> bool {
		self.heap.is_empty()
	}

	/// The number of queued entries, including outdated ones
	pub fn len(&self) -> usize {
		self.heap.len()
	}
}

impl std::fmt::Debug for PriorityFrontier {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		f.debug_struct("PriorityFrontier")
			.field("len", &self.heap.len())
			.field("pushed", &self.next_sequence)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn entry(node: NodeID, cost_to_come: Cost, cost_to_go: Cost) -> FrontierEntry {
		FrontierEntry {
			node,
			predecessor: None,
			cost_to_come,
			cost_to_go,
		}
	}

	#[test]
	fn pops_smallest_f_score() {
		let mut frontier = PriorityFrontier::new();
		frontier.push(entry(0, 5.0, 1.0));
		frontier.push(entry(1, 1.0, 1.0));
		frontier.push(entry(2, 0.5, 4.0));
		frontier.push(entry(3, 3.0, 0.0));

		let order: Vec<NodeID> = std::iter::from_fn(|| frontier.pop_min())
			.map(|e| e.node)
			.collect();
		assert_eq!(order, vec![1, 3, 2, 0]);
		assert!(frontier.is_empty());
	}

	#[test]
	fn ties_are_first_in_first_out() {
		let mut frontier = PriorityFrontier::with_capacity(4);
		frontier.push(entry(7, 2.0, 0.0));
		frontier.push(entry(3, 1.0, 1.0));
		frontier.push(entry(5, 0.0, 2.0));

		assert_eq!(frontier.pop_min().map(|e| e.node), Some(7));
		assert_eq!(frontier.pop_min().map(|e| e.node), Some(3));
		assert_eq!(frontier.pop_min().map(|e| e.node), Some(5));
	}

	#[test]
	fn keeps_duplicates() {
		let mut frontier = PriorityFrontier::new();
		frontier.push(entry(1, 4.0, 0.0));
		frontier.push(entry(1, 2.0, 0.0));
		assert_eq!(frontier.len(), 2);

		assert_eq!(frontier.pop_min().map(|e| e.cost_to_come), Some(2.0));
		assert_eq!(frontier.pop_min().map(|e| e.cost_to_come), Some(4.0));
		assert_eq!(frontier.pop_min(), None);
	}
}
