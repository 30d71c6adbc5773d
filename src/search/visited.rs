use crate::node_id::{node_id_map_with_cap, NodeIDMap};
use crate::{Cost, NodeID};

/// The best known way of reaching a Node
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisitedRecord {
	/// the Node this one was reached from, `None` for the start
	pub predecessor: Option<NodeID>,
	/// the lowest Cost from the start observed so far
	pub cost_to_come: Cost,
}

/// The closed list of a search: maps each finalized Node to its best predecessor and Cost.
#[derive(Clone, Debug, Default)]
pub struct VisitedSet {
	records: NodeIDMap<VisitedRecord>,
}

impl VisitedSet {
	/// Creates an empty VisitedSet
	pub fn new() -> VisitedSet {
		VisitedSet::default()
	}

	/// Creates an empty VisitedSet with room for `capacity` Nodes
	pub fn with_capacity(capacity: usize) -> VisitedSet {
		VisitedSet {
			records: node_id_map_with_cap(capacity),
		}
	}

	/// The record of `node`, if it was visited
	pub fn get(&self, node: NodeID) -> Option<&VisitedRecord> {
		self.records.get(&node)
	}

	/// `true` if `cost` is strictly lower than the stored Cost of `node`, or if `node` has no
	/// record yet
	pub fn is_improvement(&self, node: NodeID, cost: Cost) -> bool {
		self.get(node).map_or(true, |record| cost < record.cost_to_come)
	}

	/// Stores the record for `node` if it is absent or `cost` is strictly lower than the stored
	/// Cost.
	///
	/// Returns `true` if the record was written.
	pub fn record_or_improve(&mut self, node: NodeID, predecessor: Option<NodeID>, cost: Cost) -> bool {
		if !self.is_improvement(node, cost) {
			return false;
		}
		self.records.insert(
			node,
			VisitedRecord {
				predecessor,
				cost_to_come: cost,
			},
		);
		true
	}

	/// The number of visited Nodes
	pub fn len(&self) -> usize {
		self.records.len()
	}

	/// `true` if no Node was visited
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Walks the predecessor links back from `goal` and returns the Nodes in start-to-goal order.
	///
	/// The walk ends at the record without a predecessor, not at any particular Node, so a start
	/// that shows up again further along a cycle is handled correctly.
	///
	/// Returns `None` if `goal` (or any Node on the way back) has no record, or if the links form
	/// a loop.
	pub fn reconstruct_path(&self, goal: NodeID) -> Option<Vec<NodeID>> {
		let mut steps = vec![goal];
		let mut current = self.get(goal)?;

		while let Some(prev) = current.predecessor {
			if steps.len() > self.records.len() {
				return None;
			}
			steps.push(prev);
			current = self.get(prev)?;
		}
		steps.reverse();
		Some(steps)
	}
}
