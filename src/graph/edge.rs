use crate::{Cost, NodeID};

/// A directed, weighted Edge between two Nodes of a [`Graph`](super::Graph)
///
/// Undirected connections are stored as two Edges, one owned by each end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
	/// the Node owning this Edge
	pub from: NodeID,
	/// the Node this Edge leads to
	pub to: NodeID,
	/// the Cost of walking along this Edge. Never negative.
	pub weight: Cost,
}

impl Edge {
	/// Creates a new Edge
	pub fn new(from: NodeID, to: NodeID, weight: Cost) -> Edge {
		Edge { from, to, weight }
	}
}
