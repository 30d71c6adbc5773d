//! The static, index-based Graph that all searches run on.

mod node;
pub use self::node::{Coordinate, Node};

mod edge;
pub use self::edge::Edge;

use crate::{heuristic::Heuristic, search, Cost, NodeID};

/// An immutable-after-construction adjacency structure.
///
/// Nodes are stored in an arena and referenced by their dense [`NodeID`], which is assigned in
/// insertion order starting at `0`. Nodes are never removed, so an ID stays valid for the whole
/// lifetime of the Graph. Every Node owns its outgoing [`Edge`]s.
///
/// Searches only ever borrow the Graph immutably, so a single Graph can serve any number of
/// independent (and concurrent) searches.
///
/// ## Examples
/// ```
/// # use road_pathfinding::{Graph, Coordinate};
/// let mut graph = Graph::new();
/// let a = graph.add_node(Coordinate::new(0.0, 0.0));
/// let b = graph.add_node(Coordinate::new(0.0, 1.0));
/// graph.add_bidirectional_edge(a, b, 1.5);
///
/// assert_eq!((a, b), (0, 1));
/// assert_eq!(graph.len(), 2);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.edges(b)[0].to, a);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
	nodes: slab::Slab<Node>,
	edge_count: usize,
}

impl Graph {
	/// Creates a new, empty Graph
	pub fn new() -> Graph {
		Graph::default()
	}

	/// Creates a new, empty Graph with room for `capacity` Nodes
	pub fn with_capacity(capacity: usize) -> Graph {
		Graph {
			nodes: slab::Slab::with_capacity(capacity),
			edge_count: 0,
		}
	}

	/// Appends a Node at the given Position and returns its ID.
	///
	/// IDs are handed out in increasing order, starting at `0`.
	pub fn add_node(&mut self, value: impl Into<Coordinate>) -> NodeID {
		let id = self.nodes.insert(Node::new(value.into()));
		debug_assert_eq!(id + 1, self.nodes.len(), "Node arena is not dense");
		id as NodeID
	}

	/// Appends a directed Edge from `from` to `to`, owned by `from`.
	///
	/// `weight` must not be negative. This is a precondition of every search on this Graph and
	/// is only checked in debug builds.
	///
	/// ## Panics
	/// If `from` or `to` is not a Node of this Graph. Loaders are expected to validate their
	/// input before building the Graph.
	#[track_caller]
	pub fn add_directed_edge(&mut self, from: NodeID, to: NodeID, weight: Cost) {
		debug_assert!(weight >= 0.0, "negative Edge weight {}", weight);
		assert!(
			self.contains(to),
			"Invalid target NodeID {} (Graph has {} Nodes)",
			to,
			self.len()
		);
		self[from].edges.push(Edge::new(from, to, weight));
		self.edge_count += 1;
	}

	/// Connects `a` and `b` in both directions with the same `weight`.
	///
	/// Equivalent to calling [`add_directed_edge`](Graph::add_directed_edge) twice.
	///
	/// ## Panics
	/// If `a` or `b` is not a Node of this Graph.
	#[track_caller]
	pub fn add_bidirectional_edge(&mut self, a: NodeID, b: NodeID, weight: Cost) {
		self.add_directed_edge(a, b, weight);
		self.add_directed_edge(b, a, weight);
	}

	/// The number of Nodes in the Graph
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// `true` if the Graph has no Nodes
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// The number of directed Edges in the Graph
	pub fn edge_count(&self) -> usize {
		self.edge_count
	}

	/// `true` if `id` refers to a Node of this Graph
	pub fn contains(&self, id: NodeID) -> bool {
		self.nodes.contains(id as usize)
	}

	/// The Node with the given ID, if there is one
	pub fn node(&self, id: NodeID) -> Option<&Node> {
		self.nodes.get(id as usize)
	}

	/// All Edges leaving the Node `id`
	///
	/// ## Panics
	/// If `id` is not a Node of this Graph.
	#[track_caller]
	pub fn edges(&self, id: NodeID) -> &[Edge] {
		&self[id].edges
	}

	/// Finds the directed Edge from `from` to `to` with the lowest weight
	pub fn cheapest_edge(&self, from: NodeID, to: NodeID) -> Option<&Edge> {
		self.node(from)?
			.edges
			.iter()
			.filter(|edge| edge.to == to)
			.min_by(|a, b| a.weight.total_cmp(&b.weight))
	}

	/// Iterates over all Nodes in the order of their IDs
	pub fn iter(&self) -> impl Iterator<Item = (NodeID, &Node)> + '_ {
		self.nodes.iter().map(|(id, node)| (id as NodeID, node))
	}

	/// Shorthand for running an [`AStarEngine`](search::AStarEngine) with the default
	/// [`SearchConfig`](search::SearchConfig).
	///
	/// ## Examples
	/// ```
	/// # use road_pathfinding::{Graph, heuristic::euclidean};
	/// let mut graph = Graph::new();
	/// let a = graph.add_node((0.0, 0.0));
	/// let b = graph.add_node((0.0, 1.0));
	/// let c = graph.add_node((1.0, 1.0));
	/// graph.add_bidirectional_edge(a, b, 1.0);
	/// graph.add_bidirectional_edge(b, c, 1.0);
	///
	/// let result = graph.find_path(a, c, euclidean).unwrap();
	/// assert_eq!(result.path, vec![a, b, c]);
	/// assert_eq!(result.cost, 2.0);
	/// ```
	pub fn find_path<H: Heuristic>(
		&self,
		start: NodeID,
		goal: NodeID,
		heuristic: H,
	) -> Result<search::SearchResult, search::SearchError> {
		search::a_star_search(self, start, goal, heuristic)
	}
}

use std::ops::Index;
impl Index<NodeID> for Graph {
	type Output = Node;
	#[track_caller]
	fn index(&self, index: NodeID) -> &Node {
		self.nodes
			.get(index as usize)
			.unwrap_or_else(|| panic!("Invalid NodeID {} (Graph has {} Nodes)", index, self.len()))
	}
}

use std::ops::IndexMut;
impl IndexMut<NodeID> for Graph {
	#[track_caller]
	fn index_mut(&mut self, index: NodeID) -> &mut Node {
		let len = self.len();
		self.nodes
			.get_mut(index as usize)
			.unwrap_or_else(|| panic!("Invalid NodeID {} (Graph has {} Nodes)", index, len))
	}
}
