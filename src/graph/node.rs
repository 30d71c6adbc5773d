use super::Edge;
use crate::Cost;

/// The geographic Position of a Node
///
/// The values are only ever read by a [`Heuristic`](crate::heuristic::Heuristic), so any
/// planar or spherical interpretation is up to the Heuristic in use.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coordinate {
	/// the latitude (or `y`) of the Position
	pub lat: f64,
	/// the longitude (or `x`) of the Position
	pub lon: f64,
}

impl Coordinate {
	/// Creates a new Coordinate
	pub fn new(lat: f64, lon: f64) -> Coordinate {
		Coordinate { lat, lon }
	}

	/// The straight-line Distance to `other`, treating latitude and longitude as planar coordinates
	/// ## Examples
	/// ```
	/// # use road_pathfinding::Coordinate;
	/// let a = Coordinate::new(0.0, 0.0);
	/// let b = Coordinate::new(3.0, 4.0);
	/// assert_eq!(a.planar_distance(b), 5.0);
	/// ```
	pub fn planar_distance(self, other: Coordinate) -> Cost {
		(self.lat - other.lat).hypot(self.lon - other.lon)
	}
}

impl From<(f64, f64)> for Coordinate {
	fn from((lat, lon): (f64, f64)) -> Coordinate {
		Coordinate { lat, lon }
	}
}

/// A Node in the [`Graph`](super::Graph), owning all of its outgoing Edges
#[derive(Clone, Debug)]
pub struct Node {
	/// the Position of the Node
	pub value: Coordinate,
	/// all Edges leaving this Node
	pub edges: Vec<Edge>,
}

impl Node {
	pub(crate) fn new(value: Coordinate) -> Node {
		Node {
			value,
			edges: Vec::new(),
		}
	}
}
