//! Heuristics for estimating the remaining Cost to the goal

use crate::{Coordinate, Cost};

/// Gives an estimate for how expensive it is to reach `goal` from `from`.
///
/// For the found Paths to be optimal, the estimate has to be admissible (never larger than the
/// actual Cost of the cheapest Path). It should also be consistent (`h(u) <= weight(u, v) + h(v)`
/// for every Edge), otherwise Nodes may be expanded more than once.
///
/// If there is no proper way of estimating the Cost, use [`zero`]. This will increase the time
/// it takes to find the Path, but the result will always be correct.
///
/// Any `Fn(Coordinate, Coordinate) -> Cost` is a Heuristic:
/// ```
/// # use road_pathfinding::{heuristic::Heuristic, Coordinate};
/// let manhattan = |a: Coordinate, b: Coordinate| (a.lat - b.lat).abs() + (a.lon - b.lon).abs();
/// assert_eq!(
/// 	manhattan.estimate(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 2.0)),
/// 	3.0
/// );
/// ```
pub trait Heuristic {
	/// Estimates the Cost of the cheapest Path from `from` to `goal`. Must not be negative.
	fn estimate(&self, from: Coordinate, goal: Coordinate) -> Cost;
}

impl<F: Fn(Coordinate, Coordinate) -> Cost> Heuristic for F {
	fn estimate(&self, from: Coordinate, goal: Coordinate) -> Cost {
		self(from, goal)
	}
}

/// Straight-line Distance, treating latitude and longitude as planar coordinates.
///
/// This is only admissible if Edge weights are measured in the same unit as the coordinates and
/// are at least as long as the straight line between their ends.
/// ```
/// # use road_pathfinding::{heuristic::euclidean, Coordinate};
/// assert_eq!(euclidean(Coordinate::new(1.0, 1.0), Coordinate::new(4.0, 5.0)), 5.0);
/// ```
pub fn euclidean(from: Coordinate, goal: Coordinate) -> Cost {
	from.planar_distance(goal)
}

/// Always estimates `0`, which turns A* into Dijkstra's Algorithm.
pub fn zero(_: Coordinate, _: Coordinate) -> Cost {
	0.0
}
