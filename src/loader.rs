//! Reading Road Networks from whitespace-delimited flat files.
//!
//! Two files describe a network:
//! - a node file with one `id lat long` record per line. The `id` column is ignored; Nodes get
//!   their [`NodeID`] from the order of the lines, starting at `0`.
//! - an edge file with one `id from to weight` record per line. Every record becomes a
//!   bidirectional connection.
//!
//! Empty lines are skipped. Every record is validated before it touches the [`Graph`], so a
//! successfully loaded Graph satisfies all preconditions of the search.
//!
//! ```
//! # use road_pathfinding::loader::{read_edges, read_nodes};
//! # use road_pathfinding::Graph;
//! let nodes = "0 -121.9 41.9\n1 -121.8 41.9\n2 -121.8 42.0\n";
//! let edges = "0 0 1 0.1\n1 1 2 0.1\n";
//!
//! let mut graph = Graph::new();
//! read_nodes(nodes.as_bytes(), &mut graph).unwrap();
//! read_edges(edges.as_bytes(), &mut graph).unwrap();
//!
//! assert_eq!(graph.len(), 3);
//! assert_eq!(graph.edge_count(), 4);
//! ```

use crate::{Coordinate, Cost, Graph, NodeID};

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// The ways loading a Road Network can fail
#[derive(Error, Debug)]
pub enum LoadError {
	/// Reading one of the files failed
	#[error("I/O error: {0}")]
	Io(#[from] io::Error),
	/// A record has the wrong number of columns or a column could not be parsed
	#[error("line {line}: {message}")]
	Parse {
		/// the 1-based line number
		line: usize,
		/// what went wrong
		message: String,
	},
	/// An edge record references a Node that does not exist
	#[error("line {line}: unknown Node {index} (only {node_count} Nodes loaded)")]
	UnknownNode {
		/// the 1-based line number
		line: usize,
		/// the referenced Node
		index: u64,
		/// the number of Nodes in the Graph
		node_count: usize,
	},
	/// An edge record has a negative or NaN weight
	#[error("line {line}: invalid Edge weight {weight}")]
	NegativeWeight {
		/// the 1-based line number
		line: usize,
		/// the offending weight
		weight: Cost,
	},
}

/// Appends one Node per `id lat long` record of `reader` to `graph`.
///
/// Returns the number of Nodes added.
pub fn read_nodes(reader: impl BufRead, graph: &mut Graph) -> Result<usize, LoadError> {
	let mut added = 0;
	for_each_record(reader, |line, columns| {
		let [_, lat, lon] = split_columns::<3>(line, columns, "id lat long")?;
		let lat: f64 = parse_column(line, lat, "latitude")?;
		let lon: f64 = parse_column(line, lon, "longitude")?;
		graph.add_node(Coordinate::new(lat, lon));
		added += 1;
		Ok(())
	})?;
	log_debug!("loaded {} Nodes", added);
	Ok(added)
}

/// Adds a bidirectional connection per `id from to weight` record of `reader` to `graph`.
///
/// Returns the number of records read. Every record adds two directed Edges.
pub fn read_edges(reader: impl BufRead, graph: &mut Graph) -> Result<usize, LoadError> {
	let mut added = 0;
	for_each_record(reader, |line, columns| {
		let [_, from, to, weight] = split_columns::<4>(line, columns, "id from to weight")?;
		let from = node_column(graph, line, from)?;
		let to = node_column(graph, line, to)?;
		let weight: Cost = parse_column(line, weight, "weight")?;
		if !(weight >= 0.0) {
			return Err(LoadError::NegativeWeight { line, weight });
		}
		graph.add_bidirectional_edge(from, to, weight);
		added += 1;
		Ok(())
	})?;
	log_debug!("loaded {} connections", added);
	Ok(added)
}

/// Builds a Graph from a node file and an edge file.
pub fn load_graph(node_path: impl AsRef<Path>, edge_path: impl AsRef<Path>) -> Result<Graph, LoadError> {
	let mut graph = Graph::new();
	read_nodes(BufReader::new(File::open(node_path)?), &mut graph)?;
	read_edges(BufReader::new(File::open(edge_path)?), &mut graph)?;
	Ok(graph)
}

fn for_each_record(
	reader: impl BufRead,
	mut handle: impl FnMut(usize, &[&str]) -> Result<(), LoadError>,
) -> Result<(), LoadError> {
	for (index, text) in reader.lines().enumerate() {
		let text = text?;
		let columns: Vec<&str> = text.split_whitespace().collect();
		if columns.is_empty() {
			continue;
		}
		handle(index + 1, &columns)?;
	}
	Ok(())
}

fn split_columns<'a, const N: usize>(
	line: usize,
	columns: &[&'a str],
	format: &str,
) -> Result<[&'a str; N], LoadError> {
	<[&str; N]>::try_from(columns).map_err(|_| LoadError::Parse {
		line,
		message: format!(
			"expected {} columns ({}), found {}",
			N,
			format,
			columns.len()
		),
	})
}

fn parse_column<T: FromStr>(line: usize, column: &str, name: &str) -> Result<T, LoadError> {
	column.parse().map_err(|_| LoadError::Parse {
		line,
		message: format!("invalid {} {:?}", name, column),
	})
}

fn node_column(graph: &Graph, line: usize, column: &str) -> Result<NodeID, LoadError> {
	let index: u64 = parse_column(line, column, "Node index")?;
	match NodeID::try_from(index) {
		Ok(id) if graph.contains(id) => Ok(id),
		_ => Err(LoadError::UnknownNode {
			line,
			index,
			node_count: graph.len(),
		}),
	}
}
