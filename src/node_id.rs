//! A Module with some utilities for working with NodeIDs

use crate::NodeID;
use std::hash::{BuildHasherDefault, Hasher};

/// A specialized [`HashMap`](hashbrown::HashMap) for NodeIDs with a faster Hasher
pub type NodeIDMap<V> = hashbrown::HashMap<NodeID, V, BuildHasherDefault<NodeIDHasher>>;

/// A [`Hasher`](Hasher) specialized on NodeIDs
///
/// NodeIDs are dense indices, so the ID itself is already a perfectly distributed hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct NodeIDHasher(u64);

impl Hasher for NodeIDHasher {
	/// panics, since only NodeIDs are supposed to be used
	fn write(&mut self, _: &[u8]) {
		unreachable!("This Hasher only works with NodeIDs")
	}
	/// Writes a single NodeID into this hasher.
	fn write_u32(&mut self, id: NodeID) {
		self.0 = id as u64
	}
	fn finish(&self) -> u64 {
		self.0
	}
}

/// create a new [`NodeIDMap`] with room for at least `capacity` entries
pub fn node_id_map_with_cap<V>(capacity: usize) -> NodeIDMap<V> {
	NodeIDMap::with_capacity_and_hasher(capacity, Default::default())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn identity_hash() {
		let mut hasher = NodeIDHasher::default();
		hasher.write_u32(42);
		assert_eq!(hasher.finish(), 42);
	}

	#[test]
	fn map_roundtrip() {
		let mut map = node_id_map_with_cap(4);
		map.insert(3, "three");
		map.insert(7, "seven");
		assert_eq!(map.get(&3), Some(&"three"));
		assert_eq!(map.get(&5), None);
	}
}
