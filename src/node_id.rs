//! A Module with some utilities for working with NodeIDs

/// The Type used to reference a Node (an intersection) in a [`RoadGraph`](crate::RoadGraph)
pub type NodeID = usize;

/// The Type used to reference an Edge (a road segment) in a [`RoadGraph`](crate::RoadGraph)
pub type EdgeID = usize;

/// A specialized [`HashMap`](hashbrown::HashMap) for NodeIDs with a faster Hasher
pub type NodeIDMap<V> = hashbrown::HashMap<NodeID, V, BuildNodeIDHasher>;
/// A specialized [`HashSet`](hashbrown::HashSet) for NodeIDs with a faster Hasher
pub type NodeIDSet = hashbrown::HashSet<NodeID, BuildNodeIDHasher>;

/// A [`BuildHasher`](std::hash::BuildHasher) specialized on NodeIDs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct BuildNodeIDHasher;

/// A [`Hasher`](std::hash::Hasher) specialized on NodeIDs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeIDHasher(u64);

impl std::hash::BuildHasher for BuildNodeIDHasher {
    type Hasher = NodeIDHasher;
    fn build_hasher(&self) -> NodeIDHasher {
        NodeIDHasher(0)
    }
}
impl std::hash::Hasher for NodeIDHasher {
    /// panics, since only NodeIDs are supposed to be used
    fn write(&mut self, _: &[u8]) {
        unreachable!("This Hasher only works with NodeIDs")
    }
    /// Writes a single NodeID into this hasher.
    fn write_usize(&mut self, id: NodeID) {
        // slab keys are dense, spread them over the high bits hashbrown uses for its control bytes
        self.0 = (id as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }
    fn finish(&self) -> u64 {
        self.0
    }
}

/// create a new [`NodeIDMap`] with room for at least `capacity` entries
pub fn node_id_map_with_cap<V>(capacity: usize) -> NodeIDMap<V> {
    NodeIDMap::with_capacity_and_hasher(capacity, BuildNodeIDHasher)
}
/// create a new [`NodeIDSet`] with room for at least `capacity` entries
pub fn node_id_set_with_cap(capacity: usize) -> NodeIDSet {
    NodeIDSet::with_capacity_and_hasher(capacity, BuildNodeIDHasher)
}
