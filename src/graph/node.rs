use crate::node_id::*;

/// An Intersection in a [`RoadGraph`](crate::RoadGraph)
#[derive(Clone, Debug)]
pub struct Node<P> {
    pub(crate) id: NodeID,
    pub(crate) coords: P,
    pub(crate) outgoing: Vec<EdgeID>,
}

impl<P: Copy> Node<P> {
    pub(crate) fn new(id: NodeID, coords: P) -> Node<P> {
        Node {
            id,
            coords,
            outgoing: Vec::new(),
        }
    }

    /// the id of this Node within its Graph
    pub fn id(&self) -> NodeID {
        self.id
    }
    /// the Location of this Intersection
    pub fn coords(&self) -> P {
        self.coords
    }
    /// the Edges starting at this Intersection, in the order they were added
    pub fn outgoing(&self) -> &[EdgeID] {
        &self.outgoing
    }
}
