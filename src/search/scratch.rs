use crate::{node_id::*, route::Cost, Location, RoadGraph};
use std::ops::{Index, IndexMut};

/// The working memory a priority search keeps for one Node
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct Scratch {
    /// best known Cost from the start
    pub from_start: Cost,
    /// Heuristic estimate of the remaining Cost to the goal
    pub to_goal: Cost,
    /// `from_start + to_goal`, the key in the priority queue
    pub priority: Cost,
}

/// Scratch records for every Node of a Graph, created fresh for each search
#[derive(Debug)]
pub(super) struct ScratchMap(NodeIDMap<Scratch>);

impl ScratchMap {
    /// Every Node starts out unreached with its Heuristic already evaluated,
    /// except for `start` which starts at Cost 0.
    pub fn new<P: Location>(
        graph: &RoadGraph<P>,
        start: NodeID,
        mut heuristic: impl FnMut(NodeID) -> Cost,
    ) -> ScratchMap {
        let mut map = node_id_map_with_cap(graph.vertex_count());
        for id in graph.node_ids() {
            let to_goal = heuristic(id);
            let from_start = if id == start { 0.0 } else { f64::INFINITY };
            map.insert(
                id,
                Scratch {
                    from_start,
                    to_goal,
                    priority: from_start + to_goal,
                },
            );
        }
        ScratchMap(map)
    }
}

impl Index<NodeID> for ScratchMap {
    type Output = Scratch;
    #[track_caller]
    fn index(&self, index: NodeID) -> &Scratch {
        &self.0[&index]
    }
}
impl IndexMut<NodeID> for ScratchMap {
    #[track_caller]
    fn index_mut(&mut self, index: NodeID) -> &mut Scratch {
        self.0
            .get_mut(&index)
            .unwrap_or_else(|| panic!("Invalid NodeID {} in {}:{}", index, file!(), line!()))
    }
}
