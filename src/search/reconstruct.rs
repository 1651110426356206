use crate::{node_id::*, Location, RoadGraph};

/// Walks the `parents` back from `goal` to `start` and returns the Locations in driving order.
///
/// Gives up with `None` after `limit` Locations or when a link is missing, so a broken map
/// (which would otherwise send the walk around in circles) cannot hang the search.
pub(super) fn reconstruct<P: Location>(
    graph: &RoadGraph<P>,
    parents: &NodeIDMap<NodeID>,
    start: NodeID,
    goal: NodeID,
    limit: usize,
) -> Option<Vec<P>> {
    let mut steps = vec![graph[goal].coords];
    let mut current = goal;

    while current != start {
        if steps.len() >= limit {
            log::warn!(
                "route from {:?} to {:?} exceeds {} intersections",
                graph[start].coords,
                graph[goal].coords,
                limit
            );
            return None;
        }
        current = match parents.get(&current) {
            Some(&prev) => prev,
            None => {
                log::warn!("no predecessor for {:?}", graph[current].coords);
                return None;
            }
        };
        steps.push(graph[current].coords);
    }
    steps.reverse();
    Some(steps)
}
