use super::reconstruct::reconstruct;
use crate::{error::SearchError, node_id::*, route::*, Location, RoadGraph};
use std::collections::VecDeque;

pub(super) fn breadth_first_search<P: Location>(
    graph: &RoadGraph<P>,
    start: NodeID,
    goal: NodeID,
    mut on_visit: impl FnMut(P),
) -> Result<Route<P>, SearchError> {
    let mut visited = node_id_set_with_cap(graph.vertex_count());
    let mut parents = node_id_map_with_cap(graph.vertex_count());
    let mut next = VecDeque::new();
    next.push_back(start);
    visited.insert(start);

    let mut explored = 0;
    while let Some(current) = next.pop_front() {
        explored += 1;
        on_visit(graph[current].coords);

        if current == goal {
            log::debug!("bfs: found goal after exploring {} intersections", explored);
            let path = reconstruct(graph, &parents, start, goal, graph.config().path_limit)
                .ok_or(SearchError::NoPath { explored })?;
            let cost = (path.len() - 1) as Cost;
            return Ok(Route::new(path, cost, explored));
        }

        for edge in graph.outgoing_edges(current) {
            if visited.insert(edge.to) {
                parents.insert(edge.to, current);
                next.push_back(edge.to);
            }
        }
    }

    log::debug!("bfs: goal unreachable, explored {} intersections", explored);
    Err(SearchError::NoPath { explored })
}
