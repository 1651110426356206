use super::{reconstruct::reconstruct, scratch::ScratchMap, HeuristicElement, Strategy};
use crate::{error::SearchError, node_id::*, route::*, Location, RoadGraph, Weight};
use ordered_float::OrderedFloat;
use std::collections::BinaryHeap;

/// Dijkstra or A*, on lengths or travel times, depending on `strategy`.
///
/// Uses lazy deletion: an improved Node is pushed again instead of updated in place, and
/// entries of Nodes that are already finalized are discarded when popped.
pub(super) fn priority_search<P: Location>(
    graph: &RoadGraph<P>,
    start: NodeID,
    goal: NodeID,
    strategy: Strategy,
    mut on_visit: impl FnMut(P),
) -> Result<Route<P>, SearchError> {
    let Strategy { weight, guided } = strategy;
    let goal_pos = graph[goal].coords;
    let mut scratch = ScratchMap::new(graph, start, |id| {
        if guided {
            heuristic(graph, weight, graph[id].coords, goal_pos)
        } else {
            0.0
        }
    });

    let size_hint = graph.vertex_count();
    let mut finalized = node_id_set_with_cap(size_hint);
    let mut parents = node_id_map_with_cap(size_hint);
    let mut next = BinaryHeap::with_capacity(size_hint / 2);
    let mut seq = 0;
    next.push(HeuristicElement {
        id: start,
        priority: OrderedFloat(scratch[start].priority),
        seq,
    });

    while let Some(HeuristicElement { id: current_id, .. }) = next.pop() {
        if !finalized.insert(current_id) {
            continue;
        }
        on_visit(graph[current_id].coords);

        if current_id == goal {
            let explored = finalized.len();
            log::debug!(
                "{}: found goal after exploring {} intersections",
                strategy.name(),
                explored
            );
            let path = reconstruct(graph, &parents, start, goal, graph.config().path_limit)
                .ok_or(SearchError::NoPath { explored })?;
            return Ok(Route::new(path, scratch[goal].from_start, explored));
        }

        let current_cost = scratch[current_id].from_start;
        for edge in graph.outgoing_edges(current_id) {
            let other_id = edge.to;
            if finalized.contains(&other_id) {
                continue;
            }
            let other_cost = current_cost + weight.of(edge);
            let other = &mut scratch[other_id];
            if other_cost < other.from_start {
                log::trace!(
                    "{}: {:?} improved {} -> {}",
                    strategy.name(),
                    graph[other_id].coords,
                    other.from_start,
                    other_cost
                );
                other.from_start = other_cost;
                other.priority = other_cost + other.to_goal;
                parents.insert(other_id, current_id);

                seq += 1;
                next.push(HeuristicElement {
                    id: other_id,
                    priority: OrderedFloat(other.priority),
                    seq,
                });
            }
        }
    }

    let explored = finalized.len();
    log::debug!(
        "{}: goal unreachable, explored {} intersections",
        strategy.name(),
        explored
    );
    Err(SearchError::NoPath { explored })
}

/// A lower bound for the Cost of getting from `pos` to `goal`.
fn heuristic<P: Location>(graph: &RoadGraph<P>, weight: Weight, pos: P, goal: P) -> Cost {
    let distance = pos.distance(&goal);
    match weight {
        Weight::Length => distance,
        Weight::Time => {
            let max_speed = graph.max_speed();
            if max_speed > 0.0 {
                // 0 for an infinite max_speed
                distance / max_speed
            } else {
                0.0
            }
        }
    }
}
