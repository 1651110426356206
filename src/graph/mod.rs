//! The road network: Intersections connected by directed Roads

mod edge;
pub use edge::{typical_speed, Edge, Weight};

mod node;
pub use node::Node;

mod graph_config;
pub use graph_config::GraphConfig;

use crate::{error::GraphError, node_id::*, route::Cost, GeoPoint, Location};
use hashbrown::{HashMap, HashSet};
use slab::Slab;

/// A directed, weighted Graph of Intersections (Nodes) and Roads (Edges).
///
/// Intersections are identified by their [`Location`]. The Graph is filled incrementally with
/// [`add_vertex`](RoadGraph::add_vertex) and [`add_edge`](RoadGraph::add_edge) (or all at once
/// with the [`loader`](crate::loader)), after which Routes can be searched with
/// [`bfs`](RoadGraph::bfs), [`dijkstra`](RoadGraph::dijkstra),
/// [`a_star_search`](RoadGraph::a_star_search), [`time_dijkstra`](RoadGraph::time_dijkstra)
/// and [`time_search`](RoadGraph::time_search).
///
/// Searches only borrow the Graph immutably. All of their working memory lives in the search
/// itself, so running a search never leaves anything behind that could influence the next one.
///
/// ## Examples
/// ```
/// use road_pathfinding::{GeoPoint, RoadGraph};
///
/// let a = GeoPoint::new(32.8690, -117.2210);
/// let b = GeoPoint::new(32.8690, -117.2190);
/// let c = GeoPoint::new(32.8700, -117.2190);
///
/// let mut graph = RoadGraph::new();
/// for point in [a, b, c] {
///     assert!(graph.add_vertex(point));
/// }
/// graph.add_edge(a, b, "Main Street", "residential", 0.19)?;
/// graph.add_edge(b, c, "Side Street", "residential", 0.12)?;
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
///
/// let route = graph.dijkstra(a, c)?;
/// assert_eq!(route.path, vec![a, b, c]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct RoadGraph<P: Location = GeoPoint> {
    nodes: Slab<Node<P>>,
    positions: HashMap<P, NodeID>,
    edges: Vec<Edge>,
    max_speed: f64,
    config: GraphConfig,
}

impl<P: Location> RoadGraph<P> {
    /// Creates an empty Graph with the default [`GraphConfig`]
    pub fn new() -> RoadGraph<P> {
        RoadGraph::with_config(GraphConfig::default())
    }

    /// Creates an empty Graph with a custom [`GraphConfig`]
    pub fn with_config(config: GraphConfig) -> RoadGraph<P> {
        log::debug!("new road graph: {:?}", config);
        RoadGraph {
            nodes: Slab::new(),
            positions: HashMap::new(),
            edges: Vec::new(),
            max_speed: 0.0,
            config,
        }
    }

    /// Returns the config used to create this Graph
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Adds an Intersection at `location`.
    ///
    /// Returns `false` without changing the Graph if the location is already an Intersection
    /// or is not [valid](Location::is_valid).
    pub fn add_vertex(&mut self, location: P) -> bool {
        if !location.is_valid() || self.positions.contains_key(&location) {
            return false;
        }
        let entry = self.nodes.vacant_entry();
        let id = entry.key();
        entry.insert(Node::new(id, location));
        self.positions.insert(location, id);
        true
    }

    /// Adds a directed Road from `from` to `to`.
    ///
    /// The travel time is derived from the typical speed of the `category`:
    ///
    /// | category | km/h |
    /// |---|---|
    /// | motorway | 100 |
    /// | trunk | 80 |
    /// | primary | 60 |
    /// | secondary | 50 |
    /// | tertiary | 40 |
    /// | residential, unclassified | 30 |
    /// | service | 20 |
    /// | living_street | 10 |
    ///
    /// `*_link` categories use the speed of their base category, any other category uses
    /// [`GraphConfig::default_speed`]. Use [`add_edge_with_time`](RoadGraph::add_edge_with_time)
    /// to set the time explicitly.
    ///
    /// ## Errors
    /// - [`UnknownEndpoint`](GraphError::UnknownEndpoint) if either Location was not added with
    ///   [`add_vertex`](RoadGraph::add_vertex)
    /// - [`SelfLoop`](GraphError::SelfLoop) if `from == to`
    /// - [`InvalidLength`](GraphError::InvalidLength) if `length` is not strictly positive
    pub fn add_edge(
        &mut self,
        from: P,
        to: P,
        name: impl Into<String>,
        category: impl Into<String>,
        length: f64,
    ) -> Result<EdgeID, GraphError> {
        let category = category.into();
        let time = length / self.config.speed_for(&category);
        self.add_edge_with_time(from, to, name, category, length, time)
    }

    /// Adds a directed Road from `from` to `to` with an explicit travel time in hours.
    ///
    /// ## Errors
    /// The same as [`add_edge`](RoadGraph::add_edge), plus
    /// [`InvalidTime`](GraphError::InvalidTime) if `time` is negative or not finite.
    pub fn add_edge_with_time(
        &mut self,
        from: P,
        to: P,
        name: impl Into<String>,
        category: impl Into<String>,
        length: f64,
        time: f64,
    ) -> Result<EdgeID, GraphError> {
        let (from_id, to_id) = match (self.id_at(from), self.id_at(to)) {
            (Some(from_id), Some(to_id)) => (from_id, to_id),
            _ => return Err(GraphError::UnknownEndpoint),
        };
        if from_id == to_id {
            return Err(GraphError::SelfLoop);
        }
        if !(length.is_finite() && length > 0.0) {
            return Err(GraphError::InvalidLength(length));
        }
        if !(time.is_finite() && time >= 0.0) {
            return Err(GraphError::InvalidTime(time));
        }

        let id = self.edges.len();
        let edge = Edge {
            id,
            name: name.into(),
            category: category.into(),
            length,
            time,
            from: from_id,
            to: to_id,
        };
        log::trace!("add road {:?} {:?} -> {:?}", edge.name, from, to);

        self.max_speed = self.max_speed.max(edge.speed());
        self.edges.push(edge);
        self.nodes[from_id].outgoing.push(id);
        Ok(id)
    }

    /// the number of Intersections
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// the number of Roads
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// A copy of all Intersections in the Graph
    pub fn vertices(&self) -> HashSet<P> {
        self.positions.keys().copied().collect()
    }

    /// Weather `location` is an Intersection of the Graph
    pub fn contains(&self, location: P) -> bool {
        self.positions.contains_key(&location)
    }

    /// The NodeID of the Intersection at `location`
    pub fn id_at(&self, location: P) -> Option<NodeID> {
        self.positions.get(&location).copied()
    }

    /// The Location of a Node, if `id` belongs to this Graph
    pub fn location(&self, id: NodeID) -> Option<P> {
        self.nodes.get(id).map(|node| node.coords)
    }

    /// All Roads, in the order they were added
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The Road with the given id
    pub fn edge(&self, id: EdgeID) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// The Roads starting at `location` (empty if it is not an Intersection)
    pub fn outgoing(&self, location: P) -> impl Iterator<Item = &Edge> + '_ {
        self.id_at(location)
            .into_iter()
            .flat_map(move |id| self.outgoing_edges(id))
    }

    pub(crate) fn outgoing_edges(&self, id: NodeID) -> impl Iterator<Item = &Edge> + '_ {
        self.nodes[id].outgoing.iter().map(move |&edge| &self.edges[edge])
    }

    pub(crate) fn node_ids(&self) -> impl Iterator<Item = NodeID> + '_ {
        self.nodes.iter().map(|(id, _)| id)
    }

    /// The highest average speed of any Road in km/h.
    ///
    /// `0.0` for a Graph without Roads, infinite if a Road has zero travel time.
    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    /// The total [`Weight`] of following `path`.
    ///
    /// Between consecutive Locations the cheapest Road is used. Returns `None` if two consecutive
    /// Locations are not connected by a Road (or are not Intersections at all).
    ///
    /// ```
    /// use road_pathfinding::{GeoPoint, RoadGraph, Weight};
    ///
    /// let (a, b) = (GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 0.01));
    /// let mut graph = RoadGraph::new();
    /// graph.add_vertex(a);
    /// graph.add_vertex(b);
    /// graph.add_edge(a, b, "Long Way", "residential", 3.0)?;
    /// graph.add_edge(a, b, "Short Cut", "residential", 1.5)?;
    ///
    /// assert_eq!(graph.path_weight(&[a, b], Weight::Length), Some(1.5));
    /// assert_eq!(graph.path_weight(&[b, a], Weight::Length), None);
    /// # Ok::<(), road_pathfinding::GraphError>(())
    /// ```
    pub fn path_weight(&self, path: &[P], weight: Weight) -> Option<Cost> {
        let mut total = 0.0;
        for step in path.windows(2) {
            let to = self.id_at(step[1])?;
            let cheapest = self
                .outgoing(step[0])
                .filter(|edge| edge.to == to)
                .map(|edge| weight.of(edge))
                .fold(None, |best: Option<Cost>, cost| {
                    Some(best.map_or(cost, |best| best.min(cost)))
                })?;
            total += cheapest;
        }
        Some(total)
    }
}

impl<P: Location> Default for RoadGraph<P> {
    fn default() -> RoadGraph<P> {
        RoadGraph::new()
    }
}

use std::ops::Index;
impl<P: Location> Index<NodeID> for RoadGraph<P> {
    type Output = Node<P>;
    #[track_caller]
    fn index(&self, index: NodeID) -> &Node<P> {
        &self.nodes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> (RoadGraph, [GeoPoint; 3]) {
        let points = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(1.0, 0.0),
            GeoPoint::new(2.0, 0.0),
        ];
        let mut graph = RoadGraph::new();
        for p in points {
            assert!(graph.add_vertex(p));
        }
        (graph, points)
    }

    #[test]
    fn add_vertex() {
        let (mut graph, [a, ..]) = line();
        assert!(!graph.add_vertex(a));
        assert!(!graph.add_vertex(GeoPoint::new(f64::NAN, 0.0)));
        assert_eq!(graph.vertex_count(), 3);
        assert!(graph.contains(a));
        assert!(!graph.contains(GeoPoint::new(5.0, 5.0)));
    }

    #[test]
    fn add_edge() {
        let (mut graph, [a, b, c]) = line();
        let id = graph.add_edge(a, b, "A-B", "residential", 1.0).unwrap();
        graph.add_edge(b, c, "B-C", "primary", 2.0).unwrap();

        assert_eq!(graph.edge_count(), 2);
        let edge = graph.edge(id).unwrap();
        assert_eq!(edge.name(), "A-B");
        assert_eq!(edge.from(), graph.id_at(a).unwrap());
        assert_eq!(edge.to(), graph.id_at(b).unwrap());
        assert!((edge.time() - 1.0 / 30.0).abs() < 1e-12);

        let from_b: Vec<_> = graph.outgoing(b).map(|e| e.name()).collect();
        assert_eq!(from_b, vec!["B-C"]);
        assert_eq!(graph.outgoing(c).count(), 0);
        assert!((graph.max_speed() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_edges() {
        let (mut graph, [a, b, _]) = line();
        let stranger = GeoPoint::new(9.0, 9.0);

        assert_eq!(
            graph.add_edge(a, stranger, "", "", 1.0),
            Err(GraphError::UnknownEndpoint)
        );
        assert_eq!(
            graph.add_edge(stranger, a, "", "", 1.0),
            Err(GraphError::UnknownEndpoint)
        );
        assert_eq!(graph.add_edge(a, a, "", "", 1.0), Err(GraphError::SelfLoop));
        assert_eq!(
            graph.add_edge(a, b, "", "", 0.0),
            Err(GraphError::InvalidLength(0.0))
        );
        assert_eq!(
            graph.add_edge(a, b, "", "", -1.0),
            Err(GraphError::InvalidLength(-1.0))
        );
        assert!(matches!(
            graph.add_edge(a, b, "", "", f64::NAN),
            Err(GraphError::InvalidLength(_))
        ));
        assert_eq!(
            graph.add_edge_with_time(a, b, "", "", 1.0, -0.5),
            Err(GraphError::InvalidTime(-0.5))
        );

        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.outgoing(a).count(), 0);
    }

    #[test]
    fn unknown_category_uses_default_speed() {
        let config = GraphConfig {
            default_speed: 20.0,
            ..Default::default()
        };
        let mut graph = RoadGraph::with_config(config);
        let (a, b) = (GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0));
        graph.add_vertex(a);
        graph.add_vertex(b);
        let id = graph.add_edge(a, b, "Trail", "footpath", 5.0).unwrap();
        assert!((graph.edges()[id].time() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn vertices_is_a_copy() {
        let (mut graph, [a, b, c]) = line();
        let mut vertices = graph.vertices();
        assert_eq!(vertices.len(), 3);
        assert!(vertices.contains(&a) && vertices.contains(&b) && vertices.contains(&c));

        vertices.clear();
        assert_eq!(graph.vertex_count(), 3);
        graph.add_vertex(GeoPoint::new(3.0, 0.0));
        assert_eq!(graph.vertices().len(), 4);
    }

    #[test]
    fn index_and_location() {
        let (graph, [a, ..]) = line();
        let id = graph.id_at(a).unwrap();
        assert_eq!(graph[id].coords(), a);
        assert_eq!(graph[id].id(), id);
        assert_eq!(graph.location(id), Some(a));
        assert_eq!(graph.location(1000), None);
    }
}
