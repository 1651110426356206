//! Route searches on a [`RoadGraph`]

mod bfs;
mod priority;
mod reconstruct;
mod scratch;

use crate::{error::SearchError, node_id::NodeID, route::*, Location, RoadGraph, Weight};
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// Configures the priority search behind [`RoadGraph::search_with`]
///
/// A Strategy selects the [`Weight`] that is minimized and weather the search is guided by a
/// Heuristic (A*) or not (Dijkstra). The four combinations are available as constants.
///
/// The Heuristic is the straight-line [`distance`](Location::distance) to the goal when
/// minimizing [`Length`](Weight::Length), and that distance driven at the
/// [`max_speed`](RoadGraph::max_speed) of the Graph when minimizing [`Time`](Weight::Time).
/// Both never overestimate as long as no Road is shorter than the straight line between its
/// endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Strategy {
    /// the Edge attribute to minimize
    pub weight: Weight,
    /// `true`: A*, `false`: Dijkstra
    pub guided: bool,
}

impl Strategy {
    /// Dijkstra's algorithm on road lengths
    pub const DIJKSTRA: Strategy = Strategy {
        weight: Weight::Length,
        guided: false,
    };
    /// A* on road lengths
    pub const A_STAR: Strategy = Strategy {
        weight: Weight::Length,
        guided: true,
    };
    /// Dijkstra's algorithm on travel times
    pub const TIME_DIJKSTRA: Strategy = Strategy {
        weight: Weight::Time,
        guided: false,
    };
    /// A* on travel times
    pub const TIME_A_STAR: Strategy = Strategy {
        weight: Weight::Time,
        guided: true,
    };

    fn name(&self) -> &'static str {
        match (self.weight, self.guided) {
            (Weight::Length, false) => "dijkstra",
            (Weight::Length, true) => "a*",
            (Weight::Time, false) => "time dijkstra",
            (Weight::Time, true) => "time a*",
        }
    }
}

/// Searching for Routes.
///
/// Every search comes in two flavors: `search(start, goal)` and `search_with(start, goal, on_visit)`.
/// `on_visit` is called exactly once with the Location of every Intersection the search examines,
/// in the order they are examined. It is meant for observing the search (e.g. for visualization)
/// and has no influence on the result.
///
/// All searches return the [`Route`] from `start` to `goal` (both included), or a
/// [`SearchError`] if either of them is not an Intersection or the goal is unreachable.
impl<P: Location> RoadGraph<P> {
    /// Finds the Route with the fewest Roads using breadth-first search.
    ///
    /// Road lengths are ignored, the [`cost`](Route::cost) of the Route is its number of Roads.
    ///
    /// ```
    /// use road_pathfinding::{GeoPoint, RoadGraph};
    ///
    /// let (a, b, c) = (GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 0.01), GeoPoint::new(0.0, 0.02));
    /// let mut graph = RoadGraph::new();
    /// for p in [a, b, c] {
    ///     graph.add_vertex(p);
    /// }
    /// graph.add_edge(a, b, "", "residential", 1.2)?;
    /// graph.add_edge(b, c, "", "residential", 1.2)?;
    /// graph.add_edge(a, c, "Scenic Route", "residential", 30.0)?;
    ///
    /// let route = graph.bfs(a, c)?;
    /// assert_eq!(route.path, vec![a, c]);
    /// assert_eq!(route.cost, 1.0);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn bfs(&self, start: P, goal: P) -> Result<Route<P>, SearchError> {
        self.bfs_with(start, goal, |_| {})
    }

    /// [`bfs`](RoadGraph::bfs) with a callback for every examined Intersection
    pub fn bfs_with(
        &self,
        start: P,
        goal: P,
        on_visit: impl FnMut(P),
    ) -> Result<Route<P>, SearchError> {
        let (start, goal) = self.endpoints(start, goal)?;
        bfs::breadth_first_search(self, start, goal, on_visit)
    }

    /// Finds the shortest Route using Dijkstra's algorithm. The Cost is in kilometers.
    pub fn dijkstra(&self, start: P, goal: P) -> Result<Route<P>, SearchError> {
        self.dijkstra_with(start, goal, |_| {})
    }

    /// [`dijkstra`](RoadGraph::dijkstra) with a callback for every examined Intersection
    pub fn dijkstra_with(
        &self,
        start: P,
        goal: P,
        on_visit: impl FnMut(P),
    ) -> Result<Route<P>, SearchError> {
        self.search_with(start, goal, Strategy::DIJKSTRA, on_visit)
    }

    /// Finds the shortest Route using A*, guided by the straight-line distance to the goal.
    ///
    /// Returns a Route as short as the one from [`dijkstra`](RoadGraph::dijkstra), usually after
    /// examining far fewer Intersections. The Cost is in kilometers.
    ///
    /// ```
    /// use road_pathfinding::{GeoPoint, Location, RoadGraph};
    ///
    /// // a straight road from west to east, the goal is at the eastern end
    /// let points: Vec<GeoPoint> = (-5..=5).map(|i| GeoPoint::new(0.0, i as f64 * 0.01)).collect();
    /// let mut graph = RoadGraph::new();
    /// for &p in &points {
    ///     graph.add_vertex(p);
    /// }
    /// for pair in points.windows(2) {
    ///     let length = pair[0].distance(&pair[1]) * 1.1;
    ///     graph.add_edge(pair[0], pair[1], "", "primary", length)?;
    ///     graph.add_edge(pair[1], pair[0], "", "primary", length)?;
    /// }
    ///
    /// let (start, goal) = (points[5], points[10]);
    /// let dijkstra = graph.dijkstra(start, goal)?;
    /// let a_star = graph.a_star_search(start, goal)?;
    ///
    /// assert_eq!(dijkstra.path, a_star.path);
    /// assert!(a_star.explored < dijkstra.explored);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn a_star_search(&self, start: P, goal: P) -> Result<Route<P>, SearchError> {
        self.a_star_search_with(start, goal, |_| {})
    }

    /// [`a_star_search`](RoadGraph::a_star_search) with a callback for every examined Intersection
    pub fn a_star_search_with(
        &self,
        start: P,
        goal: P,
        on_visit: impl FnMut(P),
    ) -> Result<Route<P>, SearchError> {
        self.search_with(start, goal, Strategy::A_STAR, on_visit)
    }

    /// Finds the fastest Route using Dijkstra's algorithm. The Cost is in hours.
    pub fn time_dijkstra(&self, start: P, goal: P) -> Result<Route<P>, SearchError> {
        self.time_dijkstra_with(start, goal, |_| {})
    }

    /// [`time_dijkstra`](RoadGraph::time_dijkstra) with a callback for every examined Intersection
    pub fn time_dijkstra_with(
        &self,
        start: P,
        goal: P,
        on_visit: impl FnMut(P),
    ) -> Result<Route<P>, SearchError> {
        self.search_with(start, goal, Strategy::TIME_DIJKSTRA, on_visit)
    }

    /// Finds the fastest Route using A*. The Cost is in hours.
    ///
    /// The Heuristic is the straight-line distance to the goal driven at the highest speed found
    /// on any Road of the Graph.
    pub fn time_search(&self, start: P, goal: P) -> Result<Route<P>, SearchError> {
        self.time_search_with(start, goal, |_| {})
    }

    /// [`time_search`](RoadGraph::time_search) with a callback for every examined Intersection
    pub fn time_search_with(
        &self,
        start: P,
        goal: P,
        on_visit: impl FnMut(P),
    ) -> Result<Route<P>, SearchError> {
        self.search_with(start, goal, Strategy::TIME_A_STAR, on_visit)
    }

    /// Runs the priority search with an explicit [`Strategy`].
    ///
    /// All of [`dijkstra`](RoadGraph::dijkstra), [`a_star_search`](RoadGraph::a_star_search),
    /// [`time_dijkstra`](RoadGraph::time_dijkstra) and [`time_search`](RoadGraph::time_search)
    /// are shorthands for this.
    pub fn search_with(
        &self,
        start: P,
        goal: P,
        strategy: Strategy,
        on_visit: impl FnMut(P),
    ) -> Result<Route<P>, SearchError> {
        let (start, goal) = self.endpoints(start, goal)?;
        priority::priority_search(self, start, goal, strategy, on_visit)
    }

    fn endpoints(&self, start: P, goal: P) -> Result<(NodeID, NodeID), SearchError> {
        let start = self.id_at(start).ok_or(SearchError::UnknownStart)?;
        let goal = self.id_at(goal).ok_or(SearchError::UnknownGoal)?;
        Ok((start, goal))
    }
}

/// An entry in the priority queue. Ordered so that a [`BinaryHeap`](std::collections::BinaryHeap)
/// pops the lowest `priority` first, and among equal priorities the earliest pushed.
#[derive(PartialEq, Eq, Debug)]
struct HeuristicElement {
    id: NodeID,
    priority: OrderedFloat<Cost>,
    seq: usize,
}
impl PartialOrd for HeuristicElement {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for HeuristicElement {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.priority
            .cmp(&self.priority)
            .then_with(|| rhs.seq.cmp(&self.seq))
    }
}
