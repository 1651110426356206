#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find shortest Routes in Road Networks.
//!
//! ## Introduction
//! A Road Network is modelled as a directed, weighted Graph: every Intersection is a Node,
//! identified by its [`Location`], and every Road segment is an [`Edge`] leading from one
//! Intersection to another. Each Road has a length (in kilometers) and a travel time (in hours).
//! A Road that can be driven in both directions is simply two Edges.
//!
//! Routes can be searched with
//! - [breadth-first search](RoadGraph::bfs) for the Route with the fewest Roads,
//! - [Dijkstra's algorithm](RoadGraph::dijkstra) for the shortest Route,
//! - [A*](RoadGraph::a_star_search) for the shortest Route, guided by the straight-line
//!   distance to the goal, which usually examines far fewer Intersections,
//! - [`time_dijkstra`](RoadGraph::time_dijkstra) and [`time_search`](RoadGraph::time_search)
//!   for the fastest Route with Dijkstra or A*.
//!
//! Every search also has a `_with` variant taking a callback, which is invoked once for every
//! Intersection the search examines. This is useful to visualize how the different algorithms
//! explore the map.
//!
//! ## Examples
//! Building a Graph and finding a Route:
//! ```
//! use road_pathfinding::{GeoPoint, RoadGraph};
//!
//! //  a ---- b
//! //  |      |
//! //  c ---- d
//! let a = GeoPoint::new(32.8700, -117.2210);
//! let b = GeoPoint::new(32.8700, -117.2190);
//! let c = GeoPoint::new(32.8690, -117.2210);
//! let d = GeoPoint::new(32.8690, -117.2190);
//!
//! let mut graph = RoadGraph::new();
//! for point in [a, b, c, d] {
//!     graph.add_vertex(point);
//! }
//! graph.add_edge(a, b, "North Street", "residential", 0.19)?;
//! graph.add_edge(b, d, "East Street", "residential", 0.12)?;
//! graph.add_edge(a, c, "West Street", "residential", 0.12)?;
//! graph.add_edge(c, d, "South Street", "residential", 0.25)?;
//!
//! let route = graph.a_star_search(a, d)?;
//! assert_eq!(route.path, vec![a, b, d]);
//! assert!((route.cost - 0.31).abs() < 1e-9);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Observing a search:
//! ```
//! # use road_pathfinding::{GeoPoint, RoadGraph};
//! # let a = GeoPoint::new(32.8700, -117.2210);
//! # let b = GeoPoint::new(32.8700, -117.2190);
//! # let mut graph = RoadGraph::new();
//! # graph.add_vertex(a);
//! # graph.add_vertex(b);
//! # graph.add_edge(a, b, "North Street", "residential", 0.19)?;
//! let mut examined = vec![];
//! let route = graph.dijkstra_with(a, b, |point| examined.push(point))?;
//!
//! assert_eq!(examined, vec![a, b]);
//! assert_eq!(route.explored, examined.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Loading Maps
//! Instead of adding every Intersection and Road by hand, a whole map can be read from a text
//! file. See the [`loader`] Module for the format.
//!
//! ### Errors
//! Invalid Roads are rejected with a [`GraphError`]. Searches return a [`SearchError`] if the
//! start or goal is not an Intersection of the Graph, or if the goal cannot be reached.
//!
//! ### Logging
//! The crate reports through the [`log`](https://docs.rs/log) facade: the outcome of every
//! search at `debug` level, individual improvements at `trace` level.

mod error;
pub use self::error::{GraphError, LoadError, SearchError};

mod graph;
pub use self::graph::{typical_speed, Edge, GraphConfig, Node, RoadGraph, Weight};

mod location;
pub use self::location::{GeoPoint, Location, EARTH_RADIUS_KM};

pub mod loader;

pub mod node_id;
pub use self::node_id::{EdgeID, NodeID};

mod route;
pub use self::route::{Cost, Route};

mod search;
pub use self::search::Strategy;

/// The most commonly used types
pub mod prelude {
    pub use crate::{GeoPoint, GraphConfig, Location, RoadGraph, Route, SearchError, Weight};
}
