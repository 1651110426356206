//! Errors reported while building, searching and loading a [`RoadGraph`](crate::RoadGraph)

use thiserror::Error;

/// Rejected edge insertions
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GraphError {
    /// one of the endpoints was never added with [`add_vertex`](crate::RoadGraph::add_vertex)
    #[error("Both endpoints of a road must be added as vertices first")]
    UnknownEndpoint,
    /// `from == to`
    #[error("A road cannot start and end at the same intersection")]
    SelfLoop,
    /// length is zero, negative or not finite
    #[error("Invalid road length: {0} km")]
    InvalidLength(f64),
    /// travel time is negative or not finite
    #[error("Invalid travel time: {0} h")]
    InvalidTime(f64),
}

/// Reasons for a search to come back without a Route
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// the start Location is not a vertex of the Graph
    #[error("Start is not an intersection of the graph")]
    UnknownStart,
    /// the goal Location is not a vertex of the Graph
    #[error("Goal is not an intersection of the graph")]
    UnknownGoal,
    /// the goal cannot be reached from the start
    #[error("No route to the goal, explored {explored} intersections")]
    NoPath {
        /// the number of Nodes examined before giving up
        explored: usize,
    },
}

/// Failures while reading a map with the [`loader`](crate::loader)
#[derive(Error, Debug)]
pub enum LoadError {
    /// reading the source failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// a line could not be understood
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// what went wrong
        message: String,
    },
    /// a road was rejected by the Graph
    #[error("line {line}: {source}")]
    Graph {
        /// 1-based line number
        line: usize,
        /// the rejection
        source: GraphError,
    },
    /// the declared number of vertices or edges does not match the file
    #[error("expected {expected} {what}, found {found}")]
    Count {
        /// `"vertices"` or `"edges"`
        what: &'static str,
        /// the declared count
        expected: usize,
        /// the number of lines actually present
        found: usize,
    },
}
