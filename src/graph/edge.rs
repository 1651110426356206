use crate::{node_id::*, route::Cost};

/// A directed road segment between two Intersections
///
/// Edges are created by [`add_edge`](crate::RoadGraph::add_edge) and never change afterwards.
/// A road that can be driven in both directions needs two Edges.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub(crate) id: EdgeID,
    pub(crate) name: String,
    pub(crate) category: String,
    pub(crate) length: f64,
    pub(crate) time: f64,
    pub(crate) from: NodeID,
    pub(crate) to: NodeID,
}

impl Edge {
    /// the id of this Edge within its Graph
    pub fn id(&self) -> EdgeID {
        self.id
    }
    /// the name of the road
    pub fn name(&self) -> &str {
        &self.name
    }
    /// the road category, e.g. `"residential"` or `"motorway"`
    pub fn category(&self) -> &str {
        &self.category
    }
    /// the length in kilometers
    pub fn length(&self) -> f64 {
        self.length
    }
    /// the travel time in hours
    pub fn time(&self) -> f64 {
        self.time
    }
    /// the Node this road starts at
    pub fn from(&self) -> NodeID {
        self.from
    }
    /// the Node this road leads to
    pub fn to(&self) -> NodeID {
        self.to
    }
    /// the average speed along this road in km/h (infinite for roads with zero travel time)
    pub fn speed(&self) -> f64 {
        if self.time > 0.0 {
            self.length / self.time
        } else {
            f64::INFINITY
        }
    }
}

/// Selects which attribute of an [`Edge`] a search minimizes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Weight {
    /// the length in kilometers
    Length,
    /// the travel time in hours
    Time,
}

impl Weight {
    /// the cost of traversing `edge`
    pub fn of(self, edge: &Edge) -> Cost {
        match self {
            Weight::Length => edge.length,
            Weight::Time => edge.time,
        }
    }
}

/// The typical speed in km/h on a road of the given category, if it is a known one.
///
/// `*_link` ramps share the speed of the road they connect to.
pub fn typical_speed(category: &str) -> Option<f64> {
    let base = category.strip_suffix("_link").unwrap_or(category);
    let kmh = match base {
        "motorway" => 100.0,
        "trunk" => 80.0,
        "primary" => 60.0,
        "secondary" => 50.0,
        "tertiary" => 40.0,
        "residential" | "unclassified" => 30.0,
        "service" => 20.0,
        "living_street" => 10.0,
        _ => return None,
    };
    Some(kmh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speeds() {
        assert_eq!(typical_speed("motorway"), Some(100.0));
        assert_eq!(typical_speed("motorway_link"), Some(100.0));
        assert_eq!(typical_speed("living_street"), Some(10.0));
        assert_eq!(typical_speed("dirt track"), None);
    }

    #[test]
    fn weight() {
        let edge = Edge {
            id: 0,
            name: String::from("Main Street"),
            category: String::from("residential"),
            length: 3.0,
            time: 0.1,
            from: 0,
            to: 1,
        };
        assert_eq!(Weight::Length.of(&edge), 3.0);
        assert_eq!(Weight::Time.of(&edge), 0.1);
        assert!((edge.speed() - 30.0).abs() < 1e-9);

        let instant = Edge { time: 0.0, ..edge };
        assert_eq!(instant.speed(), f64::INFINITY);
    }
}
