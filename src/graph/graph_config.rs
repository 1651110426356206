use super::edge::typical_speed;

/// Options for configuring a [`RoadGraph`](crate::RoadGraph)
///
/// Default options:
/// ```
/// # use road_pathfinding::GraphConfig;
/// assert_eq!(
/// 	GraphConfig {
/// 		path_limit: 10_000,
/// 		default_speed: 30.0,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphConfig {
    /// The maximum number of Intersections in a reconstructed Route (defaults to `10_000`).
    ///
    /// Walking back from the goal stops after this many steps and reports that no Route was
    /// found, so a broken chain of predecessors can never loop forever. Routes with more
    /// Intersections than this are reported as unreachable.
    pub path_limit: usize,
    /// The speed in km/h used to derive the travel time of roads whose category has no
    /// typical speed (defaults to `30.0`).
    ///
    /// See [`add_edge`](crate::RoadGraph::add_edge) for the known categories.
    pub default_speed: f64,
}

impl GraphConfig {
    /// The default configuration, usable in `const` contexts
    pub const DEFAULT: GraphConfig = GraphConfig {
        path_limit: 10_000,
        default_speed: 30.0,
    };

    /// Creates a default config with a custom [`path_limit`](GraphConfig::path_limit)
    ///
    /// ```
    /// # use road_pathfinding::GraphConfig;
    /// let config = GraphConfig::with_path_limit(50);
    /// assert_eq!(config.path_limit, 50);
    /// assert_eq!(config.default_speed, GraphConfig::DEFAULT.default_speed);
    /// ```
    pub const fn with_path_limit(path_limit: usize) -> GraphConfig {
        GraphConfig {
            path_limit,
            ..GraphConfig::DEFAULT
        }
    }

    /// The speed in km/h assumed for a road of the given category
    pub fn speed_for(&self, category: &str) -> f64 {
        typical_speed(category).unwrap_or(self.default_speed)
    }
}

impl Default for GraphConfig {
    fn default() -> GraphConfig {
        GraphConfig::DEFAULT
    }
}
