/// The Type used for accumulated distances (kilometers) and travel times (hours)
pub type Cost = f64;

/// A Route found by one of the searches of a [`RoadGraph`](crate::RoadGraph)
///
/// Stores the sequence of Intersections in `path`, from the start to the goal (both included),
/// the total Cost of following it in `cost` and how many Intersections the search had to examine
/// in `explored`.
///
/// The meaning of `cost` depends on the search: the number of Roads for
/// [`bfs`](crate::RoadGraph::bfs), kilometers for [`dijkstra`](crate::RoadGraph::dijkstra) and
/// [`a_star_search`](crate::RoadGraph::a_star_search), hours for
/// [`time_dijkstra`](crate::RoadGraph::time_dijkstra) and
/// [`time_search`](crate::RoadGraph::time_search).
#[derive(Debug, Clone, PartialEq)]
pub struct Route<P> {
    /// the Intersections along the Route
    pub path: Vec<P>,
    /// the total Cost of the Route
    pub cost: Cost,
    /// the number of Intersections examined by the search
    pub explored: usize,
}

impl<P> Route<P> {
    /// creates a new Route with the given sequence of Intersections, total Cost and search effort
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use road_pathfinding::Route;
    /// let route = Route::new(vec!['a', 'b', 'c'], 4.2, 7);
    ///
    /// assert_eq!(route.path, vec!['a', 'b', 'c']);
    /// assert_eq!(route.cost, 4.2);
    /// assert_eq!(route.explored, 7);
    /// ```
    pub fn new(path: Vec<P>, cost: Cost, explored: usize) -> Route<P> {
        Route {
            path,
            cost,
            explored,
        }
    }

    /// the first Intersection of the Route
    pub fn start(&self) -> Option<&P> {
        self.path.first()
    }

    /// the last Intersection of the Route
    pub fn goal(&self) -> Option<&P> {
        self.path.last()
    }

    /// the number of Roads driven along the Route
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Route<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<P> Deref for Route<P> {
    type Target = [P];
    fn deref(&self) -> &[P] {
        &self.path
    }
}

impl<P> From<Route<P>> for Vec<P> {
    fn from(route: Route<P>) -> Vec<P> {
        route.path
    }
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Route<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Route[Cost = {}]: ", self.cost)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {}", p)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {

    use super::Route;
    #[test]
    fn route_index() {
        let route = Route::new(vec![4, 2, 0], 42.0, 3);

        assert_eq!(route[0], 4);
        assert_eq!(route[1], 2);
        assert_eq!(route[2], 0);
        assert_eq!(route.len(), 3);
        assert_eq!(route.hops(), 2);
        assert_eq!(route.start(), Some(&4));
        assert_eq!(route.goal(), Some(&0));
    }

    #[test]
    fn route_display() {
        let route = Route::new(vec![4, 2, 0], 4.5, 3);

        assert_eq!(&format!("{}", route), "Route[Cost = 4.5]: 4 -> 2 -> 0");
    }

    #[test]
    fn route_display_empty() {
        let route = Route::new(Vec::<i32>::new(), 0.0, 0);

        assert_eq!(&format!("{}", route), "Route[Cost = 0]: <empty>");
        assert_eq!(route.hops(), 0);
    }
}
