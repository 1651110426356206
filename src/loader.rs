//! Reading road maps from a simple line-oriented text format.
//!
//! ## Format
//! ```text
//! # comments and blank lines are ignored
//! 3                                   <- number of intersections
//! 2                                   <- number of roads
//! 32.8690 -117.2210                   <- one intersection per line: latitude longitude
//! 32.8690 -117.2190
//! 32.8700 -117.2190
//! 32.8690 -117.2210 32.8690 -117.2190 "Main Street" residential 0.19
//! 32.8690 -117.2190 32.8700 -117.2190 "Side Street" service 0.12 0.006
//! ```
//! A road line contains the coordinates of both endpoints, the road name in double quotes and
//! the category, optionally followed by the length in kilometers and the travel time in hours.
//! A missing length is taken as the straight-line [`distance`](crate::Location::distance) of
//! the endpoints, a missing time is derived from the category (see
//! [`add_edge`](crate::RoadGraph::add_edge)).
//!
//! Roads are directed. A road that can be driven both ways needs a line for each direction.

use crate::{error::LoadError, Location, RoadGraph};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads a map from `reader` into `graph`.
///
/// Intersections already present in `graph` are kept, so several maps can be merged into one
/// Graph.
///
/// ## Examples
/// ```
/// use road_pathfinding::{loader::load_road_map, GeoPoint, RoadGraph};
///
/// let map = "\
/// 2
/// 1
/// 32.8690 -117.2210
/// 32.8690 -117.2190
/// 32.8690 -117.2210 32.8690 -117.2190 \"Main Street\" residential 0.19
/// ";
/// let mut graph: RoadGraph<GeoPoint> = RoadGraph::new();
/// load_road_map(map.as_bytes(), &mut graph)?;
///
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.edges()[0].name(), "Main Street");
/// # Ok::<(), road_pathfinding::LoadError>(())
/// ```
///
/// ## Errors
/// - [`LoadError::Io`] if reading fails
/// - [`LoadError::Parse`] for malformed lines
/// - [`LoadError::Graph`] if a road is rejected by [`add_edge`](RoadGraph::add_edge)
/// - [`LoadError::Count`] if the declared counts do not match the lines present
pub fn load_road_map<P, R>(reader: R, graph: &mut RoadGraph<P>) -> Result<(), LoadError>
where
    P: Location + From<(f64, f64)>,
    R: BufRead,
{
    let mut lines = MapLines {
        inner: reader.lines().enumerate(),
    };

    let vertex_count = lines.count("vertices")?;
    let edge_count = lines.count("edges")?;

    for found in 0..vertex_count {
        let (line, text) = lines.next_content()?.ok_or(LoadError::Count {
            what: "vertices",
            expected: vertex_count,
            found,
        })?;
        let location =
            parse_vertex::<P>(&text).map_err(|message| LoadError::Parse { line, message })?;
        if !graph.add_vertex(location) && !graph.contains(location) {
            return Err(LoadError::Parse {
                line,
                message: format!("invalid coordinates {:?}", location),
            });
        }
    }

    for found in 0..edge_count {
        let (line, text) = lines.next_content()?.ok_or(LoadError::Count {
            what: "edges",
            expected: edge_count,
            found,
        })?;
        let road =
            parse_road::<P>(&text).map_err(|message| LoadError::Parse { line, message })?;
        let length = road.length.unwrap_or_else(|| road.from.distance(&road.to));
        let result = match road.time {
            Some(time) => graph.add_edge_with_time(
                road.from,
                road.to,
                road.name,
                road.category,
                length,
                time,
            ),
            None => graph.add_edge(road.from, road.to, road.name, road.category, length),
        };
        result.map_err(|source| LoadError::Graph { line, source })?;
    }

    let mut extra = 0;
    while lines.next_content()?.is_some() {
        extra += 1;
    }
    if extra > 0 {
        return Err(LoadError::Count {
            what: "edges",
            expected: edge_count,
            found: edge_count + extra,
        });
    }

    log::info!(
        "loaded road map: {} intersections, {} roads",
        vertex_count,
        edge_count
    );
    Ok(())
}

/// Reads the map file at `path` into `graph`. See [`load_road_map`].
pub fn load_road_map_file<P>(
    path: impl AsRef<Path>,
    graph: &mut RoadGraph<P>,
) -> Result<(), LoadError>
where
    P: Location + From<(f64, f64)>,
{
    let path = path.as_ref();
    log::debug!("loading road map from {}", path.display());
    let file = File::open(path)?;
    load_road_map(BufReader::new(file), graph)
}

struct MapLines<R> {
    inner: std::iter::Enumerate<std::io::Lines<R>>,
}

impl<R: BufRead> MapLines<R> {
    /// the next line that is neither blank nor a comment, with its 1-based line number
    fn next_content(&mut self) -> Result<Option<(usize, String)>, LoadError> {
        for (index, text) in self.inner.by_ref() {
            let text = text?;
            let trimmed = text.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            return Ok(Some((index + 1, trimmed.to_owned())));
        }
        Ok(None)
    }

    fn count(&mut self, what: &'static str) -> Result<usize, LoadError> {
        let (line, text) = self.next_content()?.ok_or_else(|| LoadError::Parse {
            line: 0,
            message: format!("missing number of {}", what),
        })?;
        text.parse().map_err(|_| LoadError::Parse {
            line,
            message: format!("expected the number of {}, found {:?}", what, text),
        })
    }
}

#[derive(Debug)]
struct Road<P> {
    from: P,
    to: P,
    name: String,
    category: String,
    length: Option<f64>,
    time: Option<f64>,
}

fn parse_number(token: &str) -> Result<f64, String> {
    token
        .parse()
        .map_err(|_| format!("expected a number, found {:?}", token))
}

/// splits off the first whitespace separated token
fn next_token(text: &str) -> Result<(&str, &str), String> {
    let text = text.trim_start();
    let end = text.find(char::is_whitespace).unwrap_or(text.len());
    if end == 0 {
        return Err(String::from("unexpected end of line"));
    }
    Ok(text.split_at(end))
}

fn parse_vertex<P: From<(f64, f64)>>(text: &str) -> Result<P, String> {
    let (lat, rest) = next_token(text)?;
    let (lon, rest) = next_token(rest)?;
    if !rest.trim().is_empty() {
        return Err(format!("unexpected {:?} after the coordinates", rest.trim()));
    }
    Ok(P::from((parse_number(lat)?, parse_number(lon)?)))
}

fn parse_road<P: From<(f64, f64)>>(text: &str) -> Result<Road<P>, String> {
    let mut rest = text;
    let mut coords = [0.0; 4];
    for c in coords.iter_mut() {
        let (token, tail) = next_token(rest)?;
        *c = parse_number(token)?;
        rest = tail;
    }

    let rest = rest
        .trim_start()
        .strip_prefix('"')
        .ok_or_else(|| String::from("expected a road name in double quotes"))?;
    let end = rest
        .find('"')
        .ok_or_else(|| String::from("unterminated road name"))?;
    let name = rest[..end].to_owned();

    let mut tokens = rest[end + 1..].split_whitespace();
    let category = tokens
        .next()
        .ok_or_else(|| String::from("missing road category"))?
        .to_owned();
    let length = tokens.next().map(parse_number).transpose()?;
    let time = tokens.next().map(parse_number).transpose()?;
    if let Some(token) = tokens.next() {
        return Err(format!("unexpected {:?} at the end of the line", token));
    }

    Ok(Road {
        from: P::from((coords[0], coords[1])),
        to: P::from((coords[2], coords[3])),
        name,
        category,
        length,
        time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GeoPoint, GraphError};

    const MAP: &str = "\
# a tiny campus
3
3

32.8690 -117.2210
32.8690 -117.2190
32.8700 -117.2190
32.8690 -117.2210 32.8690 -117.2190 \"Main Street\" residential 0.19
32.8690 -117.2190 32.8700 -117.2190 \"Gilman Drive\" service 0.12 0.01
32.8700 -117.2190 32.8690 -117.2210 \"Library Walk\" living_street
";

    fn load(map: &str) -> Result<RoadGraph<GeoPoint>, LoadError> {
        let mut graph = RoadGraph::new();
        load_road_map(map.as_bytes(), &mut graph)?;
        Ok(graph)
    }

    #[test]
    fn basic() {
        let graph = load(MAP).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);

        let [main, gilman, library] = [&graph.edges()[0], &graph.edges()[1], &graph.edges()[2]];
        assert_eq!(main.name(), "Main Street");
        assert_eq!(main.category(), "residential");
        assert_eq!(main.length(), 0.19);
        assert!((main.time() - 0.19 / 30.0).abs() < 1e-12);

        assert_eq!(gilman.time(), 0.01);

        let a = GeoPoint::new(32.8700, -117.2190);
        let b = GeoPoint::new(32.8690, -117.2210);
        assert!((library.length() - a.distance(&b)).abs() < 1e-12);
        assert!((library.time() - library.length() / 10.0).abs() < 1e-12);
    }

    #[test]
    fn duplicate_vertices_are_ignored() {
        let map = "2\n0\n1.0 2.0\n1.0 2.0\n";
        assert_eq!(load(map).unwrap().vertex_count(), 1);
    }

    #[test]
    fn parse_errors() {
        let err = load("three\n0\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 1, .. }), "{}", err);

        let err = load("1\n0\n1.0\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 3, .. }), "{}", err);

        let err = load("1\n0\n1.0 north\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 3, .. }), "{}", err);

        let err = load("1\n0\n100.0 0.0\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 3, .. }), "{}", err);

        let map = "2\n1\n0 0\n0 1\n0 0 0 1 Main residential\n";
        let err = load(map).unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 5, .. }), "{}", err);

        let map = "2\n1\n0 0\n0 1\n0 0 0 1 \"Main residential\n";
        assert!(matches!(load(map), Err(LoadError::Parse { line: 5, .. })));

        let map = "2\n1\n0 0\n0 1\n0 0 0 1 \"Main\" residential 1.0 0.1 extra\n";
        assert!(matches!(load(map), Err(LoadError::Parse { line: 5, .. })));

        assert!(matches!(load(""), Err(LoadError::Parse { line: 0, .. })));
    }

    #[test]
    fn graph_errors() {
        let map = "2\n1\n0 0\n0 1\n0 0 5 5 \"Nowhere\" residential\n";
        let err = load(map).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Graph {
                line: 5,
                source: GraphError::UnknownEndpoint
            }
        ));

        let map = "2\n1\n0 0\n0 1\n0 0 0 1 \"Zero\" residential 0\n";
        assert!(matches!(
            load(map),
            Err(LoadError::Graph {
                source: GraphError::InvalidLength(_),
                ..
            })
        ));
    }

    #[test]
    fn count_mismatch() {
        let err = load("3\n0\n0 0\n0 1\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Count {
                what: "vertices",
                expected: 3,
                found: 2
            }
        ));

        let map = "2\n2\n0 0\n0 1\n0 0 0 1 \"Main\" residential\n";
        assert!(matches!(
            load(map),
            Err(LoadError::Count {
                what: "edges",
                expected: 2,
                found: 1
            })
        ));

        let map = "2\n0\n0 0\n0 1\n0 0 0 1 \"Main\" residential\n";
        assert!(matches!(
            load(map),
            Err(LoadError::Count {
                what: "edges",
                expected: 0,
                found: 1
            })
        ));
    }

    #[test]
    fn missing_file() {
        let mut graph: RoadGraph<GeoPoint> = RoadGraph::new();
        let err = load_road_map_file("does/not/exist.map", &mut graph).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
