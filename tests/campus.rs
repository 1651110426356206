use road_pathfinding::loader::load_road_map_file;
use road_pathfinding::prelude::*;

const LAT: [f64; 3] = [32.870, 32.871, 32.872];
const LON: [f64; 3] = [-117.222, -117.221, -117.220];

/// The Intersection in row `r` (south to north) and column `c` (west to east)
fn p(r: usize, c: usize) -> GeoPoint {
    GeoPoint::new(LAT[r], LON[c])
}

fn campus() -> RoadGraph {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut graph = RoadGraph::new();
    load_road_map_file(
        concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/campus.map"),
        &mut graph,
    )
    .unwrap();
    graph
}

#[test]
fn load() {
    let graph = campus();
    assert_eq!(graph.vertex_count(), 9);
    assert_eq!(graph.edge_count(), 24);
    for r in 0..3 {
        for c in 0..3 {
            assert!(graph.contains(p(r, c)));
        }
    }

    let library_walk: Vec<_> = graph.outgoing(p(0, 0)).map(|edge| edge.name()).collect();
    assert_eq!(library_walk, vec!["Library Walk", "Russell Lane"]);
    // no length in the file, so the straight-line distance
    let edge = graph.outgoing(p(0, 0)).next().unwrap();
    assert!((edge.length() - p(0, 0).distance(&p(0, 1))).abs() < 1e-12);
    assert_eq!(edge.category(), "service");
    assert!((edge.speed() - 20.0).abs() < 1e-9);
    assert!((graph.max_speed() - 60.0).abs() < 1e-9);
}

#[test]
fn shortest_across_campus() {
    let graph = campus();
    let (start, goal) = (p(0, 0), p(2, 2));

    let bfs = graph.bfs(start, goal).unwrap();
    assert_eq!(bfs.cost, 4.0);

    let dijkstra = graph.dijkstra(start, goal).unwrap();
    let a_star = graph.a_star_search(start, goal).unwrap();
    let blocks = 2.0 * p(0, 0).distance(&p(1, 0)) + 2.0 * p(0, 0).distance(&p(0, 1));
    assert!((dijkstra.cost - blocks).abs() < 1e-3);
    assert!((a_star.cost - dijkstra.cost).abs() < 1e-9);
    assert_eq!(dijkstra.hops(), 4);
    assert_eq!(a_star.hops(), 4);
    assert!(a_star.explored <= dijkstra.explored);
}

#[test]
fn fastest_across_campus() {
    let graph = campus();
    let (start, goal) = (p(0, 0), p(2, 2));
    // up Russell Lane, along Myers Drive, and the last block on Gilman Drive
    let expected = vec![p(0, 0), p(1, 0), p(1, 1), p(1, 2), p(2, 2)];

    let time_dijkstra = graph.time_dijkstra(start, goal).unwrap();
    assert_eq!(time_dijkstra.path, expected);

    let mut examined = vec![];
    let time_search = graph
        .time_search_with(start, goal, |point| examined.push(point))
        .unwrap();
    assert_eq!(time_search.path, expected);
    assert!((time_search.cost - time_dijkstra.cost).abs() < 1e-12);
    assert_eq!(examined.len(), time_search.explored);
    assert_eq!(examined[0], start);
    assert_eq!(examined.last(), Some(&goal));

    let hours = graph.path_weight(&expected, Weight::Time).unwrap();
    assert!((time_search.cost - hours).abs() < 1e-12);
}

#[test]
fn outside_campus() {
    let graph = campus();
    let elsewhere = GeoPoint::new(40.7128, -74.0060);
    assert_eq!(
        graph.dijkstra(elsewhere, p(0, 0)).unwrap_err(),
        SearchError::UnknownStart
    );
    assert_eq!(
        graph.time_search(p(0, 0), elsewhere).unwrap_err(),
        SearchError::UnknownGoal
    );
}
