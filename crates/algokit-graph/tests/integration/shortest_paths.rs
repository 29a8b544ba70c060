//! Shortest paths combined with traversal.

use algokit_graph::{UndirectedGraph, connected_components, shortest_path};

fn road_map() -> UndirectedGraph<&'static str, u64> {
    UndirectedGraph::from_weighted([
        ("Oslo", "Bergen", 463),
        ("Oslo", "Trondheim", 494),
        ("Bergen", "Trondheim", 633),
        ("Trondheim", "Bodo", 711),
        ("Oslo", "Kristiansand", 320),
        ("Kristiansand", "Stavanger", 235),
        ("Stavanger", "Bergen", 210),
        ("Reykjavik", "Akureyri", 388),
    ])
}

#[test]
fn test_route_through_intermediate_cities() {
    let result = shortest_path(&road_map(), &"Kristiansand", &"Bodo").unwrap();
    assert!(result.found);
    assert_eq!(result.path, vec!["Kristiansand", "Oslo", "Trondheim", "Bodo"]);
    assert_eq!(result.total_weight, 320 + 494 + 711);
}

#[test]
fn test_no_route_across_components() {
    let g = road_map();
    let result = g.shortest_path(&"Oslo", &"Akureyri").unwrap();
    assert!(!result.found);

    let components = connected_components(&g);
    assert_eq!(components.len(), 2);
    assert_eq!(components[1], vec!["Reykjavik", "Akureyri"]);
}

#[test]
fn test_every_reachable_distance_matches_point_query() {
    let g = road_map();
    let paths = g.dijkstra(&"Stavanger").unwrap();
    for vertex in paths.reachable() {
        let single = g.shortest_path(&"Stavanger", vertex).unwrap();
        assert_eq!(Some(single.total_weight), paths.distance(vertex));
    }
    assert_eq!(paths.reachable().count(), 6);
}
