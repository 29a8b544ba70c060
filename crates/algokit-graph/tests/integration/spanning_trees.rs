//! Minimum spanning trees on textbook graphs.

use algokit_graph::{UndirectedGraph, kruskal, prim};

/// Example from Halim's "Competitive Programming 3", figure 4.10.
fn halim() -> UndirectedGraph<u32, u32> {
    UndirectedGraph::from_weighted_edges(
        vec![(0, 1), (1, 2), (0, 2), (2, 3), (0, 3), (0, 4), (3, 4)],
        vec![4, 2, 4, 8, 6, 6, 9],
    )
    .unwrap()
}

/// The Kruskal example graph from Wikipedia, vertices A to F.
fn wikipedia() -> UndirectedGraph<&'static str, u32> {
    UndirectedGraph::from_weighted_edges(
        vec![
            ("A", "B"),
            ("A", "D"),
            ("D", "B"),
            ("D", "E"),
            ("B", "E"),
            ("B", "C"),
            ("C", "E"),
            ("F", "E"),
            ("C", "F"),
        ],
        vec![1, 3, 5, 1, 1, 6, 5, 4, 2],
    )
    .unwrap()
}

#[test]
fn test_halim_prim() {
    let tree = prim(&halim(), &0).unwrap();
    let expected = UndirectedGraph::from_weighted_edges(
        vec![(1, 0), (1, 2), (0, 3), (0, 4)],
        vec![4, 2, 6, 6],
    )
    .unwrap();
    assert_eq!(tree, expected);
}

#[test]
fn test_halim_kruskal() {
    let g = halim();
    assert_eq!(kruskal(&g).unwrap(), prim(&g, &0).unwrap());
}

#[test]
fn test_wikipedia_mst() {
    let g = wikipedia();
    let expected = UndirectedGraph::from_weighted([
        ("E", "D", 1),
        ("B", "A", 1),
        ("E", "F", 4),
        ("F", "C", 2),
        ("E", "B", 1),
    ]);
    assert_eq!(g.minimum_spanning_tree().unwrap(), expected);
    assert_eq!(g.kruskal().unwrap(), expected);
    assert_eq!(expected.total_weight().unwrap(), 9);
}

#[test]
fn test_mst_is_spanning_and_minimal_from_every_start() {
    let g = wikipedia();
    let vertices: Vec<&str> = g.vertices().copied().collect();
    for start in vertices {
        let tree = prim(&g, &start).unwrap();
        assert_eq!(tree.vertex_count(), g.vertex_count());
        assert_eq!(tree.edge_count(), g.vertex_count() - 1);
        assert!(tree.is_connected());
        assert_eq!(tree.total_weight().unwrap(), 9);
    }
}
