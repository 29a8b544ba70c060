//! Graphs loaded from JSON and TOML edge records.

use algokit_graph::{EdgeList, UndirectedGraph};

#[test]
fn test_graph_from_json_records() {
    let json = r#"{
        "vertices": ["island"],
        "edges": [
            { "from": "a", "to": "b", "weight": 3 },
            { "from": "b", "to": "c", "weight": 4 },
            { "from": "a", "to": "c", "weight": 9 }
        ]
    }"#;
    let records: EdgeList<String, u64> = serde_json::from_str(json).unwrap();
    let g = UndirectedGraph::from_records(records);

    assert_eq!(g.vertex_count(), 4);
    assert!(!g.is_connected());
    let forest = g.kruskal().unwrap();
    assert_eq!(forest.total_weight().unwrap(), 7);
}

#[test]
fn test_graph_from_toml_records() {
    let doc = r#"
        [[edges]]
        from = 1
        to = 2
        weight = 10

        [[edges]]
        from = 2
        to = 3
        weight = 1
    "#;
    let records: EdgeList<u32, u32> = toml::from_str(doc).unwrap();
    let g = UndirectedGraph::from_records(records);
    assert_eq!(g.dijkstra(&1).unwrap().distance(&3), Some(11));
}

#[test]
fn test_records_survive_a_roundtrip() {
    let g = UndirectedGraph::from_weighted([("x", "y", 2u64), ("y", "z", 5)]);
    let json = serde_json::to_string(&g.to_records()).unwrap();
    let parsed: EdgeList<String, u64> = serde_json::from_str(&json).unwrap();
    let restored = UndirectedGraph::from_records(parsed);
    assert_eq!(restored.edge_count(), 2);
    assert_eq!(restored.weight(&"y".to_string(), &"z".to_string()), Some(&5));
}
