//! Union-find used as an incremental connectivity oracle.

use algokit_structures::UnionFind;

#[test]
fn test_incremental_connectivity_over_edges() {
    let edges = [("A", "B"), ("C", "D"), ("B", "C"), ("E", "F")];
    let mut sets: UnionFind<&str> = ["A", "B", "C", "D", "E", "F", "G"].into_iter().collect();

    for (u, v) in edges {
        sets.union(&u, &v).unwrap();
    }

    assert!(sets.in_same_set(&"A", &"D").unwrap());
    assert!(sets.in_same_set(&"E", &"F").unwrap());
    assert!(!sets.in_same_set(&"A", &"E").unwrap());
    assert!(!sets.in_same_set(&"G", &"A").unwrap());
    assert_eq!(sets.set_count(), 3);
    assert_eq!(
        sets.sets(),
        vec![vec!["A", "B", "C", "D"], vec!["E", "F"], vec!["G"]]
    );
}

#[test]
fn test_mixed_element_kinds_via_enum() {
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    enum Item {
        Number(u32),
        Label(&'static str),
    }

    let mut sets = UnionFind::new([Item::Number(1), Item::Number(2)]);
    sets.add([Item::Label("a"), Item::Label("b")]);

    assert!(sets.contains(&Item::Number(1)));
    assert!(sets.contains(&Item::Label("a")));

    sets.union(&Item::Number(1), &Item::Label("b")).unwrap();
    assert!(
        sets.in_same_set(&Item::Label("b"), &Item::Number(1))
            .unwrap()
    );
}
