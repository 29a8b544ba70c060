//! Sorting user-defined records through the public API.

use algokit_sorting::{SortAlgorithm, is_sorted, merge_sort};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Version {
    major: u32,
    minor: u32,
    patch: u32,
}

impl Version {
    fn parse(s: &str) -> Version {
        let parts: Vec<u32> = s.split('.').map(|p| p.parse().unwrap()).collect();
        Version {
            major: parts[0],
            minor: parts[1],
            patch: parts[2],
        }
    }
}

#[test]
fn test_sorting_versions_with_every_algorithm() {
    let releases = ["1.10.0", "1.2.3", "0.9.12", "1.2.10", "2.0.0", "1.2.3"];
    for algorithm in SortAlgorithm::ALL {
        let mut versions: Vec<Version> = releases.iter().map(|s| Version::parse(s)).collect();
        algorithm.sort(&mut versions);
        assert!(is_sorted(&versions));
        assert_eq!(versions[0], Version::parse("0.9.12"));
        assert_eq!(versions[5], Version::parse("2.0.0"));
    }
}

#[test]
fn test_algorithm_from_config_string() {
    let algorithm: SortAlgorithm = "heap".parse().unwrap();
    let mut words = vec!["delta", "alpha", "charlie", "bravo"];
    algorithm.sort(&mut words);
    assert_eq!(words, vec!["alpha", "bravo", "charlie", "delta"]);
}

#[test]
fn test_reverse_order_via_wrapper() {
    let mut values = vec![std::cmp::Reverse(1), std::cmp::Reverse(5), std::cmp::Reverse(3)];
    merge_sort(&mut values);
    let plain: Vec<i32> = values.into_iter().map(|r| r.0).collect();
    assert_eq!(plain, vec![5, 3, 1]);
}
