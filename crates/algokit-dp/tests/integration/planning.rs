//! Knapsack and string routines applied to small planning problems.

use algokit_dp::{
    edit_distance, knapsack_with_repetition, knapsack_without_repetition,
    longest_common_subsequence,
};

#[test]
fn test_packing_a_bag_for_a_hike() {
    // (name, value, weight)
    let gear = [
        ("tent", 90, 12),
        ("stove", 40, 4),
        ("camera", 30, 3),
        ("book", 10, 2),
        ("snacks", 35, 3),
    ];
    let values: Vec<u64> = gear.iter().map(|g| g.1).collect();
    let weights: Vec<u64> = gear.iter().map(|g| g.2).collect();

    let best = knapsack_without_repetition(15, &values, Some(&weights)).unwrap();
    let names: Vec<&str> = best.items.iter().map(|&i| gear[i].0).collect();
    assert_eq!(best.value, 125);
    assert_eq!(names, vec!["tent", "snacks"]);
}

#[test]
fn test_coin_change_maximizing_value() {
    // Fill exactly with coins where each coin is worth its weight.
    let best = knapsack_with_repetition(11, &[5, 2], None).unwrap();
    assert_eq!(best.value, 11);
    let total: usize = best.counts.iter().zip([5, 2]).map(|(c, w)| c * w).sum();
    assert_eq!(total, 11);
}

#[test]
fn test_diff_style_alignment() {
    let old = "the quick brown fox";
    let new = "the quack brown fix";
    let common = longest_common_subsequence(old, new);
    assert_eq!(common.chars().count(), old.chars().count() - 2);
    assert_eq!(edit_distance(old, new), 2);
}
