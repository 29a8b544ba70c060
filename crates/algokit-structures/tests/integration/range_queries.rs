//! Range query trees with user-supplied combining functions.

use algokit_structures::RangeQueryTree;

fn gcd(a: &u64, b: &u64) -> u64 {
    let (mut a, mut b) = (*a, *b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[test]
fn test_range_gcd() {
    let mut rqt = RangeQueryTree::new(vec![12, 18, 24, 36, 7], gcd);
    assert_eq!(rqt.query(0, 3).unwrap(), 6);
    assert_eq!(rqt.query(0, 4).unwrap(), 1);
    assert_eq!(rqt.query(2, 3).unwrap(), 12);

    rqt.update(4, 30).unwrap();
    assert_eq!(rqt.query(0, 4).unwrap(), 6);
}

#[test]
fn test_range_max_of_floats_via_closure() {
    let rqt = RangeQueryTree::new(vec![1.5, -2.0, 8.25, 3.0], |a: &f64, b: &f64| a.max(*b));
    assert_eq!(rqt.query(0, 1).unwrap(), 1.5);
    assert_eq!(rqt.query(0, 3).unwrap(), 8.25);
}

#[test]
fn test_every_subrange_of_sums() {
    let values: Vec<i64> = (1..=9).collect();
    let rqt = RangeQueryTree::sum(values.clone());
    for i in 0..values.len() {
        for j in i..values.len() {
            let expected: i64 = values[i..=j].iter().sum();
            assert_eq!(rqt.query(i, j).unwrap(), expected, "range {i}..={j}");
        }
    }
}
