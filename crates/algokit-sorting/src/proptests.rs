//! Property-based tests: every sort agrees with `slice::sort`.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::{SortAlgorithm, counting_sort, is_sorted};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_every_algorithm_matches_std(values in prop::collection::vec(any::<i16>(), 0..200)) {
            let mut expected = values.clone();
            expected.sort();
            for algorithm in SortAlgorithm::ALL {
                let mut sorted = values.clone();
                algorithm.sort(&mut sorted);
                prop_assert!(is_sorted(&sorted));
                prop_assert_eq!(&sorted, &expected);
            }
        }

        #[test]
        fn test_few_distinct_values(values in prop::collection::vec(0u8..4, 0..300)) {
            let mut expected = values.clone();
            expected.sort();
            for algorithm in SortAlgorithm::ALL {
                let mut sorted = values.clone();
                algorithm.sort(&mut sorted);
                prop_assert_eq!(&sorted, &expected);
            }
        }

        #[test]
        fn test_counting_sort_matches_std(values in prop::collection::vec(0u32..5_000, 0..200)) {
            let mut expected = values.clone();
            expected.sort();
            let mut sorted = values;
            counting_sort(&mut sorted).unwrap();
            prop_assert_eq!(sorted, expected);
        }
    }
}
