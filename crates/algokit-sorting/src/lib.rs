//! Algokit Sorting — classic in-place sorts.
//!
//! - [`comparison`]: insertion, merge, quick and heap sort
//! - [`counting`]: counting sort for small integer spans
//! - [`algorithm`]: [`SortAlgorithm`], a sort chosen at runtime

pub mod algorithm;
pub mod comparison;
pub mod counting;

mod proptests;

pub use algorithm::SortAlgorithm;
pub use comparison::{heap_sort, insertion_sort, is_sorted, merge_sort, quick_sort};
pub use counting::{MAX_COUNTING_SPAN, counting_sort};
