//! Algokit DP — dynamic programming over capacities and strings.
//!
//! - [`knapsack`]: 0/1 and unbounded knapsack with the chosen items
//! - [`strings`]: longest common subsequence and substring, edit distance,
//!   longest increasing subsequence

pub mod knapsack;
pub mod strings;

mod proptests;

pub use knapsack::{
    Knapsack, MAX_TABLE_CELLS, UnboundedKnapsack, knapsack_with_repetition,
    knapsack_without_repetition,
};
pub use strings::{
    edit_distance, longest_common_subsequence, longest_common_substring,
    longest_increasing_subsequence,
};
