//! Algokit Structures — data structures used by the algorithm crates.
//!
//! - [`union_find`]: disjoint sets with union by rank and path compression,
//!   the backbone of Kruskal's algorithm.
//! - [`range_query`]: a segment tree answering associative range queries
//!   (sum, product, min, max, ...) with point updates.

pub mod range_query;
pub mod union_find;

mod proptests;

pub use range_query::RangeQueryTree;
pub use union_find::UnionFind;
