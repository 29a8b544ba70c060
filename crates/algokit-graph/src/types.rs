//! Shared graph types: edge weights and serializable edge records.

use algokit_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

// ============================================================================
// EdgeWeight trait
// ============================================================================

/// Weights usable by the weighted algorithms (Prim, Kruskal, Dijkstra).
///
/// `Default` must be the additive zero. Implemented for every primitive
/// integer type and for `std::time::Duration`.
pub trait EdgeWeight: Copy + Ord + Default + Debug {
    /// `self + other`, or `None` on overflow.
    fn checked_add(self, other: Self) -> Option<Self>;
}

macro_rules! impl_edge_weight {
    ($($t:ty),* $(,)?) => {
        $(
            impl EdgeWeight for $t {
                fn checked_add(self, other: Self) -> Option<Self> {
                    <$t>::checked_add(self, other)
                }
            }
        )*
    };
}

impl_edge_weight!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize,
    std::time::Duration,
);

/// Sums `weights`, returning `Overflow` if the total does not fit.
pub fn checked_sum<W: EdgeWeight>(weights: impl IntoIterator<Item = W>) -> Result<W> {
    weights
        .into_iter()
        .try_fold(W::default(), |acc, w| acc.checked_add(w))
        .ok_or_else(|| Error::overflow("edge weight sum"))
}

// ============================================================================
// Edge records
// ============================================================================

/// A single weighted edge, as stored in graph files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEdge<V, W> {
    /// One endpoint.
    pub from: V,
    /// The other endpoint.
    pub to: V,
    /// Edge weight.
    pub weight: W,
}

impl<V, W> WeightedEdge<V, W> {
    /// Creates a new edge record.
    pub fn new(from: V, to: V, weight: W) -> Self {
        Self { from, to, weight }
    }
}

/// A serializable description of a whole graph.
///
/// `vertices` lists vertices that may have no edges; every endpoint in
/// `edges` is a vertex whether or not it is listed.
///
/// # Example
///
/// ```rust
/// use algokit_graph::{EdgeList, UndirectedGraph};
///
/// let json = r#"{
///     "edges": [
///         { "from": "A", "to": "B", "weight": 7 },
///         { "from": "B", "to": "C", "weight": 2 }
///     ]
/// }"#;
/// let list: EdgeList<String, u64> = serde_json::from_str(json).unwrap();
/// let graph = UndirectedGraph::from_records(list);
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeList<V, W> {
    /// Vertices to include even when isolated.
    #[serde(default)]
    pub vertices: Vec<V>,
    /// The edges.
    #[serde(default)]
    pub edges: Vec<WeightedEdge<V, W>>,
}

impl<V, W> Default for EdgeList<V, W> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
