//! Minimum spanning trees: Prim's and Kruskal's algorithms.
//!
//! Both return a new [`UndirectedGraph`] holding every vertex of the input
//! and the chosen edges. Among equal weights the edge added to the input
//! graph first is preferred, so both algorithms agree on which tree they
//! return when the minimum is not unique.

use crate::types::EdgeWeight;
use crate::undirected::UndirectedGraph;
use algokit_core::{Error, Result};
use algokit_structures::UnionFind;
use petgraph::stable_graph::NodeIndex;
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::fmt;
use std::hash::Hash;

// ============================================================================
// Prim
// ============================================================================

/// A frontier edge waiting in Prim's heap.
#[derive(Debug, PartialEq, Eq)]
struct Candidate<W> {
    weight: W,
    /// Insertion sequence number of the edge.
    seq: u64,
    from: NodeIndex,
    to: NodeIndex,
}

// BinaryHeap is a max-heap; reverse so the lightest (then oldest) edge pops
// first.
impl<W: Ord> Ord for Candidate<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<W: Ord> PartialOrd for Candidate<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Prim's algorithm grown from `start`.
///
/// # Errors
///
/// - `NotFound` if `start` is not a vertex of the graph.
/// - `Disconnected` if some vertex cannot be reached from `start`.
///
/// # Example
///
/// ```rust
/// use algokit_graph::{UndirectedGraph, mst::prim};
///
/// let g = UndirectedGraph::from_weighted_edges(
///     vec![("A", "B"), ("B", "D"), ("D", "C"), ("A", "C")],
///     vec![7, 6, 2, 3],
/// )
/// .unwrap();
/// let tree = prim(&g, &"A").unwrap();
/// let expected = UndirectedGraph::from_weighted([("B", "D", 6), ("D", "C", 2), ("A", "C", 3)]);
/// assert_eq!(tree, expected);
/// ```
pub fn prim<V, W>(graph: &UndirectedGraph<V, W>, start: &V) -> Result<UndirectedGraph<V, W>>
where
    V: Eq + Hash + Clone + fmt::Debug,
    W: EdgeWeight,
{
    let root = graph
        .index_of(start)
        .ok_or_else(|| Error::not_found("vertex", start))?;

    let mut tree = UndirectedGraph::new();
    tree.add_vertex(start.clone());
    let mut in_tree = HashSet::from([root]);
    let mut heap = BinaryHeap::new();
    push_frontier(graph, root, &in_tree, &mut heap);

    while let Some(Candidate { weight, from, to, .. }) = heap.pop() {
        if !in_tree.insert(to) {
            continue;
        }
        tree.add_edge(graph.graph[from].clone(), graph.graph[to].clone(), weight);
        push_frontier(graph, to, &in_tree, &mut heap);
    }

    let total = graph.vertex_count();
    if in_tree.len() < total {
        log::debug!("prim reached {} of {} vertices", in_tree.len(), total);
        return Err(Error::Disconnected {
            reached: in_tree.len(),
            total,
        });
    }
    Ok(tree)
}

fn push_frontier<V, W>(
    graph: &UndirectedGraph<V, W>,
    vertex: NodeIndex,
    in_tree: &HashSet<NodeIndex>,
    heap: &mut BinaryHeap<Candidate<W>>,
) where
    V: Eq + Hash + Clone + fmt::Debug,
    W: EdgeWeight,
{
    for edge in graph.graph.edges(vertex) {
        let other = if edge.source() == vertex {
            edge.target()
        } else {
            edge.source()
        };
        if !in_tree.contains(&other) {
            heap.push(Candidate {
                weight: *edge.weight(),
                seq: graph.edge_order(edge.id()),
                from: vertex,
                to: other,
            });
        }
    }
}

// ============================================================================
// Kruskal
// ============================================================================

/// Kruskal's algorithm.
///
/// Edges are taken lightest first and kept unless they close a cycle. On a
/// disconnected graph the result is a minimum spanning forest with one tree
/// per connected component.
///
/// ```rust
/// use algokit_graph::{UndirectedGraph, mst::kruskal};
///
/// let g = UndirectedGraph::from_weighted_edges(
///     vec![(1, 2), (3, 4), (1, 3), (2, 4)],
///     vec![1, 2, 8, 10],
/// )
/// .unwrap();
/// let tree = kruskal(&g).unwrap();
/// assert_eq!(tree, UndirectedGraph::from_weighted([(1, 2, 1), (3, 4, 2), (1, 3, 8)]));
/// ```
pub fn kruskal<V, W>(graph: &UndirectedGraph<V, W>) -> Result<UndirectedGraph<V, W>>
where
    V: Eq + Hash + Clone + fmt::Debug,
    W: EdgeWeight,
{
    let mut forest = UndirectedGraph::new();
    for vertex in graph.vertices() {
        forest.add_vertex(vertex.clone());
    }

    let mut edges: Vec<_> = graph.graph.edge_references().collect();
    edges.sort_by_key(|edge| (*edge.weight(), graph.edge_order(edge.id())));

    let mut sets: UnionFind<NodeIndex> = graph.graph.node_indices().collect();
    for edge in edges {
        let (a, b) = (edge.source(), edge.target());
        if sets.in_same_set(&a, &b)? {
            continue;
        }
        sets.union(&a, &b)?;
        forest.add_edge(graph.graph[a].clone(), graph.graph[b].clone(), *edge.weight());
    }

    log::debug!(
        "kruskal kept {} of {} edges in {} trees",
        forest.edge_count(),
        graph.edge_count(),
        sets.set_count()
    );
    Ok(forest)
}

impl<V, W> UndirectedGraph<V, W>
where
    V: Eq + Hash + Clone + fmt::Debug,
    W: EdgeWeight,
{
    /// Minimum spanning tree by Prim's algorithm, grown from the first
    /// vertex added to the graph.
    ///
    /// The empty graph's tree is empty.
    pub fn minimum_spanning_tree(&self) -> Result<UndirectedGraph<V, W>> {
        match self.vertices().next() {
            Some(start) => prim(self, start),
            None => Ok(UndirectedGraph::new()),
        }
    }

    /// Minimum spanning forest by Kruskal's algorithm. See [`kruskal`].
    pub fn kruskal(&self) -> Result<UndirectedGraph<V, W>> {
        kruskal(self)
    }
}

// ============================================================================
// Tests
// ============================================================================
