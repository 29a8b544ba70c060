//! Undirected graph over hashable vertices.
//!
//! Wraps a petgraph `StableUnGraph` with a vertex lookup table. Stable
//! indices survive vertex removal, so the lookup table never needs a
//! rebuild. Freed index slots are reused by later insertions, so insertion
//! order is tracked separately with sequence numbers.

use crate::types::{EdgeList, EdgeWeight, WeightedEdge, checked_sum};
use algokit_core::{Result, validate};
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableUnGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// An undirected graph with vertices `V` and edge weights `W`.
///
/// Self-loops are ignored and repeated edges collapse into one (the last
/// weight given wins). Unweighted graphs use `W = ()`.
///
/// # Example
///
/// ```rust
/// use algokit_graph::UndirectedGraph;
///
/// let g = UndirectedGraph::from_weighted_edges(
///     vec![(2, 3), (2, 4), (1, 2)],
///     vec![2, 1, 3],
/// )
/// .unwrap();
/// assert_eq!(g.weight(&3, &2), Some(&2));
///
/// // Edge order, endpoint order and repetition do not affect equality
/// let g2 = UndirectedGraph::from_edges([('a', 'b'), ('a', 'c'), ('a', 'd')]);
/// let g3 = UndirectedGraph::from_edges([('a', 'b'), ('d', 'a'), ('a', 'c'), ('a', 'd')]);
/// assert_eq!(g2, g3);
/// ```
#[derive(Clone, Debug)]
pub struct UndirectedGraph<V, W = u64> {
    /// The underlying petgraph storage.
    pub(crate) graph: StableUnGraph<V, W>,
    /// Lookup table: vertex → petgraph NodeIndex.
    pub(crate) indices: HashMap<V, NodeIndex>,
    /// Insertion sequence number of each vertex.
    vertex_seq: HashMap<NodeIndex, u64>,
    /// Insertion sequence number of each edge.
    edge_seq: HashMap<EdgeIndex, u64>,
    next_seq: u64,
}

impl<V, W> UndirectedGraph<V, W>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            graph: StableUnGraph::default(),
            indices: HashMap::new(),
            vertex_seq: HashMap::new(),
            edge_seq: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Builds a weighted graph from `(u, v, weight)` triples.
    pub fn from_weighted(edges: impl IntoIterator<Item = (V, V, W)>) -> Self {
        let mut graph = Self::new();
        for (u, v, weight) in edges {
            graph.add_edge(u, v, weight);
        }
        graph
    }

    /// Builds a weighted graph from parallel sequences of edges and weights.
    ///
    /// Returns `LengthMismatch` when the sequences differ in length.
    pub fn from_weighted_edges(
        edges: impl IntoIterator<Item = (V, V)>,
        weights: impl IntoIterator<Item = W>,
    ) -> Result<Self> {
        let edges: Vec<(V, V)> = edges.into_iter().collect();
        let weights: Vec<W> = weights.into_iter().collect();
        validate::same_len("weights", edges.len(), weights.len())?;

        Ok(Self::from_weighted(
            edges.into_iter().zip(weights).map(|((u, v), w)| (u, v, w)),
        ))
    }

    /// Builds a graph from serialized edge records.
    pub fn from_records(records: EdgeList<V, W>) -> Self {
        let mut graph = Self::from_weighted(
            records
                .edges
                .into_iter()
                .map(|edge| (edge.from, edge.to, edge.weight)),
        );
        for vertex in records.vertices {
            graph.add_vertex(vertex);
        }
        graph
    }

    /// Converts the graph back into serializable edge records.
    ///
    /// Isolated vertices are listed in `vertices`.
    pub fn to_records(&self) -> EdgeList<V, W>
    where
        W: Clone,
    {
        let vertices = self
            .ordered_vertices()
            .into_iter()
            .filter(|&idx| self.graph.neighbors(idx).next().is_none())
            .map(|idx| self.graph[idx].clone())
            .collect();
        let edges = self
            .edges()
            .map(|(u, v, w)| WeightedEdge::new(u.clone(), v.clone(), w.clone()))
            .collect();
        EdgeList { vertices, edges }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Adds a vertex. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.indices.contains_key(&vertex) {
            return false;
        }
        self.ensure_vertex(vertex);
        true
    }

    /// Adds the edge `u -- v`, or replaces its weight if it exists.
    ///
    /// Replacing a weight keeps the edge's original insertion position.
    /// Self-loops are ignored.
    pub fn add_edge(&mut self, u: V, v: V, weight: W) {
        if u == v {
            log::trace!("ignoring self-loop on {:?}", u);
            return;
        }
        let a = self.ensure_vertex(u);
        let b = self.ensure_vertex(v);
        if let Some(existing) = self.graph.find_edge(a, b) {
            self.graph[existing] = weight;
            return;
        }
        let edge = self.graph.add_edge(a, b, weight);
        let seq = self.take_seq();
        self.edge_seq.insert(edge, seq);
    }

    /// Removes a vertex and every edge touching it.
    ///
    /// Returns `false` (and changes nothing) if the vertex is absent.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        match self.indices.remove(vertex) {
            Some(idx) => {
                let touching: Vec<EdgeIndex> = self.graph.edges(idx).map(|e| e.id()).collect();
                for edge in touching {
                    self.edge_seq.remove(&edge);
                }
                self.vertex_seq.remove(&idx);
                self.graph.remove_node(idx);
                true
            }
            None => false,
        }
    }

    fn ensure_vertex(&mut self, vertex: V) -> NodeIndex {
        if let Some(&idx) = self.indices.get(&vertex) {
            return idx;
        }
        let idx = self.graph.add_node(vertex.clone());
        self.indices.insert(vertex, idx);
        let seq = self.take_seq();
        self.vertex_seq.insert(idx, seq);
        idx
    }

    fn take_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Whether `vertex` is in the graph.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.indices.contains_key(vertex)
    }

    /// Whether the edge `u -- v` is in the graph (in either orientation).
    pub fn contains_edge(&self, u: &V, v: &V) -> bool {
        self.weight(u, v).is_some()
    }

    /// Weight of the edge `u -- v`, if present.
    pub fn weight(&self, u: &V, v: &V) -> Option<&W> {
        let a = self.index_of(u)?;
        let b = self.index_of(v)?;
        let edge = self.graph.find_edge(a, b)?;
        self.graph.edge_weight(edge)
    }

    /// Iterates over the vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.ordered_vertices()
            .into_iter()
            .map(|idx| &self.graph[idx])
    }

    /// Iterates over the edges as `(u, v, weight)` in insertion order, each
    /// edge exactly once.
    ///
    /// ```rust
    /// use algokit_graph::UndirectedGraph;
    ///
    /// let g = UndirectedGraph::from_weighted([(0, 1, 0), (1, 2, 1), (2, 3, 2)]);
    /// let edges: Vec<_> = g.edges().map(|(u, v, w)| (*u, *v, *w)).collect();
    /// assert_eq!(edges, vec![(0, 1, 0), (1, 2, 1), (2, 3, 2)]);
    /// ```
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, &W)> {
        let mut edges: Vec<_> = self.graph.edge_references().collect();
        edges.sort_by_key(|e| self.edge_order(e.id()));
        edges
            .into_iter()
            .map(|e| (&self.graph[e.source()], &self.graph[e.target()], e.weight()))
    }

    /// Iterates over the neighbors of `vertex` with the connecting weights.
    ///
    /// An absent vertex has no neighbors.
    ///
    /// ```rust
    /// use algokit_graph::UndirectedGraph;
    /// use std::collections::HashSet;
    ///
    /// let g = UndirectedGraph::from_weighted([(1, 2, 11), (1, 3, 13), (2, 3, 14), (3, 4, 12)]);
    /// let neighbors: HashSet<(i32, i32)> = g.neighbors(&1).map(|(v, w)| (*v, *w)).collect();
    /// assert_eq!(neighbors, HashSet::from([(2, 11), (3, 13)]));
    /// ```
    pub fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = (&'a V, &'a W)> + use<'a, V, W> {
        let idx = self.index_of(vertex);
        idx.into_iter().flat_map(move |idx| {
            self.graph.edges(idx).map(move |e| {
                let other = if e.source() == idx { e.target() } else { e.source() };
                (&self.graph[other], e.weight())
            })
        })
    }

    /// Number of edges touching `vertex` (0 if absent).
    pub fn degree(&self, vertex: &V) -> usize {
        self.index_of(vertex)
            .map_or(0, |idx| self.graph.edges(idx).count())
    }

    /// Sum of all edge weights.
    ///
    /// Returns `Overflow` if the sum does not fit in `W`.
    pub fn total_weight(&self) -> Result<W>
    where
        W: EdgeWeight,
    {
        checked_sum(self.graph.edge_references().map(|e| *e.weight()))
    }

    pub(crate) fn index_of(&self, vertex: &V) -> Option<NodeIndex> {
        self.indices.get(vertex).copied()
    }

    /// Insertion sequence number of a vertex.
    pub(crate) fn vertex_order(&self, idx: NodeIndex) -> u64 {
        self.vertex_seq.get(&idx).copied().unwrap_or(u64::MAX)
    }

    /// Insertion sequence number of an edge.
    pub(crate) fn edge_order(&self, edge: EdgeIndex) -> u64 {
        self.edge_seq.get(&edge).copied().unwrap_or(u64::MAX)
    }

    /// Vertex indices in insertion order.
    pub(crate) fn ordered_vertices(&self) -> Vec<NodeIndex> {
        let mut vertices: Vec<NodeIndex> = self.graph.node_indices().collect();
        vertices.sort_unstable_by_key(|&idx| self.vertex_order(idx));
        vertices
    }

    /// Neighbors of `idx` in insertion order.
    pub(crate) fn sorted_neighbors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut neighbors: Vec<NodeIndex> = self.graph.neighbors(idx).collect();
        neighbors.sort_unstable_by_key(|&n| self.vertex_order(n));
        neighbors
    }
}

impl<V> UndirectedGraph<V, ()>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    /// Builds an unweighted graph from vertex pairs.
    ///
    /// ```rust
    /// use algokit_graph::UndirectedGraph;
    ///
    /// let g = UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 3)]);
    /// assert_eq!(g.vertex_count(), 4);
    /// assert!(g.contains_edge(&2, &1));
    /// ```
    pub fn from_edges(edges: impl IntoIterator<Item = (V, V)>) -> Self {
        Self::from_weighted(edges.into_iter().map(|(u, v)| (u, v, ())))
    }
}

impl<V, W> Default for UndirectedGraph<V, W>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> FromIterator<(V, V, W)> for UndirectedGraph<V, W>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    fn from_iter<I: IntoIterator<Item = (V, V, W)>>(iter: I) -> Self {
        Self::from_weighted(iter)
    }
}

/// Two graphs are equal when they have the same vertices and the same edges
/// with equal weights.
impl<V, W> PartialEq for UndirectedGraph<V, W>
where
    V: Eq + Hash + Clone + fmt::Debug,
    W: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.vertex_count() == other.vertex_count()
            && self.edge_count() == other.edge_count()
            && self.vertices().all(|v| other.contains_vertex(v))
            && self
                .edges()
                .all(|(u, v, w)| other.weight(u, v).is_some_and(|ow| ow == w))
    }
}

impl<V, W> Eq for UndirectedGraph<V, W>
where
    V: Eq + Hash + Clone + fmt::Debug,
    W: Eq,
{
}

/// One line per vertex, sorted: `vertex : {neighbor, ...}`.
impl<V, W> fmt::Display for UndirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Ord + fmt::Debug + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut vertices: Vec<&V> = self.vertices().collect();
        vertices.sort();

        for (line, vertex) in vertices.into_iter().enumerate() {
            if line > 0 {
                writeln!(f)?;
            }
            let mut neighbors: Vec<&V> = self.neighbors(vertex).map(|(n, _)| n).collect();
            neighbors.sort();
            let rendered: Vec<String> = neighbors.iter().map(|n| n.to_string()).collect();
            write!(f, "{vertex} : {{{}}}", rendered.join(", "))?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
