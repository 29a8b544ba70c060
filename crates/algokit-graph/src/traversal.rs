//! Breadth-first and depth-first search, connectivity and components.
//!
//! Both searches share one worklist loop: a vertex is marked when it is
//! taken off the worklist, and already-marked vertices are skipped. Only the
//! end the worklist is taken from differs.

use crate::undirected::UndirectedGraph;
use algokit_core::{Error, Result};
use petgraph::stable_graph::NodeIndex;
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::hash::Hash;

// ============================================================================
// Search
// ============================================================================

/// Which end of the worklist a search takes the next vertex from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOrder {
    /// First in, first out.
    BreadthFirst,
    /// Last in, first out.
    DepthFirst,
}

/// Lazy iterator over the vertices reachable from a start vertex.
///
/// Each reachable vertex is yielded exactly once. Neighbors are considered
/// in the order their vertices were added to the graph.
pub struct Search<'a, V, W> {
    graph: &'a UndirectedGraph<V, W>,
    order: SearchOrder,
    worklist: VecDeque<NodeIndex>,
    visited: HashSet<NodeIndex>,
}

impl<'a, V, W> Search<'a, V, W>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    fn start(graph: &'a UndirectedGraph<V, W>, start: &V, order: SearchOrder) -> Result<Self> {
        let idx = graph
            .index_of(start)
            .ok_or_else(|| Error::not_found("vertex", start))?;
        Ok(Self {
            graph,
            order,
            worklist: VecDeque::from([idx]),
            visited: HashSet::new(),
        })
    }

    /// The order this search visits vertices in.
    pub fn order(&self) -> SearchOrder {
        self.order
    }

    fn take(&mut self) -> Option<NodeIndex> {
        match self.order {
            SearchOrder::BreadthFirst => self.worklist.pop_front(),
            SearchOrder::DepthFirst => self.worklist.pop_back(),
        }
    }
}

impl<'a, V, W> Iterator for Search<'a, V, W>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.take() {
            if !self.visited.insert(idx) {
                continue;
            }

            let mut neighbors = self.graph.sorted_neighbors(idx);
            neighbors.retain(|n| !self.visited.contains(n));
            // A stack pops from the back, so push in reverse to visit the
            // earliest neighbor first.
            if self.order == SearchOrder::DepthFirst {
                neighbors.reverse();
            }
            self.worklist.extend(neighbors);

            let graph = self.graph;
            return Some(&graph.graph[idx]);
        }
        None
    }
}

/// Breadth-first search from `start`.
///
/// Returns `NotFound` if `start` is not a vertex of the graph.
///
/// ```rust
/// use algokit_graph::{UndirectedGraph, traversal::bfs};
///
/// let g = UndirectedGraph::from_edges([(0, 1), (0, 2), (1, 3), (2, 4)]);
/// let order: Vec<i32> = bfs(&g, &0).unwrap().copied().collect();
/// assert_eq!(order, vec![0, 1, 2, 3, 4]);
/// ```
pub fn bfs<'a, V, W>(graph: &'a UndirectedGraph<V, W>, start: &V) -> Result<Search<'a, V, W>>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    Search::start(graph, start, SearchOrder::BreadthFirst)
}

/// Depth-first search from `start`.
///
/// Returns `NotFound` if `start` is not a vertex of the graph.
///
/// ```rust
/// use algokit_graph::{UndirectedGraph, traversal::dfs};
///
/// let g = UndirectedGraph::from_edges([(0, 1), (0, 2), (1, 3), (2, 4)]);
/// let order: Vec<i32> = dfs(&g, &0).unwrap().copied().collect();
/// assert_eq!(order, vec![0, 1, 3, 2, 4]);
/// ```
pub fn dfs<'a, V, W>(graph: &'a UndirectedGraph<V, W>, start: &V) -> Result<Search<'a, V, W>>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    Search::start(graph, start, SearchOrder::DepthFirst)
}

// ============================================================================
// Connectivity
// ============================================================================

/// Whether every vertex is reachable from every other.
///
/// The empty graph counts as connected.
pub fn is_connected<V, W>(graph: &UndirectedGraph<V, W>) -> bool
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    let Some(first) = graph.vertices().next() else {
        return true;
    };
    match bfs(graph, first) {
        Ok(search) => search.count() == graph.vertex_count(),
        Err(_) => false,
    }
}

/// Partition the vertices into connected components.
///
/// Components are ordered by their earliest-inserted vertex, and each
/// component lists its vertices in breadth-first order.
pub fn connected_components<V, W>(graph: &UndirectedGraph<V, W>) -> Vec<Vec<V>>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    let mut seen: HashSet<&V> = HashSet::new();
    let mut components = Vec::new();

    for vertex in graph.vertices() {
        if seen.contains(vertex) {
            continue;
        }
        let Ok(search) = bfs(graph, vertex) else {
            continue;
        };
        let component: Vec<V> = search
            .inspect(|v| {
                seen.insert(*v);
            })
            .cloned()
            .collect();
        components.push(component);
    }

    log::debug!("found {} connected components", components.len());
    components
}

impl<V, W> UndirectedGraph<V, W>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    /// Breadth-first search from `start`. See [`bfs`].
    pub fn bfs(&self, start: &V) -> Result<Search<'_, V, W>> {
        bfs(self, start)
    }

    /// Depth-first search from `start`. See [`dfs`].
    pub fn dfs(&self, start: &V) -> Result<Search<'_, V, W>> {
        dfs(self, start)
    }

    /// Whether the graph is connected. See [`is_connected`].
    pub fn is_connected(&self) -> bool {
        is_connected(self)
    }
}

// ============================================================================
// Tests
// ============================================================================
