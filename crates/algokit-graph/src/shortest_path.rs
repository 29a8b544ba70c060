//! Single-source shortest paths with Dijkstra's algorithm.

use crate::types::EdgeWeight;
use crate::undirected::UndirectedGraph;
use algokit_core::{Error, Result};
use petgraph::stable_graph::NodeIndex;
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;
use std::hash::Hash;

// ============================================================================
// Result types
// ============================================================================

/// Distances and predecessors from one source vertex.
#[derive(Clone, Debug)]
pub struct ShortestPaths<V, W> {
    source: V,
    distances: HashMap<V, W>,
    predecessors: HashMap<V, V>,
}

impl<V, W> ShortestPaths<V, W>
where
    V: Eq + Hash + Clone,
    W: Copy,
{
    /// The vertex the distances are measured from.
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Length of the shortest path to `vertex`, or `None` if unreachable.
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    /// The shortest path `source..=vertex`, or `None` if unreachable.
    pub fn path_to(&self, vertex: &V) -> Option<Vec<V>> {
        if !self.distances.contains_key(vertex) {
            return None;
        }
        let mut path = vec![vertex.clone()];
        let mut current = vertex;
        while let Some(previous) = self.predecessors.get(current) {
            path.push(previous.clone());
            current = previous;
        }
        path.reverse();
        Some(path)
    }

    /// Every reachable vertex (the source included), in no particular order.
    pub fn reachable(&self) -> impl Iterator<Item = &V> {
        self.distances.keys()
    }
}

/// Result of a point-to-point shortest path query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PathResult<V, W> {
    /// Vertices along the path, both endpoints included.
    pub path: Vec<V>,
    /// Sum of the edge weights along the path.
    pub total_weight: W,
    /// Whether a path was found.
    pub found: bool,
}

impl<V, W: Default> PathResult<V, W> {
    /// Creates an empty result indicating no path found.
    pub fn not_found() -> Self {
        Self {
            path: Vec::new(),
            total_weight: W::default(),
            found: false,
        }
    }
}

// ============================================================================
// Dijkstra
// ============================================================================

#[derive(Debug, PartialEq, Eq)]
struct State<W> {
    cost: W,
    /// Insertion sequence number of `node`.
    seq: u64,
    node: NodeIndex,
}

// Reversed for a min-heap; ties go to the earlier-inserted vertex.
impl<W: Ord> Ord for State<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<W: Ord> PartialOrd for State<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's algorithm from `source`.
///
/// # Errors
///
/// - `NotFound` if `source` is not a vertex of the graph.
/// - `NegativeWeight` if any edge weighs less than zero.
/// - `Overflow` if the shortest path to some reachable vertex is longer
///   than `W` can hold.
///
/// # Example
///
/// ```rust
/// use algokit_graph::{UndirectedGraph, shortest_path::dijkstra};
///
/// let g = UndirectedGraph::from_weighted([("a", "b", 4u32), ("b", "c", 1), ("a", "c", 7)]);
/// let paths = dijkstra(&g, &"a").unwrap();
/// assert_eq!(paths.distance(&"c"), Some(5));
/// assert_eq!(paths.path_to(&"c"), Some(vec!["a", "b", "c"]));
/// ```
pub fn dijkstra<V, W>(graph: &UndirectedGraph<V, W>, source: &V) -> Result<ShortestPaths<V, W>>
where
    V: Eq + Hash + Clone + fmt::Debug,
    W: EdgeWeight,
{
    let start = graph
        .index_of(source)
        .ok_or_else(|| Error::not_found("vertex", source))?;
    check_non_negative(graph)?;

    let mut dist: HashMap<NodeIndex, W> = HashMap::from([(start, W::default())]);
    let mut prev: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut heap = BinaryHeap::from([State {
        cost: W::default(),
        seq: graph.vertex_order(start),
        node: start,
    }]);

    while let Some(State { cost, node, .. }) = heap.pop() {
        if dist.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }
        for edge in graph.graph.edges(node) {
            let next = if edge.source() == node {
                edge.target()
            } else {
                edge.source()
            };
            // An overflowing sum can never improve a distance already known.
            let candidate = match cost.checked_add(*edge.weight()) {
                Some(candidate) => candidate,
                None if dist.contains_key(&next) => continue,
                None => return Err(Error::overflow("dijkstra")),
            };
            if dist.get(&next).is_none_or(|&best| candidate < best) {
                dist.insert(next, candidate);
                prev.insert(next, node);
                heap.push(State {
                    cost: candidate,
                    seq: graph.vertex_order(next),
                    node: next,
                });
            }
        }
    }

    log::debug!(
        "dijkstra from {:?} reached {} of {} vertices",
        source,
        dist.len(),
        graph.vertex_count()
    );

    let vertex = |idx: NodeIndex| graph.graph[idx].clone();
    Ok(ShortestPaths {
        source: source.clone(),
        distances: dist.into_iter().map(|(n, d)| (vertex(n), d)).collect(),
        predecessors: prev
            .into_iter()
            .map(|(n, p)| (vertex(n), vertex(p)))
            .collect(),
    })
}

fn check_non_negative<V, W>(graph: &UndirectedGraph<V, W>) -> Result<()>
where
    V: fmt::Debug,
    W: EdgeWeight,
{
    for edge in graph.graph.edge_references() {
        if *edge.weight() < W::default() {
            return Err(Error::NegativeWeight {
                edge: format!(
                    "{:?} -- {:?} ({:?})",
                    graph.graph[edge.source()],
                    graph.graph[edge.target()],
                    edge.weight()
                ),
            });
        }
    }
    Ok(())
}

/// Shortest path between two vertices.
///
/// A missing endpoint or an unreachable target yields
/// [`PathResult::not_found`]; `from == to` is a path of one vertex and zero
/// weight. Negative weights and overflow are errors as for [`dijkstra`].
pub fn shortest_path<V, W>(
    graph: &UndirectedGraph<V, W>,
    from: &V,
    to: &V,
) -> Result<PathResult<V, W>>
where
    V: Eq + Hash + Clone + fmt::Debug,
    W: EdgeWeight,
{
    if !graph.contains_vertex(from) || !graph.contains_vertex(to) {
        return Ok(PathResult::not_found());
    }

    let paths = dijkstra(graph, from)?;
    match (paths.path_to(to), paths.distance(to)) {
        (Some(path), Some(total_weight)) => Ok(PathResult {
            path,
            total_weight,
            found: true,
        }),
        _ => Ok(PathResult::not_found()),
    }
}

impl<V, W> UndirectedGraph<V, W>
where
    V: Eq + Hash + Clone + fmt::Debug,
    W: EdgeWeight,
{
    /// Dijkstra's algorithm from `source`. See [`dijkstra`].
    pub fn dijkstra(&self, source: &V) -> Result<ShortestPaths<V, W>> {
        dijkstra(self, source)
    }

    /// Shortest path between two vertices. See [`shortest_path`].
    pub fn shortest_path(&self, from: &V, to: &V) -> Result<PathResult<V, W>> {
        shortest_path(self, from, to)
    }
}

// ============================================================================
// Tests
// ============================================================================
