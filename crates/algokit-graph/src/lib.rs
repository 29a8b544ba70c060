//! Algokit Graph — undirected graphs and the classic algorithms over them.
//!
//! The graph wraps a petgraph `StableUnGraph` with a vertex lookup table, so
//! callers work with their own vertex values instead of node indices.
//!
//! # Modules
//!
//! - [`types`]: edge weights and serializable edge records
//! - [`undirected`]: the [`UndirectedGraph`] itself
//! - [`traversal`]: breadth-first and depth-first search, connectivity
//! - [`mst`]: Prim's and Kruskal's minimum spanning trees
//! - [`shortest_path`]: Dijkstra's algorithm

pub mod mst;
pub mod shortest_path;
pub mod traversal;
pub mod types;
pub mod undirected;

mod proptests;

pub use mst::{kruskal, prim};
pub use shortest_path::{PathResult, ShortestPaths, dijkstra, shortest_path};
pub use traversal::{Search, SearchOrder, bfs, connected_components, dfs, is_connected};
pub use types::{EdgeList, EdgeWeight, WeightedEdge};
pub use undirected::UndirectedGraph;
