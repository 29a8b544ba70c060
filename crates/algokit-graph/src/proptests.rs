//! Property-based tests comparing the graph algorithms with petgraph's.
