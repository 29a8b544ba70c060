//! Property-based tests for the data structures.
