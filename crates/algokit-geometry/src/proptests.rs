//! Property-based tests for the geometry routines.
