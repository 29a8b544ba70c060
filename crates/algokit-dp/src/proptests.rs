//! Property-based tests for the dynamic programming routines.
