//! Property-based tests for the number theory routines.
