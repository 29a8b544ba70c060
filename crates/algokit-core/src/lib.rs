//! Algokit Core — shared error type and input validation.
//!
//! This crate provides the foundational types used across all Algokit crates.
//! It has no internal Algokit dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`validate`]: Precondition checks for algorithm inputs

#![doc = include_str!("../README.md")]

pub mod error;
pub mod validate;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
