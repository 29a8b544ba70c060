//! Algokit classical algorithms — umbrella crate.
//!
//! This crate re-exports all Algokit components for convenience.
//! Use feature flags to enable specific families; `full` (the default)
//! enables everything.

#![doc = include_str!("../README.md")]

pub use algokit_core as core;
pub use algokit_core::{Error, Result};

#[cfg(feature = "structures")]
pub use algokit_structures as structures;

#[cfg(feature = "graph")]
pub use algokit_graph as graph;

#[cfg(feature = "math")]
pub use algokit_math as math;

#[cfg(feature = "dp")]
pub use algokit_dp as dp;

#[cfg(feature = "geometry")]
pub use algokit_geometry as geometry;

#[cfg(feature = "sorting")]
pub use algokit_sorting as sorting;
