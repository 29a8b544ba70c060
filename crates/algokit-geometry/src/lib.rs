//! Algokit Geometry — closest pairs and convex hulls.
//!
//! - [`point`]: the [`Point`] type
//! - [`closest_pair`]: closest pair of values on a line, or of points in the
//!   plane
//! - [`hull`]: convex hull by monotone chain

pub mod closest_pair;
pub mod hull;
pub mod point;

mod proptests;

pub use closest_pair::{LineValue, closest_pair, closest_pair_line};
pub use hull::convex_hull;
pub use point::Point;
