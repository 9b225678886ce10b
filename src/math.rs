//! Mathematical structs and functions.

use cgmath::{Point2, Vector2};
pub use segment::{line_intersection_params, point_segment_distance, segment_distance, LineSegment2d};
pub use util::*;

mod segment;
mod util;

/// A 2D point
pub type Point2d = Point2<f64>;

/// A 2D vector
pub type Vector2d = Vector2<f64>;

/// Segments whose direction vectors have a cross product smaller than this
/// are treated as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-4;
