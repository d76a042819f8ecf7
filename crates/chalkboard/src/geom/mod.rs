//! Planar geometric primitives.
//!
//! Purpose
//! - Provide the value types the chalkboard is built from: `Point`, `Vector`,
//!   `Line`, `Segment`, `Circle`, `Angle`.
//! - Every primitive answers `closest_point_to` through the `Geometry` trait; this is
//!   what hovering and snapping rank candidates by.
//!
//! Numerics
//! - Points and vectors are plain `nalgebra` types; the `Planar` extension trait adds
//!   the 2D-specific operations (heading, perpendicular, resize, rotation).
//! - Lines live in standard form `Ax + By + C = 0`, built from a direction and a point,
//!   so vertical lines never divide by zero.
//! - "No intersection" is an `Option::None`, never a panic.
//!
//! Code cross-refs: `compare::{EPS_ZERO, Tolerance}`, `shapes::Figure`

mod angle;
mod circle;
mod line;
mod point;
mod segment;
mod vector;

pub use angle::Angle;
pub use circle::Circle;
pub use line::Line;
pub use point::{ClosestPoint, Geometry, Point, Vector};
pub use segment::Segment;
pub use vector::{from_heading, Planar};
