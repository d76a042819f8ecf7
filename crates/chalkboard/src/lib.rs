//! Geometry engine of an interactive triangle chalkboard.
//!
//! Given three vertex positions, computes the triangle's shapes, its remarkable
//! constructions (bisectors, circumcircle, incircle, excircles, smallest
//! enclosing circle), its classification, and snapping of a dragged vertex onto
//! special positions. Everything is pure and synchronous; rendering is left to
//! the caller.
//!
//! Layout
//! - `compare`: epsilon comparisons and `Tolerance`.
//! - `geom`: points, vectors, lines, segments, circles, angles.
//! - `shapes`: named, prioritized, parented shapes with decorative marks.
//! - `triangle`, `remarkable`, `classify`, `snap`: the algorithms.
//!
//! Coordinates are in an abstract local frame; no scaling is done here.

pub mod api;
pub mod classify;
pub mod compare;
pub mod geom;
pub mod remarkable;
pub mod shapes;
pub mod snap;
pub mod triangle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use compare::Tolerance;
pub use geom::{Point, Vector};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::classify::{classify, Angular, Classification, Lateral};
    pub use crate::geom::{Angle, Circle, Geometry, Line, Planar, Point, Segment, Vector};
    pub use crate::remarkable::remarkable_shapes;
    pub use crate::shapes::{Figure, Shape, ShapeKind, ShapeRef};
    pub use crate::snap::attempt_snapping;
    pub use crate::triangle::{compute_triangle, Triangle, VertexId};
    pub use crate::Tolerance;
}
