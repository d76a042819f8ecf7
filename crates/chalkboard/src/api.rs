//! Curated surface for the presentation layer and the CLI.
//!
//! - The four entry points: build a triangle, list its remarkable shapes,
//!   classify it, snap a dragged vertex.
//! - Each entry point that depends on tolerances has a `*_with` variant.

// Triangle construction
pub use crate::triangle::{compute_triangle, InputError, Triangle, VertexId};
// Derived constructions
pub use crate::remarkable::{remarkable_shapes, remarkable_shapes_with};
// Classification
pub use crate::classify::{classify, classify_with, Angular, Classification, Lateral};
// Proximity
pub use crate::snap::{attempt_snapping, select_closest, snap_targets, Snap};
// Shape model
pub use crate::shapes::{Figure, Mark, MarkKind, Shape, ShapeError, ShapeKind, ShapeRef};
// Configuration
pub use crate::compare::{Tolerance, ToleranceError};
