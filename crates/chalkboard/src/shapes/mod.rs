//! Shape model: tagged geometry with identity, priority, parents and marks.
//!
//! Purpose
//! - Wrap each primitive in a `Shape` the presentation layer can draw, label and
//!   highlight: a stable `name`/`id`, a snapping `priority`, the `parents` it was
//!   derived from and its decorative `marks`.
//! - Provide pure builders per shape kind (see `build`).
//!
//! Invariants
//! - Shapes are immutable; `reshape` yields a new shape of the same kind.
//! - Parent links only point at shapes built earlier in the same pass, so the
//!   dependency graph is acyclic by construction.
//! - Names derive from vertex ids and shape kind only.
//!
//! Code cross-refs: `geom::Geometry`, `triangle::Triangle`, `remarkable`, `snap`

mod build;
mod mark;

pub use build::{
    angle, angular_bisector, angular_bisector_with, bisector, circle, extended_side,
    external_bisector, line, point, side, vertex, Attrs,
};
pub use mark::{Mark, MarkKind};

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::geom::{Angle, Circle, ClosestPoint, Geometry, Line, Point, Segment};

/// Shared handle on a shape; parents are held through these.
pub type ShapeRef = Arc<Shape>;
/// Snapping/hover rank; lower wins ties.
pub type Priority = u8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Vertex,
    Point,
    Side,
    Line,
    Circle,
    Angle,
}

impl ShapeKind {
    /// Fixed lookup table: vertices and free points first, then sides, then the rest.
    pub fn default_priority(self) -> Priority {
        match self {
            ShapeKind::Vertex | ShapeKind::Point => 0,
            ShapeKind::Side => 1,
            ShapeKind::Line | ShapeKind::Circle | ShapeKind::Angle => 9,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ShapeKind::Vertex => "vertex",
            ShapeKind::Point => "point",
            ShapeKind::Side => "side",
            ShapeKind::Line => "line",
            ShapeKind::Circle => "circle",
            ShapeKind::Angle => "angle",
        };
        f.write_str(s)
    }
}

/// The geometry of a shape, tagged by kind.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "geometry", rename_all = "lowercase")]
pub enum Figure {
    Vertex(Point),
    Point(Point),
    Side(Segment),
    Line(Line),
    Circle(Circle),
    Angle(Angle),
}

impl Figure {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Figure::Vertex(_) => ShapeKind::Vertex,
            Figure::Point(_) => ShapeKind::Point,
            Figure::Side(_) => ShapeKind::Side,
            Figure::Line(_) => ShapeKind::Line,
            Figure::Circle(_) => ShapeKind::Circle,
            Figure::Angle(_) => ShapeKind::Angle,
        }
    }
}

impl Geometry for Figure {
    fn closest_point_to(&self, point: &Point) -> ClosestPoint {
        match self {
            Figure::Vertex(p) | Figure::Point(p) => p.closest_point_to(point),
            Figure::Side(s) => s.closest_point_to(point),
            Figure::Line(l) => l.closest_point_to(point),
            Figure::Circle(c) => c.closest_point_to(point),
            Figure::Angle(a) => a.closest_point_to(point),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Shape {
    #[serde(flatten)]
    pub geometry: Figure,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub priority: Priority,
    #[serde(serialize_with = "serialize_labels")]
    pub parents: Vec<ShapeRef>,
    pub marks: Vec<Mark>,
}

fn serialize_labels<S: Serializer>(parents: &[ShapeRef], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(parents.iter().map(|p| p.label()))
}

impl Shape {
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    /// Short id when present, full name otherwise.
    pub fn label(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }

    /// Same identity, parents and marks over new geometry of the same kind.
    pub fn reshape(&self, geometry: Figure) -> Result<Shape, ShapeError> {
        if geometry.kind() != self.kind() {
            return Err(ShapeError::KindMismatch {
                expected: self.kind(),
                found: geometry.kind(),
            });
        }
        Ok(Shape {
            geometry,
            ..self.clone()
        })
    }

    /// All transitive parents, nearest first, each listed once.
    pub fn lineage(&self) -> Vec<ShapeRef> {
        let mut out: Vec<ShapeRef> = Vec::new();
        let mut queue: std::collections::VecDeque<&ShapeRef> = self.parents.iter().collect();
        while let Some(parent) = queue.pop_front() {
            if out.iter().any(|seen| Arc::ptr_eq(seen, parent)) {
                continue;
            }
            out.push(Arc::clone(parent));
            queue.extend(parent.parents.iter());
        }
        out
    }
}

impl Geometry for Shape {
    #[inline]
    fn closest_point_to(&self, point: &Point) -> ClosestPoint {
        self.geometry.closest_point_to(point)
    }
}

/// A shape together with its concrete geometry, for builders that need the primitive.
#[derive(Clone, Debug)]
pub struct Handle<G> {
    pub shape: ShapeRef,
    pub geometry: G,
}

impl<G: Copy> Handle<G> {
    fn new(geometry: G, shape: Shape) -> Self {
        Self {
            shape: Arc::new(shape),
            geometry,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    KindMismatch { expected: ShapeKind, found: ShapeKind },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KindMismatch { expected, found } => {
                write!(f, "cannot reshape a {expected} into a {found}")
            }
        }
    }
}

impl std::error::Error for ShapeError {}

#[cfg(test)]
mod tests;
