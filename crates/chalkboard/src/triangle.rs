//! Triangle construction from three vertex positions.
//!
//! - Sides run `AB`, `BC`, `CA`; interior angles are `CAB`, `ABC`, `BCA`
//!   (vertex in the middle), so index `i` of each array belongs to vertex `i`.
//! - Everything is derived from the positions; moving a vertex rebuilds the whole
//!   triangle (`moved`, `drag_vertex`).
//!
//! Code cross-refs: `shapes::{vertex, side, angle}`, `snap::attempt_snapping`

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::compare::Tolerance;
use crate::geom::{Angle, Point, Segment};
use crate::shapes::{self, Handle, ShapeRef};
use crate::snap::{attempt_snapping, Snap};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VertexId {
    A,
    B,
    C,
}

impl VertexId {
    pub const ALL: [VertexId; 3] = [VertexId::A, VertexId::B, VertexId::C];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            VertexId::A => 0,
            VertexId::B => 1,
            VertexId::C => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VertexId::A => "A",
            VertexId::B => "B",
            VertexId::C => "C",
        }
    }

    /// The two other vertices, in cyclic order.
    pub fn others(self) -> [VertexId; 2] {
        match self {
            VertexId::A => [VertexId::B, VertexId::C],
            VertexId::B => [VertexId::C, VertexId::A],
            VertexId::C => [VertexId::A, VertexId::B],
        }
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Three vertices, their sides and their interior angles.
#[derive(Clone, Debug)]
pub struct Triangle {
    pub vertices: [Handle<Point>; 3],
    pub sides: [Handle<Segment>; 3],
    pub angles: [Handle<Angle>; 3],
}

/// Build the triangle `ABC`.
pub fn compute_triangle(a: Point, b: Point, c: Point) -> Triangle {
    Triangle::new(a, b, c)
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        let [va, vb, vc] = [
            shapes::vertex(a, VertexId::A.label()),
            shapes::vertex(b, VertexId::B.label()),
            shapes::vertex(c, VertexId::C.label()),
        ];
        let sides = [
            shapes::side(&va, &vb),
            shapes::side(&vb, &vc),
            shapes::side(&vc, &va),
        ];
        let angles = [
            shapes::angle(&vc, &va, &vb),
            shapes::angle(&va, &vb, &vc),
            shapes::angle(&vb, &vc, &va),
        ];
        Self {
            vertices: [va, vb, vc],
            sides,
            angles,
        }
    }

    /// Like `new`, but rejects NaN and infinite coordinates.
    pub fn try_new(a: Point, b: Point, c: Point) -> Result<Self, InputError> {
        for (vertex, p) in VertexId::ALL.into_iter().zip([a, b, c]) {
            if !(p.x.is_finite() && p.y.is_finite()) {
                return Err(InputError::NonFinite {
                    vertex,
                    x: p.x,
                    y: p.y,
                });
            }
        }
        Ok(Self::new(a, b, c))
    }

    pub fn positions(&self) -> [Point; 3] {
        [
            self.vertices[0].geometry,
            self.vertices[1].geometry,
            self.vertices[2].geometry,
        ]
    }

    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Handle<Point> {
        &self.vertices[id.index()]
    }

    /// Angle of greatest absolute measure; the first one wins ties.
    pub fn largest_angle(&self) -> &Handle<Angle> {
        self.angles[1..]
            .iter()
            .fold(&self.angles[0], |best, candidate| {
                if candidate.geometry.measure().abs() > best.geometry.measure().abs() {
                    candidate
                } else {
                    best
                }
            })
    }

    /// Flat (largest angle nearly straight) or with two coincident vertices.
    pub fn is_degenerate(&self, tol: &Tolerance) -> bool {
        self.largest_angle().geometry.is_nearly_straight(tol.angle)
            || self.sides.iter().any(|s| s.geometry.length() <= tol.zero)
    }

    /// Vertices, sides and angles as shapes, in that order.
    pub fn shapes(&self) -> impl Iterator<Item = &ShapeRef> {
        self.vertices
            .iter()
            .map(|v| &v.shape)
            .chain(self.sides.iter().map(|s| &s.shape))
            .chain(self.angles.iter().map(|a| &a.shape))
    }

    /// The same triangle with one vertex repositioned.
    pub fn moved(&self, id: VertexId, to: Point) -> Triangle {
        let mut positions = self.positions();
        positions[id.index()] = to;
        let [a, b, c] = positions;
        Triangle::new(a, b, c)
    }

    /// Move a vertex after snapping `to` against the other two vertices.
    pub fn drag_vertex(&self, id: VertexId, to: Point, distance_threshold: f64) -> (Triangle, Snap) {
        let fixed = id.others().map(|other| self.vertex(other).geometry);
        let snap = attempt_snapping(to, fixed, distance_threshold);
        if let Some(shape) = &snap.shape {
            tracing::debug!(vertex = %id, target = %shape.name, "vertex snapped");
        }
        (self.moved(id, snap.at), snap)
    }
}

/// Rejected vertex input.
#[derive(Clone, Debug, PartialEq)]
pub enum InputError {
    NonFinite { vertex: VertexId, x: f64, y: f64 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { vertex, x, y } => {
                write!(f, "vertex {vertex} has non-finite coordinates ({x}, {y})")
            }
        }
    }
}

impl std::error::Error for InputError {}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::point;

    fn right_isosceles() -> Triangle {
        compute_triangle(point![0.0, 0.0], point![1.0, 0.0], point![0.0, 1.0])
    }

    #[test]
    fn sides_and_angles_are_named_from_vertices() {
        let t = right_isosceles();
        let sides: Vec<_> = t.sides.iter().map(|s| s.shape.label().to_string()).collect();
        assert_eq!(sides, ["AB", "BC", "CA"]);
        let angles: Vec<_> = t.angles.iter().map(|a| a.shape.label().to_string()).collect();
        assert_eq!(angles, ["CAB", "ABC", "BCA"]);
        assert_eq!(t.angles[0].shape.name, "Angle CAB");
        // angle i sits at vertex i
        for (angle, vertex) in t.angles.iter().zip(&t.vertices) {
            assert_eq!(angle.geometry.b, vertex.geometry);
        }
        assert_eq!(t.shapes().count(), 9);
    }

    #[test]
    fn largest_angle_and_degeneracy() {
        let tol = Tolerance::default();
        let t = right_isosceles();
        assert_eq!(t.largest_angle().shape.label(), "CAB");
        assert!(!t.is_degenerate(&tol));
        let flat = compute_triangle(point![0.0, 0.0], point![1.0, 0.0], point![2.0, 0.0]);
        assert!(flat.is_degenerate(&tol));
        assert_eq!(flat.largest_angle().shape.label(), "ABC");
        let pinched = compute_triangle(point![0.0, 0.0], point![0.0, 0.0], point![2.0, 1.0]);
        assert!(pinched.is_degenerate(&tol));
    }

    #[test]
    fn try_new_rejects_non_finite() {
        let err = Triangle::try_new(point![0.0, 0.0], point![f64::NAN, 0.0], point![0.0, 1.0])
            .unwrap_err();
        assert!(matches!(
            err,
            InputError::NonFinite {
                vertex: VertexId::B,
                ..
            }
        ));
        assert!(err.to_string().contains("vertex B"));
        assert!(Triangle::try_new(point![0.0, 0.0], point![1.0, 0.0], point![0.0, 1.0]).is_ok());
    }

    #[test]
    fn moved_rebuilds_from_scratch() {
        let t = right_isosceles();
        let m = t.moved(VertexId::C, point![0.5, 2.0]);
        assert_eq!(m.vertex(VertexId::C).geometry, point![0.5, 2.0]);
        assert_eq!(m.vertex(VertexId::A).geometry, point![0.0, 0.0]);
        assert_eq!(m.sides[1].geometry.to, point![0.5, 2.0]);
        assert_eq!(m.angles[2].geometry.b, point![0.5, 2.0]);
        // the source triangle is untouched
        assert_eq!(t.vertex(VertexId::C).geometry, point![0.0, 1.0]);
    }

    #[test]
    fn drag_vertex_snaps_against_the_other_two() {
        let t = right_isosceles();
        // C dragged near the perpendicular bisector of AB, far from the special points
        let (dragged, snap) = t.drag_vertex(VertexId::C, point![0.51, 3.0], 0.05);
        assert_eq!(snap.shape.as_ref().map(|s| s.name.as_str()), Some("Isosceles"));
        let c = dragged.vertex(VertexId::C).geometry;
        assert!((c.x - 0.5).abs() < 1e-12 && (c.y - 3.0).abs() < 1e-12);

        let (free, snap) = t.drag_vertex(VertexId::C, point![0.3, 3.0], 0.05);
        assert!(snap.shape.is_none());
        assert_eq!(free.vertex(VertexId::C).geometry, point![0.3, 3.0]);
    }
}
