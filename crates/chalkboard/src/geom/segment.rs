use serde::Serialize;

use super::line::Line;
use super::point::{ClosestPoint, Geometry, Point, Vector};
use super::vector::Planar;

/// Bounded piece of a line between `from` and `to`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    #[serde(skip)]
    line: Line,
}

impl Segment {
    pub fn new(from: Point, to: Point) -> Self {
        Self {
            from,
            to,
            line: Line::through(from, to),
        }
    }

    #[inline]
    pub fn vector(&self) -> Vector {
        self.to - self.from
    }

    #[inline]
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.from, &self.to)
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        nalgebra::center(&self.from, &self.to)
    }

    /// Perpendicular bisector.
    pub fn bisector(&self) -> Line {
        Line::new(self.vector().perpendicular(), self.midpoint())
    }

    /// Supporting line, as a borrowed view.
    #[inline]
    pub fn as_line(&self) -> &Line {
        &self.line
    }

    /// Promote to the underlying infinite line.
    #[inline]
    pub fn extend(&self) -> Line {
        self.line
    }
}

impl Geometry for Segment {
    /// Projection onto the supporting line, clamped to the nearer endpoint when the
    /// foot falls outside `[from, to]`.
    fn closest_point_to(&self, point: &Point) -> ClosestPoint {
        let projection = self.line.project(point);
        let length = self.length();
        let outside = [self.from, self.to]
            .iter()
            .any(|end| nalgebra::distance(end, &projection) > length);
        if outside {
            let from = self.from.closest_point_to(point);
            let to = self.to.closest_point_to(point);
            return if to.distance < from.distance { to } else { from };
        }
        ClosestPoint::between(projection, point)
    }
}
