use serde::Serialize;

use super::line::Line;
use super::point::{ClosestPoint, Geometry, Point, Vector};
use super::vector::{from_heading, Planar};
use crate::compare::is_nearly;

/// Relative margin on `distance ≈ radius` for tangency.
const TANGENT_EPS: f64 = 1e-12;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Circle {
    pub centre: Point,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(centre: Point, radius: f64) -> Self {
        Self { centre, radius }
    }

    /// Either 0, 1 or 2 intersections.
    ///
    /// Counted from the distance `d` between the centre and the line: tangent when
    /// `d ≈ r` relative to the circle's scale, otherwise two points at `±√(r² − d²)`
    /// along the line from the foot of the perpendicular.
    pub fn intersect_with(&self, line: &Line) -> Vec<Point> {
        let foot = line.project(&self.centre);
        let d = nalgebra::distance(&foot, &self.centre);
        let r = self.radius;
        if is_nearly(d, r, TANGENT_EPS * r.abs().max(1.0)) {
            return vec![foot];
        }
        if d > r {
            return Vec::new();
        }
        let along = Vector::new(-line.b, line.a).normalize() * (r * r - d * d).sqrt();
        vec![foot + along, foot - along]
    }
}

impl Geometry for Circle {
    /// Radial projection; a query at the centre resolves to the point at heading 0.
    fn closest_point_to(&self, point: &Point) -> ClosestPoint {
        let offset = *point - self.centre;
        let radial = if offset.norm() > 0.0 {
            offset.with_length(self.radius)
        } else {
            from_heading(0.0) * self.radius
        };
        ClosestPoint::between(self.centre + radial, point)
    }
}
