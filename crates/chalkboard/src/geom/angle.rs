use std::f64::consts::{FRAC_PI_2, PI};

use serde::Serialize;

use super::line::Line;
use super::point::{ClosestPoint, Geometry, Point, Vector};
use super::vector::Planar;
use crate::compare::{is_greater_than, is_nearly};

/// Angle at vertex `b`, swept from `b→a` to `b→c`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Angle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Angle {
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn ba(&self) -> Vector {
        self.a - self.b
    }

    #[inline]
    pub fn bc(&self) -> Vector {
        self.c - self.b
    }

    /// Signed measure in `(-π, π]`; positive when `b→a` turns counterclockwise onto `b→c`.
    pub fn measure(&self) -> f64 {
        let (ba, bc) = (self.ba(), self.bc());
        ba.perp(&bc).atan2(ba.dot(&bc))
    }

    #[inline]
    pub fn is_clockwise(&self) -> bool {
        self.measure() < 0.0
    }

    /// Direction of the internal bisector: `b→a` rotated by half the sweep.
    pub fn bisector_direction(&self) -> Vector {
        self.ba().rotated(self.measure() / 2.0)
    }

    /// Internal bisector, through the vertex.
    pub fn bisector(&self) -> Line {
        Line::new(self.bisector_direction(), self.b)
    }

    /// External bisector, perpendicular to the internal one through the vertex.
    pub fn external_bisector(&self) -> Line {
        Line::new(self.bisector_direction().perpendicular(), self.b)
    }

    pub fn is_nearly_right(&self, eps: f64) -> bool {
        is_nearly(self.measure().abs(), FRAC_PI_2, eps)
    }

    pub fn is_nearly_straight(&self, eps: f64) -> bool {
        is_nearly(self.measure().abs(), PI, eps)
    }

    pub fn is_obtuse(&self, eps: f64) -> bool {
        is_greater_than(self.measure().abs(), FRAC_PI_2, eps)
    }
}

impl Geometry for Angle {
    /// Angles are picked by their vertex.
    fn closest_point_to(&self, point: &Point) -> ClosestPoint {
        ClosestPoint::between(self.b, point)
    }
}
