use serde::Serialize;

use super::point::{ClosestPoint, Geometry, Point, Vector};
use super::vector::Planar;
use crate::compare::EPS_ZERO;

/// Infinite line `a·x + b·y + c = 0`.
///
/// Invariant: either vertical with `(a, b) = (1, 0)`, or slope-defined with `b = 1`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    #[serde(skip)]
    direction: Vector,
}

impl Line {
    /// Line along `direction` through `through`.
    pub fn new(direction: Vector, through: Point) -> Self {
        let direction = direction.with_length(1.0);
        let (a, b, c) = if direction.is_vertical(EPS_ZERO) {
            (1.0, 0.0, -through.x)
        } else {
            let m = direction.y / direction.x;
            (-m, 1.0, m * through.x - through.y)
        };
        Self { a, b, c, direction }
    }

    /// Line through two points.
    #[inline]
    pub fn through(from: Point, to: Point) -> Self {
        Self::new(to - from, from)
    }

    /// Unit direction (zero if built from a zero vector).
    #[inline]
    pub fn direction(&self) -> Vector {
        self.direction
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.b == 0.0
    }

    /// Left-hand side of the line equation at `p`.
    #[inline]
    pub fn eval(&self, p: &Point) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    /// Perpendicular distance from `p`.
    #[inline]
    pub fn distance_to(&self, p: &Point) -> f64 {
        self.eval(p).abs() / self.a.hypot(self.b)
    }

    /// Foot of the perpendicular dropped from `p`.
    pub fn project(&self, p: &Point) -> Point {
        let k = self.eval(p) / (self.a * self.a + self.b * self.b);
        Point::new(p.x - k * self.a, p.y - k * self.b)
    }

    /// The unique common point, or `None` iff the lines are parallel.
    pub fn intersect_with(&self, other: &Line) -> Option<Point> {
        if self.direction.is_parallel_to(&other.direction, EPS_ZERO) {
            return None;
        }
        let det = self.a * other.b - other.a * self.b;
        if det == 0.0 {
            return None;
        }
        Some(Point::new(
            (self.b * other.c - other.b * self.c) / det,
            (other.a * self.c - self.a * other.c) / det,
        ))
    }
}

impl Geometry for Line {
    fn closest_point_to(&self, point: &Point) -> ClosestPoint {
        ClosestPoint::between(self.project(point), point)
    }
}
