use nalgebra::{Point2, Vector2};
use serde::Serialize;

/// Position in the local (abstract) coordinate system, not screen pixels.
pub type Point = Point2<f64>;
/// Displacement between two points.
pub type Vector = Vector2<f64>;

/// A point on some geometry together with its distance from the query point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ClosestPoint {
    pub point: Point,
    pub distance: f64,
}

impl ClosestPoint {
    #[inline]
    pub fn between(point: Point, query: &Point) -> Self {
        Self {
            point,
            distance: nalgebra::distance(&point, query),
        }
    }
}

/// Anything that can tell which of its points lies closest to a query point.
pub trait Geometry {
    fn closest_point_to(&self, point: &Point) -> ClosestPoint;
}

impl Geometry for Point {
    #[inline]
    fn closest_point_to(&self, point: &Point) -> ClosestPoint {
        ClosestPoint::between(*self, point)
    }
}
