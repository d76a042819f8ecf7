use std::f64::consts::PI;

use super::point::Vector;

/// 2D-specific operations on `nalgebra` vectors.
///
/// `dot` and the 2D cross product (`perp`) come from `nalgebra` itself.
pub trait Planar: Sized {
    /// Angle from the positive x-axis, in `(-π, π]`.
    fn heading(&self) -> f64;
    /// The vector rotated by 90° counterclockwise.
    fn perpendicular(&self) -> Self;
    /// Same heading, given length. A zero vector is returned unchanged.
    fn with_length(&self, length: f64) -> Self;
    /// The vector rotated counterclockwise by `theta` radians.
    fn rotated(&self, theta: f64) -> Self;
    fn is_vertical(&self, eps: f64) -> bool;
    /// Headings equal modulo π, within `eps`.
    fn is_parallel_to(&self, other: &Self, eps: f64) -> bool;
}

impl Planar for Vector {
    #[inline]
    fn heading(&self) -> f64 {
        self.y.atan2(self.x)
    }

    #[inline]
    fn perpendicular(&self) -> Self {
        Vector::new(-self.y, self.x)
    }

    fn with_length(&self, length: f64) -> Self {
        let norm = self.norm();
        if norm.is_nan() || norm <= f64::MIN_POSITIVE {
            return *self;
        }
        *self * (length / norm)
    }

    fn rotated(&self, theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Vector::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    #[inline]
    fn is_vertical(&self, eps: f64) -> bool {
        self.x.abs() <= eps * self.norm()
    }

    fn is_parallel_to(&self, other: &Self, eps: f64) -> bool {
        if self.is_vertical(eps) && other.is_vertical(eps) {
            return true;
        }
        let d = (self.heading() - other.heading()).rem_euclid(PI);
        d <= eps || PI - d <= eps
    }
}

/// Unit vector pointing at `theta` radians.
#[inline]
pub fn from_heading(theta: f64) -> Vector {
    let (sin, cos) = theta.sin_cos();
    Vector::new(cos, sin)
}
