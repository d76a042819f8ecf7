//! Triangle classification by sides (lateral) and by angles (angular).
//!
//! Checks run in a fixed order, so overlapping categories resolve
//! deterministically: Degenerate, Obtuse, Right, Equiangular, Acute.

use std::f64::consts::FRAC_PI_3;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::compare::{is_nearly, Tolerance};
use crate::triangle::Triangle;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lateral {
    Degenerate,
    Equilateral,
    Isosceles,
    Scalene,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Angular {
    Degenerate,
    Acute,
    Right,
    Obtuse,
    Equiangular,
}

impl fmt::Display for Lateral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for Angular {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub lateral: Lateral,
    pub angular: Angular,
}

pub fn classify(triangle: &Triangle) -> Classification {
    classify_with(triangle, &Tolerance::default())
}

pub fn classify_with(triangle: &Triangle, tol: &Tolerance) -> Classification {
    let largest = triangle.largest_angle().geometry;
    let angular = if triangle.is_degenerate(tol) {
        Angular::Degenerate
    } else if largest.is_obtuse(tol.angle) {
        Angular::Obtuse
    } else if largest.is_nearly_right(tol.angle) {
        Angular::Right
    } else if triangle
        .angles
        .iter()
        .all(|a| is_nearly(a.geometry.measure().abs(), FRAC_PI_3, tol.angle))
    {
        Angular::Equiangular
    } else {
        Angular::Acute
    };

    let lengths = triangle.sides.each_ref().map(|s| s.geometry.length());
    let lateral = match angular {
        Angular::Degenerate => Lateral::Degenerate,
        Angular::Equiangular => Lateral::Equilateral,
        _ if (0..3).any(|i| is_nearly(lengths[i], lengths[(i + 1) % 3], tol.length)) => {
            Lateral::Isosceles
        }
        _ => Lateral::Scalene,
    };
    tracing::trace!(%lateral, %angular, "classified");
    Classification { lateral, angular }
}
