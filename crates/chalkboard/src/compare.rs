//! Epsilon-tolerant comparisons and the tolerance configuration.
//!
//! - `is_nearly`, `is_less_than`, `is_greater_than`: float comparisons with an explicit margin.
//! - `Tolerance`: centralizes the epsilons for zero checks, angle predicates and side lengths.
//!
//! Code cross-refs: `geom::Angle` (angle predicates), `classify`, `remarkable`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Zero by all intents and purposes; absorbs floating-point noise.
pub const EPS_ZERO: f64 = 1e-15;

/// Whether `a` and `b` are equal within `eps`, i.e. `|a - b| <= eps`.
#[inline]
pub fn is_nearly(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

/// Whether `a` is less than `b` by more than `eps`, i.e. `a + eps < b`.
#[inline]
pub fn is_less_than(a: f64, b: f64, eps: f64) -> bool {
    a + eps < b
}

/// Whether `a` is greater than `b` by more than `eps`, i.e. `a - eps > b`.
#[inline]
pub fn is_greater_than(a: f64, b: f64, eps: f64) -> bool {
    a - eps > b
}

/// Geometry configuration (tolerances).
///
/// `angle` drives every angle-based predicate (nearly right, nearly straight,
/// obtuse, equiangular). It has to match user intent rather than bit-exact
/// perpendicularity, hence the default of one degree.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Generic zero/equality margin.
    pub zero: f64,
    /// Margin on angle measures, in radians.
    pub angle: f64,
    /// Margin on side lengths when testing for equal sides.
    pub length: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            zero: EPS_ZERO,
            angle: std::f64::consts::PI / 180.0,
            length: 1e-12,
        }
    }
}

impl Tolerance {
    /// Same tolerance with a different angle margin, given in degrees.
    pub fn with_angle_degrees(self, degrees: f64) -> Self {
        Self {
            angle: degrees.to_radians(),
            ..self
        }
    }

    /// Reject negative or non-finite margins.
    pub fn validate(self) -> Result<Self, ToleranceError> {
        for (field, value) in [
            ("zero", self.zero),
            ("angle", self.angle),
            ("length", self.length),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ToleranceError::Invalid { field, value });
            }
        }
        Ok(self)
    }
}

/// Rejected tolerance configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ToleranceError {
    Invalid { field: &'static str, value: f64 },
}

impl fmt::Display for ToleranceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid { field, value } => {
                write!(f, "tolerance `{field}` must be finite and >= 0, got {value}")
            }
        }
    }
}

impl std::error::Error for ToleranceError {}
