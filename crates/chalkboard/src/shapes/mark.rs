use serde::Serialize;

use crate::geom::Point;

/// Decorative mark kinds; the renderer maps each to a reusable glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkKind {
    Tick,
    TickDouble,
    RightAngle,
    X,
    AngleTick,
    RightAngleTick,
}

/// A glyph placed at `at`, rotated by `rotate` radians (counterclockwise, local frame).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Mark {
    pub kind: MarkKind,
    pub at: Point,
    pub rotate: f64,
}

impl Mark {
    #[inline]
    pub fn new(kind: MarkKind, at: Point, rotate: f64) -> Self {
        Self { kind, at, rotate }
    }
}
