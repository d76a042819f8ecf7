//! Proximity and snapping.
//!
//! - `snap_targets`: the fixed catalogue of special positions for a vertex dragged
//!   against a base `AB` (flat, right-angled, isosceles, equilateral).
//! - `select_closest`: the candidate within a distance threshold minimizing
//!   `priority + distance`. Also drives hover detection over any shape list.
//! - `attempt_snapping`: never fails; with no candidate the input point is kept.
//!
//! Code cross-refs: `shapes::ShapeKind::default_priority`, `triangle::Triangle::drag_vertex`

use std::sync::Arc;

use serde::Serialize;

use crate::geom::{Circle, ClosestPoint, Geometry, Line, Planar, Point, Segment};
use crate::shapes::{circle, line, point, Attrs, ShapeRef};

/// Result of a snapping attempt.
#[derive(Clone, Debug, Serialize)]
pub struct Snap {
    pub at: Point,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<ShapeRef>,
}

/// Catalogue of positions that make the triangle `AB?` special, named after what they make it.
pub fn snap_targets(a: Point, b: Point) -> Vec<ShapeRef> {
    let base = Segment::new(a, b);
    let (length, midpoint) = (base.length(), base.midpoint());
    let perp = base.vector().perpendicular();
    let bisector = Line::new(perp, midpoint);
    let thales = Circle::new(midpoint, length / 2.0);
    let around_a = Circle::new(a, length);
    let around_b = Circle::new(b, length);

    let mut targets = vec![
        line(base.extend(), Attrs::named("Degenerate")),
        line(Line::new(perp, a), Attrs::named("Right")),
        line(Line::new(perp, b), Attrs::named("Right")),
        line(bisector, Attrs::named("Isosceles")),
        circle(thales, Attrs::named("Right")),
        circle(around_a, Attrs::named("Isosceles")),
        circle(around_b, Attrs::named("Isosceles")),
    ];
    let apexes = around_a
        .intersect_with(&bisector)
        .into_iter()
        .map(|p| point(p, Attrs::named("Equilateral")));
    let isosceles_right = thales
        .intersect_with(&bisector)
        .into_iter()
        .chain(around_a.intersect_with(&Line::new(perp, a)))
        .chain(around_b.intersect_with(&Line::new(perp, b)))
        .map(|p| point(p, Attrs::named("Isosceles right")));
    targets.extend(apexes);
    targets.extend(isosceles_right);
    targets.into_iter().map(Arc::new).collect()
}

/// Closest shape to `from` strictly within `distance_threshold`, ranked by
/// `priority + distance`; the earliest candidate wins exact ties.
pub fn select_closest(
    shapes: &[ShapeRef],
    from: Point,
    distance_threshold: f64,
) -> Option<(ShapeRef, ClosestPoint)> {
    let mut best: Option<(&ShapeRef, ClosestPoint, f64)> = None;
    for shape in shapes {
        let closest = shape.closest_point_to(&from);
        if closest.distance.is_nan() || closest.distance >= distance_threshold {
            continue;
        }
        let score = f64::from(shape.priority) + closest.distance;
        if best.as_ref().is_none_or(|(_, _, s)| score < *s) {
            best = Some((shape, closest, score));
        }
    }
    best.map(|(shape, closest, _)| (Arc::clone(shape), closest))
}

/// Snap a point dragged against the fixed vertices `[a, b]`.
pub fn attempt_snapping(from: Point, fixed: [Point; 2], distance_threshold: f64) -> Snap {
    let [a, b] = fixed;
    match select_closest(&snap_targets(a, b), from, distance_threshold) {
        Some((shape, closest)) => {
            tracing::trace!(target = %shape.name, distance = closest.distance, "snap");
            Snap {
                at: closest.point,
                shape: Some(shape),
            }
        }
        None => Snap {
            at: from,
            shape: None,
        },
    }
}
