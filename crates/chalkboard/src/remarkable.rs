//! Remarkable shapes of a triangle.
//!
//! Builds the flat catalogue the presentation layer draws: bisectors, angular
//! bisectors (internal and external), extended sides, circumcircle, incircle,
//! excircles with their excentres, and the smallest enclosing circle.
//!
//! - Flat triangles only get the enclosing circle; no intersection is attempted.
//! - Otherwise every intersection below exists by construction, and a missing one
//!   is treated as a broken invariant (panic), never replaced by a default point.
//!
//! Code cross-refs: `shapes::{bisector, angular_bisector_with}`, `triangle::Triangle::is_degenerate`

use std::sync::Arc;

use crate::compare::Tolerance;
use crate::geom::{Circle, Line, Point};
use crate::shapes::{self, Attrs, Handle, Mark, MarkKind, ShapeRef};
use crate::triangle::Triangle;

const ENCLOSING: &str = "Smallest circle enclosing ABC";

/// Remarkable shapes with default tolerances.
pub fn remarkable_shapes(triangle: &Triangle) -> Vec<ShapeRef> {
    remarkable_shapes_with(triangle, &Tolerance::default())
}

pub fn remarkable_shapes_with(triangle: &Triangle, tol: &Tolerance) -> Vec<ShapeRef> {
    let lines = Lines::new(triangle, tol);
    let sides: Vec<ShapeRef> = triangle.sides.iter().map(|s| s.shape.clone()).collect();

    let widest = triangle.largest_angle().geometry;
    let centre = nalgebra::center(&widest.a, &widest.c);
    let obtuse_enclosing = shapes::circle(
        Circle::new(centre, nalgebra::distance(&centre, &widest.a)),
        Attrs::named(ENCLOSING)
            .parents(sides.iter().cloned())
            .marks([Mark::new(MarkKind::X, centre, 0.0)]),
    );

    if triangle.is_degenerate(tol) {
        tracing::debug!(
            angle = %triangle.largest_angle().shape.label(),
            "flat triangle, only the enclosing circle"
        );
        return triangle
            .shapes()
            .cloned()
            .chain(lines.all())
            .chain([Arc::new(obtuse_enclosing)])
            .collect();
    }

    let circumcentre = must_intersect(&lines.bisectors[0], &lines.bisectors[1]);
    let incentre = must_intersect(&lines.angular[0], &lines.angular[1]);
    let a = triangle.vertices[0].geometry;
    let circumcircle = Circle::new(circumcentre, nalgebra::distance(&circumcentre, &a));

    let mut circles = Vec::with_capacity(11);
    circles.push(if widest.is_obtuse(tol.angle) {
        tracing::trace!(
            angle = %triangle.largest_angle().shape.label(),
            "obtuse, enclosing circle on the widest angle's sides"
        );
        obtuse_enclosing
    } else {
        shapes::circle(circumcircle, Attrs::named(ENCLOSING).parents(sides.iter().cloned()))
    });
    for (i, side) in triangle.sides.iter().enumerate() {
        let excentre = must_intersect(&lines.external[i], &lines.external[(i + 1) % 3]);
        let others = lines
            .extended
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, l)| l.shape.clone());
        let opposite = triangle.vertices[(i + 2) % 3].shape.label();
        circles.push(shapes::point(
            excentre,
            Attrs::named(format!("Excentre opposite {opposite}")),
        ));
        circles.push(shapes::circle(
            Circle::new(excentre, side.geometry.as_line().distance_to(&excentre)),
            Attrs::named(format!("Excircle to {}", side.shape.label()))
                .parents([side.shape.clone()])
                .parents(others),
        ));
    }
    circles.push(shapes::circle(
        circumcircle,
        Attrs::named("Circumcircle of ABC").parents(sides.iter().cloned()),
    ));
    circles.push(shapes::circle(
        Circle::new(
            incentre,
            triangle.sides[0].geometry.as_line().distance_to(&incentre),
        ),
        Attrs::named("Incircle of ABC").parents(sides.iter().cloned()),
    ));
    circles.push(shapes::point(
        circumcentre,
        Attrs::named("Circumcentre")
            .parents(lines.bisectors.iter().map(|l| l.shape.clone()))
            .marks(inherited_marks(&lines.bisectors)),
    ));
    circles.push(shapes::point(
        incentre,
        Attrs::named("Incentre")
            .parents(lines.angular.iter().map(|l| l.shape.clone()))
            .parents(triangle.angles.iter().map(|a| a.shape.clone()))
            .marks(inherited_marks(&lines.angular)),
    ));
    circles.reverse();

    let shapes_of = |handles: &[Handle<Line>]| -> Vec<ShapeRef> {
        handles.iter().map(|h| h.shape.clone()).collect()
    };
    let mut out = Vec::with_capacity(32);
    out.extend(shapes_of(&lines.extended));
    out.extend(shapes_of(&lines.bisectors));
    out.extend(shapes_of(&lines.angular));
    out.extend(circles.into_iter().map(Arc::new));
    out.extend(shapes_of(&lines.external));
    out.extend(triangle.angles.iter().map(|a| a.shape.clone()));
    out.extend(sides);
    out.extend(triangle.vertices.iter().map(|v| v.shape.clone()));
    out
}

/// The twelve lines every triangle gets, index `i` belonging to side/angle `i`.
struct Lines {
    bisectors: [Handle<Line>; 3],
    angular: [Handle<Line>; 3],
    external: [Handle<Line>; 3],
    extended: [Handle<Line>; 3],
}

impl Lines {
    fn new(triangle: &Triangle, tol: &Tolerance) -> Self {
        Self {
            bisectors: triangle.sides.each_ref().map(shapes::bisector),
            angular: triangle
                .angles
                .each_ref()
                .map(|a| shapes::angular_bisector_with(a, tol)),
            external: triangle.angles.each_ref().map(shapes::external_bisector),
            extended: triangle.sides.each_ref().map(shapes::extended_side),
        }
    }

    /// Bisectors, angular bisectors, external bisectors, extended sides.
    fn all(&self) -> impl Iterator<Item = ShapeRef> + '_ {
        self.bisectors
            .iter()
            .chain(&self.angular)
            .chain(&self.external)
            .chain(&self.extended)
            .map(|l| l.shape.clone())
    }
}

fn must_intersect(first: &Handle<Line>, second: &Handle<Line>) -> Point {
    first
        .geometry
        .intersect_with(&second.geometry)
        .unwrap_or_else(|| {
            panic!(
                "`{}` and `{}` are parallel in a non-degenerate triangle",
                first.shape.name, second.shape.name
            )
        })
}

fn inherited_marks(lines: &[Handle<Line>]) -> Vec<Mark> {
    lines
        .iter()
        .flat_map(|l| l.shape.marks.iter().copied())
        .collect()
}
