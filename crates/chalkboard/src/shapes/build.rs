//! Pure shape builders, one per shape kind.

use super::{Figure, Handle, Mark, MarkKind, Priority, Shape, ShapeRef};
use crate::compare::Tolerance;
use crate::geom::{Angle, Circle, Line, Planar, Point, Segment};

/// Identity and decoration for a new shape.
#[derive(Clone, Debug, Default)]
pub struct Attrs {
    pub name: String,
    pub id: Option<String>,
    pub priority: Option<Priority>,
    pub parents: Vec<ShapeRef>,
    pub marks: Vec<Mark>,
}

impl Attrs {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn parents<I: IntoIterator<Item = ShapeRef>>(mut self, parents: I) -> Self {
        self.parents.extend(parents);
        self
    }

    pub fn marks<I: IntoIterator<Item = Mark>>(mut self, marks: I) -> Self {
        self.marks.extend(marks);
        self
    }
}

fn stamp(geometry: Figure, attrs: Attrs) -> Shape {
    let priority = attrs
        .priority
        .unwrap_or_else(|| geometry.kind().default_priority());
    Shape {
        geometry,
        name: attrs.name,
        id: attrs.id,
        priority,
        parents: attrs.parents,
        marks: attrs.marks,
    }
}

/// Triangle corner; `id` is its single-letter label.
pub fn vertex(at: Point, id: &str) -> Handle<Point> {
    Handle::new(at, stamp(Figure::Vertex(at), Attrs::named(id).id(id)))
}

pub fn point(at: Point, attrs: Attrs) -> Shape {
    stamp(Figure::Point(at), attrs)
}

pub fn line(geometry: Line, attrs: Attrs) -> Shape {
    stamp(Figure::Line(geometry), attrs)
}

pub fn circle(geometry: Circle, attrs: Attrs) -> Shape {
    stamp(Figure::Circle(geometry), attrs)
}

/// Side between two vertices, id composed from theirs (e.g. `AB`).
pub fn side(from: &Handle<Point>, to: &Handle<Point>) -> Handle<Segment> {
    let segment = Segment::new(from.geometry, to.geometry);
    let id = format!("{}{}", from.shape.label(), to.shape.label());
    let attrs = Attrs::named(id.clone())
        .id(id)
        .parents([from.shape.clone(), to.shape.clone()]);
    Handle::new(segment, stamp(Figure::Side(segment), attrs))
}

/// Interior angle at `b`, id composed from the three vertices (e.g. `CAB`).
pub fn angle(a: &Handle<Point>, b: &Handle<Point>, c: &Handle<Point>) -> Handle<Angle> {
    let geometry = Angle::new(a.geometry, b.geometry, c.geometry);
    let id = format!(
        "{}{}{}",
        a.shape.label(),
        b.shape.label(),
        c.shape.label()
    );
    let attrs = Attrs::named(format!("Angle {id}"))
        .id(id)
        .parents([a.shape.clone(), b.shape.clone(), c.shape.clone()]);
    Handle::new(geometry, stamp(Figure::Angle(geometry), attrs))
}

/// Perpendicular bisector of a side: a tick on each half and a right-angle mark at the midpoint.
pub fn bisector(side: &Handle<Segment>) -> Handle<Line> {
    let segment = side.geometry;
    let geometry = segment.bisector();
    let (from, midpoint, to) = (segment.from, segment.midpoint(), segment.to);
    let rotate = segment.vector().heading();
    let marks = [
        Mark::new(MarkKind::Tick, nalgebra::center(&from, &midpoint), rotate),
        Mark::new(MarkKind::Tick, nalgebra::center(&midpoint, &to), rotate),
        Mark::new(MarkKind::RightAngle, midpoint, rotate),
    ];
    let attrs = Attrs::named(format!("Perpendicular bisector of {}", side.shape.label()))
        .parents([side.shape.clone()])
        .marks(marks);
    Handle::new(geometry, stamp(Figure::Line(geometry), attrs))
}

/// Internal angular bisector with default tolerances.
pub fn angular_bisector(angle: &Handle<Angle>) -> Handle<Line> {
    angular_bisector_with(angle, &Tolerance::default())
}

/// Internal angular bisector: one right-angle tick when the angle is nearly right,
/// otherwise two angle ticks at a quarter and three quarters of the sweep.
pub fn angular_bisector_with(angle: &Handle<Angle>, tol: &Tolerance) -> Handle<Line> {
    let theta = angle.geometry;
    let geometry = theta.bisector();
    let vertex = theta.b;
    let marks = if theta.is_nearly_right(tol.angle) {
        vec![Mark::new(
            MarkKind::RightAngleTick,
            vertex,
            theta.bisector_direction().heading(),
        )]
    } else {
        let (start, sweep) = (theta.ba().heading(), theta.measure());
        vec![
            Mark::new(MarkKind::AngleTick, vertex, start + sweep / 4.0),
            Mark::new(MarkKind::AngleTick, vertex, start + 3.0 * sweep / 4.0),
        ]
    };
    let attrs = Attrs::named(format!("Angular bisector of {}", angle.shape.label()))
        .parents([angle.shape.clone()])
        .marks(marks);
    Handle::new(geometry, stamp(Figure::Line(geometry), attrs))
}

pub fn external_bisector(angle: &Handle<Angle>) -> Handle<Line> {
    let geometry = angle.geometry.external_bisector();
    let attrs = Attrs::named(format!("External bisector of {}", angle.shape.label()))
        .parents([angle.shape.clone()]);
    Handle::new(geometry, stamp(Figure::Line(geometry), attrs))
}

/// The infinite line a side lies on.
pub fn extended_side(side: &Handle<Segment>) -> Handle<Line> {
    let geometry = side.geometry.extend();
    let attrs = Attrs::named(format!("{} (extended)", side.shape.label()))
        .parents([side.shape.clone()]);
    Handle::new(geometry, stamp(Figure::Line(geometry), attrs))
}
