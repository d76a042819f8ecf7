use super::*;
use crate::compare::Tolerance;
use nalgebra::point;
use std::f64::consts::FRAC_PI_2;

fn abc(a: Point, b: Point, c: Point) -> [Handle<Point>; 3] {
    [vertex(a, "A"), vertex(b, "B"), vertex(c, "C")]
}

#[test]
fn default_priorities_follow_the_kind_table() {
    let [a, b, _] = abc(point![0.0, 0.0], point![1.0, 0.0], point![0.0, 1.0]);
    assert_eq!(a.shape.priority, 0);
    assert_eq!(side(&a, &b).shape.priority, 1);
    let free = point(point![2.0, 2.0], Attrs::named("P"));
    assert_eq!(free.priority, 0);
    let ln = line(Line::through(point![0.0, 0.0], point![1.0, 1.0]), Attrs::named("L"));
    assert_eq!(ln.priority, 9);
    let pinned = circle(
        Circle::new(point![0.0, 0.0], 1.0),
        Attrs::named("O").priority(3),
    );
    assert_eq!(pinned.priority, 3);
    assert_eq!(ShapeKind::Angle.default_priority(), 9);
}

#[test]
fn reshape_keeps_identity_and_rejects_other_kinds() {
    let [a, b, _] = abc(point![0.0, 0.0], point![1.0, 0.0], point![0.0, 1.0]);
    let ab = side(&a, &b);
    let longer = Segment::new(point![0.0, 0.0], point![3.0, 0.0]);
    let moved = ab.shape.reshape(Figure::Side(longer)).unwrap();
    assert_eq!(moved.label(), "AB");
    assert_eq!(moved.parents.len(), 2);
    assert_eq!(moved.geometry, Figure::Side(longer));

    let err = ab.shape.reshape(Figure::Point(point![1.0, 1.0])).unwrap_err();
    assert_eq!(
        err,
        ShapeError::KindMismatch {
            expected: ShapeKind::Side,
            found: ShapeKind::Point
        }
    );
    assert_eq!(err.to_string(), "cannot reshape a side into a point");
}

#[test]
fn lineage_walks_parents_once_each() {
    let [a, b, c] = abc(point![0.0, 0.0], point![4.0, 0.0], point![0.0, 3.0]);
    let cab = angle(&c, &a, &b);
    let bisector = angular_bisector(&cab);
    let labels: Vec<_> = bisector
        .shape
        .lineage()
        .iter()
        .map(|p| p.label().to_string())
        .collect();
    assert_eq!(labels, ["CAB", "C", "A", "B"]);

    // diamond: both sides share vertex B
    let ab = side(&a, &b);
    let bc = side(&b, &c);
    let joined = point(
        point![1.0, 1.0],
        Attrs::named("J").parents([ab.shape.clone(), bc.shape.clone()]),
    );
    let lineage = joined.lineage();
    assert_eq!(lineage.len(), 5);
    let bs = lineage.iter().filter(|p| p.label() == "B").count();
    assert_eq!(bs, 1);
}

#[test]
fn perpendicular_bisector_marks() {
    let [a, b, _] = abc(point![0.0, 0.0], point![4.0, 0.0], point![0.0, 3.0]);
    let ab = side(&a, &b);
    let bis = bisector(&ab);
    assert_eq!(bis.shape.name, "Perpendicular bisector of AB");
    assert!(bis.geometry.distance_to(&point![2.0, 5.0]) < 1e-12);
    let kinds: Vec<_> = bis.shape.marks.iter().map(|m| m.kind).collect();
    assert_eq!(kinds, [MarkKind::Tick, MarkKind::Tick, MarkKind::RightAngle]);
    assert_eq!(bis.shape.marks[0].at, point![1.0, 0.0]);
    assert_eq!(bis.shape.marks[1].at, point![3.0, 0.0]);
    assert_eq!(bis.shape.marks[2].at, point![2.0, 0.0]);
    assert!(bis.shape.marks.iter().all(|m| m.rotate == 0.0));
    assert!(Arc::ptr_eq(&bis.shape.parents[0], &ab.shape));
}

#[test]
fn angular_bisector_marks_depend_on_rightness() {
    let [a, b, c] = abc(point![0.0, 0.0], point![4.0, 0.0], point![0.0, 3.0]);
    let cab = angle(&c, &a, &b);
    let right = angular_bisector(&cab);
    assert_eq!(right.shape.name, "Angular bisector of CAB");
    assert_eq!(right.shape.marks.len(), 1);
    assert_eq!(right.shape.marks[0].kind, MarkKind::RightAngleTick);
    assert_eq!(right.shape.marks[0].at, point![0.0, 0.0]);

    let abc_angle = angle(&a, &b, &c);
    let acute = angular_bisector(&abc_angle);
    let kinds: Vec<_> = acute.shape.marks.iter().map(|m| m.kind).collect();
    assert_eq!(kinds, [MarkKind::AngleTick, MarkKind::AngleTick]);
    let sweep = abc_angle.geometry.measure();
    let gap = acute.shape.marks[1].rotate - acute.shape.marks[0].rotate;
    assert!((gap - sweep / 2.0).abs() < 1e-12);

    // a 60° margin turns the acute angle at B into a "nearly right" one
    let loose = Tolerance::default().with_angle_degrees(60.0);
    let ticked = angular_bisector_with(&abc_angle, &loose);
    assert_eq!(ticked.shape.marks[0].kind, MarkKind::RightAngleTick);
    assert!(abc_angle.geometry.measure().abs() < FRAC_PI_2);
}

#[test]
fn external_bisector_and_extended_side() {
    let [a, b, c] = abc(point![0.0, 0.0], point![4.0, 0.0], point![0.0, 3.0]);
    let cab = angle(&c, &a, &b);
    let ext = external_bisector(&cab);
    assert_eq!(ext.shape.name, "External bisector of CAB");
    assert!(ext.geometry.distance_to(&point![1.0, -1.0]) < 1e-12);
    assert!(ext.shape.marks.is_empty());

    let ab = side(&a, &b);
    let long = extended_side(&ab);
    assert_eq!(long.shape.name, "AB (extended)");
    assert_eq!(long.shape.kind(), ShapeKind::Line);
    assert!(long.geometry.distance_to(&point![-7.0, 0.0]) < 1e-12);
}

#[test]
fn serializes_kind_geometry_and_parent_labels() {
    let [a, b, _] = abc(point![0.0, 0.0], point![1.0, 0.0], point![0.0, 1.0]);
    let ab = side(&a, &b);
    let json = serde_json::to_value(&*ab.shape).unwrap();
    assert_eq!(json["type"], "side");
    assert_eq!(json["name"], "AB");
    assert_eq!(json["id"], "AB");
    assert_eq!(json["priority"], 1);
    assert_eq!(json["parents"], serde_json::json!(["A", "B"]));
    assert!(json["geometry"].is_object());

    let bis = bisector(&ab);
    let json = serde_json::to_value(&*bis.shape).unwrap();
    assert_eq!(json["type"], "line");
    assert!(json.get("id").is_none());
    assert_eq!(json["marks"][2]["kind"], "right-angle");
}
