use geo::{EuclideanDistance, Rotate};

use crate::{Point, Quadrilateral};

/// Rotates `point` about `origin` by `degrees` (standard 2D rotation).
pub(crate) fn rotate_about(point: Point, origin: Point, degrees: f32) -> Point {
    point.rotate_around_point(degrees, origin)
}

/// Axis-aligned box of the given size centered on `center`.
pub(crate) fn axis_box(center: Point, width: f32, height: f32) -> Quadrilateral {
    let x1 = center.x() - width / 2.0;
    let y1 = center.y() - height / 2.0;
    let x2 = center.x() + width / 2.0;
    let y2 = center.y() + height / 2.0;
    Quadrilateral::new(
        Point::new(x1, y1),
        Point::new(x2, y1),
        Point::new(x2, y2),
        Point::new(x1, y2),
    )
}

pub(crate) fn distance(a: Point, b: Point) -> f32 {
    a.euclidean_distance(&b)
}

/// Bearing from `a` to `b` in radians, as `atan2` reports it.
pub(crate) fn bearing(a: Point, b: Point) -> f32 {
    (b.y() - a.y()).atan2(b.x() - a.x())
}
