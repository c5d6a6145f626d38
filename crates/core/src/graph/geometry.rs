//! Hit-testing geometry in world space

use super::node::Position;

/// Shortest distance from `point` to the segment `a`–`b`.
///
/// The point is projected onto the segment's supporting line and the
/// projection parameter is clamped to `[0, 1]`, so points beyond either end
/// measure to the nearer endpoint. A degenerate segment (`a == b`) measures
/// to `a`.
#[must_use]
pub fn point_segment_distance(point: Position, a: Position, b: Position) -> f64 {
    let vx = b.x - a.x;
    let vy = b.y - a.y;
    let wx = point.x - a.x;
    let wy = point.y - a.y;

    let along = vx.mul_add(wx, vy * wy);
    if along <= 0.0 {
        return point.distance_to(a);
    }

    let length_squared = vx.mul_add(vx, vy * vy);
    if length_squared <= along {
        return point.distance_to(b);
    }

    let t = along / length_squared;
    point.distance_to(Position::new(t.mul_add(vx, a.x), t.mul_add(vy, a.y)))
}
