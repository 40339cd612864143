use crate::math::{Point, Real};

/// Intersects the segment `[a, b]` with a plane, given the signed distances of both endpoints
/// to that plane.
///
/// Returns the intersection point together with its barycentric coordinate `t` along the
/// segment (`0` at `a`, `1` at `b`). Returns `None` if both endpoints are on the same side
/// of the plane, or if the segment is parallel to it.
pub fn segment_plane_intersection(
    a: &Point<Real>,
    b: &Point<Real>,
    dist_a: Real,
    dist_b: Real,
) -> Option<(Point<Real>, Real)> {
    let denom = dist_a - dist_b;

    if denom == 0.0 || dist_a * dist_b > 0.0 {
        return None;
    }

    let bcoord = dist_a / denom;

    if !(0.0..=1.0).contains(&bcoord) {
        return None;
    }

    Some((a + (b - a) * bcoord, bcoord))
}
