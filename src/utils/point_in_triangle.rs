//! Function to check if a point is inside a triangle and related functions.
//!
//! These operate on 2D points, i.e., on polygons already projected on their plane.

use crate::math::{Point2, Real};

#[derive(Eq, PartialEq, Debug, Copy, Clone)]
/// The orientation or winding direction of a corner or polygon.
pub enum Orientation {
    /// Counter-clockwise
    Ccw,
    /// Clockwise
    Cw,
    /// Neither (a straight line)
    None,
}

/// Returns the direction of a line through `p1`, `p2` and `p3`.
///
/// Counter-clockwise example:
/// o p1
///  .        o p3
///   .     .
///    .  .
///     o p2
///
/// Clockwise example:
///     o p2
///    .  .
///   .     .
///  .        o p3
/// o p1
///
/// A NaN cross product is reported as [`Orientation::None`].
pub fn corner_direction(p1: &Point2<Real>, p2: &Point2<Real>, p3: &Point2<Real>) -> Orientation {
    let v1 = p1 - p2;
    let v2 = p3 - p2;
    let cross: Real = v1.perp(&v2);

    match cross.partial_cmp(&0.0) {
        Some(core::cmp::Ordering::Less) => Orientation::Ccw,
        Some(core::cmp::Ordering::Greater) => Orientation::Cw,
        Some(core::cmp::Ordering::Equal) | None => Orientation::None,
    }
}

/// Tests whether `p` lies inside, or on the boundary of, the triangle `v1 v2 v3`.
///
/// Works for both windings. Returns `None` if `p` and the three corners are all aligned,
/// in which case the answer is meaningless.
pub fn is_point_in_triangle(
    p: &Point2<Real>,
    v1: &Point2<Real>,
    v2: &Point2<Real>,
    v3: &Point2<Real>,
) -> Option<bool> {
    let turns = [
        corner_direction(p, v1, v2),
        corner_direction(p, v2, v3),
        corner_direction(p, v3, v1),
    ];

    if turns.iter().all(|t| *t == Orientation::None) {
        return None;
    }

    let mixed = turns.contains(&Orientation::Cw) && turns.contains(&Orientation::Ccw);
    Some(!mixed)
}
