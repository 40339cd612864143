//! Ear-clipping triangulation of simple polygons, used to fill planar holes.
//! Based on <https://github.com/ivanfratric/polypartition>.

use crate::math::{Point2, Real};
use crate::utils::point_in_triangle::{corner_direction, is_point_in_triangle, Orientation};

#[derive(Copy, Clone, Default)]
struct Corner {
    /// Has this corner been clipped already?
    clipped: bool,
    is_ear: bool,
    /// The cosine of the corner angle. Sharper ears are clipped first.
    sharpness: Real,
    prev: usize,
    next: usize,
}

/// Recomputes the sharpness of the corner `idx` and checks whether it is an ear.
///
/// Returns `false` if the corner is degenerate (two coincident points) or if one of the
/// other points makes the point-in-triangle test ill-defined.
fn update_corner(idx: usize, corners: &mut [Corner], points: &[Point2<Real>]) -> bool {
    let Corner { prev, next, .. } = corners[idx];
    let (a, b, c) = (&points[prev], &points[idx], &points[next]);

    let sharpness = (a - b).normalize().dot(&(c - b).normalize());
    if sharpness.is_nan() {
        return false;
    }

    let mut well_defined = true;
    // A convex corner is an ear if no remaining point lies in the triangle it spans.
    let is_ear = corner_direction(a, b, c) == Orientation::Ccw
        && (0..points.len())
            .filter(|i| !corners[*i].clipped && *i != prev && *i != idx && *i != next)
            .all(|i| match is_point_in_triangle(&points[i], a, b, c) {
                Some(inside) => !inside,
                None => {
                    well_defined = false;
                    true
                }
            });

    corners[idx].sharpness = sharpness;
    corners[idx].is_ear = is_ear;
    well_defined
}

/// Triangulates a simple polygon given by its vertices in counter-clockwise order.
///
/// Returns the triangles as indices into `polygon`, each with the winding of the polygon.
/// Returns `None` if the polygon has fewer than 3 vertices, is clockwise, or is not
/// simple enough for ears to be found.
pub fn triangulate_ear_clipping(polygon: &[Point2<Real>]) -> Option<Vec<[u32; 3]>> {
    let n = polygon.len();

    if n < 3 {
        return None;
    }

    let mut corners: Vec<_> = (0..n)
        .map(|i| Corner {
            prev: (i + n - 1) % n,
            next: (i + 1) % n,
            ..Corner::default()
        })
        .collect();

    for i in 0..n {
        if !update_corner(i, &mut corners, polygon) {
            return None;
        }
    }

    let mut triangles = Vec::with_capacity(n - 2);

    for remaining in (4..=n).rev() {
        let (ear, _) = corners
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.clipped && c.is_ear)
            .max_by(|(_, c1), (_, c2)| c1.sharpness.total_cmp(&c2.sharpness))?;

        let Corner { prev, next, .. } = corners[ear];
        triangles.push([prev as u32, ear as u32, next as u32]);
        corners[ear].clipped = true;
        corners[prev].next = next;
        corners[next].prev = prev;

        // The last triangle is convex: no need to update its corners.
        if remaining > 4
            && !(update_corner(prev, &mut corners, polygon)
                && update_corner(next, &mut corners, polygon))
        {
            return None;
        }
    }

    let (last, corner) = corners.iter().enumerate().find(|(_, c)| !c.clipped)?;
    triangles.push([corner.prev as u32, last as u32, corner.next as u32]);

    Some(triangles)
}
