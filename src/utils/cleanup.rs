use crate::math::{Point, Real};

/// Removes from `points` every point for which `keep` is `false`, preserving the order of
/// the remaining points.
///
/// Returns the index remapping: `remap[i]` is the new index of the point formerly at index
/// `i`, or `u32::MAX` if that point was removed.
pub fn remove_points(points: &mut Vec<Point<Real>>, keep: &[bool]) -> Vec<u32> {
    debug_assert_eq!(points.len(), keep.len());
    let mut remap = vec![u32::MAX; points.len()];
    let mut next = 0;

    for (i, kept) in keep.iter().enumerate() {
        if *kept {
            points[next] = points[i];
            remap[i] = next as u32;
            next += 1;
        }
    }

    points.truncate(next);
    remap
}
