use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};

/// Computes the AABB of a set of points.
///
/// Returns an invalid AABB (see [`Aabb::new_invalid`]) if the iterator is empty.
pub fn local_point_cloud_aabb<I>(pts: I) -> Aabb
where
    I: IntoIterator<Item = Point<Real>>,
{
    let mut it = pts.into_iter();

    let Some(p0) = it.next() else {
        return Aabb::new_invalid();
    };
    let mut min: Point<Real> = p0;
    let mut max: Point<Real> = p0;

    for pt in it {
        min = min.inf(&pt);
        max = max.sup(&pt);
    }

    Aabb::new(min, max)
}
