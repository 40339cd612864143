use crate::math::*;

/// Computes the area-weighted normal of a counter-clock-wise polygon with Newell's method.
///
/// The polygon doesn't have to be planar nor convex: the result is the normal of the
/// best-fitting plane, and its norm is twice the area of the polygon projected on that
/// plane. Returns a zero vector for fewer than 3 points.
pub fn newell_normal<'a, I>(pts: I) -> Vector<Real>
where
    I: IntoIterator<Item = &'a Point<Real>>,
    I::IntoIter: Clone,
{
    let it = pts.into_iter();
    let mut normal = Vector::zeros();

    let Some(first) = it.clone().next() else {
        return normal;
    };

    let nexts = it.clone().skip(1).chain(core::iter::once(first));
    for (a, b) in it.zip(nexts) {
        normal.x += (a.y - b.y) * (a.z + b.z);
        normal.y += (a.z - b.z) * (a.x + b.x);
        normal.z += (a.x - b.x) * (a.y + b.y);
    }

    normal
}

/// Computes the unit normal of a counter-clock-wise polygon with Newell's method.
///
/// Returns `None` if the polygon is degenerate.
pub fn ccw_polygon_normal<'a, I>(pts: I) -> Option<UnitVector<Real>>
where
    I: IntoIterator<Item = &'a Point<Real>>,
    I::IntoIter: Clone,
{
    UnitVector::try_new(newell_normal(pts), DEFAULT_EPSILON)
}
