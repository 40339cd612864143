//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, UnitVector, Vector};

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is defined by its minimum and maximum corners. The slicing code uses it to
/// derive tolerances relative to the size of a mesh, to reject planes that cannot touch a
/// mesh, and to size the plane marker drawn by a host application.
///
/// # Structure
///
/// - **mins**: The point with the smallest coordinates on each axis
/// - **maxs**: The point with the largest coordinates on each axis
/// - **Invariant**: `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y` and `mins.z ≤ maxs.z`, unless the
///   AABB was built with [`Aabb::new_invalid`] (e.g. from an empty point cloud).
///
/// # Example
///
/// ```rust
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use meshslice3d::bounding_volume::Aabb;
/// use nalgebra::Point3;
///
/// let aabb = Aabb::from_points(vec![
///     Point3::new(1.0, 2.0, 3.0),
///     Point3::new(-1.0, 4.0, 2.0),
///     Point3::new(0.0, 0.0, 5.0),
/// ]);
///
/// assert_eq!(aabb.mins, Point3::new(-1.0, 0.0, 2.0));
/// assert_eq!(aabb.maxs, Point3::new(1.0, 4.0, 5.0));
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// An AABB spanning from `mins` to `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// The AABB of an empty point cloud: `mins` at `+Real::MAX`, `maxs` at `-Real::MAX`.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
        )
    }

    /// Creates a new AABB from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates a new AABB that tightly encloses a set of points (references).
    pub fn from_points_ref<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        super::aabb_utils::local_point_cloud_aabb(pts.into_iter().copied())
    }

    /// Creates a new AABB that tightly encloses a set of points (values).
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        super::aabb_utils::local_point_cloud_aabb(pts)
    }

    /// Does this AABB enclose at least one point?
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.mins.iter().zip(self.maxs.iter()).all(|(lo, hi)| lo <= hi)
    }

    /// The point halfway between `mins` and `maxs`.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        self.mins + self.half_extents()
    }

    /// Half the size of this AABB along each axis.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        self.extents() / 2.0
    }

    /// The size of this AABB along each axis.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The length of the diagonal of this `Aabb`.
    ///
    /// Returns zero for an invalid `Aabb`.
    #[inline]
    pub fn diagonal_length(&self) -> Real {
        if self.is_valid() {
            self.extents().norm()
        } else {
            0.0
        }
    }

    /// Projects every point of `Aabb` on an arbitrary axis.
    ///
    /// Returns the interval `(min, max)` covered by the projections.
    pub fn project_on_axis(&self, axis: &UnitVector<Real>) -> (Real, Real) {
        let shift = self.half_extents().dot(&axis.abs());
        let center = self.center().coords.dot(axis);
        (center - shift, center + shift)
    }
}
