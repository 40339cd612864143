//! Oriented cutting plane.
use crate::math::{Point, Real, Rotation, UnitVector, Vector, DEFAULT_EPSILON};

/// An oriented plane, given by a point and a normal.
///
/// The plane splits the space into two open half-spaces: the *outer* one, on the side the
/// normal points to, and the *inner* one, on the opposite side.
///
/// The normal doesn't have to be normalized: operations that need a unit normal normalize
/// it first and reject planes whose normal is (close to) zero.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Plane {
    /// A point on the plane.
    pub point: Point<Real>,
    /// The normal of the plane, pointing toward its outer half-space.
    pub normal: Vector<Real>,
}

impl Plane {
    /// Builds a new plane from a point and a normal.
    #[inline]
    pub fn new(point: Point<Real>, normal: Vector<Real>) -> Self {
        Self { point, normal }
    }

    /// Builds the plane obtained by rotating the `XY` plane (normal `+Z`) with the given
    /// Euler angles, then moving it to `location`.
    ///
    /// The angles are in radians, applied in `XYZ` order: first around `X`, then `Y`,
    /// then `Z`, all around the fixed world axes.
    pub fn from_pose(location: Point<Real>, euler_xyz: Vector<Real>) -> Self {
        let rotation = euler_xyz_rotation(&euler_xyz);
        Self::new(location, rotation * Vector::z())
    }

    /// The unit normal of this plane, or `None` if its norm is smaller than `eps`.
    #[inline]
    pub fn unit_normal(&self, eps: Real) -> Option<UnitVector<Real>> {
        UnitVector::try_new(self.normal, eps)
    }

    /// Returns a copy of this plane with a unit normal, or `None` if its normal is
    /// degenerate.
    pub fn normalized(&self) -> Option<Self> {
        self.unit_normal(DEFAULT_EPSILON)
            .map(|n| Self::new(self.point, n.into_inner()))
    }

    /// The signed distance from `pt` to this plane, scaled by the norm of `self.normal`.
    ///
    /// Positive on the outer side, negative on the inner side.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        (pt - self.point).dot(&self.normal)
    }

    /// Projects `pt` orthogonally on this plane.
    ///
    /// The normal of `self` must be normalized.
    #[inline]
    pub fn project_point(&self, pt: &Point<Real>) -> Point<Real> {
        pt - self.normal * self.signed_distance(pt)
    }

    /// The same plane, with a flipped orientation.
    #[inline]
    pub fn flipped(&self) -> Self {
        Self::new(self.point, -self.normal)
    }
}

/// The rotation described by Euler angles (in radians) applied in `XYZ` order around the
/// fixed world axes.
pub fn euler_xyz_rotation(angles: &Vector<Real>) -> Rotation<Real> {
    // nalgebra applies roll (X), then pitch (Y), then yaw (Z).
    Rotation::from_euler_angles(angles.x, angles.y, angles.z)
}
