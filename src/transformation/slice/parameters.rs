use super::SliceError;
use crate::math::{Point, Real, Vector};
use crate::query::SideSelector;
use crate::shape::Plane;
use crate::transformation::CapFill;

/// Parameters of the [`slice_mesh`](crate::transformation::slice_mesh) operation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(default))]
pub struct SliceParameters {
    /// Which side of the plane, if any, is removed.
    pub side: SideSelector,
    /// Fill the holes left on the plane.
    pub cap_holes: bool,
    /// How holes are filled when `cap_holes` is set.
    pub cap_fill: CapFill,
    /// Should a host display the cutting plane?
    pub show_plane: bool,
    /// A point of the cutting plane.
    pub plane_location: Point<Real>,
    /// Orientation of the cutting plane, as Euler angles in radians applied in `XYZ` order
    /// to the `+Z` axis.
    pub plane_rotation: Vector<Real>,
    /// Size of the displayed plane relative to the mesh bounding box.
    pub plane_scale_factor: Real,
    /// Tolerance for on-plane vertices. Relative to the mesh size if `None`.
    pub epsilon: Option<Real>,
}

impl Default for SliceParameters {
    fn default() -> Self {
        Self {
            side: SideSelector::KeepBoth,
            cap_holes: true,
            cap_fill: CapFill::Polygon,
            show_plane: true,
            plane_location: Point::origin(),
            plane_rotation: Vector::zeros(),
            plane_scale_factor: 1.1,
            epsilon: None,
        }
    }
}

impl SliceParameters {
    /// The cutting plane described by `plane_location` and `plane_rotation`.
    pub fn plane(&self) -> Plane {
        Plane::from_pose(self.plane_location, self.plane_rotation)
    }

    /// Checks that every parameter has a usable value.
    pub fn validate(&self) -> Result<(), SliceError> {
        if !self.plane_location.iter().all(|x| x.is_finite()) {
            return Err(SliceError::InvalidParameter {
                name: "plane_location",
                reason: "coordinates must be finite",
            });
        }

        if !self.plane_rotation.iter().all(|x| x.is_finite()) {
            return Err(SliceError::InvalidParameter {
                name: "plane_rotation",
                reason: "angles must be finite",
            });
        }

        if !self.plane_scale_factor.is_finite() || self.plane_scale_factor < 0.0 {
            return Err(SliceError::InvalidParameter {
                name: "plane_scale_factor",
                reason: "must be finite and non-negative",
            });
        }

        if let Some(eps) = self.epsilon {
            if !eps.is_finite() || eps < 0.0 {
                return Err(SliceError::InvalidParameter {
                    name: "epsilon",
                    reason: "must be finite and non-negative",
                });
            }
        }

        Ok(())
    }
}
