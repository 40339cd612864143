use super::SliceParameters;
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Rotation, Vector};
use crate::shape::euler_xyz_rotation;

/// Describes the rectangle a host application may draw to show the cutting plane.
///
/// The rectangle lies in the local `XY` plane of `rotation`, centered at `center`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PlaneMarker {
    /// The center of the rectangle, on the cutting plane.
    pub center: Point<Real>,
    /// The orientation of the rectangle. Its local `+Z` axis is the plane normal.
    pub rotation: Rotation<Real>,
    /// The dimensions of the rectangle along its local `X` and `Y` axes.
    pub size: [Real; 2],
    /// Should the rectangle be displayed?
    pub visible: bool,
}

impl PlaneMarker {
    /// Sizes the marker for a mesh with the bounding box `mesh_aabb`.
    ///
    /// The rectangle covers the `X` and `Y` extents of the bounding box, multiplied by
    /// `params.plane_scale_factor`. An invalid bounding box (empty mesh) gives a
    /// zero-sized marker.
    pub fn new(params: &SliceParameters, mesh_aabb: &Aabb) -> Self {
        let size = if mesh_aabb.is_valid() {
            let extents = mesh_aabb.extents() * params.plane_scale_factor;
            [extents.x, extents.y]
        } else {
            [0.0; 2]
        };

        Self {
            center: params.plane_location,
            rotation: euler_xyz_rotation(&params.plane_rotation),
            size,
            visible: params.show_plane,
        }
    }

    /// The normal of the displayed plane.
    pub fn normal(&self) -> Vector<Real> {
        self.rotation * Vector::z()
    }

    /// The four corners of the rectangle, counter-clockwise when seen from the side the
    /// normal points to.
    pub fn corners(&self) -> [Point<Real>; 4] {
        let [hx, hy] = self.size.map(|s| s / 2.0);
        [(-hx, -hy), (hx, -hy), (hx, hy), (-hx, hy)]
            .map(|(x, y)| self.center + self.rotation * Vector::new(x, y, 0.0))
    }
}
