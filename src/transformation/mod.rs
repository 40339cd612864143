//! Transformation of meshes: hole capping and plane slicing.

pub use self::cap::{cap, cap_with_tolerance, CapError, CapFill, CapReport};
pub use self::ear_clipping::triangulate_ear_clipping;
pub use self::slice::{slice_mesh, PlaneMarker, SliceError, SliceParameters, SliceReport};

mod cap;
mod ear_clipping;
mod slice;

#[cfg(feature = "wavefront")]
mod wavefront;
