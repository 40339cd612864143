//! Plane slicing of polygon meshes: bisection followed by optional capping.

pub use self::parameters::SliceParameters;
pub use self::plane_marker::PlaneMarker;
pub use self::slice_error::SliceError;
pub use self::slice_mesh::{slice_mesh, SliceReport};

mod parameters;
mod plane_marker;
mod slice_error;
mod slice_mesh;
