//! Shapes supported by meshslice.

pub use self::plane::{euler_xyz_rotation, Plane};
pub use self::polymesh::{face_edges, Face, InvalidMesh, PolyMesh};

mod plane;
mod polymesh;
