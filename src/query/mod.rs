//! Non-persistent geometric queries.
//!
//! The main query of this module is the plane bisection of a polygon mesh:
//!
//! * [`query::bisect()`](bisect) splits every edge and face crossing a plane, optionally
//!   removes one side, and returns the boundary loops left on the plane.
//! * [`query::bisect_with_tolerance()`](bisect_with_tolerance) does the same with an explicit
//!   tolerance instead of one relative to the size of the mesh.

pub use self::split::{
    bisect, bisect_with_tolerance, segment_plane_intersection, vertex_distances, BisectError,
    Bisection, BoundaryLoop, Side, SideSelector, UnknownSideSelector, DEFAULT_RELATIVE_EPSILON,
};

mod split;
