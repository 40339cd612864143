pub use self::split::{
    BisectError, Bisection, BoundaryLoop, Side, SideSelector, UnknownSideSelector,
    DEFAULT_RELATIVE_EPSILON,
};
pub use self::split_polymesh::{bisect, bisect_with_tolerance, vertex_distances};
pub use self::split_segment::segment_plane_intersection;

mod boundary_loops;
mod split;
mod split_polygon;
mod split_polymesh;
mod split_segment;
