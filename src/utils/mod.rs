//! Various unsorted geometrical and logical operators.

pub use self::ccw_face_normal::{ccw_polygon_normal, newell_normal};
pub use self::center::center;
pub use self::cleanup::remove_points;
pub use self::point_in_triangle::{corner_direction, is_point_in_triangle, Orientation};
pub use self::sorted_pair::SortedPair;
pub use self::wops::orthonormal_basis;

mod ccw_face_normal;
mod center;
mod cleanup;
pub mod hashmap;
pub mod point_in_triangle;
mod sorted_pair;
mod wops;
