//! Intersection tests between pairs of shapes.

pub use self::intersection_test::Intersects;
use self::intersection_test::impl_intersects;
pub use self::intersection_test_box_box::{
    intersection_test_aabb_aabb, intersection_test_aabb_obb, intersection_test_box_box,
    intersection_test_obb_obb,
};
pub use self::intersection_test_line::{
    intersection_test_line_aabb, intersection_test_line_obb, intersection_test_line_plane,
    intersection_test_line_sphere, intersection_test_line_triangle,
};
pub use self::intersection_test_plane::{
    intersection_test_aabb_plane, intersection_test_obb_plane, intersection_test_plane_box,
    intersection_test_plane_plane, intersection_test_sphere_plane,
    intersection_test_triangle_plane,
};
pub use self::intersection_test_sphere_point_query::{
    intersection_test_sphere_aabb, intersection_test_sphere_obb,
    intersection_test_sphere_point_query, intersection_test_sphere_triangle,
};
pub use self::intersection_test_sphere_sphere::intersection_test_sphere_sphere;
pub use self::intersection_test_triangle::{
    intersection_test_triangle_aabb, intersection_test_triangle_obb,
    intersection_test_triangle_triangle,
};

mod intersection_test_box_box;
mod intersection_test_line;
mod intersection_test_plane;
mod intersection_test_sphere_point_query;
mod intersection_test_sphere_sphere;
mod intersection_test_triangle;
