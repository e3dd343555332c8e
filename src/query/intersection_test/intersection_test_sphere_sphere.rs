use crate::shape::Sphere;

use super::impl_intersects;

/// Intersection test between two spheres.
#[inline]
pub fn intersection_test_sphere_sphere(s1: &Sphere, s2: &Sphere) -> bool {
    let r = s1.radius + s2.radius;
    na::distance_squared(&s1.center, &s2.center) <= r * r
}

impl_intersects!(Sphere, intersection_test_sphere_sphere);
