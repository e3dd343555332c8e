use approx::assert_relative_eq;
use sat3d::math::{Point, Real, Rotation, Vector};
use sat3d::query::{PointQuery, Ray, RayCast};
use sat3d::shape::{Aabb, Obb, Plane, Sphere, Triangle};

use crate::utils::*;

#[test]
fn ray_from_below_hits_unit_shapes() {
    let ray = Ray::new(Point::new(0.0, 0.0, -10.0), Vector::z());

    let sphere = Sphere::unit();
    let toi = sphere.cast_ray(&ray).expect("the ray points at the sphere");
    assert_relative_eq!(toi, 9.0, epsilon = 1.0e-9);

    let aabb = Aabb::new(Point::origin(), Vector::repeat(1.0));
    let toi = aabb.cast_ray(&ray).expect("the ray points at the box");
    assert_relative_eq!(toi, 9.0, epsilon = 1.0e-9);

    let obb = Obb::axis_aligned(Point::origin(), Vector::repeat(1.0));
    let toi = obb.cast_ray(&ray).expect("the ray points at the box");
    assert_relative_eq!(toi, 9.0, epsilon = 1.0e-9);
}

#[test]
fn ray_missing_shapes_returns_none() {
    let ray = Ray::new(Point::new(0.0, 0.0, -10.0), Vector::z());

    let far_sphere = Sphere::new(Point::new(100.0, 0.0, 0.0), 1.0);
    assert_eq!(far_sphere.cast_ray(&ray), None);

    let away = Ray::new(Point::new(0.0, 0.0, -10.0), -Vector::z());
    let aabb = Aabb::new(Point::origin(), Vector::repeat(1.0));
    assert_eq!(aabb.cast_ray(&away), None);
    assert_eq!(Sphere::unit().cast_ray(&away), None);
    assert!(!aabb.intersects_ray(&away));
}

#[test]
fn ray_starting_inside_reports_the_exit_point() {
    let ray = Ray::new(Point::new(0.5, 0.0, 0.0), Vector::x());
    assert_relative_eq!(Sphere::unit().cast_ray(&ray).unwrap(), 0.5);

    let aabb = Aabb::new(Point::origin(), Vector::repeat(1.0));
    assert_relative_eq!(aabb.cast_ray(&ray).unwrap(), 0.5);

    let obb = Obb::axis_aligned(Point::origin(), Vector::repeat(1.0));
    assert_relative_eq!(obb.cast_ray(&ray).unwrap(), 0.5);
}

#[test]
fn ray_parallel_to_aabb_slab() {
    // The direction has zero x and y components.
    let aabb = Aabb::new(Point::origin(), Vector::repeat(1.0));
    let inside_slab = Ray::new(Point::new(0.5, -0.5, -5.0), Vector::z());
    let outside_slab = Ray::new(Point::new(1.5, 0.0, -5.0), Vector::z());

    assert_relative_eq!(aabb.cast_ray(&inside_slab).unwrap(), 4.0, epsilon = 1.0e-9);
    assert_eq!(aabb.cast_ray(&outside_slab), None);
}

#[test]
fn ray_parallel_to_rotated_obb_faces() {
    // Rotated about z, so rays along z are parallel to the first two face pairs.
    let obb = Obb::new(
        Point::origin(),
        Vector::repeat(1.0),
        Rotation::from_axis_angle(&Vector::z_axis(), core::f64::consts::FRAC_PI_4),
    );

    // (2, 0) is outside of the rotated square, between the slabs of neither axis.
    let outside_slab = Ray::new(Point::new(2.0, 0.0, -5.0), Vector::z());
    assert_eq!(obb.cast_ray(&outside_slab), None);

    let inside_slab = Ray::new(Point::new(0.5, 0.0, -5.0), Vector::z());
    assert_relative_eq!(obb.cast_ray(&inside_slab).unwrap(), 4.0, epsilon = 1.0e-9);
    assert_relative_eq!(
        obb.cast_ray_and_get_point(&inside_slab).unwrap(),
        Point::new(0.5, 0.0, -1.0),
        epsilon = 1.0e-9
    );

    let away = Ray::new(Point::new(0.5, 0.0, -5.0), -Vector::z());
    assert_eq!(obb.cast_ray(&away), None);
    assert!(!obb.intersects_ray(&away));

    // Moving the hitting ray sideways out of the box makes it miss.
    let shifted = inside_slab.translate_by(Vector::new(1.5, 0.0, 0.0));
    assert_eq!(shifted.origin, Point::new(2.0, 0.0, -5.0));
    assert_eq!(shifted.dir(), inside_slab.dir());
    assert_eq!(obb.cast_ray(&shifted), None);
}

#[test]
fn ray_plane_and_triangle() {
    let plane = Plane::new(Vector::y(), 2.0);
    let down = Ray::new(Point::new(1.0, 5.0, 1.0), -Vector::y());
    let up = Ray::new(Point::new(1.0, 5.0, 1.0), Vector::y());

    assert_relative_eq!(plane.cast_ray(&down).unwrap(), 3.0);
    assert_eq!(plane.cast_ray(&up), None);

    let triangle = Triangle::new(
        Point::new(0.0, 2.0, 0.0),
        Point::new(0.0, 2.0, 4.0),
        Point::new(4.0, 2.0, 0.0),
    );
    assert_relative_eq!(triangle.cast_ray(&down).unwrap(), 3.0);
    // Triangles are hit from both sides.
    let from_below = Ray::new(Point::new(1.0, -1.0, 1.0), Vector::y());
    assert_relative_eq!(triangle.cast_ray(&from_below).unwrap(), 3.0);

    let beside = Ray::new(Point::new(3.0, 5.0, 3.0), -Vector::y());
    assert_eq!(triangle.cast_ray(&beside), None);
}

fn check_entry_point<S: RayCast + PointQuery>(shape: &S, rng: &mut oorandom::Rand64) {
    let origin = Point::from(rand_unit_vector(rng) * 10.0);
    let target = rand_point(rng, 0.05);
    let ray = Ray::new(origin, target - origin);

    let toi: Real = shape
        .cast_ray(&ray)
        .unwrap_or_else(|| panic!("Ray {ray:?} aimed at the center did not hit"));
    let hit = ray.point_at(toi);

    assert!(shape.contains_point(&(hit + ray.dir() * 1.0e-3)));
    assert!(!shape.contains_point(&(hit - ray.dir() * 1.0e-3)));

    // Casting again from just before the hit point finds the same surface.
    let closer = Ray::new(hit - ray.dir() * 0.5, *ray.dir());
    assert_relative_eq!(shape.cast_ray(&closer).unwrap(), 0.5, epsilon = 1.0e-6);
}

#[test]
fn random_rays_enter_boxes_and_spheres() {
    let mut rng = oorandom::Rand64::new(42);

    for _ in 0..1000 {
        let he = rand_half_extents(&mut rng);
        let obb = Obb::new(Point::origin(), he, rand_rotation(&mut rng));
        let aabb = Aabb::new(Point::origin(), he);
        let sphere = Sphere::new(Point::origin(), he.x);

        check_entry_point(&obb, &mut rng);
        check_entry_point(&aabb, &mut rng);
        check_entry_point(&sphere, &mut rng);
    }
}
