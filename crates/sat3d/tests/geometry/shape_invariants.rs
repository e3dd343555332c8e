use approx::assert_relative_eq;
use sat3d::math::{Point, Vector};
use sat3d::query::{Intersects, PointQuery};
use sat3d::shape::{Aabb, Line, Plane, ShapeError, Sphere, Triangle};

use crate::utils::*;

#[test]
fn aabb_min_max_round_trip() {
    let mut rng = oorandom::Rand64::new(3);

    for _ in 0..1000 {
        let a = rand_point(&mut rng, 10.0);
        let b = rand_point(&mut rng, 10.0);
        let mins = a.inf(&b);
        let maxs = a.sup(&b);
        let aabb = Aabb::from_min_max(mins, maxs);

        assert_relative_eq!(aabb.mins(), mins, epsilon = 1.0e-9);
        assert_relative_eq!(aabb.maxs(), maxs, epsilon = 1.0e-9);
    }
}

#[test]
fn aabb_validated_constructors() {
    let inverted = Aabb::try_from_min_max(Point::new(0.0, 1.0, 0.0), Point::new(1.0, 0.0, 1.0));
    assert_eq!(inverted, Err(ShapeError::InvertedBounds(1)));
    assert!(Aabb::try_new(Point::origin(), Vector::new(1.0, -1.0, 1.0)).is_err());
    assert!(Sphere::try_new(Point::origin(), -1.0).is_err());
    assert!(Plane::try_new(Vector::zeros(), 1.0).is_err());
}

#[test]
fn sphere_containment_is_monotonic_in_the_radius() {
    let mut rng = oorandom::Rand64::new(11);

    for _ in 0..1000 {
        let center = rand_point(&mut rng, 2.0);
        let r1 = rng.rand_float() * 3.0;
        let r2 = r1 + rng.rand_float() * 3.0;
        let small = Sphere::new(center, r1);
        let large = Sphere::new(center, r2);
        let pt = rand_point(&mut rng, 5.0);

        if small.contains_point(&pt) {
            assert!(large.contains_point(&pt));
        }
    }
}

#[test]
fn closest_points_lie_on_or_in_the_shape() {
    let mut rng = oorandom::Rand64::new(5);

    for _ in 0..500 {
        let pt = rand_point(&mut rng, 8.0);
        let aabb = rand_aabb(&mut rng);
        let obb = rand_obb(&mut rng);
        let sphere = rand_sphere(&mut rng);

        let on_aabb = aabb.closest_point(&pt);
        let on_obb = obb.closest_point(&pt);
        assert!(aabb.contains_point(&on_aabb));
        assert!(sat3d::query::point::obb_contains_point_with_tolerance(
            &obb, &on_obb, 1.0e-9
        ));
        assert_relative_eq!(
            na_distance(&sphere.closest_point(&pt), &sphere.center),
            sphere.radius,
            epsilon = 1.0e-9
        );

        // Projecting twice gives the same point.
        assert_eq!(aabb.closest_point(&on_aabb), on_aabb);
    }
}

#[test]
fn surfaces_contain_their_closest_points() {
    let mut rng = oorandom::Rand64::new(17);

    for _ in 0..1000 {
        let pt = rand_point(&mut rng, 8.0);
        let plane = rand_plane(&mut rng);
        assert!(plane.contains_point(&plane.closest_point(&pt)));

        let triangle = rand_triangle(&mut rng);

        // Nearly flat triangles have ill-conditioned barycentric coordinates.
        if triangle.area() < 0.05 {
            continue;
        }

        assert!(triangle.contains_point(&triangle.center()));
        assert!(triangle.contains_point(&triangle.closest_point(&pt)));

        for vertex in triangle.vertices() {
            assert!(triangle.contains_point(&vertex));
        }
    }
}

#[test]
fn point_projection_and_distance() {
    let aabb = Aabb::new(Point::origin(), Vector::repeat(1.0));

    let inside = aabb.project_point(&Point::new(0.5, 0.0, 0.0));
    assert!(inside.is_inside);
    assert_eq!(inside.point, Point::new(0.5, 0.0, 0.0));
    assert_eq!(aabb.distance_to_point(&Point::new(0.5, 0.0, 0.0)), 0.0);

    let outside = aabb.project_point(&Point::new(4.0, 0.0, 0.0));
    assert!(!outside.is_inside);
    assert_eq!(outside.point, Point::new(1.0, 0.0, 0.0));
    assert_relative_eq!(aabb.distance_to_point(&Point::new(4.0, 5.0, 0.0)), 5.0);

    let plane = Plane::new(Vector::z(), 1.0);
    assert_relative_eq!(plane.distance_to_point(&Point::new(3.0, 3.0, -2.0)), 3.0);
}

#[test]
fn aabb_extents_and_triangle_from_array() {
    let aabb = Aabb::from_min_max(Point::new(-1.0, 0.0, 2.0), Point::new(3.0, 1.0, 5.0));
    assert_eq!(aabb.extents(), Vector::new(4.0, 1.0, 3.0));

    let pts = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    ];
    let triangle = Triangle::from_array(pts);
    assert_eq!(triangle, Triangle::new(pts[0], pts[1], pts[2]));
    assert_eq!(triangle.vertices(), pts);
}

fn na_distance(a: &Point<f64>, b: &Point<f64>) -> f64 {
    sat3d::na::distance(a, b)
}

#[test]
fn plane_signed_distance() {
    let plane = Plane::new(Vector::y(), 5.0);

    assert_eq!(plane.signed_distance(&Point::new(0.0, 5.0, 0.0)), 0.0);
    assert_eq!(plane.signed_distance(&Point::new(0.0, 10.0, 0.0)), 5.0);
    assert_eq!(plane.signed_distance(&Point::new(3.0, 1.0, -2.0)), -4.0);
    assert!(plane.contains_point(&Point::new(7.0, 5.0, -3.0)));
    assert_relative_eq!(plane.closest_point(&Point::new(1.0, 8.0, 2.0)), Point::new(1.0, 5.0, 2.0));
}

#[test]
fn triangle_point_queries() {
    let triangle = Triangle::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(2.0, 0.0, 0.0),
        Point::new(0.0, 2.0, 0.0),
    );

    assert!(triangle.contains_point(&Point::new(0.5, 0.5, 0.0)));
    assert!(!triangle.contains_point(&Point::new(0.5, 0.5, 0.1)));
    assert!(!triangle.contains_point(&Point::new(2.0, 2.0, 0.0)));

    assert_relative_eq!(
        triangle.closest_point(&Point::new(0.5, 0.5, 3.0)),
        Point::new(0.5, 0.5, 0.0)
    );
    assert_relative_eq!(
        triangle.closest_point(&Point::new(3.0, 3.0, 0.0)),
        Point::new(1.0, 1.0, 0.0)
    );
}

#[test]
fn line_queries() {
    let line = Line::new(Point::new(-2.0, 0.0, 0.0), Point::new(2.0, 0.0, 0.0));

    assert!(line.contains_point(&Point::new(1.0, 0.0, 0.0)));
    assert!(!line.contains_point(&Point::new(3.0, 0.0, 0.0)));
    assert_eq!(line.closest_point(&Point::new(5.0, 1.0, 0.0)), Point::new(2.0, 0.0, 0.0));

    assert!(line.intersects(&Sphere::new(Point::new(0.0, 0.5, 0.0), 1.0)));
    assert!(!line.intersects(&Sphere::new(Point::new(0.0, 2.0, 0.0), 1.0)));
    assert!(line.intersects(&Aabb::new(Point::new(1.5, 0.0, 0.0), Vector::repeat(1.0))));
    assert!(!line.intersects(&Aabb::new(Point::new(4.0, 0.0, 0.0), Vector::repeat(1.0))));
    assert!(line.intersects(&Plane::new(Vector::x(), 1.0)));
    assert!(!line.intersects(&Plane::new(Vector::x(), 3.0)));
}
