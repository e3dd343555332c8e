use approx::assert_relative_eq;
use sat3d::math::{Point, Vector};
use sat3d::query::details::{contact_manifold_obb_sphere, contact_manifold_sphere_sphere};
use sat3d::query::{contact_manifold, ContactManifold, Intersects};
use sat3d::shape::{ColliderShape, Obb, Sphere};

use crate::utils::*;

#[test]
fn sphere_touching_box_corner() {
    let obb = Obb::axis_aligned(Point::origin(), Vector::repeat(1.0));
    let sphere = Sphere::new(Point::new(1.5, 1.5, 1.5), 1.0);
    let manifold = contact_manifold_obb_sphere(&obb, &sphere);

    assert!(manifold.colliding);
    assert_relative_eq!(manifold.normal, Vector::repeat(1.0).normalize());
    assert_eq!(manifold.points.len(), 1);

    let overlap = 1.0 - (3.0 * 0.25f64).sqrt();
    assert_relative_eq!(manifold.depth, overlap * 0.5, epsilon = 1.0e-9);
}

#[test]
fn sphere_manifold_agrees_with_boolean_test() {
    let mut rng = oorandom::Rand64::new(17);

    for _ in 0..1000 {
        let obb = rand_obb(&mut rng);
        let sphere = rand_sphere(&mut rng);
        assert_eq!(
            contact_manifold_obb_sphere(&obb, &sphere).colliding,
            sphere.intersects(&obb),
            "{obb:?} {sphere:?}"
        );

        let other = rand_sphere(&mut rng);
        assert_eq!(
            contact_manifold_sphere_sphere(&sphere, &other).colliding,
            sphere.intersects(&other)
        );
    }
}

#[test]
fn heterogeneous_colliders() {
    let colliders: [ColliderShape; 3] = [
        Sphere::new(Point::origin(), 1.0).into(),
        Obb::axis_aligned(Point::new(1.5, 0.0, 0.0), Vector::repeat(1.0)).into(),
        Sphere::new(Point::new(10.0, 0.0, 0.0), 1.0).into(),
    ];

    let m01 = contact_manifold(&colliders[0], &colliders[1]);
    let m10 = contact_manifold(&colliders[1], &colliders[0]);
    assert!(m01.colliding);
    assert_relative_eq!(m01.normal, Vector::x());
    assert_relative_eq!(m10.normal, -Vector::x());

    assert_eq!(contact_manifold(&colliders[0], &colliders[2]), ContactManifold::new());
    assert_eq!(contact_manifold(&colliders[1], &colliders[2]), ContactManifold::new());
}

#[test]
fn moving_a_collider() {
    let mut sphere: ColliderShape = Sphere::new(Point::origin(), 1.0).into();
    let obb: ColliderShape = Obb::axis_aligned(Point::new(5.0, 0.0, 0.0), Vector::repeat(1.0)).into();

    assert!(!contact_manifold(&sphere, &obb).colliding);
    sphere.set_center(Point::new(3.5, 0.0, 0.0));
    assert_eq!(sphere.center(), Point::new(3.5, 0.0, 0.0));
    assert!(contact_manifold(&sphere, &obb).colliding);
}
