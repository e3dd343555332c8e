use sat3d::math::{Point, Real, Rotation, Vector};
use sat3d::na;
use sat3d::shape::{Aabb, Line, Obb, Plane, Sphere, Triangle};

pub fn rand_point(rng: &mut oorandom::Rand64, range: Real) -> Point<Real> {
    Point::new(
        (rng.rand_float() * 2.0 - 1.0) * range,
        (rng.rand_float() * 2.0 - 1.0) * range,
        (rng.rand_float() * 2.0 - 1.0) * range,
    )
}

pub fn rand_half_extents(rng: &mut oorandom::Rand64) -> Vector<Real> {
    Vector::from_fn(|_, _| 0.1 + rng.rand_float() * 2.0)
}

pub fn rand_rotation(rng: &mut oorandom::Rand64) -> Rotation<Real> {
    na::Unit::try_new(
        na::Quaternion::new(
            rng.rand_float() - 0.5,
            rng.rand_float() - 0.5,
            rng.rand_float() - 0.5,
            rng.rand_float() - 0.5,
        ),
        1.0e-5,
    )
    .unwrap_or(Rotation::identity())
}

pub fn rand_unit_vector(rng: &mut oorandom::Rand64) -> Vector<Real> {
    loop {
        let v = rand_point(rng, 1.0).coords;
        if let Some(v) = v.try_normalize(1.0e-3) {
            return v;
        }
    }
}

pub fn rand_sphere(rng: &mut oorandom::Rand64) -> Sphere {
    Sphere::new(rand_point(rng, 4.0), 0.1 + rng.rand_float() * 2.0)
}

pub fn rand_aabb(rng: &mut oorandom::Rand64) -> Aabb {
    Aabb::new(rand_point(rng, 4.0), rand_half_extents(rng))
}

pub fn rand_obb(rng: &mut oorandom::Rand64) -> Obb {
    Obb::new(rand_point(rng, 4.0), rand_half_extents(rng), rand_rotation(rng))
}

pub fn rand_plane(rng: &mut oorandom::Rand64) -> Plane {
    Plane::new(rand_unit_vector(rng), (rng.rand_float() * 2.0 - 1.0) * 4.0)
}

pub fn rand_line(rng: &mut oorandom::Rand64) -> Line {
    Line::new(rand_point(rng, 4.0), rand_point(rng, 4.0))
}

pub fn rand_triangle(rng: &mut oorandom::Rand64) -> Triangle {
    let center = rand_point(rng, 4.0);
    Triangle::new(
        center + rand_point(rng, 2.0).coords,
        center + rand_point(rng, 2.0).coords,
        center + rand_point(rng, 2.0).coords,
    )
}
