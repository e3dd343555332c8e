mod ray_cast;
mod shape_invariants;
mod sphere_contact;
mod utils;
