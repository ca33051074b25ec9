//! Seeded random generators shared by the integration tests.
#![allow(dead_code)]

use std::f64::consts::{FRAC_PI_2, PI};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rotalis::conversion::{quaternion_from_axis_angle, rotation_matrix_from_axis_angle};
use rotalis::math::{Point3, Vector3};
use rotalis::{
    AffineTransform, AxisAngle, Quaternion, QuaternionBasedTransform, RigidBodyTransform,
    RotationMatrix, YawPitchRoll,
};

pub const ITERATIONS: usize = 100;

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn vector(rng: &mut StdRng, max_abs: f64) -> Vector3 {
    Vector3::new(
        rng.random_range(-max_abs..max_abs),
        rng.random_range(-max_abs..max_abs),
        rng.random_range(-max_abs..max_abs),
    )
}

pub fn point(rng: &mut StdRng) -> Point3 {
    Point3::from(vector(rng, 10.0))
}

/// Axis-angle with a non-unit axis and an angle in `[-2π, 2π)`.
pub fn axis_angle(rng: &mut StdRng) -> AxisAngle {
    loop {
        let axis = vector(rng, 3.0);
        if axis.norm() > 1e-3 {
            return AxisAngle::from_axis(&axis, rng.random_range(-2.0 * PI..2.0 * PI));
        }
    }
}

pub fn quaternion(rng: &mut StdRng) -> Quaternion {
    quaternion_from_axis_angle(&axis_angle(rng))
}

pub fn rotation_matrix(rng: &mut StdRng) -> RotationMatrix {
    rotation_matrix_from_axis_angle(&axis_angle(rng))
}

pub fn yaw_pitch_roll(rng: &mut StdRng) -> YawPitchRoll {
    YawPitchRoll::new(
        rng.random_range(-PI..PI),
        rng.random_range(-FRAC_PI_2..FRAC_PI_2),
        rng.random_range(-PI..PI),
    )
}

pub fn rigid_body_transform(rng: &mut StdRng) -> RigidBodyTransform {
    RigidBodyTransform::new(rotation_matrix(rng), vector(rng, 5.0))
}

pub fn quaternion_based_transform(rng: &mut StdRng) -> QuaternionBasedTransform {
    QuaternionBasedTransform::new(quaternion(rng), vector(rng, 5.0))
}

pub fn affine_transform(rng: &mut StdRng) -> AffineTransform {
    let scale = Vector3::new(
        rng.random_range(0.2..4.0),
        rng.random_range(0.2..4.0),
        rng.random_range(0.2..4.0),
    );
    AffineTransform::new(rotation_matrix(rng), scale, vector(rng, 5.0))
        .unwrap_or_else(|e| panic!("generated scale must be positive: {e}"))
}
