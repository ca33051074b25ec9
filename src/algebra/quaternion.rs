//! Quaternion algebra and the quaternion bridge shared by every
//! cross-representation composition.
use crate::conversion::rotation_matrix_from_quaternion;
use crate::error::{OrientationError, Result};
use crate::math::{norm3, norm_squared4, Matrix3, Vector2, Vector3, Vector4, ZERO_EPS};
use crate::orientation::{Orientation, Quaternion, RotationMatrix};

use super::rotation_matrix;

/// Hamilton product `q1 * q2`, each operand optionally conjugated first.
///
/// This is the single product routine every bridge goes through.
#[must_use]
pub fn multiply(q1: &Quaternion, inverse1: bool, q2: &Quaternion, inverse2: bool) -> Quaternion {
    let sign1 = if inverse1 { -1.0 } else { 1.0 };
    let sign2 = if inverse2 { -1.0 } else { 1.0 };
    let (x1, y1, z1, s1) = (sign1 * q1.x, sign1 * q1.y, sign1 * q1.z, q1.s);
    let (x2, y2, z2, s2) = (sign2 * q2.x, sign2 * q2.y, sign2 * q2.z, q2.s);

    Quaternion::new_unchecked(
        s1 * x2 + x1 * s2 + y1 * z2 - z1 * y2,
        s1 * y2 - x1 * z2 + y1 * s2 + z1 * x2,
        s1 * z2 + x1 * y2 - y1 * x2 + z1 * s2,
        s1 * s2 - x1 * x2 - y1 * y2 - z1 * z2,
    )
    .normalized()
}

/// Composes two orientations of any representation in quaternion coordinates.
#[must_use]
pub fn multiply_orientations(
    o1: &Orientation,
    inverse1: bool,
    o2: &Orientation,
    inverse2: bool,
) -> Quaternion {
    multiply(
        &o1.to_quaternion_coordinates(),
        inverse1,
        &o2.to_quaternion_coordinates(),
        inverse2,
    )
}

/// Rotates `vector` by `quaternion`.
///
/// Uses `v' = v + 2 (s (q × v) + q × (q × v)) / |q|²`; a quaternion with a norm
/// below `1e-12` leaves the vector unchanged.
#[must_use]
pub fn transform(quaternion: &Quaternion, vector: &Vector3) -> Vector3 {
    rotate(quaternion, false, vector)
}

/// Rotates `vector` by the conjugate of `quaternion`.
#[must_use]
pub fn inverse_transform(quaternion: &Quaternion, vector: &Vector3) -> Vector3 {
    rotate(quaternion, true, vector)
}

fn rotate(q: &Quaternion, conjugate: bool, v: &Vector3) -> Vector3 {
    let norm_squared = norm_squared4(q.x, q.y, q.z, q.s);
    if norm_squared < ZERO_EPS * ZERO_EPS {
        return *v;
    }
    let sign = if conjugate { -1.0 } else { 1.0 };
    let (qx, qy, qz) = (sign * q.x, sign * q.y, sign * q.z);
    let k = 2.0 / norm_squared;

    let cx = qy * v.z - qz * v.y;
    let cy = qz * v.x - qx * v.z;
    let cz = qx * v.y - qy * v.x;

    let ccx = qy * cz - qz * cy;
    let ccy = qz * cx - qx * cz;
    let ccz = qx * cy - qy * cx;

    Vector3::new(
        v.x + k * (q.s * cx + ccx),
        v.y + k * (q.s * cy + ccy),
        v.z + k * (q.s * cz + ccz),
    )
}

/// Rotates a 2D vector lying in the XY-plane.
///
/// # Errors
///
/// With `check_if_transform_in_xy_plane`, returns
/// [`OrientationError::NotA2DTransform`] if the quaternion is not a pure
/// rotation about the Z-axis.
pub fn transform_vector2(
    quaternion: &Quaternion,
    vector: &Vector2,
    check_if_transform_in_xy_plane: bool,
) -> Result<Vector2> {
    check_2d(quaternion, check_if_transform_in_xy_plane)?;
    let rotated = transform(quaternion, &Vector3::new(vector.x, vector.y, 0.0));
    Ok(Vector2::new(rotated.x, rotated.y))
}

/// Inverse of [`transform_vector2`].
///
/// # Errors
///
/// Same as [`transform_vector2`].
pub fn inverse_transform_vector2(
    quaternion: &Quaternion,
    vector: &Vector2,
    check_if_transform_in_xy_plane: bool,
) -> Result<Vector2> {
    check_2d(quaternion, check_if_transform_in_xy_plane)?;
    let rotated = inverse_transform(quaternion, &Vector3::new(vector.x, vector.y, 0.0));
    Ok(Vector2::new(rotated.x, rotated.y))
}

fn check_2d(quaternion: &Quaternion, requested: bool) -> Result<()> {
    if requested && !quaternion.is_orientation_2d(ZERO_EPS) {
        return Err(OrientationError::NotA2DTransform(format!("{quaternion:?}")).into());
    }
    Ok(())
}

/// Rotates the spatial part of a homogeneous vector; `w` is unchanged.
#[must_use]
pub fn transform_vector4(quaternion: &Quaternion, vector: &Vector4) -> Vector4 {
    let rotated = transform(quaternion, &vector.xyz());
    Vector4::new(rotated.x, rotated.y, rotated.z, vector.w)
}

#[must_use]
pub fn inverse_transform_vector4(quaternion: &Quaternion, vector: &Vector4) -> Vector4 {
    let rotated = inverse_transform(quaternion, &vector.xyz());
    Vector4::new(rotated.x, rotated.y, rotated.z, vector.w)
}

/// Computes `R * matrix * Rᵀ` with `R` the rotation of `quaternion`.
#[must_use]
pub fn transform_matrix3(quaternion: &Quaternion, matrix: &Matrix3) -> Matrix3 {
    rotation_matrix::transform_matrix3(&rotation_matrix_from_quaternion(quaternion), matrix)
}

/// Computes `Rᵀ * matrix * R`.
#[must_use]
pub fn inverse_transform_matrix3(quaternion: &Quaternion, matrix: &Matrix3) -> Matrix3 {
    rotation_matrix::inverse_transform_matrix3(&rotation_matrix_from_quaternion(quaternion), matrix)
}

/// Computes `R * rotation`.
#[must_use]
pub fn transform_rotation_matrix(quaternion: &Quaternion, rotation: &RotationMatrix) -> RotationMatrix {
    rotation_matrix::multiply(&rotation_matrix_from_quaternion(quaternion), rotation)
}

/// Computes `Rᵀ * rotation`.
#[must_use]
pub fn inverse_transform_rotation_matrix(
    quaternion: &Quaternion,
    rotation: &RotationMatrix,
) -> RotationMatrix {
    rotation_matrix::multiply_transpose_left(&rotation_matrix_from_quaternion(quaternion), rotation)
}

/// Computes `quaternion * other`.
#[must_use]
pub fn transform_quaternion(quaternion: &Quaternion, other: &Quaternion) -> Quaternion {
    multiply(quaternion, false, other, false)
}

/// Computes `quaternion⁻¹ * other`.
#[must_use]
pub fn inverse_transform_quaternion(quaternion: &Quaternion, other: &Quaternion) -> Quaternion {
    multiply(quaternion, true, other, false)
}

/// Angle of the rotation from `q1` to `q2`, in `[0, π]`.
#[must_use]
pub fn distance(q1: &Quaternion, q2: &Quaternion) -> f64 {
    if q1.contains_nan() || q2.contains_nan() {
        return f64::NAN;
    }
    let delta = multiply(q1, true, q2, false);
    2.0 * norm3(delta.x, delta.y, delta.z).atan2(delta.s.abs())
}

/// Spherical linear interpolation along the shortest arc.
///
/// `alpha = 0` gives `q0`, `alpha = 1` gives `qf` (possibly negated).
#[must_use]
pub fn slerp(q0: &Quaternion, qf: &Quaternion, alpha: f64) -> Quaternion {
    if q0.contains_nan() || qf.contains_nan() {
        return Quaternion::nan();
    }
    let q0 = q0.normalized();
    let mut qf = qf.normalized();
    let mut dot = q0.dot(&qf);
    if dot < 0.0 {
        qf = qf.negated();
        dot = -dot;
    }

    let (a, b) = if dot > 1.0 - 1.0e-9 {
        (1.0 - alpha, alpha)
    } else {
        let theta = dot.min(1.0).acos();
        let sin_theta = theta.sin();
        (((1.0 - alpha) * theta).sin() / sin_theta, (alpha * theta).sin() / sin_theta)
    };

    Quaternion::new(
        a * q0.x + b * qf.x,
        a * q0.y + b * qf.y,
        a * q0.z + b * qf.z,
        a * q0.s + b * qf.s,
    )
}

fn elementary(axis: usize, angle: f64) -> Quaternion {
    let (sin_half, cos_half) = (0.5 * angle).sin_cos();
    match axis {
        0 => Quaternion::new_unchecked(sin_half, 0.0, 0.0, cos_half),
        1 => Quaternion::new_unchecked(0.0, sin_half, 0.0, cos_half),
        _ => Quaternion::new_unchecked(0.0, 0.0, sin_half, cos_half),
    }
}

/// Computes `Rz(yaw) * quaternion`.
#[must_use]
pub fn prepend_yaw(yaw: f64, quaternion: &Quaternion) -> Quaternion {
    multiply(&elementary(2, yaw), false, quaternion, false)
}

/// Computes `Ry(pitch) * quaternion`.
#[must_use]
pub fn prepend_pitch(pitch: f64, quaternion: &Quaternion) -> Quaternion {
    multiply(&elementary(1, pitch), false, quaternion, false)
}

/// Computes `Rx(roll) * quaternion`.
#[must_use]
pub fn prepend_roll(roll: f64, quaternion: &Quaternion) -> Quaternion {
    multiply(&elementary(0, roll), false, quaternion, false)
}

/// Computes `quaternion * Rz(yaw)`.
#[must_use]
pub fn append_yaw(quaternion: &Quaternion, yaw: f64) -> Quaternion {
    multiply(quaternion, false, &elementary(2, yaw), false)
}

/// Computes `quaternion * Ry(pitch)`.
#[must_use]
pub fn append_pitch(quaternion: &Quaternion, pitch: f64) -> Quaternion {
    multiply(quaternion, false, &elementary(1, pitch), false)
}

/// Computes `quaternion * Rx(roll)`.
#[must_use]
pub fn append_roll(quaternion: &Quaternion, roll: f64) -> Quaternion {
    multiply(quaternion, false, &elementary(0, roll), false)
}
