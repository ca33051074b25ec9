//! Yaw-pitch-roll algebra.
//!
//! Transforms build the `Rz(yaw) * Ry(pitch) * Rx(roll)` coefficients inline.
//! Compositions that do not reduce to adding angles go through quaternion
//! coordinates and are converted back.
use std::f64::consts::FRAC_PI_2;

use crate::conversion::{
    quaternion_from_yaw_pitch_roll, rotation_matrix_from_yaw_pitch_roll, yaw_pitch_roll_elements,
    yaw_pitch_roll_from_quaternion,
};
use crate::error::Result;
use crate::math::{trim_angle_minus_pi_to_pi, Matrix3, Vector2, Vector3, Vector4, ZERO_EPS};
use crate::orientation::{Orientation, Quaternion, RotationMatrix, YawPitchRoll};

use super::{quaternion, rotation_matrix};

fn negligible(angle: f64) -> bool {
    angle.abs() < ZERO_EPS
}

fn apply(ypr: &YawPitchRoll, transpose: bool, v: &Vector3) -> Vector3 {
    if ypr.contains_nan() {
        return Vector3::repeat(f64::NAN);
    }
    if ypr.is_zero(ZERO_EPS) {
        return *v;
    }
    let m = yaw_pitch_roll_elements(ypr.yaw, ypr.pitch, ypr.roll);
    if transpose {
        Vector3::new(
            m[0] * v.x + m[3] * v.y + m[6] * v.z,
            m[1] * v.x + m[4] * v.y + m[7] * v.z,
            m[2] * v.x + m[5] * v.y + m[8] * v.z,
        )
    } else {
        Vector3::new(
            m[0] * v.x + m[1] * v.y + m[2] * v.z,
            m[3] * v.x + m[4] * v.y + m[5] * v.z,
            m[6] * v.x + m[7] * v.y + m[8] * v.z,
        )
    }
}

/// Rotates `vector` by `ypr`.
///
/// All-zero angles return the input; any NaN angle gives a NaN vector.
#[must_use]
pub fn transform(ypr: &YawPitchRoll, vector: &Vector3) -> Vector3 {
    apply(ypr, false, vector)
}

/// Rotates `vector` by the inverse of `ypr`.
#[must_use]
pub fn inverse_transform(ypr: &YawPitchRoll, vector: &Vector3) -> Vector3 {
    apply(ypr, true, vector)
}

/// Rotates a 2D vector lying in the XY-plane.
///
/// # Errors
///
/// With `check_if_transform_in_xy_plane`, returns
/// [`OrientationError::NotAnOrientation2D`](crate::error::OrientationError::NotAnOrientation2D)
/// if pitch or roll is not zero.
pub fn transform_vector2(
    ypr: &YawPitchRoll,
    vector: &Vector2,
    check_if_transform_in_xy_plane: bool,
) -> Result<Vector2> {
    if check_if_transform_in_xy_plane {
        ypr.check_if_orientation_2d(ZERO_EPS)?;
    }
    let v = apply(ypr, false, &Vector3::new(vector.x, vector.y, 0.0));
    Ok(Vector2::new(v.x, v.y))
}

/// Inverse of [`transform_vector2`].
///
/// # Errors
///
/// Same as [`transform_vector2`].
pub fn inverse_transform_vector2(
    ypr: &YawPitchRoll,
    vector: &Vector2,
    check_if_transform_in_xy_plane: bool,
) -> Result<Vector2> {
    if check_if_transform_in_xy_plane {
        ypr.check_if_orientation_2d(ZERO_EPS)?;
    }
    let v = apply(ypr, true, &Vector3::new(vector.x, vector.y, 0.0));
    Ok(Vector2::new(v.x, v.y))
}

/// Rotates the spatial part of a homogeneous vector; `w` is unchanged.
#[must_use]
pub fn transform_vector4(ypr: &YawPitchRoll, vector: &Vector4) -> Vector4 {
    let v = apply(ypr, false, &vector.xyz());
    Vector4::new(v.x, v.y, v.z, vector.w)
}

#[must_use]
pub fn inverse_transform_vector4(ypr: &YawPitchRoll, vector: &Vector4) -> Vector4 {
    let v = apply(ypr, true, &vector.xyz());
    Vector4::new(v.x, v.y, v.z, vector.w)
}

/// Computes the similarity transform `R * matrix * Rᵀ`.
#[must_use]
pub fn transform_matrix3(ypr: &YawPitchRoll, matrix: &Matrix3) -> Matrix3 {
    if ypr.is_zero(ZERO_EPS) {
        return *matrix;
    }
    rotation_matrix::transform_matrix3(&rotation_matrix_from_yaw_pitch_roll(ypr), matrix)
}

/// Computes `Rᵀ * matrix * R`.
#[must_use]
pub fn inverse_transform_matrix3(ypr: &YawPitchRoll, matrix: &Matrix3) -> Matrix3 {
    if ypr.is_zero(ZERO_EPS) {
        return *matrix;
    }
    rotation_matrix::inverse_transform_matrix3(&rotation_matrix_from_yaw_pitch_roll(ypr), matrix)
}

/// Computes `R * rotation`.
#[must_use]
pub fn transform_rotation_matrix(ypr: &YawPitchRoll, rotation: &RotationMatrix) -> RotationMatrix {
    rotation_matrix::multiply(&rotation_matrix_from_yaw_pitch_roll(ypr), rotation)
}

/// Computes `Rᵀ * rotation`.
#[must_use]
pub fn inverse_transform_rotation_matrix(
    ypr: &YawPitchRoll,
    rotation: &RotationMatrix,
) -> RotationMatrix {
    rotation_matrix::multiply_transpose_left(&rotation_matrix_from_yaw_pitch_roll(ypr), rotation)
}

/// Computes `q(ypr) * other`.
#[must_use]
pub fn transform_quaternion(ypr: &YawPitchRoll, other: &Quaternion) -> Quaternion {
    quaternion::multiply(&quaternion_from_yaw_pitch_roll(ypr), false, other, false)
}

/// Computes `q(ypr)⁻¹ * other`.
#[must_use]
pub fn inverse_transform_quaternion(ypr: &YawPitchRoll, other: &Quaternion) -> Quaternion {
    quaternion::multiply(&quaternion_from_yaw_pitch_roll(ypr), true, other, false)
}

/// Composes two orientations of any representation as a yaw-pitch-roll.
#[must_use]
pub fn multiply(o1: &Orientation, inverse1: bool, o2: &Orientation, inverse2: bool) -> YawPitchRoll {
    yaw_pitch_roll_from_quaternion(&quaternion::multiply_orientations(o1, inverse1, o2, inverse2))
}

/// Computes `Rz(yaw) * ypr`. Yaw is applied on the outside, so angles add.
#[must_use]
pub fn prepend_yaw(yaw: f64, ypr: &YawPitchRoll) -> YawPitchRoll {
    YawPitchRoll::new(trim_angle_minus_pi_to_pi(ypr.yaw + yaw), ypr.pitch, ypr.roll)
}

/// Computes `ypr * Rx(roll)`. Roll is applied on the inside, so angles add.
#[must_use]
pub fn append_roll(ypr: &YawPitchRoll, roll: f64) -> YawPitchRoll {
    YawPitchRoll::new(ypr.yaw, ypr.pitch, trim_angle_minus_pi_to_pi(ypr.roll + roll))
}

/// Computes `ypr * Rz(yaw)`.
///
/// Angles add only when pitch and roll are both zero.
#[must_use]
pub fn append_yaw(ypr: &YawPitchRoll, yaw: f64) -> YawPitchRoll {
    if negligible(ypr.pitch) && negligible(ypr.roll) {
        return YawPitchRoll::new(trim_angle_minus_pi_to_pi(ypr.yaw + yaw), ypr.pitch, ypr.roll);
    }
    yaw_pitch_roll_from_quaternion(&quaternion::append_yaw(&quaternion_from_yaw_pitch_roll(ypr), yaw))
}

/// Computes `ypr * Ry(pitch)`.
///
/// With a zero roll the pitches add, as long as the sum stays in `[-π/2, π/2]`.
#[must_use]
pub fn append_pitch(ypr: &YawPitchRoll, pitch: f64) -> YawPitchRoll {
    let sum = ypr.pitch + pitch;
    if negligible(ypr.roll) && sum.abs() <= FRAC_PI_2 {
        return YawPitchRoll::new(ypr.yaw, sum, ypr.roll);
    }
    yaw_pitch_roll_from_quaternion(&quaternion::append_pitch(
        &quaternion_from_yaw_pitch_roll(ypr),
        pitch,
    ))
}

/// Computes `Ry(pitch) * ypr`.
///
/// With a zero yaw the pitches add, as long as the sum stays in `[-π/2, π/2]`.
#[must_use]
pub fn prepend_pitch(pitch: f64, ypr: &YawPitchRoll) -> YawPitchRoll {
    let sum = ypr.pitch + pitch;
    if negligible(ypr.yaw) && sum.abs() <= FRAC_PI_2 {
        return YawPitchRoll::new(ypr.yaw, sum, ypr.roll);
    }
    yaw_pitch_roll_from_quaternion(&quaternion::prepend_pitch(
        pitch,
        &quaternion_from_yaw_pitch_roll(ypr),
    ))
}

/// Computes `Rx(roll) * ypr`.
///
/// Angles add only when yaw and pitch are both zero.
#[must_use]
pub fn prepend_roll(roll: f64, ypr: &YawPitchRoll) -> YawPitchRoll {
    if negligible(ypr.yaw) && negligible(ypr.pitch) {
        return YawPitchRoll::new(ypr.yaw, ypr.pitch, trim_angle_minus_pi_to_pi(ypr.roll + roll));
    }
    yaw_pitch_roll_from_quaternion(&quaternion::prepend_roll(
        roll,
        &quaternion_from_yaw_pitch_roll(ypr),
    ))
}

/// Angle of the rotation from `ypr1` to `ypr2`, in `[0, π]`.
#[must_use]
pub fn distance(ypr1: &YawPitchRoll, ypr2: &YawPitchRoll) -> f64 {
    quaternion::distance(
        &quaternion_from_yaw_pitch_roll(ypr1),
        &quaternion_from_yaw_pitch_roll(ypr2),
    )
}
