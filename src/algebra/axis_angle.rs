//! Axis-angle algebra.
//!
//! Compositions are evaluated directly in half-angle coordinates: with
//! `q = (u sin(θ/2), cos(θ/2))` the quaternion product of two axis-angles is
//!
//! ```text
//! cos(γ/2)   = cos(α/2) cos(β/2) - sin(α/2) sin(β/2) (u1 · u2)
//! sin(γ/2) n = sin(α/2) cos(β/2) u1 + cos(α/2) sin(β/2) u2 + sin(α/2) sin(β/2) (u1 × u2)
//! ```
//!
//! An operand whose axis norm is below `1e-12` is the identity rotation.
use crate::conversion::{quaternion_from_axis_angle, rotation_matrix_from_axis_angle};
use crate::error::{OrientationError, Result};
use crate::math::{norm3, Matrix3, Vector2, Vector3, Vector4, ZERO_EPS};
use crate::orientation::{AxisAngle, Orientation, Quaternion, RotationMatrix};

use super::{quaternion, rotation_matrix};

/// Unit axis with the sine and cosine of the half angle.
struct HalfAngle {
    ux: f64,
    uy: f64,
    uz: f64,
    sin: f64,
    cos: f64,
}

impl HalfAngle {
    /// `None` for a degenerate axis.
    fn of(axis_angle: &AxisAngle, inverse: bool) -> Option<Self> {
        let norm = axis_angle.axis_norm();
        if norm < ZERO_EPS {
            return None;
        }
        let angle = if inverse { -axis_angle.angle } else { axis_angle.angle };
        let (sin, cos) = (0.5 * angle).sin_cos();
        Some(Self {
            ux: axis_angle.x / norm,
            uy: axis_angle.y / norm,
            uz: axis_angle.z / norm,
            sin,
            cos,
        })
    }

    fn to_axis_angle(&self) -> AxisAngle {
        from_half_angle_product(self.cos, self.sin * self.ux, self.sin * self.uy, self.sin * self.uz)
    }
}

/// Rebuilds an axis-angle from `cos(γ/2)` and `sin(γ/2) n`.
fn from_half_angle_product(cos_half: f64, x: f64, y: f64, z: f64) -> AxisAngle {
    let sin_half = norm3(x, y, z);
    if sin_half > ZERO_EPS {
        AxisAngle::new(x / sin_half, y / sin_half, z / sin_half, 2.0 * sin_half.atan2(cos_half))
    } else if sin_half.is_nan() || cos_half.is_nan() {
        AxisAngle::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN)
    } else {
        AxisAngle::identity()
    }
}

/// Rotates `vector` using Rodrigues' formula.
///
/// A degenerate axis returns `vector` unchanged.
#[must_use]
pub fn transform(axis_angle: &AxisAngle, vector: &Vector3) -> Vector3 {
    rodrigues(axis_angle, false, vector)
}

/// Rotates `vector` by the inverse of `axis_angle`.
#[must_use]
pub fn inverse_transform(axis_angle: &AxisAngle, vector: &Vector3) -> Vector3 {
    rodrigues(axis_angle, true, vector)
}

fn rodrigues(axis_angle: &AxisAngle, inverse: bool, v: &Vector3) -> Vector3 {
    let norm = axis_angle.axis_norm();
    if norm < ZERO_EPS {
        return *v;
    }
    let (ux, uy, uz) = (axis_angle.x / norm, axis_angle.y / norm, axis_angle.z / norm);
    let angle = if inverse { -axis_angle.angle } else { axis_angle.angle };
    let (sin, cos) = angle.sin_cos();
    let one_minus_cos = 1.0 - cos;

    let cx = uy * v.z - uz * v.y;
    let cy = uz * v.x - ux * v.z;
    let cz = ux * v.y - uy * v.x;

    let ccx = uy * cz - uz * cy;
    let ccy = uz * cx - ux * cz;
    let ccz = ux * cy - uy * cx;

    Vector3::new(
        v.x + sin * cx + one_minus_cos * ccx,
        v.y + sin * cy + one_minus_cos * ccy,
        v.z + sin * cz + one_minus_cos * ccz,
    )
}

/// Rotates a 2D vector lying in the XY-plane.
///
/// # Errors
///
/// With `check_if_transform_in_xy_plane`, returns
/// [`OrientationError::NotA2DTransform`] if the axis is not along Z.
pub fn transform_vector2(
    axis_angle: &AxisAngle,
    vector: &Vector2,
    check_if_transform_in_xy_plane: bool,
) -> Result<Vector2> {
    check_2d(axis_angle, check_if_transform_in_xy_plane)?;
    let v = transform(axis_angle, &Vector3::new(vector.x, vector.y, 0.0));
    Ok(Vector2::new(v.x, v.y))
}

/// Inverse of [`transform_vector2`].
///
/// # Errors
///
/// Same as [`transform_vector2`].
pub fn inverse_transform_vector2(
    axis_angle: &AxisAngle,
    vector: &Vector2,
    check_if_transform_in_xy_plane: bool,
) -> Result<Vector2> {
    check_2d(axis_angle, check_if_transform_in_xy_plane)?;
    let v = inverse_transform(axis_angle, &Vector3::new(vector.x, vector.y, 0.0));
    Ok(Vector2::new(v.x, v.y))
}

fn check_2d(axis_angle: &AxisAngle, requested: bool) -> Result<()> {
    if requested && !axis_angle.is_orientation_2d(ZERO_EPS) {
        return Err(OrientationError::NotA2DTransform(format!("{axis_angle:?}")).into());
    }
    Ok(())
}

/// Rotates the spatial part of a homogeneous vector; `w` is unchanged.
#[must_use]
pub fn transform_vector4(axis_angle: &AxisAngle, vector: &Vector4) -> Vector4 {
    let v = transform(axis_angle, &vector.xyz());
    Vector4::new(v.x, v.y, v.z, vector.w)
}

#[must_use]
pub fn inverse_transform_vector4(axis_angle: &AxisAngle, vector: &Vector4) -> Vector4 {
    let v = inverse_transform(axis_angle, &vector.xyz());
    Vector4::new(v.x, v.y, v.z, vector.w)
}

/// Computes `q(axis_angle) * other`.
#[must_use]
pub fn transform_quaternion(axis_angle: &AxisAngle, other: &Quaternion) -> Quaternion {
    quaternion::multiply(&quaternion_from_axis_angle(axis_angle), false, other, false)
}

/// Computes `q(axis_angle)⁻¹ * other`.
#[must_use]
pub fn inverse_transform_quaternion(axis_angle: &AxisAngle, other: &Quaternion) -> Quaternion {
    quaternion::multiply(&quaternion_from_axis_angle(axis_angle), true, other, false)
}

/// Computes the similarity transform `R * matrix * Rᵀ`.
#[must_use]
pub fn transform_matrix3(axis_angle: &AxisAngle, matrix: &Matrix3) -> Matrix3 {
    rotation_matrix::transform_matrix3(&rotation_matrix_from_axis_angle(axis_angle), matrix)
}

/// Computes `Rᵀ * matrix * R`.
#[must_use]
pub fn inverse_transform_matrix3(axis_angle: &AxisAngle, matrix: &Matrix3) -> Matrix3 {
    rotation_matrix::inverse_transform_matrix3(&rotation_matrix_from_axis_angle(axis_angle), matrix)
}

/// Computes `R * rotation`.
#[must_use]
pub fn transform_rotation_matrix(axis_angle: &AxisAngle, rotation: &RotationMatrix) -> RotationMatrix {
    rotation_matrix::multiply(&rotation_matrix_from_axis_angle(axis_angle), rotation)
}

/// Computes `Rᵀ * rotation`.
#[must_use]
pub fn inverse_transform_rotation_matrix(
    axis_angle: &AxisAngle,
    rotation: &RotationMatrix,
) -> RotationMatrix {
    rotation_matrix::multiply_transpose_left(&rotation_matrix_from_axis_angle(axis_angle), rotation)
}

/// Composes `aa1 * aa2`, each operand optionally inverted first.
///
/// The resulting angle lies in `[0, 2π]` with a unit axis. A degenerate
/// operand is treated as the identity, so the other operand is returned in
/// that same normalized form.
#[must_use]
pub fn multiply(aa1: &AxisAngle, inverse1: bool, aa2: &AxisAngle, inverse2: bool) -> AxisAngle {
    let (a, b) = match (HalfAngle::of(aa1, inverse1), HalfAngle::of(aa2, inverse2)) {
        (Some(a), Some(b)) => (a, b),
        (None, Some(b)) => {
            tracing::trace!("degenerate left axis-angle in multiply, treated as identity");
            return b.to_axis_angle();
        }
        (Some(a), None) => {
            tracing::trace!("degenerate right axis-angle in multiply, treated as identity");
            return a.to_axis_angle();
        }
        (None, None) => return AxisAngle::identity(),
    };

    let dot = a.ux * b.ux + a.uy * b.uy + a.uz * b.uz;
    let cross_x = a.uy * b.uz - a.uz * b.uy;
    let cross_y = a.uz * b.ux - a.ux * b.uz;
    let cross_z = a.ux * b.uy - a.uy * b.ux;

    let sa_cb = a.sin * b.cos;
    let ca_sb = a.cos * b.sin;
    let sa_sb = a.sin * b.sin;

    from_half_angle_product(
        a.cos * b.cos - sa_sb * dot,
        sa_cb * a.ux + ca_sb * b.ux + sa_sb * cross_x,
        sa_cb * a.uy + ca_sb * b.uy + sa_sb * cross_y,
        sa_cb * a.uz + ca_sb * b.uz + sa_sb * cross_z,
    )
}

/// Computes `aa1⁻¹ * aa2`.
#[must_use]
pub fn multiply_conjugate_left(aa1: &AxisAngle, aa2: &AxisAngle) -> AxisAngle {
    multiply(aa1, true, aa2, false)
}

/// Computes `aa1 * aa2⁻¹`.
#[must_use]
pub fn multiply_conjugate_right(aa1: &AxisAngle, aa2: &AxisAngle) -> AxisAngle {
    multiply(aa1, false, aa2, true)
}

/// Composes two orientations of any representation as an axis-angle.
#[must_use]
pub fn multiply_orientations(
    o1: &Orientation,
    inverse1: bool,
    o2: &Orientation,
    inverse2: bool,
) -> AxisAngle {
    let q = quaternion::multiply_orientations(o1, inverse1, o2, inverse2);
    from_half_angle_product(q.s, q.x, q.y, q.z)
}

/// Computes `Rz(yaw) * axis_angle`.
#[must_use]
pub fn prepend_yaw(yaw: f64, axis_angle: &AxisAngle) -> AxisAngle {
    let Some(a) = HalfAngle::of(axis_angle, false) else {
        return AxisAngle::from_yaw(yaw);
    };
    let (s, c) = (0.5 * yaw).sin_cos();
    from_half_angle_product(
        c * a.cos - s * a.sin * a.uz,
        c * a.sin * a.ux - s * a.sin * a.uy,
        c * a.sin * a.uy + s * a.sin * a.ux,
        s * a.cos + c * a.sin * a.uz,
    )
}

/// Computes `Ry(pitch) * axis_angle`.
#[must_use]
pub fn prepend_pitch(pitch: f64, axis_angle: &AxisAngle) -> AxisAngle {
    let Some(a) = HalfAngle::of(axis_angle, false) else {
        return AxisAngle::from_pitch(pitch);
    };
    let (s, c) = (0.5 * pitch).sin_cos();
    from_half_angle_product(
        c * a.cos - s * a.sin * a.uy,
        c * a.sin * a.ux + s * a.sin * a.uz,
        s * a.cos + c * a.sin * a.uy,
        c * a.sin * a.uz - s * a.sin * a.ux,
    )
}

/// Computes `Rx(roll) * axis_angle`.
#[must_use]
pub fn prepend_roll(roll: f64, axis_angle: &AxisAngle) -> AxisAngle {
    let Some(a) = HalfAngle::of(axis_angle, false) else {
        return AxisAngle::from_roll(roll);
    };
    let (s, c) = (0.5 * roll).sin_cos();
    from_half_angle_product(
        c * a.cos - s * a.sin * a.ux,
        s * a.cos + c * a.sin * a.ux,
        c * a.sin * a.uy - s * a.sin * a.uz,
        c * a.sin * a.uz + s * a.sin * a.uy,
    )
}

/// Computes `axis_angle * Rz(yaw)`.
#[must_use]
pub fn append_yaw(axis_angle: &AxisAngle, yaw: f64) -> AxisAngle {
    let Some(a) = HalfAngle::of(axis_angle, false) else {
        return AxisAngle::from_yaw(yaw);
    };
    let (s, c) = (0.5 * yaw).sin_cos();
    from_half_angle_product(
        a.cos * c - a.sin * s * a.uz,
        a.sin * c * a.ux + a.sin * s * a.uy,
        a.sin * c * a.uy - a.sin * s * a.ux,
        a.sin * c * a.uz + a.cos * s,
    )
}

/// Computes `axis_angle * Ry(pitch)`.
#[must_use]
pub fn append_pitch(axis_angle: &AxisAngle, pitch: f64) -> AxisAngle {
    let Some(a) = HalfAngle::of(axis_angle, false) else {
        return AxisAngle::from_pitch(pitch);
    };
    let (s, c) = (0.5 * pitch).sin_cos();
    from_half_angle_product(
        a.cos * c - a.sin * s * a.uy,
        a.sin * c * a.ux - a.sin * s * a.uz,
        a.sin * c * a.uy + a.cos * s,
        a.sin * c * a.uz + a.sin * s * a.ux,
    )
}

/// Computes `axis_angle * Rx(roll)`.
#[must_use]
pub fn append_roll(axis_angle: &AxisAngle, roll: f64) -> AxisAngle {
    let Some(a) = HalfAngle::of(axis_angle, false) else {
        return AxisAngle::from_roll(roll);
    };
    let (s, c) = (0.5 * roll).sin_cos();
    from_half_angle_product(
        a.cos * c - a.sin * s * a.ux,
        a.sin * c * a.ux + a.cos * s,
        a.sin * c * a.uy + a.sin * s * a.uz,
        a.sin * c * a.uz - a.sin * s * a.uy,
    )
}

/// Angle of `aa1 * aa2⁻¹`, in `[0, 2π]`.
///
/// Returns NaN if either axis is degenerate.
#[must_use]
pub fn distance(aa1: &AxisAngle, aa2: &AxisAngle) -> f64 {
    if aa1.has_degenerate_axis() || aa2.has_degenerate_axis() {
        return f64::NAN;
    }
    multiply(aa1, false, aa2, true).angle.abs()
}
