//! Rotation-matrix algebra.
//!
//! Every product is re-orthonormalized before it is returned, so long chains
//! of compositions do not drift away from SO(3).
use crate::conversion::{matrix_log, quaternion_from_rotation_matrix, rodrigues};
use crate::error::{OrientationError, Result};
use crate::math::{norm3, Matrix3, Vector2, Vector3, Vector4, ZERO_EPS};
use crate::orientation::{Orientation, Quaternion, RotationMatrix};

use super::quaternion;

/// Raw 3x3 product with optional transposition of either operand.
fn product(a: &RotationMatrix, transpose_a: bool, b: &RotationMatrix, transpose_b: bool) -> [f64; 9] {
    let a = if transpose_a { a.transpose() } else { *a };
    let b = if transpose_b { b.transpose() } else { *b };
    [
        a.m00 * b.m00 + a.m01 * b.m10 + a.m02 * b.m20,
        a.m00 * b.m01 + a.m01 * b.m11 + a.m02 * b.m21,
        a.m00 * b.m02 + a.m01 * b.m12 + a.m02 * b.m22,
        a.m10 * b.m00 + a.m11 * b.m10 + a.m12 * b.m20,
        a.m10 * b.m01 + a.m11 * b.m11 + a.m12 * b.m21,
        a.m10 * b.m02 + a.m11 * b.m12 + a.m12 * b.m22,
        a.m20 * b.m00 + a.m21 * b.m10 + a.m22 * b.m20,
        a.m20 * b.m01 + a.m21 * b.m11 + a.m22 * b.m21,
        a.m20 * b.m02 + a.m21 * b.m12 + a.m22 * b.m22,
    ]
}

/// Computes `a * b`.
#[must_use]
pub fn multiply(a: &RotationMatrix, b: &RotationMatrix) -> RotationMatrix {
    RotationMatrix::from_rows_normalized(product(a, false, b, false))
}

/// Computes `aᵀ * b`.
#[must_use]
pub fn multiply_transpose_left(a: &RotationMatrix, b: &RotationMatrix) -> RotationMatrix {
    RotationMatrix::from_rows_normalized(product(a, true, b, false))
}

/// Computes `a * bᵀ`.
#[must_use]
pub fn multiply_transpose_right(a: &RotationMatrix, b: &RotationMatrix) -> RotationMatrix {
    RotationMatrix::from_rows_normalized(product(a, false, b, true))
}

/// Computes `aᵀ * bᵀ`.
#[must_use]
pub fn multiply_transpose_both(a: &RotationMatrix, b: &RotationMatrix) -> RotationMatrix {
    RotationMatrix::from_rows_normalized(product(a, true, b, true))
}

/// Composes two orientations of any representation as a rotation matrix.
#[must_use]
pub fn multiply_orientations(
    o1: &Orientation,
    inverse1: bool,
    o2: &Orientation,
    inverse2: bool,
) -> RotationMatrix {
    RotationMatrix::from_rows_normalized(product(
        &o1.to_rotation_matrix(),
        inverse1,
        &o2.to_rotation_matrix(),
        inverse2,
    ))
}

/// Computes `rotation * vector`.
#[must_use]
pub fn transform(rotation: &RotationMatrix, vector: &Vector3) -> Vector3 {
    let r = rotation;
    Vector3::new(
        r.m00 * vector.x + r.m01 * vector.y + r.m02 * vector.z,
        r.m10 * vector.x + r.m11 * vector.y + r.m12 * vector.z,
        r.m20 * vector.x + r.m21 * vector.y + r.m22 * vector.z,
    )
}

/// Computes `rotationᵀ * vector`.
#[must_use]
pub fn inverse_transform(rotation: &RotationMatrix, vector: &Vector3) -> Vector3 {
    let r = rotation;
    Vector3::new(
        r.m00 * vector.x + r.m10 * vector.y + r.m20 * vector.z,
        r.m01 * vector.x + r.m11 * vector.y + r.m21 * vector.z,
        r.m02 * vector.x + r.m12 * vector.y + r.m22 * vector.z,
    )
}

/// Rotates a 2D vector with the upper-left 2x2 block.
///
/// # Errors
///
/// With `check_if_transform_in_xy_plane`, returns
/// [`OrientationError::NotA2DTransform`] if the rotation leaves the XY-plane.
pub fn transform_vector2(
    rotation: &RotationMatrix,
    vector: &Vector2,
    check_if_transform_in_xy_plane: bool,
) -> Result<Vector2> {
    if check_if_transform_in_xy_plane {
        rotation.check_if_rotation_2d(ZERO_EPS)?;
    }
    let r = rotation;
    Ok(Vector2::new(
        r.m00 * vector.x + r.m01 * vector.y,
        r.m10 * vector.x + r.m11 * vector.y,
    ))
}

/// Inverse of [`transform_vector2`].
///
/// # Errors
///
/// Same as [`transform_vector2`].
pub fn inverse_transform_vector2(
    rotation: &RotationMatrix,
    vector: &Vector2,
    check_if_transform_in_xy_plane: bool,
) -> Result<Vector2> {
    if check_if_transform_in_xy_plane && !rotation.is_rotation_2d(ZERO_EPS) {
        return Err(OrientationError::NotA2DTransform(format!("{rotation:?}")).into());
    }
    let r = rotation;
    Ok(Vector2::new(
        r.m00 * vector.x + r.m10 * vector.y,
        r.m01 * vector.x + r.m11 * vector.y,
    ))
}

/// Rotates the spatial part of a homogeneous vector; `w` is unchanged.
#[must_use]
pub fn transform_vector4(rotation: &RotationMatrix, vector: &Vector4) -> Vector4 {
    let v = transform(rotation, &vector.xyz());
    Vector4::new(v.x, v.y, v.z, vector.w)
}

#[must_use]
pub fn inverse_transform_vector4(rotation: &RotationMatrix, vector: &Vector4) -> Vector4 {
    let v = inverse_transform(rotation, &vector.xyz());
    Vector4::new(v.x, v.y, v.z, vector.w)
}

/// Computes the similarity transform `R * matrix * Rᵀ`.
#[must_use]
pub fn transform_matrix3(rotation: &RotationMatrix, matrix: &Matrix3) -> Matrix3 {
    let r = rotation.as_matrix3();
    r * matrix * r.transpose()
}

/// Computes `Rᵀ * matrix * R`.
#[must_use]
pub fn inverse_transform_matrix3(rotation: &RotationMatrix, matrix: &Matrix3) -> Matrix3 {
    let r = rotation.as_matrix3();
    r.transpose() * matrix * r
}

/// Computes `q(R) * quaternion`.
#[must_use]
pub fn transform_quaternion(rotation: &RotationMatrix, other: &Quaternion) -> Quaternion {
    quaternion::multiply(&quaternion_from_rotation_matrix(rotation), false, other, false)
}

/// Computes `q(R)⁻¹ * quaternion`.
#[must_use]
pub fn inverse_transform_quaternion(rotation: &RotationMatrix, other: &Quaternion) -> Quaternion {
    quaternion::multiply(&quaternion_from_rotation_matrix(rotation), true, other, false)
}

/// Computes `Rz(yaw) * rotation` by recombining rows.
#[must_use]
pub fn prepend_yaw(yaw: f64, rotation: &RotationMatrix) -> RotationMatrix {
    let (s, c) = yaw.sin_cos();
    let r = rotation;
    RotationMatrix::from_rows_normalized([
        c * r.m00 - s * r.m10,
        c * r.m01 - s * r.m11,
        c * r.m02 - s * r.m12,
        s * r.m00 + c * r.m10,
        s * r.m01 + c * r.m11,
        s * r.m02 + c * r.m12,
        r.m20,
        r.m21,
        r.m22,
    ])
}

/// Computes `Ry(pitch) * rotation` by recombining rows.
#[must_use]
pub fn prepend_pitch(pitch: f64, rotation: &RotationMatrix) -> RotationMatrix {
    let (s, c) = pitch.sin_cos();
    let r = rotation;
    RotationMatrix::from_rows_normalized([
        c * r.m00 + s * r.m20,
        c * r.m01 + s * r.m21,
        c * r.m02 + s * r.m22,
        r.m10,
        r.m11,
        r.m12,
        c * r.m20 - s * r.m00,
        c * r.m21 - s * r.m01,
        c * r.m22 - s * r.m02,
    ])
}

/// Computes `Rx(roll) * rotation` by recombining rows.
#[must_use]
pub fn prepend_roll(roll: f64, rotation: &RotationMatrix) -> RotationMatrix {
    let (s, c) = roll.sin_cos();
    let r = rotation;
    RotationMatrix::from_rows_normalized([
        r.m00,
        r.m01,
        r.m02,
        c * r.m10 - s * r.m20,
        c * r.m11 - s * r.m21,
        c * r.m12 - s * r.m22,
        s * r.m10 + c * r.m20,
        s * r.m11 + c * r.m21,
        s * r.m12 + c * r.m22,
    ])
}

/// Computes `rotation * Rz(yaw)` by recombining columns.
#[must_use]
pub fn append_yaw(rotation: &RotationMatrix, yaw: f64) -> RotationMatrix {
    let (s, c) = yaw.sin_cos();
    let r = rotation;
    RotationMatrix::from_rows_normalized([
        c * r.m00 + s * r.m01,
        c * r.m01 - s * r.m00,
        r.m02,
        c * r.m10 + s * r.m11,
        c * r.m11 - s * r.m10,
        r.m12,
        c * r.m20 + s * r.m21,
        c * r.m21 - s * r.m20,
        r.m22,
    ])
}

/// Computes `rotation * Ry(pitch)` by recombining columns.
#[must_use]
pub fn append_pitch(rotation: &RotationMatrix, pitch: f64) -> RotationMatrix {
    let (s, c) = pitch.sin_cos();
    let r = rotation;
    RotationMatrix::from_rows_normalized([
        c * r.m00 - s * r.m02,
        r.m01,
        s * r.m00 + c * r.m02,
        c * r.m10 - s * r.m12,
        r.m11,
        s * r.m10 + c * r.m12,
        c * r.m20 - s * r.m22,
        r.m21,
        s * r.m20 + c * r.m22,
    ])
}

/// Computes `rotation * Rx(roll)` by recombining columns.
#[must_use]
pub fn append_roll(rotation: &RotationMatrix, roll: f64) -> RotationMatrix {
    let (s, c) = roll.sin_cos();
    let r = rotation;
    RotationMatrix::from_rows_normalized([
        r.m00,
        c * r.m01 + s * r.m02,
        c * r.m02 - s * r.m01,
        r.m10,
        c * r.m11 + s * r.m12,
        c * r.m12 - s * r.m11,
        r.m20,
        c * r.m21 + s * r.m22,
        c * r.m22 - s * r.m21,
    ])
}

/// Geodesic interpolation on SO(3) from `r0` (`alpha = 0`) to `rf` (`alpha = 1`).
///
/// The relative rotation `r0ᵀ * rf` is taken to axis-angle form, its angle is
/// scaled by `alpha` and the increment is applied on the right of `r0`. NaN in
/// either input gives a NaN matrix.
#[must_use]
pub fn interpolate(r0: &RotationMatrix, rf: &RotationMatrix, alpha: f64) -> RotationMatrix {
    if r0.contains_nan() || rf.contains_nan() {
        return RotationMatrix::nan();
    }
    if r0.epsilon_equals(rf, ZERO_EPS) {
        return *r0;
    }

    let delta = RotationMatrix::from_elements_unchecked(product(r0, true, rf, false));
    let log = matrix_log(&delta);
    if log.angle == 0.0 {
        return *r0;
    }

    let step = RotationMatrix::from_elements_unchecked(rodrigues(
        log.x,
        log.y,
        log.z,
        alpha * log.angle,
    ));
    multiply(r0, &step)
}

/// Angle of the rotation taking `r1` onto `r2`, in `[0, π]`.
///
/// Returns exactly 0 for equal matrices.
#[must_use]
pub fn distance(r1: &RotationMatrix, r2: &RotationMatrix) -> f64 {
    if r1.contains_nan() || r2.contains_nan() {
        return f64::NAN;
    }
    let d = product(r1, true, r2, false);
    let x = d[7] - d[5];
    let y = d[2] - d[6];
    let z = d[3] - d[1];
    let skew_norm = norm3(x, y, z);
    let trace = d[0] + d[4] + d[8];

    if skew_norm > ZERO_EPS {
        return (0.5 * skew_norm).atan2(0.5 * (trace - 1.0)).abs();
    }
    // The skew part vanishes at 0 (trace 3) and at a half turn (trace -1).
    if trace > 1.0 {
        0.0
    } else {
        std::f64::consts::PI
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::conversion::{rotation_matrix_from_axis_angle, rotation_matrix_from_yaw_pitch_roll};
    use crate::orientation::{AxisAngle, YawPitchRoll};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn rot(axis: [f64; 3], angle: f64) -> RotationMatrix {
        rotation_matrix_from_axis_angle(&AxisAngle::new(axis[0], axis[1], axis[2], angle))
    }

    #[test]
    fn transposed_products() {
        let a = rot([0.3, 0.4, 0.5], 1.1);
        let b = rot([-0.8, 0.1, 0.2], -0.6);
        let (ma, mb) = (a.as_matrix3(), b.as_matrix3());
        assert_abs_diff_eq!(multiply(&a, &b).as_matrix3(), ma * mb, epsilon = 1e-14);
        assert_abs_diff_eq!(
            multiply_transpose_left(&a, &b).as_matrix3(),
            ma.transpose() * mb,
            epsilon = 1e-14
        );
        assert_abs_diff_eq!(
            multiply_transpose_right(&a, &b).as_matrix3(),
            ma * mb.transpose(),
            epsilon = 1e-14
        );
        assert_abs_diff_eq!(
            multiply_transpose_both(&a, &b).as_matrix3(),
            ma.transpose() * mb.transpose(),
            epsilon = 1e-14
        );
    }

    #[test]
    fn prepend_and_append_match_full_products() {
        let r = rot([0.2, -0.9, 0.4], 2.3);
        let angle = 0.77;
        let rz = rot([0.0, 0.0, 1.0], angle);
        let ry = rot([0.0, 1.0, 0.0], angle);
        let rx = rot([1.0, 0.0, 0.0], angle);
        let cases = [
            (prepend_yaw(angle, &r), multiply(&rz, &r)),
            (prepend_pitch(angle, &r), multiply(&ry, &r)),
            (prepend_roll(angle, &r), multiply(&rx, &r)),
            (append_yaw(&r, angle), multiply(&r, &rz)),
            (append_pitch(&r, angle), multiply(&r, &ry)),
            (append_roll(&r, angle), multiply(&r, &rx)),
        ];
        for (closed_form, full) in cases {
            assert!(closed_form.epsilon_equals(&full, 1e-14), "{closed_form:?} vs {full:?}");
        }
    }

    #[test]
    fn long_chains_stay_orthonormal() {
        let mut r = RotationMatrix::identity();
        for i in 0..2000 {
            let angle = 0.1 + 0.001 * f64::from(i);
            r = append_roll(&prepend_yaw(angle, &append_pitch(&r, -angle)), 0.5 * angle);
            r = multiply(&r, &rot([1.0, 2.0, 3.0], angle));
        }
        assert!(r.is_orthonormal(1e-14));
        assert!((r.determinant() - 1.0).abs() < 1e-14);
    }

    #[test]
    fn interpolation_endpoints() {
        let r0 = rot([0.0, 1.0, 1.0], 0.3);
        let rf = rot([1.0, -1.0, 0.5], 2.0);
        assert!(interpolate(&r0, &rf, 0.0).epsilon_equals(&r0, 1e-14));
        assert!(interpolate(&r0, &rf, 1.0).epsilon_equals(&rf, 1e-12));
        assert!(interpolate(&r0, &r0, 0.4).epsilon_equals(&r0, 0.0));
    }

    #[test]
    fn interpolation_follows_geodesic() {
        let r0 = rot([0.0, 0.0, 1.0], 0.2);
        let rf = rot([0.0, 0.0, 1.0], 1.8);
        let mid = interpolate(&r0, &rf, 0.5);
        assert!(mid.epsilon_equals(&rot([0.0, 0.0, 1.0], 1.0), 1e-14));
        let twice = interpolate(&mid, &rf, 0.5);
        assert!(twice.epsilon_equals(&interpolate(&r0, &rf, 0.75), 1e-13));
        assert!((distance(&r0, &mid) - 0.8).abs() < 1e-14);
    }

    #[test]
    fn interpolation_through_half_turn() {
        let r0 = RotationMatrix::identity();
        let rf = rot([0.0, 1.0, 0.0], PI);
        let mid = interpolate(&r0, &rf, 0.5);
        assert!(mid.epsilon_equals(&rot([0.0, 1.0, 0.0], FRAC_PI_2), 1e-12), "{mid:?}");
    }

    #[test]
    fn interpolation_with_nan_is_nan() {
        let r = rot([1.0, 0.0, 0.0], 0.1);
        assert!(interpolate(&r, &RotationMatrix::nan(), 0.5).contains_nan());
        assert!(interpolate(&RotationMatrix::nan(), &r, 0.5).contains_nan());
    }

    #[test]
    fn distance_bounds() {
        let r = rot([0.5, 0.5, -0.2], 1.0);
        assert_eq!(distance(&r, &r), 0.0);
        assert!((distance(&RotationMatrix::identity(), &rot([1.0, 0.0, 0.0], PI)) - PI).abs() < 1e-12);
        let far = rot([0.5, 0.5, -0.2], 1.0 + 1.5 * PI);
        assert!((distance(&r, &far) - 0.5 * PI).abs() < 1e-12);
        assert!(distance(&r, &RotationMatrix::nan()).is_nan());
    }

    #[test]
    fn vector_transforms() {
        let r = rotation_matrix_from_yaw_pitch_roll(&YawPitchRoll::new(FRAC_PI_2, 0.0, 0.0));
        assert_abs_diff_eq!(transform(&r, &Vector3::x()), Vector3::y(), epsilon = 1e-15);
        assert_abs_diff_eq!(inverse_transform(&r, &Vector3::y()), Vector3::x(), epsilon = 1e-15);
        let v2 = transform_vector2(&r, &Vector2::new(1.0, 0.0), true).unwrap();
        assert_abs_diff_eq!(v2, Vector2::new(0.0, 1.0), epsilon = 1e-15);
        let back = inverse_transform_vector2(&r, &v2, true).unwrap();
        assert_abs_diff_eq!(back, Vector2::new(1.0, 0.0), epsilon = 1e-15);
        let v4 = transform_vector4(&r, &Vector4::new(1.0, 0.0, 0.0, -2.0));
        assert_abs_diff_eq!(v4, Vector4::new(0.0, 1.0, 0.0, -2.0), epsilon = 1e-15);
        assert_abs_diff_eq!(
            inverse_transform_vector4(&r, &v4),
            Vector4::new(1.0, 0.0, 0.0, -2.0),
            epsilon = 1e-15
        );

        let tilted = rot([1.0, 0.0, 0.0], 0.1);
        assert!(transform_vector2(&tilted, &Vector2::new(1.0, 0.0), true).is_err());
        assert!(inverse_transform_vector2(&tilted, &Vector2::new(1.0, 0.0), true).is_err());
        assert!(transform_vector2(&tilted, &Vector2::new(1.0, 0.0), false).is_ok());
    }

    #[test]
    fn matrix_and_quaternion_transforms() {
        let r = rot([0.3, -0.2, 0.9], 0.8);
        let m = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0);
        let similar = transform_matrix3(&r, &m);
        assert!((similar.trace() - m.trace()).abs() < 1e-12);
        assert_abs_diff_eq!(inverse_transform_matrix3(&r, &similar), m, epsilon = 1e-12);

        let q = quaternion_from_rotation_matrix(&rot([0.0, 1.0, 0.0], 0.5));
        let composed = transform_quaternion(&r, &q);
        let back = inverse_transform_quaternion(&r, &composed);
        assert!(back.geometrically_equals(&q, 1e-7));
    }

    #[test]
    fn mixed_orientation_product() {
        let aa = AxisAngle::new(0.0, 0.0, 1.0, FRAC_PI_2);
        let ypr = YawPitchRoll::new(0.0, 0.0, FRAC_PI_2);
        let r = multiply_orientations(&aa.into(), false, &ypr.into(), true);
        let expected = multiply_transpose_right(
            &rot([0.0, 0.0, 1.0], FRAC_PI_2),
            &rot([1.0, 0.0, 0.0], FRAC_PI_2),
        );
        assert!(r.epsilon_equals(&expected, 1e-14));
    }
}
