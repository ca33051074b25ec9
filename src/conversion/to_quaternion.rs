use crate::math::{norm3, Vector3, ZERO_EPS};
use crate::orientation::{AxisAngle, Quaternion, RotationMatrix, YawPitchRoll};

/// Half-angle quaternion of an axis-angle.
///
/// A degenerate axis yields the identity.
#[must_use]
pub fn quaternion_from_axis_angle(axis_angle: &AxisAngle) -> Quaternion {
    if axis_angle.contains_nan() {
        return Quaternion::nan();
    }
    let norm = axis_angle.axis_norm();
    if norm < ZERO_EPS {
        return Quaternion::identity();
    }
    let (sin_half, cos_half) = (0.5 * axis_angle.angle).sin_cos();
    let k = sin_half / norm;
    Quaternion::new_unchecked(axis_angle.x * k, axis_angle.y * k, axis_angle.z * k, cos_half)
}

/// Quaternion of a rotation vector (axis scaled by angle).
#[must_use]
pub fn quaternion_from_rotation_vector(rotation_vector: &Vector3) -> Quaternion {
    if rotation_vector.iter().any(|v| v.is_nan()) {
        return Quaternion::nan();
    }
    let angle = norm3(rotation_vector.x, rotation_vector.y, rotation_vector.z);
    if angle < ZERO_EPS {
        return Quaternion::identity();
    }
    let (sin_half, cos_half) = (0.5 * angle).sin_cos();
    let k = sin_half / angle;
    Quaternion::new_unchecked(
        rotation_vector.x * k,
        rotation_vector.y * k,
        rotation_vector.z * k,
        cos_half,
    )
}

/// Quaternion of a rotation matrix using Shepperd's method.
///
/// The branch is picked on the largest of the trace and the diagonal terms,
/// which keeps the divisor away from zero for every angle. The result has a
/// non-negative scalar part.
#[must_use]
pub fn quaternion_from_rotation_matrix(rotation: &RotationMatrix) -> Quaternion {
    if rotation.contains_nan() {
        return Quaternion::nan();
    }
    let r = rotation;
    let trace = r.trace();

    let q = if trace > 0.0 {
        let s = 0.5 * (trace + 1.0).sqrt();
        let k = 0.25 / s;
        Quaternion::new_unchecked((r.m21 - r.m12) * k, (r.m02 - r.m20) * k, (r.m10 - r.m01) * k, s)
    } else if r.m00 >= r.m11 && r.m00 >= r.m22 {
        let x = 0.5 * (1.0 + r.m00 - r.m11 - r.m22).sqrt();
        let k = 0.25 / x;
        Quaternion::new_unchecked(x, (r.m01 + r.m10) * k, (r.m02 + r.m20) * k, (r.m21 - r.m12) * k)
    } else if r.m11 >= r.m22 {
        let y = 0.5 * (1.0 - r.m00 + r.m11 - r.m22).sqrt();
        let k = 0.25 / y;
        Quaternion::new_unchecked((r.m01 + r.m10) * k, y, (r.m12 + r.m21) * k, (r.m02 - r.m20) * k)
    } else {
        let z = 0.5 * (1.0 - r.m00 - r.m11 + r.m22).sqrt();
        let k = 0.25 / z;
        Quaternion::new_unchecked((r.m02 + r.m20) * k, (r.m12 + r.m21) * k, z, (r.m10 - r.m01) * k)
    };
    q.normalized_and_limited_to_pi()
}

/// Quaternion of `Rz(yaw) * Ry(pitch) * Rx(roll)` as a triple product of half angles.
#[must_use]
pub fn quaternion_from_yaw_pitch_roll(ypr: &YawPitchRoll) -> Quaternion {
    if ypr.contains_nan() {
        return Quaternion::nan();
    }
    let (sy, cy) = (0.5 * ypr.yaw).sin_cos();
    let (sp, cp) = (0.5 * ypr.pitch).sin_cos();
    let (sr, cr) = (0.5 * ypr.roll).sin_cos();

    let cy_cp = cy * cp;
    let sy_sp = sy * sp;
    let cy_sp = cy * sp;
    let sy_cp = sy * cp;

    Quaternion::new_unchecked(
        cy_cp * sr - sy_sp * cr,
        cy_sp * cr + sy_cp * sr,
        sy_cp * cr - cy_sp * sr,
        cy_cp * cr + sy_sp * sr,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, PI};

    const TOL: f64 = 1e-12;

    #[test]
    fn quarter_turn_about_z() {
        let q = quaternion_from_axis_angle(&AxisAngle::new(0.0, 0.0, 2.0, FRAC_PI_2));
        assert!(q.epsilon_equals(&Quaternion::new_unchecked(0.0, 0.0, FRAC_1_SQRT_2, FRAC_1_SQRT_2), TOL));

        let from_ypr = quaternion_from_yaw_pitch_roll(&YawPitchRoll::new(FRAC_PI_2, 0.0, 0.0));
        assert!(from_ypr.epsilon_equals(&q, TOL));

        let from_vector = quaternion_from_rotation_vector(&Vector3::new(0.0, 0.0, FRAC_PI_2));
        assert!(from_vector.epsilon_equals(&q, TOL));
    }

    #[test]
    fn degenerate_inputs_give_identity() {
        let q = quaternion_from_axis_angle(&AxisAngle::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(q, Quaternion::identity());
        assert_eq!(quaternion_from_rotation_vector(&Vector3::zeros()), Quaternion::identity());
    }

    #[test]
    fn nan_inputs_give_nan() {
        assert!(quaternion_from_axis_angle(&AxisAngle::new(0.0, 0.0, 1.0, f64::NAN)).contains_nan());
        assert!(quaternion_from_yaw_pitch_roll(&YawPitchRoll::new(f64::NAN, 0.0, 0.0)).contains_nan());
        assert!(quaternion_from_rotation_matrix(&RotationMatrix::nan()).contains_nan());
    }

    #[test]
    fn matrix_half_turns_use_diagonal_branches() {
        // Half turns about each axis have trace -1 and exercise the three
        // diagonal branches.
        let cases = [
            ([1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, -1.0], [1.0, 0.0, 0.0]),
            ([-1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
            ([-1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0], [0.0, 0.0, 1.0]),
        ];
        for (elements, axis) in cases {
            let q = quaternion_from_rotation_matrix(&RotationMatrix::from_rows_normalized(elements));
            assert!((q.x.abs() - axis[0]).abs() < TOL, "{q:?}");
            assert!((q.y.abs() - axis[1]).abs() < TOL, "{q:?}");
            assert!((q.z.abs() - axis[2]).abs() < TOL, "{q:?}");
            assert!(q.s.abs() < TOL);
            assert!((q.angle() - PI).abs() < 1e-9);
        }
    }

    #[test]
    fn matrix_and_ypr_agree() {
        let ypr = YawPitchRoll::new(2.5, -0.7, -2.9);
        let from_ypr = quaternion_from_yaw_pitch_roll(&ypr).normalized_and_limited_to_pi();
        let matrix = crate::conversion::rotation_matrix_from_yaw_pitch_roll(&ypr);
        let from_matrix = quaternion_from_rotation_matrix(&matrix);
        assert!(from_ypr.epsilon_equals(&from_matrix, 1e-12), "{from_ypr:?} vs {from_matrix:?}");
    }
}
