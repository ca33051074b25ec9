use crate::math::{norm3, Vector3, ZERO_EPS};
use crate::orientation::{AxisAngle, Quaternion, RotationMatrix, YawPitchRoll};

/// Rotation matrix of an axis-angle (Rodrigues' formula in matrix form).
///
/// A degenerate axis yields the identity.
#[must_use]
pub fn rotation_matrix_from_axis_angle(axis_angle: &AxisAngle) -> RotationMatrix {
    if axis_angle.contains_nan() {
        return RotationMatrix::nan();
    }
    let norm = axis_angle.axis_norm();
    if norm < ZERO_EPS {
        return RotationMatrix::identity();
    }
    RotationMatrix::from_elements_unchecked(rodrigues(
        axis_angle.x / norm,
        axis_angle.y / norm,
        axis_angle.z / norm,
        axis_angle.angle,
    ))
}

/// Rotation matrix of a rotation vector (axis scaled by angle).
#[must_use]
pub fn rotation_matrix_from_rotation_vector(rotation_vector: &Vector3) -> RotationMatrix {
    let angle = norm3(rotation_vector.x, rotation_vector.y, rotation_vector.z);
    if angle.is_nan() {
        return RotationMatrix::nan();
    }
    if angle < ZERO_EPS {
        return RotationMatrix::identity();
    }
    RotationMatrix::from_elements_unchecked(rodrigues(
        rotation_vector.x / angle,
        rotation_vector.y / angle,
        rotation_vector.z / angle,
        angle,
    ))
}

/// Rotation matrix of a quaternion. The quaternion is normalized first.
#[must_use]
pub fn rotation_matrix_from_quaternion(quaternion: &Quaternion) -> RotationMatrix {
    let q = quaternion.normalized();
    if q.contains_nan() {
        return RotationMatrix::nan();
    }
    let (x2, y2, z2) = (2.0 * q.x, 2.0 * q.y, 2.0 * q.z);
    let (xx2, yy2, zz2) = (q.x * x2, q.y * y2, q.z * z2);
    let (xy2, xz2, yz2) = (q.x * y2, q.x * z2, q.y * z2);
    let (sx2, sy2, sz2) = (q.s * x2, q.s * y2, q.s * z2);

    RotationMatrix::from_elements_unchecked([
        1.0 - yy2 - zz2,
        xy2 - sz2,
        xz2 + sy2,
        xy2 + sz2,
        1.0 - xx2 - zz2,
        yz2 - sx2,
        xz2 - sy2,
        yz2 + sx2,
        1.0 - xx2 - yy2,
    ])
}

/// Rotation matrix `Rz(yaw) * Ry(pitch) * Rx(roll)`.
#[must_use]
pub fn rotation_matrix_from_yaw_pitch_roll(ypr: &YawPitchRoll) -> RotationMatrix {
    if ypr.contains_nan() {
        return RotationMatrix::nan();
    }
    RotationMatrix::from_elements_unchecked(yaw_pitch_roll_elements(ypr.yaw, ypr.pitch, ypr.roll))
}

/// Row-major elements of `Rz(yaw) * Ry(pitch) * Rx(roll)`.
pub(crate) fn yaw_pitch_roll_elements(yaw: f64, pitch: f64, roll: f64) -> [f64; 9] {
    let (sy, cy) = yaw.sin_cos();
    let (sp, cp) = pitch.sin_cos();
    let (sr, cr) = roll.sin_cos();
    [
        cy * cp,
        cy * sp * sr - sy * cr,
        cy * sp * cr + sy * sr,
        sy * cp,
        sy * sp * sr + cy * cr,
        sy * sp * cr - cy * sr,
        -sp,
        cp * sr,
        cp * cr,
    ]
}

/// Row-major elements of the rotation of `angle` about the unit axis `(ux, uy, uz)`.
pub(crate) fn rodrigues(ux: f64, uy: f64, uz: f64, angle: f64) -> [f64; 9] {
    let (s, c) = angle.sin_cos();
    let t = 1.0 - c;

    let (xy, xz, yz) = (t * ux * uy, t * ux * uz, t * uy * uz);
    let (sx, sy, sz) = (s * ux, s * uy, s * uz);

    [
        t * ux * ux + c,
        xy - sz,
        xz + sy,
        xy + sz,
        t * uy * uy + c,
        yz - sx,
        xz - sy,
        yz + sx,
        t * uz * uz + c,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::quaternion_from_axis_angle;
    use crate::math::Matrix3;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn quarter_turn_about_z() {
        let expected = Matrix3::new(0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0);
        let from_aa = rotation_matrix_from_axis_angle(&AxisAngle::new(0.0, 0.0, 1.0, FRAC_PI_2));
        assert_abs_diff_eq!(from_aa.as_matrix3(), expected, epsilon = 1e-15);
        let from_ypr = rotation_matrix_from_yaw_pitch_roll(&YawPitchRoll::new(FRAC_PI_2, 0.0, 0.0));
        assert_abs_diff_eq!(from_ypr.as_matrix3(), expected, epsilon = 1e-15);
    }

    #[test]
    fn representations_agree() {
        let aa = AxisAngle::new(0.3, -0.5, 0.8, 2.1);
        let from_aa = rotation_matrix_from_axis_angle(&aa);
        let from_q = rotation_matrix_from_quaternion(&quaternion_from_axis_angle(&aa));
        let from_vector =
            rotation_matrix_from_rotation_vector(&(aa.axis().normalize() * aa.angle));
        assert_abs_diff_eq!(from_aa.as_matrix3(), from_q.as_matrix3(), epsilon = 1e-14);
        assert_abs_diff_eq!(from_aa.as_matrix3(), from_vector.as_matrix3(), epsilon = 1e-14);
        assert!(from_aa.is_orthonormal(1e-14));
    }

    #[test]
    fn ypr_matches_elementary_product() {
        let (yaw, pitch, roll) = (0.7, -0.4, 1.9);
        let rz = rotation_matrix_from_axis_angle(&AxisAngle::from_yaw(yaw)).as_matrix3();
        let ry = rotation_matrix_from_axis_angle(&AxisAngle::from_pitch(pitch)).as_matrix3();
        let rx = rotation_matrix_from_axis_angle(&AxisAngle::from_roll(roll)).as_matrix3();
        let r = rotation_matrix_from_yaw_pitch_roll(&YawPitchRoll::new(yaw, pitch, roll));
        assert_abs_diff_eq!(r.as_matrix3(), rz * ry * rx, epsilon = 1e-14);
    }

    #[test]
    fn degenerate_and_nan() {
        assert_eq!(
            rotation_matrix_from_axis_angle(&AxisAngle::new(0.0, 0.0, 0.0, 3.0)),
            RotationMatrix::identity()
        );
        assert_eq!(
            rotation_matrix_from_rotation_vector(&Vector3::zeros()),
            RotationMatrix::identity()
        );
        assert!(rotation_matrix_from_quaternion(&Quaternion::nan()).contains_nan());
        assert!(rotation_matrix_from_yaw_pitch_roll(&YawPitchRoll::nan()).contains_nan());
    }
}
