use crate::math::{contains_nan, norm2, GIMBAL_LOCK_EPS};
use crate::orientation::{AxisAngle, Quaternion, RotationMatrix, YawPitchRoll};

use super::quaternion_from_axis_angle;

/// Yaw-pitch-roll of a rotation matrix.
///
/// Pitch lands in `[-π/2, π/2]`, yaw and roll in `[-π, π]`. In gimbal lock
/// (`cos(pitch)` below `1e-12`) roll is pinned to zero and the coupled angle
/// is reported as yaw. Yaw is always solved against the extracted roll, so
/// the angles rebuild the matrix to rounding error even next to the lock.
#[must_use]
pub fn yaw_pitch_roll_from_rotation_matrix(rotation: &RotationMatrix) -> YawPitchRoll {
    let r = rotation;
    from_elements(&[
        [r.m00, r.m01, r.m02],
        [r.m10, r.m11, r.m12],
        [r.m20, r.m21, r.m22],
    ])
}

/// Yaw-pitch-roll of a quaternion. The quaternion is normalized first.
#[must_use]
pub fn yaw_pitch_roll_from_quaternion(quaternion: &Quaternion) -> YawPitchRoll {
    let q = quaternion.normalized();
    if q.contains_nan() {
        return YawPitchRoll::nan();
    }
    let (x2, y2, z2) = (2.0 * q.x, 2.0 * q.y, 2.0 * q.z);
    let (xx2, yy2, zz2) = (q.x * x2, q.y * y2, q.z * z2);
    let (xy2, xz2, yz2) = (q.x * y2, q.x * z2, q.y * z2);
    let (sx2, sy2, sz2) = (q.s * x2, q.s * y2, q.s * z2);

    from_elements(&[
        [1.0 - yy2 - zz2, xy2 - sz2, xz2 + sy2],
        [xy2 + sz2, 1.0 - xx2 - zz2, yz2 - sx2],
        [xz2 - sy2, yz2 + sx2, 1.0 - xx2 - yy2],
    ])
}

/// Yaw-pitch-roll of an axis-angle, through quaternion coordinates.
#[must_use]
pub fn yaw_pitch_roll_from_axis_angle(axis_angle: &AxisAngle) -> YawPitchRoll {
    yaw_pitch_roll_from_quaternion(&quaternion_from_axis_angle(axis_angle))
}

/// `m` is row-major. Yaw comes from `R·Rx(roll)ᵀ = Rz(yaw)·Ry(pitch)`, whose
/// second column is `(-sin yaw, cos yaw, 0)` for every pitch.
fn from_elements(m: &[[f64; 3]; 3]) -> YawPitchRoll {
    if m.iter().any(|row| contains_nan(row)) {
        return YawPitchRoll::nan();
    }

    let cos_pitch = norm2(m[2][1], m[2][2]);
    let pitch = (-m[2][0]).atan2(cos_pitch);
    let roll = if cos_pitch < GIMBAL_LOCK_EPS {
        tracing::trace!("yaw-pitch-roll extraction in gimbal lock, m20 = {}", m[2][0]);
        0.0
    } else {
        m[2][1].atan2(m[2][2])
    };

    let (sin_roll, cos_roll) = roll.sin_cos();
    let yaw = (m[0][2] * sin_roll - m[0][1] * cos_roll).atan2(m[1][1] * cos_roll - m[1][2] * sin_roll);
    YawPitchRoll::new(yaw, pitch, roll)
}
