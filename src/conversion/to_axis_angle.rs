use std::f64::consts::PI;

use crate::math::{norm3, Vector3, ZERO_EPS};
use crate::orientation::{AxisAngle, Quaternion, RotationMatrix, YawPitchRoll};

use super::quaternion_from_yaw_pitch_roll;

fn nan_axis_angle() -> AxisAngle {
    AxisAngle::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN)
}

/// Axis-angle of a quaternion, with the angle in `[0, π]`.
///
/// `q` and `-q` give the same result.
#[must_use]
pub fn axis_angle_from_quaternion(quaternion: &Quaternion) -> AxisAngle {
    if quaternion.contains_nan() {
        return nan_axis_angle();
    }
    let q = quaternion.normalized_and_limited_to_pi();
    let sin_half = norm3(q.x, q.y, q.z);
    if sin_half < ZERO_EPS {
        return AxisAngle::identity();
    }
    let angle = 2.0 * sin_half.atan2(q.s);
    AxisAngle::new(q.x / sin_half, q.y / sin_half, q.z / sin_half, angle)
}

/// Axis-angle of a rotation matrix, with the angle in `[0, π]`.
#[must_use]
pub fn axis_angle_from_rotation_matrix(rotation: &RotationMatrix) -> AxisAngle {
    if rotation.contains_nan() {
        return nan_axis_angle();
    }
    matrix_log(rotation)
}

/// Axis-angle of a yaw-pitch-roll, through quaternion coordinates.
#[must_use]
pub fn axis_angle_from_yaw_pitch_roll(ypr: &YawPitchRoll) -> AxisAngle {
    axis_angle_from_quaternion(&quaternion_from_yaw_pitch_roll(ypr))
}

/// Axis-angle of a rotation vector (axis scaled by angle).
#[must_use]
pub fn axis_angle_from_rotation_vector(rotation_vector: &Vector3) -> AxisAngle {
    let angle = norm3(rotation_vector.x, rotation_vector.y, rotation_vector.z);
    if angle.is_nan() {
        return nan_axis_angle();
    }
    if angle < ZERO_EPS {
        return AxisAngle::identity();
    }
    AxisAngle::from_axis(&(rotation_vector / angle), angle)
}

/// Rotation vector (unit axis scaled by angle) of an axis-angle.
#[must_use]
pub fn rotation_vector_from_axis_angle(axis_angle: &AxisAngle) -> Vector3 {
    let norm = axis_angle.axis_norm();
    if norm < ZERO_EPS {
        return Vector3::zeros();
    }
    axis_angle.axis() * (axis_angle.angle / norm)
}

/// Logarithm of a rotation matrix as an axis-angle.
///
/// The angle comes from the skew-symmetric part
/// `(m21 - m12, m02 - m20, m10 - m01)`, whose norm is `2 sin(angle)`. When that
/// norm vanishes the rotation is either the identity or a half turn; for the
/// half turn the axis is read from the largest diagonal term of `(R + I) / 2`.
pub(crate) fn matrix_log(r: &RotationMatrix) -> AxisAngle {
    let x = r.m21 - r.m12;
    let y = r.m02 - r.m20;
    let z = r.m10 - r.m01;
    let skew_norm = norm3(x, y, z);
    let trace = r.trace();

    if skew_norm > ZERO_EPS {
        let angle = (0.5 * skew_norm).atan2(0.5 * (trace - 1.0));
        return AxisAngle::new(x / skew_norm, y / skew_norm, z / skew_norm, angle);
    }

    // trace is 3 for the identity and -1 for a half turn.
    if trace > 1.0 {
        return AxisAngle::identity();
    }

    tracing::trace!("matrix logarithm at the half-turn singularity");
    let xx = 0.5 * (r.m00 + 1.0);
    let yy = 0.5 * (r.m11 + 1.0);
    let zz = 0.5 * (r.m22 + 1.0);
    let xy = 0.25 * (r.m01 + r.m10);
    let xz = 0.25 * (r.m02 + r.m20);
    let yz = 0.25 * (r.m12 + r.m21);

    let (ux, uy, uz) = if xx > yy && xx > zz {
        let ux = xx.sqrt();
        (ux, xy / ux, xz / ux)
    } else if yy > zz {
        let uy = yy.sqrt();
        (xy / uy, uy, yz / uy)
    } else {
        let uz = zz.sqrt();
        (xz / uz, yz / uz, uz)
    };
    let norm = norm3(ux, uy, uz);
    AxisAngle::new(ux / norm, uy / norm, uz / norm, PI)
}
