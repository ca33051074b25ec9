use crate::algebra;
use crate::error::{OrientationError, Result};
use crate::math::{contains_nan, epsilon_equals, Vector3};

/// Yaw, pitch and roll angles in radians.
///
/// The rotation is `Rz(yaw) * Ry(pitch) * Rx(roll)`. Pitch is expected in
/// `[-π/2, π/2]`; at its bounds yaw and roll are coupled (gimbal lock).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct YawPitchRoll {
    /// Rotation about the Z-axis.
    pub yaw: f64,
    /// Rotation about the Y-axis.
    pub pitch: f64,
    /// Rotation about the X-axis.
    pub roll: f64,
}

impl YawPitchRoll {
    #[must_use]
    pub fn new(yaw: f64, pitch: f64, roll: f64) -> Self {
        Self { yaw, pitch, roll }
    }

    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn nan() -> Self {
        Self::new(f64::NAN, f64::NAN, f64::NAN)
    }

    #[must_use]
    pub fn is_zero(&self, epsilon: f64) -> bool {
        self.yaw.abs() <= epsilon && self.pitch.abs() <= epsilon && self.roll.abs() <= epsilon
    }

    /// Returns `true` if pitch and roll are both within `epsilon` of zero.
    #[must_use]
    pub fn is_orientation_2d(&self, epsilon: f64) -> bool {
        self.pitch.abs() <= epsilon && self.roll.abs() <= epsilon
    }

    /// # Errors
    ///
    /// Returns [`OrientationError::NotAnOrientation2D`] if pitch or roll is not zero.
    pub fn check_if_orientation_2d(&self, epsilon: f64) -> Result<()> {
        if self.is_orientation_2d(epsilon) {
            Ok(())
        } else {
            Err(OrientationError::NotAnOrientation2D {
                yaw: self.yaw,
                pitch: self.pitch,
                roll: self.roll,
            }
            .into())
        }
    }

    #[must_use]
    pub fn contains_nan(&self) -> bool {
        contains_nan(&[self.yaw, self.pitch, self.roll])
    }

    /// Angle-wise comparison; use [`geometrically_equals`](Self::geometrically_equals)
    /// to compare rotations.
    #[must_use]
    pub fn epsilon_equals(&self, other: &Self, epsilon: f64) -> bool {
        epsilon_equals(self.yaw, other.yaw, epsilon)
            && epsilon_equals(self.pitch, other.pitch, epsilon)
            && epsilon_equals(self.roll, other.roll, epsilon)
    }

    #[must_use]
    pub fn geometrically_equals(&self, other: &Self, epsilon: f64) -> bool {
        algebra::yaw_pitch_roll::distance(self, other) <= epsilon
    }

    #[must_use]
    pub fn transform(&self, vector: &Vector3) -> Vector3 {
        algebra::yaw_pitch_roll::transform(self, vector)
    }

    #[must_use]
    pub fn inverse_transform(&self, vector: &Vector3) -> Vector3 {
        algebra::yaw_pitch_roll::inverse_transform(self, vector)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn predicates() {
        assert!(YawPitchRoll::zero().is_zero(0.0));
        assert!(YawPitchRoll::new(1.0, 0.0, 0.0).is_orientation_2d(1e-12));
        assert!(!YawPitchRoll::new(1.0, 0.0, 0.0).is_zero(1e-12));
        assert!(!YawPitchRoll::new(1.0, 1e-6, 0.0).is_orientation_2d(1e-12));
        assert!(YawPitchRoll::new(0.0, 0.0, f64::NAN).contains_nan());
    }

    #[test]
    fn check_if_orientation_2d_reports_angles() {
        let ypr = YawPitchRoll::new(0.1, 0.2, 0.3);
        let err = ypr.check_if_orientation_2d(1e-12).unwrap_err();
        assert_eq!(
            err.to_string(),
            "orientation is not 2D: yaw = 0.1, pitch = 0.2, roll = 0.3"
        );
        assert!(YawPitchRoll::new(0.1, 0.0, 0.0).check_if_orientation_2d(1e-12).is_ok());
    }

    #[test]
    fn gimbal_lock_representations_are_geometrically_equal() {
        // At pitch = π/2 only yaw - roll matters.
        let a = YawPitchRoll::new(0.5, PI / 2.0, 0.2);
        let b = YawPitchRoll::new(0.8, PI / 2.0, 0.5);
        assert!(!a.epsilon_equals(&b, 1e-6));
        assert!(a.geometrically_equals(&b, 1e-7));
    }
}
