use crate::algebra;
use crate::math::{
    contains_nan, epsilon_equals, norm3, trim_angle_minus_pi_to_pi, Vector3, ZERO_EPS,
};

/// A rotation of `angle` radians about the axis `(x, y, z)`.
///
/// The axis does not have to be unit length: every routine consuming an
/// axis-angle divides by the axis norm. An axis whose norm is below
/// [`ZERO_EPS`] describes the identity rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAngle {
    /// X component of the rotation axis.
    pub x: f64,
    /// Y component of the rotation axis.
    pub y: f64,
    /// Z component of the rotation axis.
    pub z: f64,
    /// Rotation angle in radians.
    pub angle: f64,
}

impl Default for AxisAngle {
    fn default() -> Self {
        Self::identity()
    }
}

impl AxisAngle {
    /// Creates a new axis-angle. The axis is stored as given.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64, angle: f64) -> Self {
        Self { x, y, z, angle }
    }

    /// Creates an axis-angle from an axis vector and an angle.
    #[must_use]
    pub fn from_axis(axis: &Vector3, angle: f64) -> Self {
        Self::new(axis.x, axis.y, axis.z, angle)
    }

    /// The identity rotation: zero angle about the X-axis.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Pure rotation about the Z-axis.
    #[must_use]
    pub fn from_yaw(yaw: f64) -> Self {
        Self::new(0.0, 0.0, 1.0, yaw)
    }

    /// Pure rotation about the Y-axis.
    #[must_use]
    pub fn from_pitch(pitch: f64) -> Self {
        Self::new(0.0, 1.0, 0.0, pitch)
    }

    /// Pure rotation about the X-axis.
    #[must_use]
    pub fn from_roll(roll: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, roll)
    }

    /// Returns the axis as stored, not normalized.
    #[must_use]
    pub fn axis(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    #[must_use]
    pub fn axis_norm(&self) -> f64 {
        norm3(self.x, self.y, self.z)
    }

    /// Returns `true` if the axis is too short to define a rotation.
    #[must_use]
    pub fn has_degenerate_axis(&self) -> bool {
        self.axis_norm() < ZERO_EPS
    }

    /// Returns `true` if this axis-angle describes the identity within `epsilon`.
    #[must_use]
    pub fn is_zero_orientation(&self, epsilon: f64) -> bool {
        self.has_degenerate_axis() || trim_angle_minus_pi_to_pi(self.angle).abs() <= epsilon
    }

    /// Returns `true` if this rotation only rotates about the Z-axis.
    #[must_use]
    pub fn is_orientation_2d(&self, epsilon: f64) -> bool {
        if self.is_zero_orientation(epsilon) {
            return true;
        }
        let norm = self.axis_norm();
        (self.x / norm).abs() <= epsilon && (self.y / norm).abs() <= epsilon
    }

    #[must_use]
    pub fn contains_nan(&self) -> bool {
        contains_nan(&[self.x, self.y, self.z, self.angle])
    }

    /// Returns the inverse rotation (same axis, negated angle).
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self::new(self.x, self.y, self.z, -self.angle)
    }

    /// Returns a copy with a unit-length axis.
    ///
    /// A degenerate axis yields [`AxisAngle::identity`].
    #[must_use]
    pub fn normalized(&self) -> Self {
        let norm = self.axis_norm();
        if norm < ZERO_EPS {
            return Self::identity();
        }
        Self::new(self.x / norm, self.y / norm, self.z / norm, self.angle)
    }

    /// Component-wise comparison.
    #[must_use]
    pub fn epsilon_equals(&self, other: &Self, epsilon: f64) -> bool {
        epsilon_equals(self.x, other.x, epsilon)
            && epsilon_equals(self.y, other.y, epsilon)
            && epsilon_equals(self.z, other.z, epsilon)
            && epsilon_equals(self.angle, other.angle, epsilon)
    }

    /// Returns `true` if both axis-angles describe the same rotation within `epsilon`.
    ///
    /// A degenerate axis counts as the identity.
    #[must_use]
    pub fn geometrically_equals(&self, other: &Self, epsilon: f64) -> bool {
        if self.has_degenerate_axis() {
            return other.is_zero_orientation(epsilon);
        }
        if other.has_degenerate_axis() {
            return self.is_zero_orientation(epsilon);
        }
        let distance = algebra::axis_angle::distance(self, other);
        distance <= epsilon || (std::f64::consts::TAU - distance) <= epsilon
    }

    /// Rotates `vector` by this axis-angle.
    #[must_use]
    pub fn transform(&self, vector: &Vector3) -> Vector3 {
        algebra::axis_angle::transform(self, vector)
    }

    /// Rotates `vector` by the inverse of this axis-angle.
    #[must_use]
    pub fn inverse_transform(&self, vector: &Vector3) -> Vector3 {
        algebra::axis_angle::inverse_transform(self, vector)
    }
}
