use crate::algebra;
use crate::math::{contains_nan, epsilon_equals, norm3, norm4, Vector3, ZERO_EPS};

/// Unit quaternion `(x, y, z, s)` with `s` the scalar part.
///
/// `q` and `-q` describe the same rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub s: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl Quaternion {
    /// Creates a quaternion and normalizes it.
    ///
    /// A quaternion with a norm below [`ZERO_EPS`] becomes the identity.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64, s: f64) -> Self {
        Self::new_unchecked(x, y, z, s).normalized()
    }

    /// Creates a quaternion from raw components without normalizing.
    #[must_use]
    pub fn new_unchecked(x: f64, y: f64, z: f64, s: f64) -> Self {
        Self { x, y, z, s }
    }

    #[must_use]
    pub fn identity() -> Self {
        Self::new_unchecked(0.0, 0.0, 0.0, 1.0)
    }

    /// Quaternion with every component set to NaN.
    #[must_use]
    pub fn nan() -> Self {
        Self::new_unchecked(f64::NAN, f64::NAN, f64::NAN, f64::NAN)
    }

    #[must_use]
    pub fn vector_part(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    #[must_use]
    pub fn norm(&self) -> f64 {
        norm4(self.x, self.y, self.z, self.s)
    }

    /// Returns the unit quaternion pointing the same way.
    ///
    /// NaN components are kept; a degenerate quaternion becomes the identity.
    #[must_use]
    pub fn normalized(&self) -> Self {
        if self.contains_nan() {
            return Self::nan();
        }
        let norm = self.norm();
        if norm < ZERO_EPS {
            tracing::trace!("degenerate quaternion norm {norm}, using identity");
            return Self::identity();
        }
        let inv = 1.0 / norm;
        Self::new_unchecked(self.x * inv, self.y * inv, self.z * inv, self.s * inv)
    }

    /// Normalizes and flips the sign so that `s >= 0`, which bounds the
    /// rotation angle to `[0, π]`.
    #[must_use]
    pub fn normalized_and_limited_to_pi(&self) -> Self {
        let q = self.normalized();
        if q.s < 0.0 {
            q.negated()
        } else {
            q
        }
    }

    /// The inverse rotation of a unit quaternion.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new_unchecked(-self.x, -self.y, -self.z, self.s)
    }

    /// The antipodal quaternion, which describes the same rotation.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self::new_unchecked(-self.x, -self.y, -self.z, -self.s)
    }

    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.s * other.s
    }

    /// Rotation angle in `[0, 2π]`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        2.0 * norm3(self.x, self.y, self.z).atan2(self.s)
    }

    /// Returns `true` if the rotation angle is within `epsilon` of zero.
    #[must_use]
    pub fn is_zero_orientation(&self, epsilon: f64) -> bool {
        let half = norm3(self.x, self.y, self.z).atan2(self.s.abs());
        2.0 * half <= epsilon
    }

    /// Returns `true` if the rotation is about the Z-axis only.
    #[must_use]
    pub fn is_orientation_2d(&self, epsilon: f64) -> bool {
        self.x.abs() <= epsilon && self.y.abs() <= epsilon
    }

    #[must_use]
    pub fn contains_nan(&self) -> bool {
        contains_nan(&[self.x, self.y, self.z, self.s])
    }

    /// Component-wise comparison; `q` and `-q` are not equal here.
    #[must_use]
    pub fn epsilon_equals(&self, other: &Self, epsilon: f64) -> bool {
        epsilon_equals(self.x, other.x, epsilon)
            && epsilon_equals(self.y, other.y, epsilon)
            && epsilon_equals(self.z, other.z, epsilon)
            && epsilon_equals(self.s, other.s, epsilon)
    }

    /// Returns `true` if both quaternions describe the same rotation within `epsilon`.
    #[must_use]
    pub fn geometrically_equals(&self, other: &Self, epsilon: f64) -> bool {
        algebra::quaternion::distance(self, other) <= epsilon
    }

    /// Rotates `vector` by this quaternion.
    #[must_use]
    pub fn transform(&self, vector: &Vector3) -> Vector3 {
        algebra::quaternion::transform(self, vector)
    }

    /// Rotates `vector` by the conjugate of this quaternion.
    #[must_use]
    pub fn inverse_transform(&self, vector: &Vector3) -> Vector3 {
        algebra::quaternion::inverse_transform(self, vector)
    }
}
