use crate::algebra::quaternion;
use crate::conversion::{quaternion_from_rotation_matrix, rotation_matrix_from_quaternion};
use crate::error::Result;
use crate::math::{epsilon_equals, Matrix3, Matrix4, Point3, Vector3, ZERO_EPS};
use crate::orientation::{Orientation, Quaternion, RotationMatrix};

use super::{homogeneous, RigidBodyTransform, Transform};

/// A rigid transform whose rotation is stored as a unit quaternion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuaternionBasedTransform {
    quaternion: Quaternion,
    translation: Vector3,
}

impl Default for QuaternionBasedTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl QuaternionBasedTransform {
    #[must_use]
    pub fn identity() -> Self {
        Self::new(Quaternion::identity(), Vector3::zeros())
    }

    /// The quaternion is normalized.
    #[must_use]
    pub fn new(quaternion: Quaternion, translation: Vector3) -> Self {
        Self {
            quaternion: quaternion.normalized(),
            translation,
        }
    }

    #[must_use]
    pub fn from_orientation(orientation: impl Into<Orientation>, translation: Vector3) -> Self {
        Self::new(orientation.into().to_quaternion_coordinates(), translation)
    }

    #[must_use]
    pub fn from_translation(translation: Vector3) -> Self {
        Self::new(Quaternion::identity(), translation)
    }

    /// Reads a homogeneous matrix.
    ///
    /// # Errors
    ///
    /// Same as [`RigidBodyTransform::try_from_matrix4`].
    pub fn try_from_matrix4(matrix: &Matrix4) -> Result<Self> {
        Ok(RigidBodyTransform::try_from_matrix4(matrix)?.into())
    }

    #[must_use]
    pub fn quaternion(&self) -> &Quaternion {
        &self.quaternion
    }

    /// Computes `self * other`.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        Self::new(
            quaternion::multiply(&self.quaternion, false, &other.quaternion, false),
            quaternion::transform(&self.quaternion, &other.translation) + self.translation,
        )
    }

    /// Computes `other * self`.
    #[must_use]
    pub fn pre_multiply(&self, other: &Self) -> Self {
        other.multiply(self)
    }

    /// Computes `self⁻¹ * other`.
    #[must_use]
    pub fn multiply_inverse_left(&self, other: &Self) -> Self {
        Self::new(
            quaternion::multiply(&self.quaternion, true, &other.quaternion, false),
            quaternion::inverse_transform(
                &self.quaternion,
                &(other.translation - self.translation),
            ),
        )
    }

    /// Computes `self * other⁻¹`.
    #[must_use]
    pub fn multiply_inverse_right(&self, other: &Self) -> Self {
        let q = quaternion::multiply(&self.quaternion, false, &other.quaternion, true);
        let translation = self.translation - quaternion::transform(&q, &other.translation);
        Self::new(q, translation)
    }

    #[must_use]
    pub fn inverse(&self) -> Self {
        let q = self.quaternion.conjugate();
        Self::new(q, -quaternion::transform(&q, &self.translation))
    }

    #[must_use]
    pub fn append_yaw(&self, yaw: f64) -> Self {
        Self::new(quaternion::append_yaw(&self.quaternion, yaw), self.translation)
    }

    #[must_use]
    pub fn append_pitch(&self, pitch: f64) -> Self {
        Self::new(quaternion::append_pitch(&self.quaternion, pitch), self.translation)
    }

    #[must_use]
    pub fn append_roll(&self, roll: f64) -> Self {
        Self::new(quaternion::append_roll(&self.quaternion, roll), self.translation)
    }

    /// `T(translation) * self`.
    #[must_use]
    pub fn prepend_translation(&self, translation: &Vector3) -> Self {
        Self::new(self.quaternion, self.translation + translation)
    }

    /// `self * T(translation)`.
    #[must_use]
    pub fn append_translation(&self, translation: &Vector3) -> Self {
        Self::new(
            self.quaternion,
            self.translation + quaternion::transform(&self.quaternion, translation),
        )
    }

    #[must_use]
    pub fn transform_rotation_matrix(&self, rotation: &RotationMatrix) -> RotationMatrix {
        quaternion::transform_rotation_matrix(&self.quaternion, rotation)
    }

    #[must_use]
    pub fn transform_quaternion(&self, other: &Quaternion) -> Quaternion {
        quaternion::transform_quaternion(&self.quaternion, other)
    }

    /// Computes `R(q) * matrix * R(q)ᵀ`.
    #[must_use]
    pub fn transform_matrix3(&self, matrix: &Matrix3) -> Matrix3 {
        quaternion::transform_matrix3(&self.quaternion, matrix)
    }

    /// Component-wise comparison; `q` and `-q` are not considered equal.
    #[must_use]
    pub fn epsilon_equals(&self, other: &Self, epsilon: f64) -> bool {
        self.quaternion.epsilon_equals(&other.quaternion, epsilon)
            && self
                .translation
                .iter()
                .zip(other.translation.iter())
                .all(|(a, b)| epsilon_equals(*a, *b, epsilon))
    }
}

impl Transform for QuaternionBasedTransform {
    fn transform_point(&self, point: &Point3) -> Point3 {
        Point3::from(quaternion::transform(&self.quaternion, &point.coords) + self.translation)
    }

    fn inverse_transform_point(&self, point: &Point3) -> Point3 {
        Point3::from(quaternion::inverse_transform(
            &self.quaternion,
            &(point.coords - self.translation),
        ))
    }

    fn transform_vector(&self, vector: &Vector3) -> Vector3 {
        quaternion::transform(&self.quaternion, vector)
    }

    fn inverse_transform_vector(&self, vector: &Vector3) -> Vector3 {
        quaternion::inverse_transform(&self.quaternion, vector)
    }

    fn translation(&self) -> Vector3 {
        self.translation
    }

    fn to_matrix4(&self) -> Matrix4 {
        homogeneous(
            &rotation_matrix_from_quaternion(&self.quaternion).as_matrix3(),
            &self.translation,
        )
    }

    fn has_rotation(&self) -> bool {
        !self.quaternion.is_zero_orientation(ZERO_EPS)
    }
}

impl std::ops::Mul for QuaternionBasedTransform {
    type Output = QuaternionBasedTransform;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl From<RigidBodyTransform> for QuaternionBasedTransform {
    fn from(rigid: RigidBodyTransform) -> Self {
        Self::new(quaternion_from_rotation_matrix(rigid.rotation()), rigid.translation())
    }
}

impl From<QuaternionBasedTransform> for RigidBodyTransform {
    fn from(transform: QuaternionBasedTransform) -> Self {
        Self::new(
            rotation_matrix_from_quaternion(&transform.quaternion),
            transform.translation,
        )
    }
}
