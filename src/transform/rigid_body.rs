use crate::algebra::rotation_matrix;
use crate::conversion::quaternion_from_rotation_matrix;
use crate::error::{Result, TransformError};
use crate::math::{epsilon_equals, Matrix3, Matrix4, Point3, Vector3, ZERO_EPS};
use crate::orientation::{Orientation, Quaternion, RotationMatrix};

use super::{homogeneous, Transform};

/// A rotation followed by a translation: `p ↦ R p + t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidBodyTransform {
    rotation: RotationMatrix,
    translation: Vector3,
}

impl Default for RigidBodyTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl RigidBodyTransform {
    #[must_use]
    pub fn identity() -> Self {
        Self::new(RotationMatrix::identity(), Vector3::zeros())
    }

    #[must_use]
    pub fn new(rotation: RotationMatrix, translation: Vector3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Builds a transform from any rotation representation.
    #[must_use]
    pub fn from_orientation(orientation: impl Into<Orientation>, translation: Vector3) -> Self {
        Self::new(orientation.into().to_rotation_matrix(), translation)
    }

    #[must_use]
    pub fn from_translation(translation: Vector3) -> Self {
        Self::new(RotationMatrix::identity(), translation)
    }

    /// Reads a homogeneous matrix.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::NotAffine`] if the bottom row is not
    /// `[0, 0, 0, 1]`, or
    /// [`OrientationError::NotARotationMatrix`](crate::error::OrientationError::NotARotationMatrix)
    /// if the upper-left block is not a rotation.
    pub fn try_from_matrix4(matrix: &Matrix4) -> Result<Self> {
        check_affine(matrix)?;
        let linear: Matrix3 = matrix.fixed_view::<3, 3>(0, 0).into_owned();
        let rotation = RotationMatrix::try_from_matrix3(&linear)?;
        Ok(Self::new(rotation, matrix.fixed_view::<3, 1>(0, 3).into_owned()))
    }

    #[must_use]
    pub fn rotation(&self) -> &RotationMatrix {
        &self.rotation
    }

    /// Computes `self * other`.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        Self::new(
            rotation_matrix::multiply(&self.rotation, &other.rotation),
            self.rotation.transform(&other.translation) + self.translation,
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
            rotation_matrix::multiply_transpose_left(&self.rotation, &other.rotation),
            self.rotation
                .inverse_transform(&(other.translation - self.translation)),
        )
    }

    /// Computes `self * other⁻¹`.
    #[must_use]
    pub fn multiply_inverse_right(&self, other: &Self) -> Self {
        let rotation = rotation_matrix::multiply_transpose_right(&self.rotation, &other.rotation);
        let translation = self.translation - rotation.transform(&other.translation);
        Self::new(rotation, translation)
    }

    #[must_use]
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.transpose();
        Self::new(rotation, -rotation.transform(&self.translation))
    }

    /// Computes `self * Rz(yaw)`; the translation is unchanged.
    #[must_use]
    pub fn append_yaw(&self, yaw: f64) -> Self {
        Self::new(rotation_matrix::append_yaw(&self.rotation, yaw), self.translation)
    }

    #[must_use]
    pub fn append_pitch(&self, pitch: f64) -> Self {
        Self::new(rotation_matrix::append_pitch(&self.rotation, pitch), self.translation)
    }

    #[must_use]
    pub fn append_roll(&self, roll: f64) -> Self {
        Self::new(rotation_matrix::append_roll(&self.rotation, roll), self.translation)
    }

    /// Translates after this transform: `T(translation) * self`.
    #[must_use]
    pub fn prepend_translation(&self, translation: &Vector3) -> Self {
        Self::new(self.rotation, self.translation + translation)
    }

    /// Translates before this transform: `self * T(translation)`.
    #[must_use]
    pub fn append_translation(&self, translation: &Vector3) -> Self {
        Self::new(self.rotation, self.translation + self.rotation.transform(translation))
    }

    /// Computes `R * rotation`.
    #[must_use]
    pub fn transform_rotation_matrix(&self, rotation: &RotationMatrix) -> RotationMatrix {
        rotation_matrix::multiply(&self.rotation, rotation)
    }

    /// Computes `q(R) * quaternion`.
    #[must_use]
    pub fn transform_quaternion(&self, quaternion: &Quaternion) -> Quaternion {
        rotation_matrix::transform_quaternion(&self.rotation, quaternion)
    }

    /// Computes `R * matrix * Rᵀ`.
    #[must_use]
    pub fn transform_matrix3(&self, matrix: &Matrix3) -> Matrix3 {
        rotation_matrix::transform_matrix3(&self.rotation, matrix)
    }

    #[must_use]
    pub fn to_quaternion(&self) -> Quaternion {
        quaternion_from_rotation_matrix(&self.rotation)
    }

    #[must_use]
    pub fn epsilon_equals(&self, other: &Self, epsilon: f64) -> bool {
        self.rotation.epsilon_equals(&other.rotation, epsilon)
            && self
                .translation
                .iter()
                .zip(other.translation.iter())
                .all(|(a, b)| epsilon_equals(*a, *b, epsilon))
    }
}

impl Transform for RigidBodyTransform {
    fn transform_point(&self, point: &Point3) -> Point3 {
        Point3::from(self.rotation.transform(&point.coords) + self.translation)
    }

    fn inverse_transform_point(&self, point: &Point3) -> Point3 {
        Point3::from(self.rotation.inverse_transform(&(point.coords - self.translation)))
    }

    fn transform_vector(&self, vector: &Vector3) -> Vector3 {
        self.rotation.transform(vector)
    }

    fn inverse_transform_vector(&self, vector: &Vector3) -> Vector3 {
        self.rotation.inverse_transform(vector)
    }

    fn translation(&self) -> Vector3 {
        self.translation
    }

    fn to_matrix4(&self) -> Matrix4 {
        homogeneous(&self.rotation.as_matrix3(), &self.translation)
    }

    fn has_rotation(&self) -> bool {
        !self.rotation.is_identity(ZERO_EPS)
    }
}

impl std::ops::Mul for RigidBodyTransform {
    type Output = RigidBodyTransform;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

/// Fails unless the bottom row of `matrix` is `[0, 0, 0, 1]`.
pub(super) fn check_affine(matrix: &Matrix4) -> Result<()> {
    let row = [matrix[(3, 0)], matrix[(3, 1)], matrix[(3, 2)], matrix[(3, 3)]];
    let expected = [0.0, 0.0, 0.0, 1.0];
    if row
        .iter()
        .zip(expected.iter())
        .all(|(a, b)| epsilon_equals(*a, *b, ZERO_EPS))
    {
        Ok(())
    } else {
        Err(TransformError::NotAffine(row).into())
    }
}
