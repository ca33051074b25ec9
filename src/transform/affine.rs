use crate::algebra::rotation_matrix;
use crate::error::{Result, RotalisError, TransformError};
use crate::math::{epsilon_equals, Matrix3, Matrix4, Point3, Vector3, ZERO_EPS};
use crate::orientation::RotationMatrix;

use super::{homogeneous, RigidBodyTransform, Transform};

/// A positive per-axis scale, then a rotation, then a translation:
/// `p ↦ R (s ⊙ p) + t`.
///
/// The linear part is always kept in `R · diag(s)` form; compositions that
/// would introduce shear are rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    rotation: RotationMatrix,
    scale: Vector3,
    translation: Vector3,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    #[must_use]
    pub fn identity() -> Self {
        Self::from_rigid(&RigidBodyTransform::identity())
    }

    /// # Errors
    ///
    /// Returns [`TransformError::InvalidScale`] if a scale component is not
    /// strictly positive (NaN included).
    pub fn new(rotation: RotationMatrix, scale: Vector3, translation: Vector3) -> Result<Self> {
        for (axis, value) in ['x', 'y', 'z'].into_iter().zip(scale.iter()) {
            if value.is_nan() || *value <= 0.0 {
                return Err(TransformError::InvalidScale {
                    axis,
                    value: *value,
                }
                .into());
            }
        }
        Ok(Self {
            rotation,
            scale,
            translation,
        })
    }

    /// Unit scale around a rigid transform.
    #[must_use]
    pub fn from_rigid(rigid: &RigidBodyTransform) -> Self {
        Self {
            rotation: *rigid.rotation(),
            scale: Vector3::repeat(1.0),
            translation: rigid.translation(),
        }
    }

    #[must_use]
    pub fn rotation(&self) -> &RotationMatrix {
        &self.rotation
    }

    #[must_use]
    pub fn scale(&self) -> Vector3 {
        self.scale
    }

    /// Rotation and translation with the scale dropped.
    #[must_use]
    pub fn rigid_part(&self) -> RigidBodyTransform {
        RigidBodyTransform::new(self.rotation, self.translation)
    }

    #[must_use]
    pub fn has_scale(&self) -> bool {
        self.scale.iter().any(|s| (s - 1.0).abs() > ZERO_EPS)
    }

    #[must_use]
    pub fn has_uniform_scale(&self) -> bool {
        epsilon_equals(self.scale.x, self.scale.y, ZERO_EPS)
            && epsilon_equals(self.scale.x, self.scale.z, ZERO_EPS)
    }

    /// Computes `rigid * self`, which is always representable.
    #[must_use]
    pub fn pre_multiply_rigid(&self, rigid: &RigidBodyTransform) -> Self {
        Self {
            rotation: rotation_matrix::multiply(rigid.rotation(), &self.rotation),
            scale: self.scale,
            translation: rigid.rotation().transform(&self.translation) + rigid.translation(),
        }
    }

    /// Computes `self * other`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::NonRepresentableScale`] if `self` has a
    /// non-uniform scale and `other` rotates.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        self.compose(&other.rotation, &other.scale, &other.translation)
    }

    /// Computes `other * self`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::NonRepresentableScale`] if `other` has a
    /// non-uniform scale and `self` rotates.
    pub fn pre_multiply(&self, other: &Self) -> Result<Self> {
        other.multiply(self)
    }

    /// Computes `self * rigid`.
    ///
    /// # Errors
    ///
    /// Same as [`AffineTransform::multiply`].
    pub fn multiply_rigid(&self, rigid: &RigidBodyTransform) -> Result<Self> {
        self.compose(rigid.rotation(), &Vector3::repeat(1.0), &rigid.translation())
    }

    fn compose(
        &self,
        rotation: &RotationMatrix,
        scale: &Vector3,
        translation: &Vector3,
    ) -> Result<Self> {
        // R1 S1 R2 S2 = (R1 R2) (S1 S2) when S1 commutes with R2.
        if !self.has_uniform_scale() && !rotation.is_identity(ZERO_EPS) {
            tracing::debug!(
                scale = ?self.scale,
                "non-uniform scale followed by a rotation has no rotation * scale form"
            );
            return Err(self.non_representable());
        }
        Ok(Self {
            rotation: rotation_matrix::multiply(&self.rotation, rotation),
            scale: self.scale.component_mul(scale),
            translation: self.rotation.transform(&self.scale.component_mul(translation))
                + self.translation,
        })
    }

    /// The inverse `S⁻¹ Rᵀ (p - t)`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::NonRepresentableScale`] if the scale is
    /// non-uniform and the rotation is not the identity.
    pub fn inverse(&self) -> Result<Self> {
        if !self.has_uniform_scale() && !self.rotation.is_identity(ZERO_EPS) {
            tracing::debug!(scale = ?self.scale, "inverse of a non-uniformly scaled rotation");
            return Err(self.non_representable());
        }
        let inverse_scale = self.scale.map(f64::recip);
        Ok(Self {
            rotation: self.rotation.transpose(),
            scale: inverse_scale,
            translation: -self
                .rotation
                .inverse_transform(&self.translation)
                .component_mul(&inverse_scale),
        })
    }

    /// The linear part `R · diag(s)`.
    #[must_use]
    pub fn linear_part(&self) -> Matrix3 {
        self.rotation.as_matrix3() * Matrix3::from_diagonal(&self.scale)
    }

    #[must_use]
    pub fn epsilon_equals(&self, other: &Self, epsilon: f64) -> bool {
        let vectors_equal = |a: &Vector3, b: &Vector3| {
            a.iter()
                .zip(b.iter())
                .all(|(x, y)| epsilon_equals(*x, *y, epsilon))
        };
        self.rotation.epsilon_equals(&other.rotation, epsilon)
            && vectors_equal(&self.scale, &other.scale)
            && vectors_equal(&self.translation, &other.translation)
    }

    fn non_representable(&self) -> RotalisError {
        TransformError::NonRepresentableScale {
            scale: [self.scale.x, self.scale.y, self.scale.z],
        }
        .into()
    }
}

impl Transform for AffineTransform {
    fn transform_point(&self, point: &Point3) -> Point3 {
        Point3::from(self.transform_vector(&point.coords) + self.translation)
    }

    fn inverse_transform_point(&self, point: &Point3) -> Point3 {
        Point3::from(self.inverse_transform_vector(&(point.coords - self.translation)))
    }

    fn transform_vector(&self, vector: &Vector3) -> Vector3 {
        self.rotation.transform(&self.scale.component_mul(vector))
    }

    fn inverse_transform_vector(&self, vector: &Vector3) -> Vector3 {
        self.rotation
            .inverse_transform(vector)
            .component_div(&self.scale)
    }

    fn translation(&self) -> Vector3 {
        self.translation
    }

    fn to_matrix4(&self) -> Matrix4 {
        homogeneous(&self.linear_part(), &self.translation)
    }

    fn has_rotation(&self) -> bool {
        !self.rotation.is_identity(ZERO_EPS)
    }
}

impl From<RigidBodyTransform> for AffineTransform {
    fn from(rigid: RigidBodyTransform) -> Self {
        Self::from_rigid(&rigid)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::conversion::rotation_matrix_from_axis_angle;
    use crate::orientation::AxisAngle;
    use approx::assert_abs_diff_eq;

    const TOL: f64 = 1e-12;

    fn rotation(angle: f64) -> RotationMatrix {
        rotation_matrix_from_axis_angle(&AxisAngle::new(0.3, -1.0, 0.8, angle))
    }

    #[test]
    fn rejects_non_positive_scale() {
        for (scale, axis) in [
            (Vector3::new(0.0, 1.0, 1.0), 'x'),
            (Vector3::new(1.0, -2.0, 1.0), 'y'),
            (Vector3::new(1.0, 1.0, f64::NAN), 'z'),
        ] {
            let err = AffineTransform::new(RotationMatrix::identity(), scale, Vector3::zeros())
                .unwrap_err();
            assert!(matches!(
                err,
                RotalisError::Transform(TransformError::InvalidScale { axis: a, .. }) if a == axis
            ));
        }
    }

    #[test]
    fn forward_and_inverse_points() {
        let t = AffineTransform::new(
            rotation(0.9),
            Vector3::new(2.0, 0.5, 3.0),
            Vector3::new(1.0, -1.0, 2.0),
        )
        .unwrap();
        let p = Point3::new(0.4, 1.5, -0.7);
        let moved = t.transform_point(&p);
        let expected = t.linear_part() * p.coords + Vector3::new(1.0, -1.0, 2.0);
        assert_abs_diff_eq!(moved.coords, expected, epsilon = TOL);
        assert_abs_diff_eq!(t.inverse_transform_point(&moved), p, epsilon = TOL);

        let h = t.to_matrix4() * p.to_homogeneous();
        assert_abs_diff_eq!(h.xyz(), moved.coords, epsilon = TOL);
    }

    #[test]
    fn uniform_scale_composes_and_inverts() {
        let a = AffineTransform::new(rotation(0.4), Vector3::repeat(2.0), Vector3::new(1.0, 0.0, 0.0))
            .unwrap();
        let b = AffineTransform::new(rotation(-1.3), Vector3::new(1.0, 3.0, 0.5), Vector3::new(0.0, 2.0, 1.0))
            .unwrap();
        let p = Point3::new(0.1, 0.2, 0.3);

        let ab = a.multiply(&b).unwrap();
        assert_abs_diff_eq!(ab.transform_point(&p), a.transform_point(&b.transform_point(&p)), epsilon = TOL);
        let pre = b.pre_multiply(&a).unwrap();
        assert!(pre.epsilon_equals(&ab, TOL));
        assert!(a.pre_multiply(&b).is_err());

        let inverse = a.inverse().unwrap();
        assert_abs_diff_eq!(inverse.transform_point(&a.transform_point(&p)), p, epsilon = TOL);
        assert!(a.multiply(&inverse).unwrap().epsilon_equals(&AffineTransform::identity(), TOL));
    }

    #[test]
    fn non_uniform_scale_with_rotation_is_rejected() {
        let a = AffineTransform::new(rotation(0.4), Vector3::new(1.0, 2.0, 3.0), Vector3::zeros())
            .unwrap();
        let b = AffineTransform::new(rotation(0.2), Vector3::repeat(1.0), Vector3::zeros()).unwrap();
        assert!(matches!(
            a.multiply(&b).unwrap_err(),
            RotalisError::Transform(TransformError::NonRepresentableScale { .. })
        ));
        assert!(a.multiply_rigid(&b.rigid_part()).is_err());
        assert!(b.pre_multiply(&a).is_err());
        assert!(a.inverse().is_err());

        // A pure scale can still be inverted and composed with translations.
        let stretch = AffineTransform::new(
            RotationMatrix::identity(),
            Vector3::new(1.0, 2.0, 4.0),
            Vector3::new(1.0, 1.0, 1.0),
        )
        .unwrap();
        let p = Point3::new(3.0, -1.0, 0.5);
        let inverse = stretch.inverse().unwrap();
        assert_abs_diff_eq!(inverse.transform_point(&stretch.transform_point(&p)), p, epsilon = TOL);
        let shifted = stretch
            .multiply_rigid(&RigidBodyTransform::from_translation(Vector3::new(0.0, 1.0, 0.0)))
            .unwrap();
        assert_abs_diff_eq!(shifted.translation(), Vector3::new(1.0, 3.0, 1.0), epsilon = TOL);
    }

    #[test]
    fn pre_multiply_rigid_is_exact() {
        let a = AffineTransform::new(rotation(1.1), Vector3::new(1.0, 2.0, 3.0), Vector3::new(0.5, 0.5, 0.5))
            .unwrap();
        let rigid = RigidBodyTransform::new(rotation(-0.6), Vector3::new(-1.0, 0.0, 2.0));
        let p = Point3::new(1.0, 1.0, 1.0);
        let composed = a.pre_multiply_rigid(&rigid);
        assert_abs_diff_eq!(
            composed.transform_point(&p),
            rigid.transform_point(&a.transform_point(&p)),
            epsilon = TOL
        );
        assert_eq!(composed.scale(), a.scale());
    }

    #[test]
    fn rigid_part_and_flags() {
        let rigid = RigidBodyTransform::new(rotation(0.3), Vector3::new(1.0, 2.0, 3.0));
        let a = AffineTransform::from(rigid);
        assert!(a.rigid_part().epsilon_equals(&rigid, 0.0));
        assert!(!a.has_scale());
        assert!(a.has_rotation());
        assert!(a.has_translation());
        assert!(!AffineTransform::identity().has_rotation());
    }
}
