//! Composite transforms: a rotation (and for [`AffineTransform`] a scale)
//! followed by a translation.
mod affine;
mod quaternion_based;
mod rigid_body;

pub use affine::AffineTransform;
pub use quaternion_based::QuaternionBasedTransform;
pub use rigid_body::RigidBodyTransform;

use crate::math::{Matrix3, Matrix4, Point3, Vector3, Vector4, ZERO_EPS};

/// Common surface of the composite transforms.
///
/// Points are affected by the translation, vectors are not.
pub trait Transform {
    fn transform_point(&self, point: &Point3) -> Point3;

    fn inverse_transform_point(&self, point: &Point3) -> Point3;

    fn transform_vector(&self, vector: &Vector3) -> Vector3;

    fn inverse_transform_vector(&self, vector: &Vector3) -> Vector3;

    fn translation(&self) -> Vector3;

    /// The homogeneous 4x4 matrix of this transform.
    fn to_matrix4(&self) -> Matrix4;

    /// Returns `true` if the rotation part differs from the identity.
    fn has_rotation(&self) -> bool;

    fn has_translation(&self) -> bool {
        self.translation().iter().any(|c| c.abs() > ZERO_EPS)
    }

    /// Transforms a homogeneous vector; the translation is weighted by `w`.
    fn transform_vector4(&self, vector: &Vector4) -> Vector4 {
        let v = self.transform_vector(&vector.xyz()) + self.translation() * vector.w;
        Vector4::new(v.x, v.y, v.z, vector.w)
    }

    fn inverse_transform_vector4(&self, vector: &Vector4) -> Vector4 {
        let v = self.inverse_transform_vector(&(vector.xyz() - self.translation() * vector.w));
        Vector4::new(v.x, v.y, v.z, vector.w)
    }
}

/// Homogeneous matrix with `linear` in the upper-left block.
pub(crate) fn homogeneous(linear: &Matrix3, translation: &Vector3) -> Matrix4 {
    let mut m = Matrix4::identity();
    m.fixed_view_mut::<3, 3>(0, 0).copy_from(linear);
    m.fixed_view_mut::<3, 1>(0, 3).copy_from(translation);
    m
}
