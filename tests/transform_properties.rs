#![allow(clippy::unwrap_used)]

mod common;

use approx::assert_abs_diff_eq;
use common::ITERATIONS;
use rotalis::algebra::CoordinateTransform;
use rotalis::error::TransformError;
use rotalis::math::{Vector3, Vector4};
use rotalis::{
    AffineTransform, QuaternionBasedTransform, RigidBodyTransform, RotalisError, RotationMatrix,
    Transform,
};

const TOL: f64 = 1e-10;

fn assert_round_trips<T: Transform + CoordinateTransform>(t: &T, rng: &mut rand::rngs::StdRng) {
    let p = common::point(rng);
    let v = common::vector(rng, 10.0);
    assert_abs_diff_eq!(t.inverse_transform_point(&t.transform_point(&p)), p, epsilon = TOL);
    assert_abs_diff_eq!(t.inverse_transform_vector(&t.transform_vector(&v)), v, epsilon = TOL);

    let h = Vector4::new(v.x, v.y, v.z, 1.0);
    assert_abs_diff_eq!(t.inverse_transform_vector4(&t.transform_vector4(&h)), h, epsilon = TOL);
    assert_abs_diff_eq!(t.to_matrix4() * h, t.transform_vector4(&h), epsilon = TOL);

    let moved = t.transform_point(&p);
    assert!((t.transformed_x(&p, false) - moved.x).abs() < TOL);
    assert!((t.transformed_y(&p, false) - moved.y).abs() < TOL);
    assert!((t.transformed_z(&p, false) - moved.z).abs() < TOL);
    assert!((t.transformed_x(&moved, true) - p.x).abs() < TOL);
}

#[test]
fn every_transform_round_trips() {
    let mut rng = common::rng(11);
    for _ in 0..ITERATIONS {
        let rigid = common::rigid_body_transform(&mut rng);
        let quaternion_based = common::quaternion_based_transform(&mut rng);
        let affine = common::affine_transform(&mut rng);
        assert_round_trips(&rigid, &mut rng);
        assert_round_trips(&quaternion_based, &mut rng);
        assert_round_trips(&affine, &mut rng);
    }
}

#[test]
fn products_match_successive_application() {
    let mut rng = common::rng(12);
    for _ in 0..ITERATIONS {
        let p = common::point(&mut rng);

        let (a, b) = (
            common::rigid_body_transform(&mut rng),
            common::rigid_body_transform(&mut rng),
        );
        assert_abs_diff_eq!(
            (a * b).transform_point(&p),
            a.transform_point(&b.transform_point(&p)),
            epsilon = TOL
        );
        assert_abs_diff_eq!(
            a.multiply_inverse_left(&b).transform_point(&p),
            a.inverse_transform_point(&b.transform_point(&p)),
            epsilon = TOL
        );
        assert_abs_diff_eq!(
            a.multiply_inverse_right(&b).transform_point(&p),
            a.transform_point(&b.inverse_transform_point(&p)),
            epsilon = TOL
        );

        let (c, d) = (
            common::quaternion_based_transform(&mut rng),
            common::quaternion_based_transform(&mut rng),
        );
        assert_abs_diff_eq!(
            (c * d).transform_point(&p),
            c.transform_point(&d.transform_point(&p)),
            epsilon = TOL
        );

        let affine = common::affine_transform(&mut rng);
        assert_abs_diff_eq!(
            affine.pre_multiply_rigid(&a).transform_point(&p),
            a.transform_point(&affine.transform_point(&p)),
            epsilon = TOL
        );
    }
}

#[test]
fn rigid_and_quaternion_based_agree() {
    let mut rng = common::rng(13);
    for _ in 0..ITERATIONS {
        let rigid = common::rigid_body_transform(&mut rng);
        let quaternion_based = QuaternionBasedTransform::from(rigid);
        let p = common::point(&mut rng);
        assert_abs_diff_eq!(
            rigid.transform_point(&p),
            quaternion_based.transform_point(&p),
            epsilon = TOL
        );
        assert!(RigidBodyTransform::from(quaternion_based).epsilon_equals(&rigid, TOL));
    }
}

#[test]
fn affine_scale_rules() {
    let mut rng = common::rng(14);
    for _ in 0..ITERATIONS {
        let rotation = common::rotation_matrix(&mut rng);
        let uniform = AffineTransform::new(
            rotation,
            Vector3::repeat(1.5),
            common::vector(&mut rng, 3.0),
        )
        .unwrap();
        let other = common::affine_transform(&mut rng);
        let p = common::point(&mut rng);

        let product = uniform.multiply(&other).unwrap();
        assert_abs_diff_eq!(
            product.transform_point(&p),
            uniform.transform_point(&other.transform_point(&p)),
            epsilon = TOL
        );
        let inverse = uniform.inverse().unwrap();
        assert_abs_diff_eq!(
            inverse.transform_point(&uniform.transform_point(&p)),
            p,
            epsilon = TOL
        );

        let stretched = AffineTransform::new(rotation, Vector3::new(1.0, 2.0, 3.0), Vector3::zeros())
            .unwrap();
        assert!(matches!(
            stretched.multiply(&other),
            Err(RotalisError::Transform(TransformError::NonRepresentableScale { .. }))
        ));
        let axis_aligned = AffineTransform::new(
            RotationMatrix::identity(),
            Vector3::repeat(1.0),
            common::vector(&mut rng, 3.0),
        )
        .unwrap();
        let shifted = stretched.multiply(&axis_aligned).unwrap();
        assert_abs_diff_eq!(
            shifted.transform_point(&p),
            stretched.transform_point(&axis_aligned.transform_point(&p)),
            epsilon = TOL
        );
    }
}
