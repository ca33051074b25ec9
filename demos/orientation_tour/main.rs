//! Orientation tour: builds one rotation in every representation, composes
//! them and moves a point through the composite transforms.
//!
//! Usage:
//! ```text
//! cargo run --example orientation_tour
//! RUST_LOG=rotalis=trace cargo run --example orientation_tour   # show degenerate-input events
//! ```

use std::f64::consts::FRAC_PI_2;

use rotalis::algebra::{axis_angle, rotation_matrix, yaw_pitch_roll, CoordinateTransform};
use rotalis::conversion::{
    quaternion_from_axis_angle, rotation_matrix_from_axis_angle, yaw_pitch_roll_from_axis_angle,
};
use rotalis::math::{Point3, Vector3};
use rotalis::{
    AffineTransform, AxisAngle, Orientation, QuaternionBasedTransform, RigidBodyTransform,
    RotalisError, RotationMatrix, Transform, YawPitchRoll,
};

fn main() -> Result<(), RotalisError> {
    // Default: WARN for everything. Override with RUST_LOG.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let quarter_turn = AxisAngle::new(0.0, 0.0, 1.0, FRAC_PI_2);
    let x = Vector3::new(1.0, 0.0, 0.0);
    println!("{quarter_turn:?} moves {x:?} to {:?}", quarter_turn.transform(&x));

    let q = quaternion_from_axis_angle(&quarter_turn);
    let r = rotation_matrix_from_axis_angle(&quarter_turn);
    let ypr = yaw_pitch_roll_from_axis_angle(&quarter_turn);
    println!("as quaternion: {q:?}");
    println!("as matrix:     {:?}", r.elements());
    println!("as yaw-pitch-roll: {ypr:?}");

    let tilt = AxisAngle::from_pitch(0.3);
    let composed = axis_angle::multiply(&quarter_turn, false, &tilt, false);
    let via_matrix = rotation_matrix::multiply_orientations(
        &Orientation::from(ypr),
        false,
        &Orientation::from(tilt),
        false,
    );
    println!(
        "yaw then pitch: {composed:?}, matrix distance {:.3e}",
        rotation_matrix::distance(&rotation_matrix_from_axis_angle(&composed), &via_matrix)
    );

    let halfway = rotation_matrix::interpolate(&RotationMatrix::identity(), &r, 0.5);
    println!("halfway to a quarter turn: {:?}", halfway.elements());

    let locked = YawPitchRoll::new(0.4, FRAC_PI_2, -0.2);
    println!("gimbal lock, append yaw: {:?}", yaw_pitch_roll::append_yaw(&locked, 0.1));

    let rigid = RigidBodyTransform::from_orientation(quarter_turn, Vector3::new(0.0, 0.0, 1.0));
    let quaternion_based = QuaternionBasedTransform::from(rigid);
    let affine = AffineTransform::new(*rigid.rotation(), Vector3::new(2.0, 2.0, 2.0), rigid.translation())?;
    let p = Point3::new(1.0, 2.0, 3.0);
    println!("rigid:            {:?}", rigid.transform_point(&p));
    println!("quaternion based: {:?}", quaternion_based.transform_point(&p));
    println!("affine:           {:?}", affine.transform_point(&p));
    println!("affine x only:    {}", affine.transformed_x(&p, false));

    let round_trip = affine.inverse()?.transform_point(&affine.transform_point(&p));
    println!("affine round trip: {round_trip:?}");

    let sheared = AffineTransform::new(*rigid.rotation(), Vector3::new(1.0, 2.0, 3.0), Vector3::zeros())?;
    match sheared.multiply_rigid(&rigid) {
        Ok(product) => println!("unexpected product: {product:?}"),
        Err(err) => println!("non-uniform scale: {err}"),
    }

    Ok(())
}
