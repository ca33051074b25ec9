//! Conversions between rotation representations.
//!
//! Every conversion propagates NaN inputs to NaN outputs and maps a
//! degenerate axis or quaternion to the identity.
mod to_axis_angle;
mod to_quaternion;
mod to_rotation_matrix;
mod to_yaw_pitch_roll;

pub use to_axis_angle::{
    axis_angle_from_quaternion, axis_angle_from_rotation_matrix, axis_angle_from_rotation_vector,
    axis_angle_from_yaw_pitch_roll, rotation_vector_from_axis_angle,
};
pub use to_quaternion::{
    quaternion_from_axis_angle, quaternion_from_rotation_matrix, quaternion_from_rotation_vector,
    quaternion_from_yaw_pitch_roll,
};
pub use to_rotation_matrix::{
    rotation_matrix_from_axis_angle, rotation_matrix_from_quaternion,
    rotation_matrix_from_rotation_vector, rotation_matrix_from_yaw_pitch_roll,
};
pub use to_yaw_pitch_roll::{
    yaw_pitch_roll_from_axis_angle, yaw_pitch_roll_from_quaternion,
    yaw_pitch_roll_from_rotation_matrix,
};

pub(crate) use to_axis_angle::matrix_log;
pub(crate) use to_rotation_matrix::{rodrigues, yaw_pitch_roll_elements};
