//! Rotation algebra, one module per representation.
//!
//! Every routine is a pure function: inputs are borrowed and a fresh value is
//! returned, so an output can never alias an input.
pub mod axis_angle;
pub mod pointwise;
pub mod quaternion;
pub mod rotation_matrix;
pub mod yaw_pitch_roll;

pub use pointwise::{
    transformed_x_scaled, transformed_y_scaled, transformed_z_scaled, Coordinate,
    CoordinateTransform,
};
