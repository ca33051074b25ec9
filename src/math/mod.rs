pub mod numeric;

pub use numeric::{
    angle_difference_minus_pi_to_pi, clamp, clamp_symmetric, contains_nan, epsilon_equals,
    fast_sqrt, interpolate, norm2, norm3, norm4, norm_squared2, norm_squared3, norm_squared4,
    shift_angle_in_range, square, trim_angle_minus_pi_to_pi,
};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4D vector type, used for homogeneous coordinates.
pub type Vector4 = nalgebra::Vector4<f64>;

/// General 3x3 matrix.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// 4x4 homogeneous transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Norm below which an axis or a quaternion is considered degenerate.
///
/// Also the slack subtracted from the start of an angle window.
pub const ZERO_EPS: f64 = 1.0e-12;

/// Half-width of the window around 1.0 where [`fast_sqrt`] uses its Taylor approximation.
pub const EPS_NORM_FAST_SQRT: f64 = 2.107_342e-8;

/// Allowed overshoot of `min` over `max` before [`clamp`] fails.
pub const CLAMP_EPS: f64 = 1.0e-10;

/// Tolerance used when validating that a matrix is a proper rotation.
pub const ORTHONORMALITY_EPS: f64 = 1.0e-7;

/// `cos(pitch)` below which yaw-pitch-roll is considered in gimbal lock.
pub const GIMBAL_LOCK_EPS: f64 = 1.0e-12;

/// Two times pi.
pub const TWO_PI: f64 = 2.0 * std::f64::consts::PI;
