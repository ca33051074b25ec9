pub mod algebra;
pub mod conversion;
pub mod error;
pub mod math;
pub mod orientation;
pub mod transform;

pub use error::{Result, RotalisError};
pub use orientation::{AxisAngle, Orientation, Quaternion, RotationMatrix, YawPitchRoll};
pub use transform::{AffineTransform, QuaternionBasedTransform, RigidBodyTransform, Transform};
