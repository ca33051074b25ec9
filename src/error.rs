use thiserror::Error;

/// Top-level error type for the Rotalis orientation library.
#[derive(Debug, Error)]
pub enum RotalisError {
    #[error(transparent)]
    Numeric(#[from] NumericError),

    #[error(transparent)]
    Orientation(#[from] OrientationError),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Errors raised by the scalar helpers.
#[derive(Debug, Error, PartialEq)]
pub enum NumericError {
    #[error("invalid range: min ({min}) is greater than max ({max})")]
    InvalidRange { min: f64, max: f64 },
}

/// Errors related to rotation representations.
#[derive(Debug, Error, PartialEq)]
pub enum OrientationError {
    #[error("rotation is not a transform in the XY-plane: {0}")]
    NotA2DTransform(String),

    #[error("orientation is not 2D: yaw = {yaw}, pitch = {pitch}, roll = {roll}")]
    NotAnOrientation2D { yaw: f64, pitch: f64, roll: f64 },

    #[error("matrix is not a rotation matrix: determinant = {determinant}, orthonormality error = {max_error}")]
    NotARotationMatrix { determinant: f64, max_error: f64 },
}

/// Errors related to composite transforms.
#[derive(Debug, Error, PartialEq)]
pub enum TransformError {
    #[error("scale component {axis} = {value} must be strictly positive")]
    InvalidScale { axis: char, value: f64 },

    #[error("matrix is not an affine transform: bottom row is {0:?}")]
    NotAffine([f64; 4]),

    #[error("non-uniform scale {scale:?} cannot be composed with a rotation into rotation * scale form")]
    NonRepresentableScale { scale: [f64; 3] },
}

/// Convenience type alias for results using [`RotalisError`].
pub type Result<T> = std::result::Result<T, RotalisError>;
