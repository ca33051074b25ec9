mod axis_angle;
mod quaternion;
mod rotation_matrix;
mod yaw_pitch_roll;

pub use axis_angle::AxisAngle;
pub use quaternion::Quaternion;
pub use rotation_matrix::RotationMatrix;
pub use yaw_pitch_roll::YawPitchRoll;

use crate::algebra;
use crate::conversion;
use crate::math::Vector3;

/// Any of the supported rotation representations.
///
/// Cross-representation composition goes through
/// [`to_quaternion_coordinates`](Orientation::to_quaternion_coordinates),
/// so no routine has to special-case pairs of representation types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Orientation {
    AxisAngle(AxisAngle),
    Quaternion(Quaternion),
    Matrix(RotationMatrix),
    YawPitchRoll(YawPitchRoll),
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Quaternion(Quaternion::identity())
    }
}

impl Orientation {
    /// Half-angle quaternion of this orientation.
    #[must_use]
    pub fn to_quaternion_coordinates(&self) -> Quaternion {
        match self {
            Self::AxisAngle(aa) => conversion::quaternion_from_axis_angle(aa),
            Self::Quaternion(q) => *q,
            Self::Matrix(r) => conversion::quaternion_from_rotation_matrix(r),
            Self::YawPitchRoll(ypr) => conversion::quaternion_from_yaw_pitch_roll(ypr),
        }
    }

    #[must_use]
    pub fn to_rotation_matrix(&self) -> RotationMatrix {
        match self {
            Self::AxisAngle(aa) => conversion::rotation_matrix_from_axis_angle(aa),
            Self::Quaternion(q) => conversion::rotation_matrix_from_quaternion(q),
            Self::Matrix(r) => *r,
            Self::YawPitchRoll(ypr) => conversion::rotation_matrix_from_yaw_pitch_roll(ypr),
        }
    }

    #[must_use]
    pub fn to_axis_angle(&self) -> AxisAngle {
        match self {
            Self::AxisAngle(aa) => *aa,
            Self::Quaternion(q) => conversion::axis_angle_from_quaternion(q),
            Self::Matrix(r) => conversion::axis_angle_from_rotation_matrix(r),
            Self::YawPitchRoll(ypr) => conversion::axis_angle_from_yaw_pitch_roll(ypr),
        }
    }

    #[must_use]
    pub fn to_yaw_pitch_roll(&self) -> YawPitchRoll {
        match self {
            Self::AxisAngle(aa) => conversion::yaw_pitch_roll_from_axis_angle(aa),
            Self::Quaternion(q) => conversion::yaw_pitch_roll_from_quaternion(q),
            Self::Matrix(r) => conversion::yaw_pitch_roll_from_rotation_matrix(r),
            Self::YawPitchRoll(ypr) => *ypr,
        }
    }

    /// The inverse rotation, in the same representation where one exists.
    ///
    /// Yaw-pitch-roll has no closed-form inverse and is converted back
    /// through quaternion coordinates.
    #[must_use]
    pub fn inverse(&self) -> Self {
        match self {
            Self::AxisAngle(aa) => Self::AxisAngle(aa.inverse()),
            Self::Quaternion(q) => Self::Quaternion(q.conjugate()),
            Self::Matrix(r) => Self::Matrix(r.transpose()),
            Self::YawPitchRoll(ypr) => Self::YawPitchRoll(conversion::yaw_pitch_roll_from_quaternion(
                &conversion::quaternion_from_yaw_pitch_roll(ypr).conjugate(),
            )),
        }
    }

    #[must_use]
    pub fn contains_nan(&self) -> bool {
        match self {
            Self::AxisAngle(aa) => aa.contains_nan(),
            Self::Quaternion(q) => q.contains_nan(),
            Self::Matrix(r) => r.contains_nan(),
            Self::YawPitchRoll(ypr) => ypr.contains_nan(),
        }
    }

    /// Rotates `vector` using the algebra native to the representation.
    #[must_use]
    pub fn transform_vector(&self, vector: &Vector3) -> Vector3 {
        match self {
            Self::AxisAngle(aa) => algebra::axis_angle::transform(aa, vector),
            Self::Quaternion(q) => algebra::quaternion::transform(q, vector),
            Self::Matrix(r) => algebra::rotation_matrix::transform(r, vector),
            Self::YawPitchRoll(ypr) => algebra::yaw_pitch_roll::transform(ypr, vector),
        }
    }

    #[must_use]
    pub fn inverse_transform_vector(&self, vector: &Vector3) -> Vector3 {
        match self {
            Self::AxisAngle(aa) => algebra::axis_angle::inverse_transform(aa, vector),
            Self::Quaternion(q) => algebra::quaternion::inverse_transform(q, vector),
            Self::Matrix(r) => algebra::rotation_matrix::inverse_transform(r, vector),
            Self::YawPitchRoll(ypr) => algebra::yaw_pitch_roll::inverse_transform(ypr, vector),
        }
    }

    /// Composes `self * other` in quaternion coordinates.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Quaternion {
        algebra::quaternion::multiply_orientations(self, false, other, false)
    }

    /// Angle of the rotation taking `self` onto `other`, in `[0, π]`.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        algebra::quaternion::distance(
            &self.to_quaternion_coordinates(),
            &other.to_quaternion_coordinates(),
        )
    }
}

impl From<AxisAngle> for Orientation {
    fn from(value: AxisAngle) -> Self {
        Self::AxisAngle(value)
    }
}

impl From<Quaternion> for Orientation {
    fn from(value: Quaternion) -> Self {
        Self::Quaternion(value)
    }
}

impl From<RotationMatrix> for Orientation {
    fn from(value: RotationMatrix) -> Self {
        Self::Matrix(value)
    }
}

impl From<YawPitchRoll> for Orientation {
    fn from(value: YawPitchRoll) -> Self {
        Self::YawPitchRoll(value)
    }
}
