//! Single-coordinate transforms.
//!
//! These compute one component of a transformed point without building the
//! whole output, for callers that only need `x`, `y` or `z`.
use crate::math::{Matrix3, Point3, Vector3, ZERO_EPS};
use crate::orientation::{Quaternion, RotationMatrix};
use crate::transform::{AffineTransform, QuaternionBasedTransform, RigidBodyTransform, Transform};

/// A Cartesian coordinate of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coordinate {
    X,
    Y,
    Z,
}

impl Coordinate {
    /// Position of the coordinate in a vector.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

/// Component-wise application of a rotation or a transform to a point.
///
/// With `invert` set, the inverse mapping is applied.
pub trait CoordinateTransform {
    /// Computes one coordinate of the transformed point.
    fn transformed_coordinate(&self, point: &Point3, invert: bool, coordinate: Coordinate) -> f64;

    #[must_use]
    fn transformed_x(&self, point: &Point3, invert: bool) -> f64 {
        self.transformed_coordinate(point, invert, Coordinate::X)
    }

    #[must_use]
    fn transformed_y(&self, point: &Point3, invert: bool) -> f64 {
        self.transformed_coordinate(point, invert, Coordinate::Y)
    }

    #[must_use]
    fn transformed_z(&self, point: &Point3, invert: bool) -> f64 {
        self.transformed_coordinate(point, invert, Coordinate::Z)
    }
}

/// Row `index` of `matrix` dotted with `v`, or column `index` when `transpose` is set.
fn dot_line(matrix: &Matrix3, transpose: bool, index: usize, v: &Vector3) -> f64 {
    if transpose {
        matrix.column(index).dot(v)
    } else {
        matrix.row(index).transpose().dot(v)
    }
}

/// One coordinate of `v` rotated by `q` (or its conjugate).
fn quaternion_coordinate(q: &Quaternion, conjugate: bool, v: &Vector3, coordinate: Coordinate) -> f64 {
    let index = coordinate.index();
    let norm_squared = q.x * q.x + q.y * q.y + q.z * q.z + q.s * q.s;
    if norm_squared < ZERO_EPS * ZERO_EPS {
        return v[index];
    }
    let sign = if conjugate { -1.0 } else { 1.0 };
    let u = Vector3::new(sign * q.x, sign * q.y, sign * q.z);
    let c = u.cross(v);
    let cc = match coordinate {
        Coordinate::X => u.y * c.z - u.z * c.y,
        Coordinate::Y => u.z * c.x - u.x * c.z,
        Coordinate::Z => u.x * c.y - u.y * c.x,
    };
    v[index] + 2.0 * (q.s * c[index] + cc) / norm_squared
}

impl CoordinateTransform for Matrix3 {
    /// Inverting a singular matrix gives NaN.
    fn transformed_coordinate(&self, point: &Point3, invert: bool, coordinate: Coordinate) -> f64 {
        let index = coordinate.index();
        if invert {
            match self.try_inverse() {
                Some(inverse) => dot_line(&inverse, false, index, &point.coords),
                None => {
                    tracing::debug!("singular matrix in pointwise inverse transform");
                    f64::NAN
                }
            }
        } else {
            dot_line(self, false, index, &point.coords)
        }
    }
}

impl CoordinateTransform for RotationMatrix {
    fn transformed_coordinate(&self, point: &Point3, invert: bool, coordinate: Coordinate) -> f64 {
        let index = coordinate.index();
        dot_line(&self.as_matrix3(), invert, index, &point.coords)
    }
}

impl CoordinateTransform for Quaternion {
    fn transformed_coordinate(&self, point: &Point3, invert: bool, coordinate: Coordinate) -> f64 {
        quaternion_coordinate(self, invert, &point.coords, coordinate)
    }
}

impl CoordinateTransform for RigidBodyTransform {
    fn transformed_coordinate(&self, point: &Point3, invert: bool, coordinate: Coordinate) -> f64 {
        let index = coordinate.index();
        let rotation = self.rotation().as_matrix3();
        let translation = self.translation();
        if invert {
            dot_line(&rotation, true, index, &(point.coords - translation))
        } else {
            dot_line(&rotation, false, index, &point.coords) + translation[index]
        }
    }
}

impl CoordinateTransform for QuaternionBasedTransform {
    fn transformed_coordinate(&self, point: &Point3, invert: bool, coordinate: Coordinate) -> f64 {
        let translation = self.translation();
        if invert {
            quaternion_coordinate(self.quaternion(), true, &(point.coords - translation), coordinate)
        } else {
            quaternion_coordinate(self.quaternion(), false, &point.coords, coordinate)
                + translation[coordinate.index()]
        }
    }
}

impl CoordinateTransform for AffineTransform {
    fn transformed_coordinate(&self, point: &Point3, invert: bool, coordinate: Coordinate) -> f64 {
        let index = coordinate.index();
        let rotation = self.rotation().as_matrix3();
        let scale = self.scale();
        let translation = self.translation();
        if invert {
            dot_line(&rotation, true, index, &(point.coords - translation)) / scale[index]
        } else {
            dot_line(&rotation, false, index, &point.coords.component_mul(&scale)) + translation[index]
        }
    }
}

/// `x` of `matrix * (scale ⊙ point) + translation`.
#[must_use]
pub fn transformed_x_scaled(
    matrix: &Matrix3,
    scale: &Vector3,
    translation: &Vector3,
    point: &Point3,
) -> f64 {
    dot_line(matrix, false, 0, &point.coords.component_mul(scale)) + translation.x
}

/// `y` of `matrix * (scale ⊙ point) + translation`.
#[must_use]
pub fn transformed_y_scaled(
    matrix: &Matrix3,
    scale: &Vector3,
    translation: &Vector3,
    point: &Point3,
) -> f64 {
    dot_line(matrix, false, 1, &point.coords.component_mul(scale)) + translation.y
}

/// `z` of `matrix * (scale ⊙ point) + translation`.
#[must_use]
pub fn transformed_z_scaled(
    matrix: &Matrix3,
    scale: &Vector3,
    translation: &Vector3,
    point: &Point3,
) -> f64 {
    dot_line(matrix, false, 2, &point.coords.component_mul(scale)) + translation.z
}
