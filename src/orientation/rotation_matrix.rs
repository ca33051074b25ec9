use crate::algebra;
use crate::error::{OrientationError, Result};
use crate::math::{contains_nan, epsilon_equals, norm3, Matrix3, Vector3, ORTHONORMALITY_EPS, ZERO_EPS};

/// A 3x3 orthonormal matrix with determinant +1.
///
/// Elements are only reachable through constructors that restore
/// orthonormality, so drift accumulated by arithmetic never leaks out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMatrix {
    pub(crate) m00: f64,
    pub(crate) m01: f64,
    pub(crate) m02: f64,
    pub(crate) m10: f64,
    pub(crate) m11: f64,
    pub(crate) m12: f64,
    pub(crate) m20: f64,
    pub(crate) m21: f64,
    pub(crate) m22: f64,
}

impl Default for RotationMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl RotationMatrix {
    #[must_use]
    pub fn identity() -> Self {
        Self::from_elements_unchecked([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0])
    }

    /// Matrix with every element set to NaN.
    #[must_use]
    pub fn nan() -> Self {
        Self::from_elements_unchecked([f64::NAN; 9])
    }

    /// Row-major elements, stored as given.
    pub(crate) fn from_elements_unchecked(e: [f64; 9]) -> Self {
        Self {
            m00: e[0],
            m01: e[1],
            m02: e[2],
            m10: e[3],
            m11: e[4],
            m12: e[5],
            m20: e[6],
            m21: e[7],
            m22: e[8],
        }
    }

    /// Sets the row-major elements and re-orthonormalizes them.
    ///
    /// The first row keeps its direction, the second row is made orthogonal
    /// to it and the third row is rebuilt as their cross product. Rows that
    /// cannot be normalized produce a NaN matrix.
    #[must_use]
    #[allow(clippy::similar_names)]
    pub fn from_rows_normalized(e: [f64; 9]) -> Self {
        if contains_nan(&e) {
            return Self::nan();
        }
        let n0 = norm3(e[0], e[1], e[2]);
        if n0 < ZERO_EPS {
            tracing::debug!("cannot normalize rotation matrix: first row is degenerate");
            return Self::nan();
        }
        let (r00, r01, r02) = (e[0] / n0, e[1] / n0, e[2] / n0);

        let dot = r00 * e[3] + r01 * e[4] + r02 * e[5];
        let (u10, u11, u12) = (e[3] - dot * r00, e[4] - dot * r01, e[5] - dot * r02);
        let n1 = norm3(u10, u11, u12);
        if n1 < ZERO_EPS {
            tracing::debug!("cannot normalize rotation matrix: first two rows are parallel");
            return Self::nan();
        }
        let (r10, r11, r12) = (u10 / n1, u11 / n1, u12 / n1);

        let r20 = r01 * r12 - r02 * r11;
        let r21 = r02 * r10 - r00 * r12;
        let r22 = r00 * r11 - r01 * r10;

        Self::from_elements_unchecked([r00, r01, r02, r10, r11, r12, r20, r21, r22])
    }

    /// Re-orthonormalizes a general 3x3 matrix.
    #[must_use]
    pub fn from_matrix3_normalized(matrix: &Matrix3) -> Self {
        Self::from_rows_normalized(matrix3_elements(matrix))
    }

    /// Builds a rotation matrix from a matrix that must already be a rotation.
    ///
    /// # Errors
    ///
    /// Returns [`OrientationError::NotARotationMatrix`] if the rows are not
    /// orthonormal within `1e-7` or the determinant is not +1.
    pub fn try_from_matrix3(matrix: &Matrix3) -> Result<Self> {
        let candidate = Self::from_elements_unchecked(matrix3_elements(matrix));
        let max_error = candidate.orthonormality_error();
        let determinant = candidate.determinant();
        if max_error.is_nan()
            || max_error > ORTHONORMALITY_EPS
            || (determinant - 1.0).abs() > ORTHONORMALITY_EPS
        {
            return Err(OrientationError::NotARotationMatrix {
                determinant,
                max_error,
            }
            .into());
        }
        Ok(Self::from_matrix3_normalized(matrix))
    }

    /// Returns the element at (`row`, `col`), or `None` past the 3×3 bounds.
    #[must_use]
    pub fn element(&self, row: usize, col: usize) -> Option<f64> {
        match (row, col) {
            (0, 0) => Some(self.m00),
            (0, 1) => Some(self.m01),
            (0, 2) => Some(self.m02),
            (1, 0) => Some(self.m10),
            (1, 1) => Some(self.m11),
            (1, 2) => Some(self.m12),
            (2, 0) => Some(self.m20),
            (2, 1) => Some(self.m21),
            (2, 2) => Some(self.m22),
            _ => None,
        }
    }

    /// Row-major elements.
    #[must_use]
    pub fn elements(&self) -> [f64; 9] {
        [
            self.m00, self.m01, self.m02, self.m10, self.m11, self.m12, self.m20, self.m21,
            self.m22,
        ]
    }

    #[must_use]
    pub fn as_matrix3(&self) -> Matrix3 {
        Matrix3::new(
            self.m00, self.m01, self.m02, self.m10, self.m11, self.m12, self.m20, self.m21,
            self.m22,
        )
    }

    /// The transpose, which is also the inverse.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_elements_unchecked([
            self.m00, self.m10, self.m20, self.m01, self.m11, self.m21, self.m02, self.m12,
            self.m22,
        ])
    }

    #[must_use]
    pub fn trace(&self) -> f64 {
        self.m00 + self.m11 + self.m22
    }

    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.m00 * (self.m11 * self.m22 - self.m12 * self.m21)
            - self.m01 * (self.m10 * self.m22 - self.m12 * self.m20)
            + self.m02 * (self.m10 * self.m21 - self.m11 * self.m20)
    }

    /// Largest deviation of `M * Mᵀ` from the identity.
    #[must_use]
    pub fn orthonormality_error(&self) -> f64 {
        let rows = [
            Vector3::new(self.m00, self.m01, self.m02),
            Vector3::new(self.m10, self.m11, self.m12),
            Vector3::new(self.m20, self.m21, self.m22),
        ];
        let mut max_error: f64 = 0.0;
        for i in 0..3 {
            for j in i..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                let error = (rows[i].dot(&rows[j]) - expected).abs();
                if error.is_nan() {
                    return f64::NAN;
                }
                max_error = max_error.max(error);
            }
        }
        max_error
    }

    /// Returns `true` if rows and columns are unit length and mutually orthogonal within `epsilon`.
    #[must_use]
    pub fn is_orthonormal(&self, epsilon: f64) -> bool {
        self.orthonormality_error() <= epsilon
    }

    #[must_use]
    pub fn contains_nan(&self) -> bool {
        contains_nan(&self.elements())
    }

    #[must_use]
    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.epsilon_equals(&Self::identity(), epsilon)
    }

    /// Returns `true` if this matrix only rotates about the Z-axis.
    #[must_use]
    pub fn is_rotation_2d(&self, epsilon: f64) -> bool {
        self.m02.abs() <= epsilon
            && self.m12.abs() <= epsilon
            && self.m20.abs() <= epsilon
            && self.m21.abs() <= epsilon
            && (self.m22 - 1.0).abs() <= epsilon
    }

    /// # Errors
    ///
    /// Returns [`OrientationError::NotA2DTransform`] if the matrix rotates out of the XY-plane.
    pub fn check_if_rotation_2d(&self, epsilon: f64) -> Result<()> {
        if self.is_rotation_2d(epsilon) {
            Ok(())
        } else {
            Err(OrientationError::NotA2DTransform(format!("{self:?}")).into())
        }
    }

    /// Element-wise comparison.
    #[must_use]
    pub fn epsilon_equals(&self, other: &Self, epsilon: f64) -> bool {
        self.elements()
            .iter()
            .zip(other.elements().iter())
            .all(|(a, b)| epsilon_equals(*a, *b, epsilon))
    }

    /// Returns `true` if both matrices are within `epsilon` of each other in angle.
    #[must_use]
    pub fn geometrically_equals(&self, other: &Self, epsilon: f64) -> bool {
        algebra::rotation_matrix::distance(self, other) <= epsilon
    }

    /// Computes `self * vector`.
    #[must_use]
    pub fn transform(&self, vector: &Vector3) -> Vector3 {
        algebra::rotation_matrix::transform(self, vector)
    }

    /// Computes `selfᵀ * vector`.
    #[must_use]
    pub fn inverse_transform(&self, vector: &Vector3) -> Vector3 {
        algebra::rotation_matrix::inverse_transform(self, vector)
    }
}

impl From<RotationMatrix> for Matrix3 {
    fn from(rotation: RotationMatrix) -> Self {
        rotation.as_matrix3()
    }
}

impl std::ops::Mul for RotationMatrix {
    type Output = RotationMatrix;

    fn mul(self, rhs: Self) -> Self::Output {
        algebra::rotation_matrix::multiply(&self, &rhs)
    }
}

fn matrix3_elements(m: &Matrix3) -> [f64; 9] {
    [
        m[(0, 0)],
        m[(0, 1)],
        m[(0, 2)],
        m[(1, 0)],
        m[(1, 1)],
        m[(1, 2)],
        m[(2, 0)],
        m[(2, 1)],
        m[(2, 2)],
    ]
}
