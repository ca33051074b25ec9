//! Scalar primitives shared by every rotation routine.
//!
//! Norms computed in this crate are mostly norms of near-unit axes and
//! quaternions, which is what [`fast_sqrt`] is tuned for.
use std::f64::consts::PI;

use crate::error::{NumericError, Result};

use super::{CLAMP_EPS, EPS_NORM_FAST_SQRT, TWO_PI, ZERO_EPS};

/// Square root with a first-order Taylor shortcut around 1.0.
///
/// When `|1 - value| < 2.107342e-8` the result is `(1 + value) / 2`, which is
/// exact to machine precision in that window.
#[must_use]
#[inline]
pub fn fast_sqrt(value: f64) -> f64 {
    if (1.0 - value).abs() < EPS_NORM_FAST_SQRT {
        0.5 * (1.0 + value)
    } else {
        value.sqrt()
    }
}

#[must_use]
#[inline]
pub fn square(value: f64) -> f64 {
    value * value
}

#[must_use]
#[inline]
pub fn norm_squared2(x: f64, y: f64) -> f64 {
    x * x + y * y
}

#[must_use]
#[inline]
pub fn norm_squared3(x: f64, y: f64, z: f64) -> f64 {
    x * x + y * y + z * z
}

#[must_use]
#[inline]
pub fn norm_squared4(x: f64, y: f64, z: f64, s: f64) -> f64 {
    x * x + y * y + z * z + s * s
}

/// Euclidean norm of a 2-element vector.
#[must_use]
#[inline]
pub fn norm2(x: f64, y: f64) -> f64 {
    fast_sqrt(norm_squared2(x, y))
}

/// Euclidean norm of a 3-element vector.
#[must_use]
#[inline]
pub fn norm3(x: f64, y: f64, z: f64) -> f64 {
    fast_sqrt(norm_squared3(x, y, z))
}

/// Euclidean norm of a 4-element vector.
#[must_use]
#[inline]
pub fn norm4(x: f64, y: f64, z: f64, s: f64) -> f64 {
    fast_sqrt(norm_squared4(x, y, z, s))
}

/// Returns `true` if any of the values is NaN.
#[must_use]
pub fn contains_nan(values: &[f64]) -> bool {
    values.iter().any(|v| v.is_nan())
}

/// Shifts `angle` into the half-open window `[start, start + 2π)`.
///
/// The start of the window is lowered by [`ZERO_EPS`] so that an angle equal
/// to the upper bound lands on the lower bound instead of wrapping past it.
#[must_use]
pub fn shift_angle_in_range(angle: f64, start: f64) -> f64 {
    let start = start - ZERO_EPS;
    let mut delta = (angle - start) % TWO_PI;
    if delta < 0.0 {
        delta += TWO_PI;
    }
    start + delta
}

/// Remaps `angle` into `[-π, π)`.
#[must_use]
pub fn trim_angle_minus_pi_to_pi(angle: f64) -> f64 {
    shift_angle_in_range(angle, -PI)
}

/// Computes `a - b` wrapped into `[-π, π)`.
#[must_use]
pub fn angle_difference_minus_pi_to_pi(a: f64, b: f64) -> f64 {
    trim_angle_minus_pi_to_pi(a - b)
}

/// Clamps `value` into `[min, max]`.
///
/// # Errors
///
/// Returns [`NumericError::InvalidRange`] if `min > max + 1e-10`.
pub fn clamp(value: f64, min: f64, max: f64) -> Result<f64> {
    if min > max + CLAMP_EPS {
        return Err(NumericError::InvalidRange { min, max }.into());
    }
    if value < min {
        Ok(min)
    } else if value > max {
        Ok(max)
    } else {
        Ok(value)
    }
}

/// Clamps `value` into `[-max_abs, max_abs]`.
///
/// A negative `max_abs` yields an empty range; the sign is dropped.
#[must_use]
pub fn clamp_symmetric(value: f64, max_abs: f64) -> f64 {
    let max_abs = max_abs.abs();
    value.max(-max_abs).min(max_abs)
}

/// Linear interpolation: `(1 - alpha) * a + alpha * b`.
#[must_use]
#[inline]
pub fn interpolate(a: f64, b: f64, alpha: f64) -> f64 {
    (1.0 - alpha) * a + alpha * b
}

/// Returns `true` if `|a - b| <= epsilon`.
///
/// NaN on either side compares unequal rather than failing.
#[must_use]
#[inline]
pub fn epsilon_equals(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::RotalisError;

    const TOL: f64 = 1e-12;

    #[test]
    fn fast_sqrt_near_one_uses_taylor() {
        let v = 1.0 + 1.0e-9;
        assert_eq!(fast_sqrt(v), 0.5 * (1.0 + v));
        assert!((fast_sqrt(v) - v.sqrt()).abs() < 1e-17);
    }

    #[test]
    fn fast_sqrt_far_from_one_is_exact() {
        assert_eq!(fast_sqrt(4.0), 2.0);
        assert_eq!(fast_sqrt(0.0), 0.0);
        assert!(fast_sqrt(-1.0).is_nan());
    }

    #[test]
    fn norms() {
        assert!((norm2(3.0, 4.0) - 5.0).abs() < TOL);
        assert!((norm3(1.0, 2.0, 2.0) - 3.0).abs() < TOL);
        assert!((norm4(1.0, 1.0, 1.0, 1.0) - 2.0).abs() < TOL);
        assert!((norm_squared4(1.0, 2.0, 3.0, 4.0) - 30.0).abs() < TOL);
    }

    #[test]
    fn shift_angle_maps_upper_bound_to_lower_bound() {
        assert!((trim_angle_minus_pi_to_pi(PI) + PI).abs() < 1e-10);
        assert!((trim_angle_minus_pi_to_pi(-PI) + PI).abs() < 1e-10);
        assert!((trim_angle_minus_pi_to_pi(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-10);
        assert!((trim_angle_minus_pi_to_pi(-5.0 * PI / 2.0) + PI / 2.0).abs() < 1e-10);
        assert!((trim_angle_minus_pi_to_pi(0.3) - 0.3).abs() < TOL);
    }

    #[test]
    fn shift_angle_stays_in_window() {
        for i in -50..50 {
            let angle = f64::from(i) * 0.37;
            let shifted = shift_angle_in_range(angle, 1.0);
            assert!(shifted >= 1.0 - 2.0 * ZERO_EPS, "shifted={shifted}");
            assert!(shifted < 1.0 + TWO_PI, "shifted={shifted}");
            let turns = (angle - shifted) / TWO_PI;
            assert!((turns - turns.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn angle_difference_wraps() {
        let d = angle_difference_minus_pi_to_pi(PI - 0.1, -PI + 0.1);
        assert!((d + 0.2).abs() < 1e-10, "d={d}");
    }

    #[test]
    fn clamp_in_and_out_of_range() {
        assert_eq!(clamp(0.5, 0.0, 1.0).unwrap(), 0.5);
        assert_eq!(clamp(-2.0, 0.0, 1.0).unwrap(), 0.0);
        assert_eq!(clamp(2.0, 0.0, 1.0).unwrap(), 1.0);
        // Slack below CLAMP_EPS is tolerated.
        assert!(clamp(0.0, 1.0 + 1e-11, 1.0).is_ok());
    }

    #[test]
    fn clamp_rejects_inverted_range() {
        let err = clamp(0.0, 1.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            RotalisError::Numeric(NumericError::InvalidRange { min, max }) if min == 1.0 && max == 0.0
        ));
    }

    #[test]
    fn clamp_symmetric_ignores_sign_of_bound() {
        assert_eq!(clamp_symmetric(3.0, -2.0), 2.0);
        assert_eq!(clamp_symmetric(-3.0, 2.0), -2.0);
    }

    #[test]
    fn interpolate_endpoints() {
        assert_eq!(interpolate(2.0, 6.0, 0.0), 2.0);
        assert_eq!(interpolate(2.0, 6.0, 1.0), 6.0);
        assert_eq!(interpolate(2.0, 6.0, 0.25), 3.0);
    }

    #[test]
    fn epsilon_equals_rejects_nan() {
        assert!(epsilon_equals(1.0, 1.0 + 1e-13, 1e-12));
        assert!(!epsilon_equals(1.0, 1.1, 1e-12));
        assert!(!epsilon_equals(f64::NAN, 1.0, 1.0));
        assert!(!epsilon_equals(1.0, f64::NAN, 1.0));
    }

    #[test]
    fn contains_nan_detects_any() {
        assert!(!contains_nan(&[0.0, 1.0]));
        assert!(contains_nan(&[0.0, f64::NAN]));
    }
}
