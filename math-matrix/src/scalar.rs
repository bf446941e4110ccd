//! Scalar abstraction for the dense matrix utilities
//!
//! [`Scalar`] narrows `num_traits::Float` to what elimination and reflection
//! need: literal conversion from `f64`, a lossy conversion back for reports,
//! and the sign convention used when building Householder vectors.

use num_traits::{Float, NumAssign};
use std::fmt::{Debug, Display};

/// Real floating-point element type of a matrix.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default everywhere)
/// - `f32` (memory-constrained callers, looser tolerances)
pub trait Scalar: Float + NumAssign + Debug + Display + Send + Sync + 'static {
    /// Convert an `f64` literal into this type
    fn lit(value: f64) -> Self;

    /// Widen to `f64` for reporting
    fn as_f64(self) -> f64;

    /// `1` for non-negative values (zero included), `-1` otherwise
    #[inline]
    fn sign(self) -> Self {
        if self >= Self::zero() {
            Self::one()
        } else {
            -Self::one()
        }
    }
}

impl Scalar for f64 {
    #[inline]
    fn lit(value: f64) -> Self {
        value
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

impl Scalar for f32 {
    #[inline]
    fn lit(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

/// Maximum that keeps a NaN once one has been seen.
///
/// `Float::max` drops NaN operands, which would hide a singular solve from
/// the residual checks.
#[inline]
pub fn nan_max<T: Scalar>(current: T, candidate: T) -> T {
    if current.is_nan() || candidate.is_nan() {
        return T::nan();
    }
    if candidate > current { candidate } else { current }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sign_treats_zero_as_positive() {
        assert_relative_eq!(0.0_f64.sign(), 1.0);
        assert_relative_eq!(3.5_f64.sign(), 1.0);
        assert_relative_eq!((-1e-300_f64).sign(), -1.0);
        assert_relative_eq!((-2.0_f32).sign(), -1.0);
    }

    #[test]
    fn test_lit_round_trip() {
        assert_relative_eq!(f32::lit(0.5), 0.5_f32);
        assert_relative_eq!(f32::lit(0.5).as_f64(), 0.5);
        assert_relative_eq!(f64::lit(2.25), 2.25);
    }

    #[test]
    fn test_nan_max() {
        assert_relative_eq!(nan_max(1.0_f64, 2.0), 2.0);
        assert_relative_eq!(nan_max(3.0_f64, 2.0), 3.0);
        assert!(nan_max(1.0_f64, f64::NAN).is_nan());
        assert!(nan_max(f64::NAN, 5.0).is_nan());
        assert!(nan_max(0.0_f64, f64::INFINITY).is_infinite());
    }
}
