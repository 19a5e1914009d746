//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! Both are generic over `T: Float` and delegate the heavy lifting
//! to the error function approximation in [`crate::erf`].

use num_traits::Float;

use crate::erf::erf;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) via the error function:
///
/// # Mathematical Definition
/// Φ(x) = 0.5 · (1 + erf(x / √2))
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The probability P(X <= x) for standard normal X, in range [0, 1].
///
/// # Accuracy
/// Inherits the error function's ~1.2e-7 maximum absolute error.
///
/// # Examples
/// ```
/// use pricer_math::norm_cdf;
///
/// let cdf_0 = norm_cdf(0.0_f64);
/// assert!((cdf_0 - 0.5).abs() < 1e-7);
///
/// let cdf_neg = norm_cdf(-3.0_f64);
/// assert!(cdf_neg < 0.01);
///
/// let cdf_pos = norm_cdf(3.0_f64);
/// assert!(cdf_pos > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();
    let one = T::one();

    // Φ(x) = 0.5 * (1 + erf(x / sqrt(2)))
    half * (one + erf(x / sqrt_2))
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The density value φ(x), always non-negative.
///
/// # Examples
/// ```
/// use pricer_math::norm_pdf;
///
/// let pdf_0 = norm_pdf(0.0_f64);
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((pdf_0 - 0.3989422804).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();

    frac_1_sqrt_2pi * (-half * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    // ==========================================================
    // norm_cdf tests
    // ==========================================================

    #[test]
    fn test_norm_cdf_at_zero() {
        // Φ(0) = 0.5 within approximation accuracy
        assert_abs_diff_eq!(norm_cdf(0.0_f64), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        // Φ(-x) + Φ(x) = 1 for all x
        let test_values = [-3.0, -2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0, 3.0];
        for x in test_values {
            let cdf_pos = norm_cdf(x);
            let cdf_neg = norm_cdf(-x);
            assert_abs_diff_eq!(cdf_pos + cdf_neg, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        // Reference values from standard normal tables
        assert_abs_diff_eq!(norm_cdf(1.0_f64), 0.8413447460685429, epsilon = 1e-6);
        assert_abs_diff_eq!(norm_cdf(-1.0_f64), 0.15865525393145707, epsilon = 1e-6);
        assert_abs_diff_eq!(norm_cdf(2.0_f64), 0.9772498680518208, epsilon = 1e-6);
        assert_abs_diff_eq!(norm_cdf(-2.0_f64), 0.022750131948179195, epsilon = 1e-6);
        assert_abs_diff_eq!(norm_cdf(3.0_f64), 0.9986501019683699, epsilon = 1e-6);
    }

    #[test]
    fn test_norm_cdf_extreme_values() {
        // Large |x| should saturate inside [0, 1]
        let cdf_large_pos = norm_cdf(8.0_f64);
        assert!(cdf_large_pos > 0.999999);
        assert!(cdf_large_pos <= 1.0);

        let cdf_large_neg = norm_cdf(-8.0_f64);
        assert!(cdf_large_neg < 0.000001);
        assert!(cdf_large_neg >= 0.0);
    }

    #[test]
    fn test_norm_cdf_bounds() {
        // Result should always be in [0, 1]
        let test_values: Vec<f64> = (-100..=100).map(|i| i as f64 * 0.1).collect();
        for x in test_values {
            let result = norm_cdf(x);
            assert!(result >= 0.0, "CDF < 0 at x = {}", x);
            assert!(result <= 1.0, "CDF > 1 at x = {}", x);
        }
    }

    #[test]
    fn test_norm_cdf_f32_compatibility() {
        let result = norm_cdf(0.0_f32);
        assert!((result - 0.5).abs() < 1e-5);
    }

    // ==========================================================
    // norm_pdf tests
    // ==========================================================

    #[test]
    fn test_norm_pdf_at_zero() {
        // φ(0) = 1 / sqrt(2π)
        assert_relative_eq!(norm_pdf(0.0_f64), FRAC_1_SQRT_2PI, epsilon = 1e-10);
    }

    #[test]
    fn test_norm_pdf_symmetry() {
        // φ(x) = φ(-x)
        for x in [0.5, 1.0, 1.5, 2.0, 2.5, 3.0] {
            assert_relative_eq!(norm_pdf(x), norm_pdf(-x), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_abs_diff_eq!(norm_pdf(1.0_f64), 0.24197072451914337, epsilon = 1e-10);
        assert_abs_diff_eq!(norm_pdf(2.0_f64), 0.05399096651318806, epsilon = 1e-10);
        assert_abs_diff_eq!(norm_pdf(3.0_f64), 0.004431848411938008, epsilon = 1e-10);
    }

    #[test]
    fn test_cdf_pdf_relationship() {
        // Numerical derivative of CDF should approximate PDF
        let h = 1e-4;
        for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
            let numerical_derivative = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_abs_diff_eq!(numerical_derivative, norm_pdf(x), epsilon = 1e-3);
        }
    }

    // ==========================================================
    // Property-based tests
    // ==========================================================

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn cdf_symmetry_holds(x in -8.0f64..8.0) {
                prop_assert!((norm_cdf(x) + norm_cdf(-x) - 1.0).abs() < 1e-6);
            }

            #[test]
            fn cdf_stays_in_unit_interval(x in -1e3f64..1e3) {
                let result = norm_cdf(x);
                prop_assert!((0.0..=1.0).contains(&result));
            }
        }
    }
}
