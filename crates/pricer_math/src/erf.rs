//! Gauss error function approximation.
//!
//! Provides `erf` via a rational/exponential approximation in the
//! Abramowitz and Stegun family, generic over `T: Float`.

use num_traits::Float;

/// Maximum absolute error of [`erf`] over the real line.
///
/// Property of this specific coefficient set; tests rely on it.
pub const ERF_MAX_ABS_ERROR: f64 = 1.2e-7;

/// Gauss error function.
///
/// Uses a rational/exponential approximation with a fixed nine-term
/// coefficient set evaluated by Horner's method:
///
/// ```text
/// t      = 1 / (1 + 0.5·|x|)
/// tau    = t · exp(−x² − 1.26551223 + t·(1.00002368 + t·(… + t·0.17087277)))
/// erf(x) = 1 − tau   for x ≥ 0
///        = tau − 1   for x < 0
/// ```
///
/// # Arguments
/// * `x` - Input value (any finite value)
///
/// # Returns
/// erf(x) in [-1, 1], accurate to [`ERF_MAX_ABS_ERROR`] absolute.
///
/// # Behaviour at the extremes
/// For large |x| the exponential underflows to zero, so the result
/// saturates to ±1 without overflow. No error conditions exist.
///
/// # Examples
/// ```
/// use pricer_math::erf;
///
/// assert!(erf(0.0_f64).abs() < 1e-7);
/// assert!((erf(1.0_f64) - 0.8427007929).abs() < 1e-6);
///
/// // Odd function: erf(-x) = -erf(x)
/// assert!((erf(-1.5_f64) + erf(1.5_f64)).abs() < 1e-12);
/// ```
#[inline]
pub fn erf<T: Float>(x: T) -> T {
    let one = T::one();
    let half = T::from(0.5).unwrap();

    // Fixed coefficient set (Horner order, innermost last)
    let a0 = T::from(-1.265_512_23).unwrap();
    let a1 = T::from(1.000_023_68).unwrap();
    let a2 = T::from(0.374_091_96).unwrap();
    let a3 = T::from(0.096_784_18).unwrap();
    let a4 = T::from(-0.186_288_06).unwrap();
    let a5 = T::from(0.278_868_07).unwrap();
    let a6 = T::from(-1.135_203_98).unwrap();
    let a7 = T::from(1.488_515_87).unwrap();
    let a8 = T::from(-0.822_152_23).unwrap();
    let a9 = T::from(0.170_872_77).unwrap();

    // t = 1 / (1 + 0.5 * |x|)
    let t = one / (one + half * x.abs());

    // Horner's method for the polynomial part of the exponent
    let poly = a0
        + t * (a1 + t * (a2 + t * (a3 + t * (a4 + t * (a5 + t * (a6 + t * (a7 + t * (a8 + t * a9))))))));

    // tau = t * exp(-x² + poly); underflows to 0 for large |x|
    let tau = t * (-x * x + poly).exp();

    if x >= T::zero() {
        one - tau
    } else {
        tau - one
    }
}
