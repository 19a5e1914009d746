//! Black-Scholes pricing engine for European options.
//!
//! Closed-form pricing and analytical Greeks under lognormal dynamics.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! Every public formula derives d₁/d₂ through the same internal helper,
//! so the price and the five sensitivities are mutually consistent.

use num_traits::Float;

use pricer_math::{norm_cdf, norm_pdf};

use crate::error::EngineError;
use crate::option::{OptionKind, OptionSpec};

/// Default annualised risk-free rate (5%).
///
/// The single process-wide constant used by [`BlackScholes::default`];
/// construct the engine with [`BlackScholes::new`] to price under a
/// different rate assumption.
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.05;

/// First-order sensitivities of one option, computed in a single pass.
///
/// All five values share one d₁/d₂ evaluation, so they are consistent
/// with each other and with [`BlackScholes::price`] by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T> {
    /// ∂V/∂S
    pub delta: T,
    /// ∂²V/∂S²
    pub gamma: T,
    /// ∂V/∂σ
    pub vega: T,
    /// ∂V/∂t (per year, typically negative)
    pub theta: T,
    /// ∂V/∂r
    pub rho: T,
}

/// Black-Scholes engine for European option pricing.
///
/// Holds the risk-free rate as injected configuration; all option-specific
/// inputs arrive through a validated [`OptionSpec`]. The engine is stateless
/// apart from the rate and is safe to share across threads.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_engine::{BlackScholes, OptionKind, OptionSpec};
///
/// let engine = BlackScholes::new(0.05_f64);
/// let call = OptionSpec::new(OptionKind::Call, 100.0, 100.0, 1.0, 0.2).unwrap();
/// let put = call.flipped();
///
/// let call_price = engine.price(&call).unwrap();
/// let put_price = engine.price(&put).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes<T: Float> {
    /// Risk-free interest rate (r), continuously compounded
    rate: T,
}

impl<T: Float> Default for BlackScholes<T> {
    fn default() -> Self {
        Self {
            rate: T::from(DEFAULT_RISK_FREE_RATE).unwrap(),
        }
    }
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new engine pricing under the given risk-free rate.
    ///
    /// Negative rates are permitted.
    pub fn new(rate: T) -> Self {
        Self { rate }
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Computes the d₁ and d₂ terms shared by all six formulas.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T), d₂ = d₁ - σ√T.
    ///
    /// # Errors
    /// `EngineError::NumericDegeneracy` if σ√T underflows to zero or the
    /// resulting d₁ is not finite. The positivity preconditions themselves
    /// are enforced earlier, by [`OptionSpec::new`].
    fn d1_d2(&self, spec: &OptionSpec<T>) -> Result<(T, T), EngineError> {
        let half = T::from(0.5).unwrap();

        let sqrt_t = spec.expiry().sqrt();
        let vol_sqrt_t = spec.volatility() * sqrt_t;

        if vol_sqrt_t <= T::zero() {
            return Err(EngineError::NumericDegeneracy {
                message: "sigma * sqrt(T) underflowed to zero".to_string(),
            });
        }

        let log_moneyness = (spec.spot() / spec.strike()).ln();
        let drift = (self.rate + half * spec.volatility() * spec.volatility()) * spec.expiry();

        let d1 = (log_moneyness + drift) / vol_sqrt_t;

        if !d1.is_finite() {
            return Err(EngineError::NumericDegeneracy {
                message: "d1 is not finite".to_string(),
            });
        }

        Ok((d1, d1 - vol_sqrt_t))
    }

    /// Computes the fair value of the option.
    ///
    /// - Call: C = S·N(d₁) - K·e^(-rT)·N(d₂)
    /// - Put: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    ///
    /// # Errors
    /// `EngineError::NumericDegeneracy` on degenerate intermediates.
    ///
    /// # Examples
    /// ```
    /// use pricer_engine::{BlackScholes, OptionKind, OptionSpec};
    ///
    /// let engine = BlackScholes::new(0.05_f64);
    /// let call = OptionSpec::new(OptionKind::Call, 100.0, 100.0, 1.0, 0.2).unwrap();
    ///
    /// // Known reference value ≈ 10.4506
    /// let price = engine.price(&call).unwrap();
    /// assert!((price - 10.4506).abs() < 0.01);
    /// ```
    pub fn price(&self, spec: &OptionSpec<T>) -> Result<T, EngineError> {
        let (d1, d2) = self.d1_d2(spec)?;
        let discount = (-self.rate * spec.expiry()).exp();

        let value = match spec.kind() {
            OptionKind::Call => {
                spec.spot() * norm_cdf(d1) - spec.strike() * discount * norm_cdf(d2)
            }
            OptionKind::Put => {
                spec.strike() * discount * norm_cdf(-d2) - spec.spot() * norm_cdf(-d1)
            }
        };

        Ok(value)
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = N(d₁)
    /// - Put Delta = N(d₁) - 1
    pub fn delta(&self, spec: &OptionSpec<T>) -> Result<T, EngineError> {
        let (d1, _) = self.d1_d2(spec)?;
        let n_d1 = norm_cdf(d1);

        Ok(match spec.kind() {
            OptionKind::Call => n_d1,
            OptionKind::Put => n_d1 - T::one(),
        })
    }

    /// Computes Gamma (∂²V/∂S²).
    ///
    /// Gamma = φ(d₁) / (S·σ·√T)
    ///
    /// Identical for calls and puts; the kind on `spec` is ignored.
    pub fn gamma(&self, spec: &OptionSpec<T>) -> Result<T, EngineError> {
        let (d1, _) = self.d1_d2(spec)?;
        let sqrt_t = spec.expiry().sqrt();

        Ok(norm_pdf(d1) / (spec.spot() * spec.volatility() * sqrt_t))
    }

    /// Computes Vega (∂V/∂σ).
    ///
    /// Vega = S·φ(d₁)·√T
    ///
    /// Identical for calls and puts; the kind on `spec` is ignored.
    pub fn vega(&self, spec: &OptionSpec<T>) -> Result<T, EngineError> {
        let (d1, _) = self.d1_d2(spec)?;
        let sqrt_t = spec.expiry().sqrt();

        Ok(spec.spot() * norm_pdf(d1) * sqrt_t)
    }

    /// Computes Theta (∂V/∂t), per year.
    ///
    /// - Call Theta = -(S·φ(d₁)·σ)/(2√T) - r·K·e^(-rT)·N(d₂)
    /// - Put Theta = -(S·φ(d₁)·σ)/(2√T) + r·K·e^(-rT)·N(-d₂)
    ///
    /// Typically negative (time decay).
    pub fn theta(&self, spec: &OptionSpec<T>) -> Result<T, EngineError> {
        let (d1, d2) = self.d1_d2(spec)?;
        let sqrt_t = spec.expiry().sqrt();
        let discount = (-self.rate * spec.expiry()).exp();
        let two = T::from(2.0).unwrap();

        let term1 = -(spec.spot() * norm_pdf(d1) * spec.volatility()) / (two * sqrt_t);
        let carry = self.rate * spec.strike() * discount;

        Ok(match spec.kind() {
            OptionKind::Call => term1 - carry * norm_cdf(d2),
            OptionKind::Put => term1 + carry * norm_cdf(-d2),
        })
    }

    /// Computes Rho (∂V/∂r).
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂)
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂)
    pub fn rho(&self, spec: &OptionSpec<T>) -> Result<T, EngineError> {
        let (_, d2) = self.d1_d2(spec)?;
        let discounted_strike = spec.strike() * spec.expiry() * (-self.rate * spec.expiry()).exp();

        Ok(match spec.kind() {
            OptionKind::Call => discounted_strike * norm_cdf(d2),
            OptionKind::Put => -discounted_strike * norm_cdf(-d2),
        })
    }

    /// Computes all five sensitivities from a single d₁/d₂ evaluation.
    ///
    /// # Examples
    /// ```
    /// use pricer_engine::{BlackScholes, OptionKind, OptionSpec};
    ///
    /// let engine = BlackScholes::default();
    /// let call = OptionSpec::new(OptionKind::Call, 100.0_f64, 100.0, 1.0, 0.2).unwrap();
    ///
    /// let greeks = engine.greeks(&call).unwrap();
    /// assert!((greeks.delta - 0.6368).abs() < 0.01);
    /// ```
    pub fn greeks(&self, spec: &OptionSpec<T>) -> Result<Greeks<T>, EngineError> {
        let (d1, d2) = self.d1_d2(spec)?;
        let sqrt_t = spec.expiry().sqrt();
        let discount = (-self.rate * spec.expiry()).exp();
        let pdf_d1 = norm_pdf(d1);
        let two = T::from(2.0).unwrap();

        let gamma = pdf_d1 / (spec.spot() * spec.volatility() * sqrt_t);
        let vega = spec.spot() * pdf_d1 * sqrt_t;

        let theta_term1 = -(spec.spot() * pdf_d1 * spec.volatility()) / (two * sqrt_t);
        let carry = self.rate * spec.strike() * discount;
        let discounted_strike = spec.strike() * spec.expiry() * discount;

        let (delta, theta, rho) = match spec.kind() {
            OptionKind::Call => (
                norm_cdf(d1),
                theta_term1 - carry * norm_cdf(d2),
                discounted_strike * norm_cdf(d2),
            ),
            OptionKind::Put => (
                norm_cdf(d1) - T::one(),
                theta_term1 + carry * norm_cdf(-d2),
                -discounted_strike * norm_cdf(-d2),
            ),
        };

        Ok(Greeks {
            delta,
            gamma,
            vega,
            theta,
            rho,
        })
    }
}
