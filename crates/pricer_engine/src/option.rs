//! Option descriptions.
//!
//! This module provides the validated inputs to the pricing engine:
//! `OptionKind` (call/put flag) and `OptionSpec` (spot, strike, expiry
//! and volatility with positivity validation).

use num_traits::Float;

use crate::error::EngineError;

/// European option kind.
///
/// # Examples
/// ```
/// use pricer_engine::OptionKind;
///
/// assert!(OptionKind::Call.is_call());
/// assert!(!OptionKind::Put.is_call());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionKind {
    /// Right to buy the underlying at the strike.
    Call,
    /// Right to sell the underlying at the strike.
    Put,
}

impl OptionKind {
    /// Returns true for `Call`.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionKind::Call)
    }
}

/// Validated description of a European option.
///
/// Contains the option kind together with the four scalar pricing
/// inputs. Construction validates that spot, strike, expiry and
/// volatility are strictly positive and finite, so every `OptionSpec`
/// reaching a formula already satisfies the model's preconditions.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_engine::{OptionKind, OptionSpec};
///
/// let spec = OptionSpec::new(OptionKind::Call, 100.0_f64, 100.0, 1.0, 0.2).unwrap();
/// assert_eq!(spec.spot(), 100.0);
///
/// // Zero volatility is rejected up front
/// assert!(OptionSpec::new(OptionKind::Call, 100.0_f64, 100.0, 1.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionSpec<T: Float> {
    kind: OptionKind,
    spot: T,
    strike: T,
    expiry: T,
    volatility: T,
}

impl<T: Float> OptionSpec<T> {
    /// Creates a new option description with validation.
    ///
    /// # Arguments
    /// * `kind` - Call or put
    /// * `spot` - Current spot price S (must be positive)
    /// * `strike` - Strike price K (must be positive)
    /// * `expiry` - Time to maturity T in years (must be positive)
    /// * `volatility` - Volatility σ (must be positive)
    ///
    /// # Errors
    /// `EngineError::InvalidParameter` naming the first offending input
    /// if any of the four values is non-positive or non-finite.
    pub fn new(
        kind: OptionKind,
        spot: T,
        strike: T,
        expiry: T,
        volatility: T,
    ) -> Result<Self, EngineError> {
        validate_positive("spot", spot)?;
        validate_positive("strike", strike)?;
        validate_positive("expiry", expiry)?;
        validate_positive("volatility", volatility)?;

        Ok(Self {
            kind,
            spot,
            strike,
            expiry,
            volatility,
        })
    }

    /// Returns the option kind.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns a copy of this description with the other kind.
    ///
    /// Handy for put-call parity checks and kind-independence tests.
    #[inline]
    pub fn flipped(&self) -> Self {
        Self {
            kind: match self.kind {
                OptionKind::Call => OptionKind::Put,
                OptionKind::Put => OptionKind::Call,
            },
            ..*self
        }
    }
}

fn validate_positive<T: Float>(name: &'static str, value: T) -> Result<(), EngineError> {
    if value <= T::zero() || !value.is_finite() {
        return Err(EngineError::InvalidParameter {
            name,
            value: value.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}
