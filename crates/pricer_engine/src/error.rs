//! Error types for the pricing engine.
//!
//! This module provides:
//! - `EngineError`: Errors raised by option validation and pricing

use thiserror::Error;

/// Pricing engine errors.
///
/// Provides structured error handling with descriptive context for
/// each failure mode. Validation is eager: every public entry point
/// rejects bad inputs with `InvalidParameter` instead of letting NaN
/// or infinity propagate into results.
///
/// # Variants
/// - `InvalidParameter`: A non-positive or non-finite pricing input
/// - `NumericDegeneracy`: Valid inputs produced a degenerate intermediate
///
/// # Examples
/// ```
/// use pricer_engine::EngineError;
///
/// let err = EngineError::InvalidParameter { name: "volatility", value: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    /// A pricing input that must be strictly positive was not.
    #[error("Invalid parameter {name}: must be strictly positive and finite, got {value}")]
    InvalidParameter {
        /// Which input failed validation ("spot", "strike", "expiry" or "volatility")
        name: &'static str,
        /// The offending value
        value: f64,
    },

    /// A degenerate intermediate quantity despite validated inputs.
    ///
    /// Raised when `sigma * sqrt(T)` underflows to zero or an
    /// intermediate stops being finite.
    #[error("Numeric degeneracy: {message}")]
    NumericDegeneracy {
        /// Description of the degenerate quantity
        message: String,
    },
}
