//! # Pricer Engine (L2: Pricing & Greeks)
//!
//! Closed-form Black-Scholes pricing and risk sensitivities for
//! European options.
//!
//! This crate provides:
//! - Validated option descriptions ([`OptionSpec`], [`OptionKind`])
//! - The [`BlackScholes`] engine: fair value plus Delta, Gamma, Vega,
//!   Theta and Rho, all derived from one shared d₁/d₂ computation
//! - A structured error taxonomy ([`EngineError`])
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports both `f64` and `f32`
//! - **Fail-fast validation**: Bad inputs return `InvalidParameter`
//!   at the boundary instead of propagating NaN into results
//! - **Injected rate**: The risk-free rate is engine configuration,
//!   not a hidden global; [`DEFAULT_RISK_FREE_RATE`] reproduces the
//!   conventional 5% assumption
//! - **Pure computation**: No state beyond the rate, no I/O, safe to
//!   call concurrently from any number of threads
//!
//! ## Example
//!
//! ```
//! use pricer_engine::{BlackScholes, OptionKind, OptionSpec};
//!
//! let engine = BlackScholes::default();
//! let option = OptionSpec::new(OptionKind::Call, 100.0_f64, 100.0, 1.0, 0.2)?;
//!
//! let price = engine.price(&option)?;
//! let greeks = engine.greeks(&option)?;
//!
//! assert!(price > 0.0);
//! assert!(greeks.theta < 0.0);
//! # Ok::<(), pricer_engine::EngineError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod black_scholes;
pub mod error;
pub mod option;

pub use black_scholes::{BlackScholes, Greeks, DEFAULT_RISK_FREE_RATE};
pub use error::EngineError;
pub use option::{OptionKind, OptionSpec};
