//! # Pricer Math (L1: Special Functions)
//!
//! Error function and standard normal distribution approximations.
//!
//! This crate provides:
//! - `erf`: Gauss error function via a rational/exponential approximation
//! - `norm_cdf`: Standard normal cumulative distribution function
//! - `norm_pdf`: Standard normal probability density function
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports both `f64` and `f32`
//! - **Pure functions**: No state, no allocation, safe to call from any thread
//! - **Known accuracy**: CDF accurate to ~1.2e-7 absolute over the real line

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod erf;
pub mod normal;

pub use erf::erf;
pub use normal::{norm_cdf, norm_pdf};
