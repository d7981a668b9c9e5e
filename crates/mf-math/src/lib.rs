//! # mf-math
//!
//! Mathematical utilities for mathfin-rs: floating-point comparison,
//! probability distributions (binomial, normal), matrix/array newtypes
//! over nalgebra, and random number generation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Array` — one-dimensional vector of reals.
pub mod array;

/// Floating-point comparison utilities.
pub mod comparison;

/// Probability distributions.
pub mod distributions;

/// `Matrix` — two-dimensional matrix of reals.
pub mod matrix;

/// Random number generators.
pub mod random_numbers;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use array::Array;
pub use comparison::{close, close_enough};
pub use distributions::{cumulative_binomial, normal_cdf, normal_cdf_inverse, normal_pdf};
pub use matrix::Matrix;
pub use random_numbers::GaussianRng;
