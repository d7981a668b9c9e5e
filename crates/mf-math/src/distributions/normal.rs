//! Normal (Gaussian) distribution.
//!
//! Wraps the `statrs` crate's standard normal implementation.

use mf_core::Real;
use statrs::distribution::{Continuous, ContinuousCDF, Normal};
use std::sync::OnceLock;

fn standard_normal() -> &'static Normal {
    static STANDARD: OnceLock<Normal> = OnceLock::new();
    STANDARD.get_or_init(|| Normal::new(0.0, 1.0).expect("unit normal parameters are valid"))
}

/// The standard normal probability density function `φ(x)`.
#[inline]
pub fn normal_pdf(x: Real) -> Real {
    standard_normal().pdf(x)
}

/// The standard normal cumulative distribution function `Φ(x)`.
#[inline]
pub fn normal_cdf(x: Real) -> Real {
    standard_normal().cdf(x)
}

/// The inverse standard normal CDF (probit function).
///
/// # Panics
/// Panics if `p` is not in `(0, 1)`.
pub fn normal_cdf_inverse(p: Real) -> Real {
    assert!(p > 0.0 && p < 1.0, "p must be in (0, 1), got {p}");
    standard_normal().inverse_cdf(p)
}
