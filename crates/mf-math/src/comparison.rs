//! Floating-point comparison helpers.
//!
//! Pricing identities (put-call parity, discounted expectations) are
//! exact in the algebra but not in `f64`; these helpers decide when a
//! computed or quoted value counts as equal to its theoretical one.

use mf_core::Real;

/// Default tolerance for absolute comparisons of prices and rates.
pub const EPSILON: Real = 1e-10;

/// Absolute comparison: `|a - b| <= epsilon`.
#[inline]
pub fn close(a: Real, b: Real, epsilon: Real) -> bool {
    (a - b).abs() <= epsilon
}

/// Relative comparison scaled to the operands: true when `a` and `b`
/// differ by at most `n` units of machine epsilon at their magnitude.
#[inline]
pub fn close_enough(a: Real, b: Real, n: u32) -> bool {
    if a == b {
        return true;
    }
    let eps = (a.abs().max(b.abs())) * f64::EPSILON * n as f64;
    (a - b).abs() <= eps
}
