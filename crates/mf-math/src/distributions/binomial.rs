//! Binomial distribution.
//!
//! The Cox-Ross-Rubinstein closed form needs the cumulative binomial
//! distribution evaluated exactly, as the finite sum
//! `Σ_{k=0}^{m} C(n,k) p^k (1-p)^(n-k)`.  `cumulative_binomial` below
//! computes that sum term by term; the tests cross-check it against
//! `statrs`.

use mf_core::Real;

/// Exact cumulative binomial distribution `P(X <= m)` for `X ~ B(n, p)`.
///
/// `m` may be negative, in which case the sum is empty and the result
/// is 0.  `m >= n` gives 1 up to rounding.
///
/// Each probability mass term is built from the previous one through
/// `C(n,k+1)/C(n,k) = (n-k)/(k+1)`, so no factorials are ever formed.
pub fn cumulative_binomial(m: isize, n: usize, p: Real) -> Real {
    debug_assert!((0.0..=1.0).contains(&p), "p must be in [0, 1], got {p}");
    if m < 0 {
        return 0.0;
    }
    let upper = (m as usize).min(n);
    let q = 1.0 - p;
    if q == 0.0 {
        // all mass sits at k = n
        return if upper >= n { 1.0 } else { 0.0 };
    }

    // k = 0 term: (1-p)^n
    let mut term = q.powi(n as i32);
    let mut total = term;
    for k in 0..upper {
        // C(n,k) p^k q^(n-k) → C(n,k+1) p^(k+1) q^(n-k-1)
        term *= (n - k) as Real / (k + 1) as Real * p / q;
        total += term;
    }
    total
}
