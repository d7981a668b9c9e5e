//! # mf-portfolio
//!
//! Markowitz mean-variance portfolio theory: covariance construction
//! from correlations, the minimum variance portfolio, the minimum
//! variance line through weight space, and the market portfolio with
//! its capital market line once a risk-free security is admitted.
//!
//! Weights are plain [`Array`](mf_math::array::Array)s summing to 1;
//! short positions appear as negative entries and are not constrained
//! away.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Capital market line and the market portfolio.
pub mod cml;

/// Minimum variance portfolios and the efficient frontier.
pub mod frontier;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use cml::{capital_market_line, market_portfolio, risk_free_fraction};
pub use frontier::{
    covariance_from_correlations, frontier_weights, min_variance_line, min_variance_portfolio,
    min_variance_weights, portfolio_value,
};
