//! # mf-models
//!
//! Continuous-time limit of the binomial model. Per-step returns that
//! reproduce log-normal dynamics, the terminal price distribution of
//! the resulting tree (exact and by seeded Monte Carlo sampling), and
//! the Black-Scholes closed form the tree converges to.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Black-Scholes closed-form European pricing.
pub mod black_scholes;

/// Per-step returns and the exact terminal distribution of the tree.
pub mod crr;

/// Sampled terminal distribution of the log-normal price.
pub mod monte_carlo;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use black_scholes::black_scholes_price;
pub use crr::{step_returns, terminal_distribution_binomial};
pub use monte_carlo::terminal_distribution_monte_carlo;
