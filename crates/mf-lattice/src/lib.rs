//! # mf-lattice
//!
//! The binomial option-pricing engine: fully materialized price trees,
//! the risk-neutral measure, European and American pricers, and the
//! replicating-hedge computation.
//!
//! # Overview
//!
//! * [`PriceTree`] — complete (non-collapsed) binomial tree of
//!   underlying prices, heap-indexed
//! * [`measure`] — risk-neutral probability, no-arbitrage checks, the
//!   least exercise order
//! * [`european`] — Cox-Ross-Rubinstein closed form and the per-node
//!   value lattice
//! * [`american`] — early-exercise backward induction
//! * [`hedge`] — stock / money-market replicating positions and the
//!   self-financing check
//!
//! Everything is single-threaded and eager: a depth-`N` tree holds
//! `2^(N+1) − 1` nodes in memory, so keep `N` modest.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// American option pricing by backward induction.
pub mod american;

/// European option pricing: closed form and value lattices.
pub mod european;

/// Replicating-hedge positions.
pub mod hedge;

/// The risk-neutral measure of the one-step binomial model.
pub mod measure;

/// The price tree, value lattices, and their index arithmetic.
pub mod tree;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use american::AmericanPrice;
pub use european::{EuropeanLattice, EuropeanPrice};
pub use hedge::HedgePosition;
pub use measure::{
    adjusted_probability, least_exercise_order, p_star, validate_no_arbitrage,
};
pub use tree::{PriceTree, ValueLattice};
