//! # mathfin
//!
//! Pricing formalisms from Capinski & Zastawniak's *Mathematics for
//! Finance*: binomial option pricing on the full (non-recombining)
//! price tree, replicating hedges, forward/futures contracts,
//! arbitrage bounds, Markowitz portfolio theory, and the
//! continuous-time limit.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on
//! this crate rather than the individual `mf-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! mathfin = "0.1"
//! ```
//!
//! ```rust
//! use mathfin::lattice::european::price_closed_form;
//!
//! let prices = price_closed_form(0.1, 0.2, -0.1, 100.0, 105.0, 3).unwrap();
//! assert!(prices.call > 0.0 && prices.put > 0.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use mf_core as core;

/// Mathematical utilities: distributions, linear algebra, RNG.
pub use mf_math as math;

/// Payoffs and option types.
pub use mf_instruments as instruments;

/// Binomial price trees, risk-neutral pricing, and hedging.
pub use mf_lattice as lattice;

/// Bonds, forwards, futures, and option arbitrage bounds.
pub use mf_contracts as contracts;

/// Markowitz portfolio theory and the capital market line.
pub use mf_portfolio as portfolio;

/// Continuous-time limit and Black-Scholes pricing.
pub use mf_models as models;
