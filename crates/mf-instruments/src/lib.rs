//! # mf-instruments
//!
//! Option types and payoff definitions shared by the pricing crates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod payoff;

pub use payoff::{OptionType, Payoff, PlainVanillaPayoff};
