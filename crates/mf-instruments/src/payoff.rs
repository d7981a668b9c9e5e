//! Option payoffs.
//!
//! Payoffs describe the exercise value of an option as a function of
//! the underlying asset price.  The lattice pricers evaluate them at
//! tree nodes; the continuous-time model evaluates them at expiry.

use mf_core::Real;
use std::fmt;

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    /// A call option (right to buy).
    Call,
    /// A put option (right to sell).
    Put,
}

impl OptionType {
    /// +1 for Call, −1 for Put.
    pub fn sign(self) -> Real {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// Base trait for option payoffs.
pub trait Payoff: fmt::Debug {
    /// Compute the payoff given the underlying price at exercise.
    fn value(&self, price: Real) -> Real;
}

/// Standard "plain vanilla" option payoff.
///
/// `payoff = max(φ(S − X), 0)` where `φ = +1` for Call, `−1` for Put.
#[derive(Debug, Clone, Copy)]
pub struct PlainVanillaPayoff {
    /// Option type.
    pub option_type: OptionType,
    /// Strike price.
    pub strike: Real,
}

impl PlainVanillaPayoff {
    /// Create a new plain vanilla payoff.
    pub fn new(option_type: OptionType, strike: Real) -> Self {
        Self {
            option_type,
            strike,
        }
    }
}

impl Payoff for PlainVanillaPayoff {
    fn value(&self, price: Real) -> Real {
        (self.option_type.sign() * (price - self.strike)).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn vanilla_call_and_put() {
        let call = PlainVanillaPayoff::new(OptionType::Call, 100.0);
        let put = PlainVanillaPayoff::new(OptionType::Put, 100.0);
        assert_relative_eq!(call.value(110.0), 10.0);
        assert_relative_eq!(call.value(90.0), 0.0);
        assert_relative_eq!(put.value(90.0), 10.0);
        assert_relative_eq!(put.value(110.0), 0.0);
    }

    #[test]
    fn at_the_money_is_worthless() {
        let call = PlainVanillaPayoff::new(OptionType::Call, 50.0);
        assert_relative_eq!(call.value(50.0), 0.0);
    }
}
