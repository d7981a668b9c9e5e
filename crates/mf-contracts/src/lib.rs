//! # mf-contracts
//!
//! Closed-form valuation of the simple instruments surrounding the
//! option-pricing core: zero-coupon bond discounting, forward and
//! futures contracts (with and without dividends), arbitrage bounds
//! and put-call parity checks for quoted option prices, and growing
//! annuity / savings-plan arithmetic.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Growing annuities and savings plans.
pub mod annuity;

/// Zero-coupon bond discounting.
pub mod bond;

/// Forward contract pricing and valuation.
pub mod forward;

/// Futures marking to market.
pub mod futures;

/// Put-call parity checks and option price bounds.
pub mod parity;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use annuity::{growing_annuity_factor, savings_rate};
pub use bond::discount_factor;
pub use forward::{
    forward_price, forward_price_discrete_dividend, forward_price_dividend_yield,
    forward_value, forward_value_at_delivery_price,
};
pub use futures::mark_to_market;
pub use parity::{
    american_bounds, american_bounds_discrete_dividend, european_bounds,
    european_bounds_discrete_dividend, OptionBounds, PriceBound,
};
