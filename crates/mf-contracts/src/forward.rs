//! Forward contract pricing and valuation.
//!
//! All prices follow from the cash-and-carry replication argument: a
//! forward position is a leveraged spot position, so the forward price
//! is the spot grossed up by the financing cost, net of any dividends
//! the spot holder pockets along the way.

use crate::bond::discount_factor;
use mf_core::{Price, Rate, Real, Time};

/// Forward price agreed at time `t` for delivery at `maturity`,
/// no dividends: `F = S / B(t, T)`.
#[inline]
pub fn forward_price(r: Rate, t: Time, maturity: Time, spot: Price) -> Price {
    spot / discount_factor(r, t, maturity)
}

/// Forward price when the asset pays a continuous dividend yield
/// `div_yield`: `F = S·e^(−q(T−t)) / B(t, T)`.
pub fn forward_price_dividend_yield(
    r: Rate,
    t: Time,
    maturity: Time,
    spot: Price,
    div_yield: Rate,
) -> Price {
    spot * (-div_yield * (maturity - t)).exp() / discount_factor(r, t, maturity)
}

/// Forward price when a single dividend `div` is paid at `t_div`.
///
/// The dividend only affects the carry when it falls strictly inside
/// the contract's life.
pub fn forward_price_discrete_dividend(
    r: Rate,
    t: Time,
    t_div: Time,
    maturity: Time,
    spot: Price,
    div: Real,
) -> Price {
    if t_div > t && t_div < maturity {
        (spot - discount_factor(r, t, t_div) * div) / discount_factor(r, t, maturity)
    } else {
        spot / discount_factor(r, t, maturity)
    }
}

/// Value at time `t` of a long forward position entered at time 0,
/// with a single dividend `div` paid at `t_div`.
///
/// The value is the discounted difference between today's forward
/// price and the one locked in at inception.
pub fn forward_value(
    r: Rate,
    t: Time,
    t_div: Time,
    maturity: Time,
    spot_at_inception: Price,
    spot: Price,
    div: Real,
) -> Real {
    let current = forward_price_discrete_dividend(r, t, t_div, maturity, spot, div);
    let initial = forward_price_discrete_dividend(r, 0.0, t_div, maturity, spot_at_inception, div);
    (current - initial) * discount_factor(r, t, maturity)
}

/// Value at time `t` of a long forward with delivery price `x`,
/// no dividends: `(F_t − X)·B(t, T)`.
pub fn forward_value_at_delivery_price(
    r: Rate,
    t: Time,
    maturity: Time,
    spot: Price,
    x: Price,
) -> Real {
    (forward_price(r, t, maturity, spot) - x) * discount_factor(r, t, maturity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn plain_forward_fixture() {
        // S=45, r=8%, nine months to delivery
        assert_relative_eq!(
            forward_price(0.08, 0.0, 0.75, 45.0),
            47.78264459454118,
            max_relative = 1e-12
        );
    }

    #[test]
    fn dividend_yield_reduces_the_forward() {
        let plain = forward_price(0.08, 0.0, 0.75, 45.0);
        let with_yield = forward_price_dividend_yield(0.08, 0.0, 0.75, 45.0, 0.03);
        assert!(with_yield < plain);
    }

    #[test]
    fn discrete_dividend_fixture() {
        // S=100, r=10%, T=6m, dividend of 2 after 3m
        assert_relative_eq!(
            forward_price_discrete_dividend(0.1, 0.0, 0.25, 0.5, 100.0, 2.0),
            103.07647939655357,
            max_relative = 1e-12
        );
        // a dividend outside (t, T) is ignored
        assert_relative_eq!(
            forward_price_discrete_dividend(0.1, 0.0, 0.75, 0.5, 100.0, 2.0),
            forward_price(0.1, 0.0, 0.5, 100.0),
            max_relative = 1e-14
        );
    }

    #[test]
    fn value_is_zero_at_inception() {
        let v = forward_value(0.1, 0.0, 0.25, 0.5, 100.0, 100.0, 2.0);
        assert_abs_diff_eq!(v, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn value_against_delivery_price() {
        // locking in delivery at the current forward price is worthless
        let f = forward_price(0.08, 0.25, 1.0, 50.0);
        assert_abs_diff_eq!(
            forward_value_at_delivery_price(0.08, 0.25, 1.0, 50.0, f),
            0.0,
            epsilon = 1e-12
        );
        // a lower delivery price makes the long position valuable
        assert!(forward_value_at_delivery_price(0.08, 0.25, 1.0, 50.0, f - 5.0) > 0.0);
    }
}
