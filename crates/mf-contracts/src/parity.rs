//! Put-call parity checks and option price bounds.
//!
//! For European options parity is an equality, so a quoted call/put
//! pair either satisfies it or admits arbitrage. For American options
//! early exercise loosens the relation to a band, and only prices
//! outside the band can be arbitraged. Comparisons go through
//! [`mf_math::comparison::close`] so that float noise in quoted
//! prices is not mistaken for a riskless profit.

use crate::bond::discount_factor;
use mf_core::{Price, Rate, Real, Time};
use mf_math::comparison::close;

/// Tolerance for treating a quoted spread as equal to its parity
/// value.
const TOLERANCE: Real = 1e-9;

/// Lower and upper bound on a single option price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBound {
    /// Largest price a no-arbitrage argument forces from below.
    pub lower: Real,
    /// Smallest price a no-arbitrage argument forces from above.
    pub upper: Real,
}

impl PriceBound {
    /// Whether a quoted price sits inside the bound (inclusive).
    pub fn contains(&self, price: Price) -> bool {
        price >= self.lower && price <= self.upper
    }
}

/// No-arbitrage bounds for a call/put pair with a common strike.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionBounds {
    /// Bound on the call price.
    pub call: PriceBound,
    /// Bound on the put price.
    pub put: PriceBound,
}

/// Whether quoted European call/put prices violate put-call parity
/// `C − P = S − X·B(0, T)`.
pub fn european_parity_violated(
    r: Rate,
    maturity: Time,
    spot: Price,
    strike: Price,
    call: Price,
    put: Price,
) -> bool {
    !close(
        call - put,
        spot - strike * discount_factor(r, 0.0, maturity),
        TOLERANCE,
    )
}

/// European parity with a continuous dividend yield:
/// `C − P = S·e^(−qT) − X·B(0, T)`.
pub fn european_parity_violated_dividend_yield(
    r: Rate,
    maturity: Time,
    spot: Price,
    strike: Price,
    div_yield: Rate,
    call: Price,
    put: Price,
) -> bool {
    let forward_leg =
        spot * discount_factor(div_yield, 0.0, maturity) - strike * discount_factor(r, 0.0, maturity);
    !close(call - put, forward_leg, TOLERANCE)
}

/// European parity with a single dividend of present value `div_0`
/// paid before expiry: `C − P = (S − div_0) − X·B(0, T)`.
pub fn european_parity_violated_discrete_dividend(
    r: Rate,
    maturity: Time,
    spot: Price,
    strike: Price,
    div_0: Real,
    call: Price,
    put: Price,
) -> bool {
    !close(
        call - put,
        (spot - div_0) - strike * discount_factor(r, 0.0, maturity),
        TOLERANCE,
    )
}

/// Whether quoted American call/put prices fall outside the parity
/// band `S − X ≤ C − P ≤ S − X·B(0, T)`.
pub fn american_parity_violated(
    r: Rate,
    maturity: Time,
    spot: Price,
    strike: Price,
    call: Price,
    put: Price,
) -> bool {
    let spread = call - put;
    let high = spot - strike * discount_factor(r, 0.0, maturity);
    let low = spot - strike;
    outside_band(spread, low, high)
}

/// American parity band with a continuous dividend yield:
/// `S·e^(−qT) − X ≤ C − P ≤ S − X·B(0, T)`.
pub fn american_parity_violated_dividend_yield(
    r: Rate,
    maturity: Time,
    spot: Price,
    strike: Price,
    div_yield: Rate,
    call: Price,
    put: Price,
) -> bool {
    let spread = call - put;
    let high = spot - strike * discount_factor(r, 0.0, maturity);
    let low = spot * discount_factor(div_yield, 0.0, maturity) - strike;
    outside_band(spread, low, high)
}

/// American parity band with a single dividend of present value
/// `div_0`: `(S − div_0) − X ≤ C − P ≤ S − X·B(0, T)`.
pub fn american_parity_violated_discrete_dividend(
    r: Rate,
    maturity: Time,
    spot: Price,
    strike: Price,
    div_0: Real,
    call: Price,
    put: Price,
) -> bool {
    let spread = call - put;
    let high = spot - strike * discount_factor(r, 0.0, maturity);
    let low = (spot - div_0) - strike;
    outside_band(spread, low, high)
}

fn outside_band(x: Real, low: Real, high: Real) -> bool {
    (x > high && !close(x, high, TOLERANCE)) || (x < low && !close(x, low, TOLERANCE))
}

/// No-arbitrage bounds for European options on a non-dividend stock:
/// `max(S − X·B, 0) ≤ C ≤ S` and `max(X·B − S, 0) ≤ P ≤ X·B`.
pub fn european_bounds(r: Rate, maturity: Time, spot: Price, strike: Price) -> OptionBounds {
    let xb = strike * discount_factor(r, 0.0, maturity);
    OptionBounds {
        call: PriceBound {
            lower: (spot - xb).max(0.0),
            upper: spot,
        },
        put: PriceBound {
            lower: (xb - spot).max(0.0),
            upper: xb,
        },
    }
}

/// European bounds when a dividend of present value `div_0` is paid
/// before expiry; the spot is replaced by its ex-dividend value in
/// the call bound.
pub fn european_bounds_discrete_dividend(
    r: Rate,
    maturity: Time,
    spot: Price,
    strike: Price,
    div_0: Real,
) -> OptionBounds {
    let s0 = spot - div_0;
    let xb = strike * discount_factor(r, 0.0, maturity);
    OptionBounds {
        call: PriceBound {
            lower: (s0 - xb).max(0.0),
            upper: s0,
        },
        put: PriceBound {
            lower: (xb - s0).max(0.0),
            upper: xb,
        },
    }
}

/// No-arbitrage bounds for American options on a non-dividend stock.
///
/// The put lower bound uses the undiscounted strike because the
/// option can be exercised immediately.
pub fn american_bounds(r: Rate, maturity: Time, spot: Price, strike: Price) -> OptionBounds {
    let xb = strike * discount_factor(r, 0.0, maturity);
    OptionBounds {
        call: PriceBound {
            lower: (spot - xb).max(0.0),
            upper: spot,
        },
        put: PriceBound {
            lower: (strike - spot).max(0.0),
            upper: strike,
        },
    }
}

/// American bounds when a dividend of present value `div_0` is paid
/// before expiry; the immediate-exercise payoff joins the dividend-
/// adjusted one in each lower bound.
pub fn american_bounds_discrete_dividend(
    r: Rate,
    maturity: Time,
    spot: Price,
    strike: Price,
    div_0: Real,
) -> OptionBounds {
    let xb = strike * discount_factor(r, 0.0, maturity);
    OptionBounds {
        call: PriceBound {
            lower: (spot - div_0 - xb).max(spot - strike).max(0.0),
            upper: spot,
        },
        put: PriceBound {
            lower: (div_0 + xb - spot).max(strike - spot).max(0.0),
            upper: strike,
        },
    }
}
