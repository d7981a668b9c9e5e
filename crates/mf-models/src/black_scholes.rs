//! Black-Scholes closed-form European pricing.

use mf_core::{Error, Price, Rate, Real, Result, Time, Volatility};
use mf_instruments::payoff::OptionType;
use mf_math::distributions::normal::normal_cdf;

/// Black-Scholes price of a European option on a non-dividend stock.
///
/// With `d1 = (ln(S/X) + (r + σ²/2)T)/(σ√T)` and `d2 = d1 − σ√T`,
/// the call price is `S·Φ(d1) − X·e^(−rT)·Φ(d2)`; the put follows by
/// flipping the signs of both arguments and the whole expression.
pub fn black_scholes_price(
    option_type: OptionType,
    spot: Price,
    strike: Price,
    r: Rate,
    sigma: Volatility,
    t: Time,
) -> Result<Real> {
    if spot <= 0.0 || strike <= 0.0 {
        return Err(Error::InvalidArgument(format!(
            "spot and strike must be positive, got {spot} and {strike}"
        )));
    }
    if sigma <= 0.0 || t <= 0.0 {
        return Err(Error::InvalidArgument(format!(
            "volatility and horizon must be positive, got {sigma} and {t}"
        )));
    }
    let vol = sigma * t.sqrt();
    let d1 = ((spot / strike).ln() + (r + 0.5 * sigma * sigma) * t) / vol;
    let d2 = d1 - vol;
    let sign = option_type.sign();
    Ok(sign * (spot * normal_cdf(sign * d1) - strike * (-r * t).exp() * normal_cdf(sign * d2)))
}
