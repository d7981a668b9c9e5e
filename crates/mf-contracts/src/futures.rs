//! Futures contracts and marking to market.

use crate::bond::discount_factor;
use mf_core::{Error, Price, Rate, Real, Result, Time};

/// Futures prices and margin cash flows along an observed spot path.
///
/// The path holds one spot observation per month, starting `t` months
/// after the contract date, with delivery at `maturity` (in years).
/// The futures price at each observation is the forward price for the
/// remaining carry, except at delivery where it converges to the spot
/// itself. The margin account receives the change in the futures
/// price at every step, so the flows have one entry fewer than the
/// path.
///
/// Returns `Error::InvalidArgument` on an empty path.
pub fn mark_to_market(
    r: Rate,
    t: Time,
    maturity: Time,
    path: &[Price],
) -> Result<(Vec<Price>, Vec<Real>)> {
    if path.is_empty() {
        return Err(Error::InvalidArgument(
            "futures path must hold at least one observation".into(),
        ));
    }

    let last = path.len() - 1;
    let prices: Vec<Price> = path
        .iter()
        .enumerate()
        .map(|(i, &s)| {
            if i == last {
                s
            } else {
                s / discount_factor(r, (t + i as Real) / 12.0, maturity)
            }
        })
        .collect();
    let flows: Vec<Real> = prices.windows(2).map(|w| w[1] - w[0]).collect();
    Ok((prices, flows))
}
