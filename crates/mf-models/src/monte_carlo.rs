//! Sampled terminal distribution of the log-normal price.

use std::collections::BTreeMap;

use mf_core::{Error, Price, Real, Result, Size};
use mf_math::random_numbers::GaussianRng;
use ordered_float::OrderedFloat;

/// Histogram of the terminal log-price `ln S_T = ln S_0 + μT + σ·Z`,
/// `Z ~ N(0, T)`, sampled with a seeded Mersenne Twister.
///
/// Keys are log-prices rounded to 2 decimals, values are sample
/// counts. Normalizing by `samples` gives the empirical probability
/// mass of the rounded log-price.
pub fn terminal_distribution_monte_carlo(
    mu: Real,
    sigma: Real,
    s0: Price,
    t: Real,
    samples: Size,
    seed: u64,
) -> Result<BTreeMap<OrderedFloat<Real>, u64>> {
    if s0 <= 0.0 {
        return Err(Error::InvalidArgument(format!(
            "spot must be positive, got {s0}"
        )));
    }
    if t <= 0.0 {
        return Err(Error::InvalidArgument(format!(
            "horizon must be positive, got {t}"
        )));
    }
    let mut rng = GaussianRng::new(seed, 0.0, t)?;
    let center = s0.ln() + mu * t;
    let mut hist: BTreeMap<OrderedFloat<Real>, u64> = BTreeMap::new();
    for _ in 0..samples {
        let log_price = center + sigma * rng.next_real();
        let key = OrderedFloat((log_price * 1e2).round() / 1e2);
        *hist.entry(key).or_insert(0) += 1;
    }
    Ok(hist)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_add_up_and_runs_are_reproducible() {
        let a = terminal_distribution_monte_carlo(0.1, 0.2, 100.0, 1.0, 10_000, 42).unwrap();
        let b = terminal_distribution_monte_carlo(0.1, 0.2, 100.0, 1.0, 10_000, 42).unwrap();
        assert_eq!(a, b);
        let total: u64 = a.values().sum();
        assert_eq!(total, 10_000);
    }

    #[test]
    fn histogram_centers_on_the_drifted_log_price() {
        let hist = terminal_distribution_monte_carlo(0.1, 0.2, 100.0, 1.0, 50_000, 7).unwrap();
        let n: u64 = hist.values().sum();
        let mean: f64 = hist
            .iter()
            .map(|(k, &c)| k.into_inner() * c as f64)
            .sum::<f64>()
            / n as f64;
        let center = 100.0_f64.ln() + 0.1;
        assert!((mean - center).abs() < 0.01);
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(terminal_distribution_monte_carlo(0.1, 0.2, -1.0, 1.0, 10, 1).is_err());
        assert!(terminal_distribution_monte_carlo(0.1, 0.2, 100.0, 0.0, 10, 1).is_err());
    }
}
