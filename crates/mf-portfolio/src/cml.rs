//! Capital market line and the market portfolio.
//!
//! Admitting a risk-free security turns the efficient frontier into a
//! straight line through `(0, R)` tangent to the risky frontier. The
//! tangency point is the market portfolio; every efficient investor
//! holds it, scaled by how much risk they want.

use crate::frontier::{check_dims, invert, portfolio_value};
use mf_core::{Error, Rate, Real, Result};
use mf_math::array::Array;
use mf_math::matrix::Matrix;

/// Weights, expected return, and risk `(w, μ_MP, σ_MP)` of the market
/// portfolio `w ∝ (m − R·u)C⁻¹`.
pub fn market_portfolio(m: &Array, cov: &Matrix, r: Rate) -> Result<(Array, Real, Real)> {
    check_dims(m, cov)?;
    let cinv = invert(cov)?;
    let n = m.size();
    let u = Array::from_element(n, 1.0);
    let excess = cinv.mul_vec(&(m - &(&u * r)));
    let denom = excess.sum();
    if denom == 0.0 {
        return Err(Error::InvalidArgument(
            "all securities earn the risk-free rate: market portfolio undefined".into(),
        ));
    }
    let w = &excess * (1.0 / denom);
    let (mu, sigma) = portfolio_value(m, cov, &w)?;
    Ok((w, mu, sigma))
}

/// Expected return on the capital market line at risk `sigma`:
/// `μ = R + (μ_MP − R)·σ/σ_MP`.
#[inline]
pub fn capital_market_line(mu_mp: Real, sigma_mp: Real, r: Rate, sigma: Real) -> Real {
    r + (mu_mp - r) * sigma / sigma_mp
}

/// Fraction of wealth held in the risk-free security when targeting
/// risk `sigma_target` along the CML. Zero at the market portfolio,
/// negative beyond it (borrowing at the risk-free rate).
pub fn risk_free_fraction(sigma_mp: Real, sigma_target: Real) -> Result<Real> {
    if sigma_mp <= 0.0 {
        return Err(Error::InvalidArgument(format!(
            "market portfolio risk must be positive, got {sigma_mp}"
        )));
    }
    Ok(1.0 - sigma_target / sigma_mp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontier::covariance_from_correlations;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn universe() -> (Array, Matrix) {
        let sigma = Array::from_slice(&[0.25, 0.28, 0.20]);
        let rho = Matrix::from_row_slice(
            3,
            3,
            &[1.0, 0.30, 0.15, 0.30, 1.0, 0.0, 0.15, 0.0, 1.0],
        );
        let m = Array::from_slice(&[0.20, 0.13, 0.17]);
        let cov = covariance_from_correlations(&rho, &sigma).unwrap();
        (m, cov)
    }

    #[test]
    fn market_portfolio_weights_and_value() {
        let (m, cov) = universe();
        let (w, mu, sigma) = market_portfolio(&m, &cov, 0.05).unwrap();
        assert_relative_eq!(w[0], 0.6772851730639079, max_relative = 1e-10);
        assert_relative_eq!(w[1], -0.15179334256757146, max_relative = 1e-10);
        assert_relative_eq!(w[2], 0.4745081695036635, max_relative = 1e-10);
        assert_abs_diff_eq!(w.sum(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(mu, 0.10543462331886838, max_relative = 1e-10);
        assert_relative_eq!(sigma, 0.11520469510899466, max_relative = 1e-10);
    }

    #[test]
    fn cml_passes_through_both_anchor_points() {
        let (m, cov) = universe();
        let (_, mu_mp, sigma_mp) = market_portfolio(&m, &cov, 0.05).unwrap();
        assert_abs_diff_eq!(capital_market_line(mu_mp, sigma_mp, 0.05, 0.0), 0.05);
        assert_relative_eq!(
            capital_market_line(mu_mp, sigma_mp, 0.05, sigma_mp),
            mu_mp,
            max_relative = 1e-12
        );
    }

    #[test]
    fn risk_free_fraction_vanishes_at_the_market_portfolio() {
        assert_abs_diff_eq!(risk_free_fraction(0.12, 0.12).unwrap(), 0.0);
        assert_abs_diff_eq!(risk_free_fraction(0.12, 0.06).unwrap(), 0.5);
        // beyond the tangency point the investor borrows
        assert!(risk_free_fraction(0.12, 0.18).unwrap() < 0.0);
        assert!(risk_free_fraction(0.0, 0.1).is_err());
    }
}
