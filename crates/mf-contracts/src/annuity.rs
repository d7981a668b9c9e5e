//! Growing annuities and savings plans (discrete annual compounding).

use mf_core::{ensure, errors::Result, Rate, Real, Size};

/// Growing annuity factor: present value of `N` annual payments that
/// start at `1+g` and grow at rate `g`, discounted at `r`.
///
/// `GAF(r, g, N) = (1+g)/(r−g) · (1 − ((1+g)/(1+r))^N)`
///
/// Requires `r != g` (the closed form degenerates there).
pub fn growing_annuity_factor(r: Rate, g: Rate, n: Size) -> Result<Real> {
    ensure!(r != g, "annuity factor is undefined for r == g (both {r})");
    let ratio = ((1.0 + g) / (1.0 + r)).powi(n as i32);
    Ok((1.0 + g) / (r - g) * (1.0 - ratio))
}

/// Fraction of a growing income to save each year so that, after `n1`
/// years of contributions, the accumulated capital funds `frac` of the
/// year-`n1` income for `n2` further years.
///
/// Both the income and the withdrawals grow at `g`; savings earn `r`.
pub fn savings_rate(r: Rate, g: Rate, n1: Size, frac: Real, n2: Size) -> Result<Real> {
    ensure!(frac >= 0.0, "income fraction must be non-negative, got {frac}");
    // capital accumulated at year n1 per unit of first-year income
    let accumulated = (1.0 + r).powi(n1 as i32) * growing_annuity_factor(r, g, n1)?;
    // capital required at year n1 to pay the desired income stream
    let required = frac * (1.0 + g).powi(n1 as i32) * growing_annuity_factor(r, g, n2)?;
    Ok(required / accumulated)
}
