//! The risk-neutral probability measure of the single-step binomial
//! model.
//!
//! With per-step returns `U` (up) and `D` (down) and a risk-free
//! one-step return `R`, the unique probability making the discounted
//! price a martingale is `p* = (R − D)/(U − D)`.  No-arbitrage demands
//! `D < R < U`, which also places `p*` strictly inside `(0, 1)`.

use mf_core::{errors::Result, Error, Rate, Real, Size};

/// Risk-neutral up-move probability `p* = (R − D)/(U − D)`.
///
/// Fails if `U <= D` (the model is degenerate and the quotient is
/// undefined for `U = D`).  Whether `R` lies inside `(D, U)` is *not*
/// checked here; callers wanting the full no-arbitrage guarantee use
/// [`validate_no_arbitrage`] first.
pub fn p_star(r: Rate, u: Real, d: Real) -> Result<Real> {
    if u <= d {
        return Err(Error::InvalidModel(format!(
            "up rate ({u}) must exceed down rate ({d})"
        )));
    }
    Ok((r - d) / (u - d))
}

/// The auxiliary probability `q = p*·(1+U)/(1+R)` appearing in the
/// stock-measure leg of the Cox-Ross-Rubinstein closed form.
pub fn adjusted_probability(r: Rate, u: Real, p_star: Real) -> Real {
    p_star * (1.0 + u) / (1.0 + r)
}

/// Check the no-arbitrage condition `D < R < U`.
pub fn validate_no_arbitrage(r: Rate, u: Real, d: Real) -> Result<()> {
    if u <= d {
        return Err(Error::InvalidModel(format!(
            "up rate ({u}) must exceed down rate ({d})"
        )));
    }
    if r <= d || r >= u {
        return Err(Error::InvalidModel(format!(
            "risk-free rate ({r}) must lie strictly between the down rate ({d}) \
             and the up rate ({u})"
        )));
    }
    Ok(())
}

/// Least number of up-moves `m` (0 ≤ m ≤ n) after which the terminal
/// price exceeds the strike: the smallest `k` with
/// `S·(1+U)^k·(1+D)^(n−k) > X`.
///
/// The scan is hard-bounded at `n`; if even the all-up path stays at or
/// below the strike the search cannot converge and the call fails
/// rather than looping.
pub fn least_exercise_order(s: Real, u: Real, d: Real, n: Size, x: Real) -> Result<Size> {
    for k in 0..=n {
        let terminal = s * (1.0 + u).powi(k as i32) * (1.0 + d).powi((n - k) as i32);
        if terminal > x {
            return Ok(k);
        }
    }
    Err(Error::NonConvergent(format!(
        "strike {x} is never exceeded within {n} steps (max terminal price {})",
        s * (1.0 + u).powi(n as i32)
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn p_star_basic() {
        // R=0.05, U=0.1, D=-0.05 → p* = 0.10 / 0.15 = 2/3
        assert_relative_eq!(
            p_star(0.05, 0.1, -0.05).unwrap(),
            2.0 / 3.0,
            max_relative = 1e-14
        );
    }

    #[test]
    fn p_star_degenerate_model() {
        assert!(matches!(
            p_star(0.05, 0.1, 0.1),
            Err(Error::InvalidModel(_))
        ));
        assert!(p_star(0.05, -0.05, 0.1).is_err());
    }

    #[test]
    fn no_arbitrage_window() {
        assert!(validate_no_arbitrage(0.05, 0.1, -0.05).is_ok());
        // R at or outside either edge admits arbitrage
        assert!(validate_no_arbitrage(0.1, 0.1, -0.05).is_err());
        assert!(validate_no_arbitrage(-0.05, 0.1, -0.05).is_err());
        assert!(validate_no_arbitrage(0.2, 0.1, -0.05).is_err());
    }

    #[test]
    fn adjusted_probability_value() {
        let p = p_star(0.05, 0.1, -0.05).unwrap();
        assert_relative_eq!(
            adjusted_probability(0.05, 0.1, p),
            p * 1.1 / 1.05,
            max_relative = 1e-14
        );
    }

    #[test]
    fn exercise_order_scan() {
        // S=80, U=0.1, D=-0.05, N=2, X=80: k=0 gives 72.2, k=1 gives 83.6
        assert_eq!(least_exercise_order(80.0, 0.1, -0.05, 2, 80.0).unwrap(), 1);
        // deep in the money from the start
        assert_eq!(least_exercise_order(80.0, 0.1, -0.05, 2, 10.0).unwrap(), 0);
    }

    #[test]
    fn exercise_order_never_exceeded() {
        // strike above the all-up terminal price: must fail, not spin
        assert!(matches!(
            least_exercise_order(80.0, 0.1, -0.05, 2, 1000.0),
            Err(Error::NonConvergent(_))
        ));
    }
}
