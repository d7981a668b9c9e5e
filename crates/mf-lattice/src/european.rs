//! European option pricing on the binomial tree.
//!
//! Two routes to the same numbers: the Cox-Ross-Rubinstein closed-form
//! summation at the root, and a full per-node value lattice produced by
//! backward induction.  The put side of the lattice is derived from
//! put-call parity at every node rather than by a second induction, so
//! parity holds at machine precision throughout the lattice.

use crate::measure::{adjusted_probability, least_exercise_order, p_star, validate_no_arbitrage};
use crate::tree::{child_down, child_up, level_range, step_of, PriceTree, ValueLattice};
use mf_core::{errors::Result, Error, Price, Rate, Real, Size};
use mf_instruments::{OptionType, Payoff, PlainVanillaPayoff};

/// Root prices of a European call and put on the same strike.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EuropeanPrice {
    /// Call price at time 0.
    pub call: Price,
    /// Put price at time 0.
    pub put: Price,
}

/// A price tree together with the aligned European call and put value
/// lattices.
#[derive(Debug, Clone)]
pub struct EuropeanLattice {
    /// The underlying price tree.
    pub tree: PriceTree,
    /// Call values, node-aligned with the tree.
    pub call: ValueLattice,
    /// Put values, derived from parity at every node.
    pub put: ValueLattice,
}

fn validate_spot(s: Price) -> Result<()> {
    if s <= 0.0 {
        return Err(Error::InvalidModel(format!(
            "initial price must be positive, got {s}"
        )));
    }
    Ok(())
}

/// Price a European call/put pair with the Cox-Ross-Rubinstein closed
/// form:
///
/// `C = S·(1 − Φ(m−1; N, q)) − X·(1+R)^−N·(1 − Φ(m−1; N, p*))`
/// `P = −S·Φ(m−1; N, q) + X·(1+R)^−N·Φ(m−1; N, p*)`
///
/// where `Φ` is the exact cumulative binomial distribution, `m` the
/// least exercise order, and `q` the adjusted probability.
pub fn price_closed_form(
    r: Rate,
    u: Real,
    d: Real,
    s: Price,
    x: Price,
    n: Size,
) -> Result<EuropeanPrice> {
    validate_no_arbitrage(r, u, d)?;
    validate_spot(s)?;

    if n == 0 {
        // expiry is now: intrinsic payoffs, no exercise-order search
        return Ok(EuropeanPrice {
            call: (s - x).max(0.0),
            put: (x - s).max(0.0),
        });
    }

    let m = least_exercise_order(s, u, d, n, x)?;
    let p = p_star(r, u, d)?;
    let q = adjusted_probability(r, u, p);
    let discounted_strike = x / (1.0 + r).powi(n as i32);

    let phi_q = mf_math::cumulative_binomial(m as isize - 1, n, q);
    let phi_p = mf_math::cumulative_binomial(m as isize - 1, n, p);

    Ok(EuropeanPrice {
        call: s * (1.0 - phi_q) - discounted_strike * (1.0 - phi_p),
        put: -s * phi_q + discounted_strike * phi_p,
    })
}

/// Build the full European value lattices over a fresh price tree.
///
/// Call values roll back through
/// `v = (p*·v_up + (1−p*)·v_down)/(1+R)` from the leaf payoffs
/// `max(S − X, 0)`; put values come from parity with the steps
/// remaining at each node, `put = call − S + X·(1+R)^−(N−i)`.
pub fn price_lattice(
    r: Rate,
    u: Real,
    d: Real,
    s: Price,
    x: Price,
    n: Size,
) -> Result<EuropeanLattice> {
    validate_no_arbitrage(r, u, d)?;
    let tree = PriceTree::build(n, s, u, d)?;
    let p = p_star(r, u, d)?;
    let payoff = PlainVanillaPayoff::new(OptionType::Call, x);

    let mut call = vec![0.0; tree.node_count()];
    for j in level_range(n) {
        call[j] = payoff.value(tree.price(j));
    }
    for j in (0..tree.internal_count()).rev() {
        call[j] = (p * call[child_up(j)] + (1.0 - p) * call[child_down(j)]) / (1.0 + r);
    }

    let put: Vec<Real> = call
        .iter()
        .enumerate()
        .map(|(j, &c)| {
            let remaining = (n - step_of(j)) as i32;
            c - tree.price(j) + x / (1.0 + r).powi(remaining)
        })
        .collect();

    Ok(EuropeanLattice {
        call: ValueLattice::new(call, n)?,
        put: ValueLattice::new(put, n)?,
        tree,
    })
}
