//! Per-step binomial returns matching log-normal dynamics, and the
//! exact terminal price distribution of the resulting tree.

use std::collections::BTreeMap;

use mf_core::{Error, Price, Real, Result, Size};
use mf_lattice::tree::{child_down, child_up, level_range, PriceTree};
use ordered_float::OrderedFloat;

/// Per-step returns `(U, D)` of the `n`-step binomial model over
/// horizon `t` whose limit is a log-normal price with drift `mu` and
/// volatility `sigma`:
/// `U = e^(μh + σ√h) − 1`, `D = e^(μh − σ√h) − 1` with `h = t/n`.
///
/// `n` must be positive.
pub fn step_returns(mu: Real, sigma: Real, t: Real, n: Size) -> Result<(Real, Real)> {
    if n == 0 {
        return Err(Error::InvalidArgument(
            "step returns need at least one step".into(),
        ));
    }
    let h = t / n as Real;
    let drift = mu * h;
    let spread = sigma * h.sqrt();
    Ok(((drift + spread).exp() - 1.0, (drift - spread).exp() - 1.0))
}

/// Exact probability mass of the terminal prices of the `n`-step
/// tree, with up-probability `p` at every node.
///
/// The tree does not recombine, but distinct paths can still land on
/// the same price. Keys are prices rounded to 5 decimals and the
/// masses of colliding leaves are summed, so the map is the honest
/// distribution of the rounded terminal price.
pub fn terminal_distribution_binomial(
    mu: Real,
    sigma: Real,
    s0: Price,
    t: Real,
    n: Size,
    p: Real,
) -> Result<BTreeMap<OrderedFloat<Real>, Real>> {
    if n == 0 {
        return Err(Error::InvalidArgument(
            "terminal distribution needs at least one step".into(),
        ));
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidArgument(format!(
            "up-probability must lie in [0, 1], got {p}"
        )));
    }
    let (u, d) = step_returns(mu, sigma, t, n)?;
    let tree = PriceTree::build(n, s0, u, d)?;

    // root-down pass: each node's mass splits p / 1-p over its children
    let total = tree.node_count();
    let mut mass = vec![0.0; total];
    mass[0] = 1.0;
    for j in 0..(total >> 1) {
        mass[child_up(j)] = mass[j] * p;
        mass[child_down(j)] = mass[j] * (1.0 - p);
    }

    let mut dist: BTreeMap<OrderedFloat<Real>, Real> = BTreeMap::new();
    for j in level_range(n) {
        let key = OrderedFloat((tree.price(j) * 1e5).round() / 1e5);
        *dist.entry(key).or_insert(0.0) += mass[j];
    }
    Ok(dist)
}
