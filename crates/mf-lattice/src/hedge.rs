//! Replicating-hedge computation.
//!
//! From a value lattice and its aligned price tree, derive at every
//! internal node the position in the risky asset (the delta) and in
//! the money-market account that together replicate the option's value
//! one step ahead.  The money-market recursion is self-financing: each
//! rebalancing is funded entirely by the stock trade it offsets.
//!
//! Replication is meaningful along paths where the option is still
//! alive.  For an American lattice, nodes at or below an
//! early-exercise point fall outside the writer's hedge; the
//! verification helper reports exactly which nodes break the
//! replication equations so callers can check them against the
//! exercise boundary.

use crate::tree::{child_down, child_up, level_range, parent, round_key, step_of, PriceTree, ValueLattice};
use mf_core::{ensure, errors::Result, Error, Rate, Real, Size};
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

/// A replicating portfolio at one tree position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HedgePosition {
    /// Units of the risky asset.
    pub stock: Real,
    /// Units of the money-market account.
    pub market: Real,
}

fn check_alignment(tree: &PriceTree, values: &ValueLattice) -> Result<()> {
    if values.node_count() != tree.node_count() {
        return Err(Error::MisalignedLattice {
            expected: tree.node_count(),
            found: values.node_count(),
        });
    }
    Ok(())
}

/// Risky-asset positions at every internal node.
///
/// `Δ_j = (v_up − v_down) / (s_up − s_down)`.  The result has
/// `2^N − 1` entries, indexed like the tree's internal nodes.
pub fn stock_positions(tree: &PriceTree, values: &ValueLattice) -> Result<Vec<Real>> {
    check_alignment(tree, values)?;
    let mut deltas = Vec::with_capacity(tree.internal_count());
    for j in 0..tree.internal_count() {
        let ds = tree.price(child_up(j)) - tree.price(child_down(j));
        if ds == 0.0 {
            return Err(Error::DegenerateHedge { index: j });
        }
        deltas.push((values.value(child_up(j)) - values.value(child_down(j))) / ds);
    }
    Ok(deltas)
}

/// Money-market positions at every internal node, given the stock
/// positions and the option's root value.
///
/// The root holds `y_0 = v_0 − Δ_0·S_0` money-market units; each later
/// node `j` at step `i`, reached from parent `k`, rebalances at cost
/// `y_j = y_k + (Δ_k − Δ_j)·S_j·(1+R)^−i` (per-unit account value at
/// step `i` is `(1+R)^i`).
pub fn market_positions(
    stock: &[Real],
    tree: &PriceTree,
    root_value: Real,
    r: Rate,
) -> Result<Vec<Real>> {
    let internal = tree.internal_count();
    if stock.len() != internal {
        return Err(Error::MisalignedLattice {
            expected: internal,
            found: stock.len(),
        });
    }
    if internal == 0 {
        return Ok(Vec::new());
    }

    let mut market = vec![0.0; internal];
    market[0] = root_value - stock[0] * tree.price(0);
    for j in 1..internal {
        let k = parent(j).expect("non-root internal node has a parent");
        let accrual = (1.0 + r).powi(step_of(j) as i32);
        market[j] = market[k] + (stock[k] - stock[j]) * tree.price(j) / accrual;
    }
    Ok(market)
}

/// Aggregated hedge view of one internal step, keyed by (rounded) node
/// price.
///
/// Inherits the last-write-wins collision semantics of
/// [`PriceTree::level_slice`]: positions at distinct tree positions
/// with the same rounded price merge lossily.
pub fn positions_at_step(
    tree: &PriceTree,
    values: &ValueLattice,
    r: Rate,
    step: Size,
) -> Result<BTreeMap<OrderedFloat<Real>, HedgePosition>> {
    ensure!(
        step < tree.depth(),
        "hedge positions exist only at internal steps (step {step}, depth {})",
        tree.depth()
    );
    let stock = stock_positions(tree, values)?;
    let market = market_positions(&stock, tree, values.root(), r)?;

    let mut view = BTreeMap::new();
    for j in level_range(step) {
        view.insert(
            round_key(tree.price(j)),
            HedgePosition {
                stock: stock[j],
                market: market[j],
            },
        );
    }
    Ok(view)
}

/// Check the replication equations at every internal node and return
/// the indices that violate them.
///
/// At node `j` on step `i` the portfolio must be worth the option one
/// step ahead on both branches:
/// `Δ_j·s_up + y_j·(1+R)^(i+1) = v_up` (and the down-branch twin).
/// An empty result means the hedge is self-financing across the whole
/// lattice; for American lattices the violations are exactly the nodes
/// at or below the early-exercise boundary.
pub fn verify_self_financing(
    tree: &PriceTree,
    values: &ValueLattice,
    stock: &[Real],
    market: &[Real],
    r: Rate,
    tol: Real,
) -> Result<Vec<Size>> {
    check_alignment(tree, values)?;
    let internal = tree.internal_count();
    if stock.len() != internal || market.len() != internal {
        return Err(Error::MisalignedLattice {
            expected: internal,
            found: stock.len().min(market.len()),
        });
    }

    let mut violations = Vec::new();
    for j in 0..internal {
        let accrual = (1.0 + r).powi(step_of(j) as i32 + 1);
        let up = stock[j] * tree.price(child_up(j)) + market[j] * accrual;
        let down = stock[j] * tree.price(child_down(j)) + market[j] * accrual;
        if (up - values.value(child_up(j))).abs() > tol
            || (down - values.value(child_down(j))).abs() > tol
        {
            violations.push(j);
        }
    }
    Ok(violations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{american, european};
    use approx::assert_relative_eq;

    #[test]
    fn european_hedge_is_self_financing_everywhere() {
        let lat = european::price_lattice(0.1, 0.2, -0.1, 100.0, 105.0, 3).unwrap();
        let stock = stock_positions(&lat.tree, &lat.call).unwrap();
        let market = market_positions(&stock, &lat.tree, lat.call.root(), 0.1).unwrap();
        let violations =
            verify_self_financing(&lat.tree, &lat.call, &stock, &market, 0.1, 1e-9).unwrap();
        assert!(violations.is_empty(), "violations at {violations:?}");
    }

    #[test]
    fn american_put_hedge_three_steps() {
        // S=100, X=100, R=0.1, U=0.2, D=-0.1, N=3
        let a = american::price(0.1, 0.2, -0.1, 100.0, 100.0, 3).unwrap();
        assert_relative_eq!(a.put, 3.1861312853048394, max_relative = 1e-12);

        let stock = stock_positions(&a.tree, &a.put_lattice).unwrap();
        let market = market_positions(&stock, &a.tree, a.put_lattice.root(), 0.1).unwrap();

        assert_relative_eq!(stock[0], -0.32476277930823383, max_relative = 1e-12);
        assert_relative_eq!(market[0], 35.662409216128225, max_relative = 1e-12);
        assert_relative_eq!(stock[1], -0.023569023569023545, max_relative = 1e-9);
        assert_relative_eq!(market[1], 2.8049085900325608, max_relative = 1e-9);
        // the down node at step 1 is exercised; its delta covers the
        // exercise-adjusted child values
        assert_relative_eq!(stock[2], -0.6722783389450057, max_relative = 1e-12);

        // replication can only break at or below the exercised node 2
        let violations =
            verify_self_financing(&a.tree, &a.put_lattice, &stock, &market, 0.1, 1e-9).unwrap();
        assert_eq!(violations, vec![2, 5, 6]);
    }

    #[test]
    fn positions_at_step_aggregates_by_price() {
        let a = american::price(0.1, 0.2, -0.1, 100.0, 100.0, 3).unwrap();
        let view = positions_at_step(&a.tree, &a.put_lattice, 0.1, 1).unwrap();
        assert_eq!(view.len(), 2);
        let up = view[&round_key(120.0)];
        assert_relative_eq!(up.stock, -0.023569023569023545, max_relative = 1e-9);
        assert_relative_eq!(up.market, 2.8049085900325608, max_relative = 1e-9);
        // step index must be internal
        assert!(positions_at_step(&a.tree, &a.put_lattice, 0.1, 3).is_err());
    }

    #[test]
    fn misaligned_lattice_is_rejected() {
        let a = american::price(0.1, 0.2, -0.1, 100.0, 100.0, 3).unwrap();
        let short = crate::tree::ValueLattice::new(vec![0.0; 7], 2).unwrap();
        assert!(matches!(
            stock_positions(&a.tree, &short),
            Err(Error::MisalignedLattice { .. })
        ));
        assert!(matches!(
            market_positions(&[0.0; 3], &a.tree, 0.0, 0.1),
            Err(Error::MisalignedLattice { .. })
        ));
    }
}
