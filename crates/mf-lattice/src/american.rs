//! American option pricing by backward induction.
//!
//! The American call on a non-dividend-paying asset is never exercised
//! early, so its price is taken straight from the European closed form.
//! The American put genuinely needs the tree: at every node the holder
//! compares immediate exercise against the discounted risk-neutral
//! continuation value.

use crate::european::price_closed_form;
use crate::measure::p_star;
use crate::tree::{child_down, child_up, level_range, PriceTree, ValueLattice};
use mf_core::{errors::Result, Price, Rate, Real, Size};
use mf_instruments::{OptionType, Payoff, PlainVanillaPayoff};

/// Result of pricing an American call/put pair.
#[derive(Debug, Clone)]
pub struct AmericanPrice {
    /// Call price (equals the European call; no early exercise without
    /// dividends).
    pub call: Price,
    /// Put price at the root of the lattice.
    pub put: Price,
    /// The underlying price tree, kept so hedge computations stay
    /// index-aligned with the put lattice.
    pub tree: PriceTree,
    /// Exercise-adjusted put values at every node.
    pub put_lattice: ValueLattice,
}

/// Price an American call and put with strike `x` expiring after `n`
/// steps.
///
/// The put lattice is filled leaf-to-root with
/// `v = max(X − S, (p*·v_up + (1−p*)·v_down)/(1+R))`; when exercise
/// and continuation tie, continuation wins (the comparison is strict),
/// which pins the regression values reproduced in the tests.
pub fn price(r: Rate, u: Real, d: Real, s: Price, x: Price, n: Size) -> Result<AmericanPrice> {
    let european = price_closed_form(r, u, d, s, x, n)?;
    let tree = PriceTree::build(n, s, u, d)?;
    let p = p_star(r, u, d)?;
    let payoff = PlainVanillaPayoff::new(OptionType::Put, x);

    let mut values = vec![0.0; tree.node_count()];
    for j in level_range(n) {
        values[j] = payoff.value(tree.price(j));
    }
    for j in (0..tree.internal_count()).rev() {
        let continuation =
            (p * values[child_up(j)] + (1.0 - p) * values[child_down(j)]) / (1.0 + r);
        let exercise = payoff.value(tree.price(j));
        // ties go to continuation
        values[j] = if continuation < exercise {
            exercise
        } else {
            continuation
        };
    }

    let put_lattice = ValueLattice::new(values, n)?;
    Ok(AmericanPrice {
        call: european.call,
        put: put_lattice.root(),
        tree,
        put_lattice,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn three_step_example() {
        // S=60, X=62, R=0.03, U=0.1, D=-0.05, N=3
        let a = price(0.03, 0.1, -0.05, 60.0, 62.0, 3).unwrap();
        assert_relative_eq!(a.call, 5.019585895687605, max_relative = 1e-12);
        assert_relative_eq!(a.put, 2.5241932102657625, max_relative = 1e-12);
    }

    #[test]
    fn two_step_at_the_money_lattice() {
        // S=80, X=80, R=0.05, U=0.1, D=-0.05, N=2
        let a = price(0.05, 0.1, -0.05, 80.0, 80.0, 2).unwrap();
        assert_relative_eq!(a.call, 8.223733938019649, max_relative = 1e-12);
        assert_relative_eq!(a.put, 1.26984126984127, max_relative = 1e-12);

        // full exercise-adjusted lattice, node by node
        let expected = [1.26984126984127, 0.0, 4.0, 0.0, 0.0, 0.0, 7.8];
        for (j, &v) in expected.iter().enumerate() {
            assert_relative_eq!(
                a.put_lattice.value(j),
                v,
                max_relative = 1e-12,
                epsilon = 1e-12
            );
        }
        // the down node at step 1 is exercised: X − 76 = 4 beats continuation
        assert_relative_eq!(a.put_lattice.value(2), 80.0 - 76.0);
    }

    #[test]
    fn zero_step_is_the_intrinsic_payoff() {
        let a = price(0.05, 0.1, -0.05, 70.0, 80.0, 0).unwrap();
        assert_relative_eq!(a.put, 10.0);
        assert_relative_eq!(a.call, 0.0);
    }

    proptest! {
        #[test]
        fn american_put_dominates_european(
            r in 0.01f64..0.15,
            spread in 0.05f64..0.3,
            s in 20.0f64..200.0,
            moneyness in 0.5f64..1.4,
            n in 1usize..10,
        ) {
            let u = r + spread;
            let d = r - spread;
            let x = s * moneyness;
            let eu = crate::european::price_closed_form(r, u, d, s, x, n);
            prop_assume!(eu.is_ok());
            let am = price(r, u, d, s, x, n).unwrap();
            prop_assert!(am.put >= eu.unwrap().put - 1e-10);
        }
    }
}
