//! The binomial price tree and its index arithmetic.
//!
//! A tree of depth `N` is stored as a flat arena of `2^(N+1) − 1` node
//! values in heap order: the root is index 0 and the children of node
//! `j` sit at `2j + 1` (up move) and `2j + 2` (down move).  Step `i`
//! occupies the index range `[2^i − 1, 2^(i+1) − 1)`.
//!
//! The tree is complete and *not* collapsed: an up-then-down path and a
//! down-then-up path carry the same price but remain distinct nodes, so
//! value lattices indexed the same way line up position by position.

use mf_core::{ensure, errors::Result, Error, Price, Real, Size};
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

/// Number of nodes in a complete tree of the given depth.
pub fn node_count(depth: Size) -> Size {
    (1 << (depth + 1)) - 1
}

/// Index of the up-move child of node `j`.
#[inline]
pub fn child_up(j: Size) -> Size {
    2 * j + 1
}

/// Index of the down-move child of node `j`.
#[inline]
pub fn child_down(j: Size) -> Size {
    2 * j + 2
}

/// Index of the parent of node `j`, or `None` for the root.
#[inline]
pub fn parent(j: Size) -> Option<Size> {
    if j == 0 {
        None
    } else {
        Some((j - 1) / 2)
    }
}

/// Time step of node `j` (the root is step 0).
#[inline]
pub fn step_of(j: Size) -> Size {
    (j + 1).ilog2() as Size
}

/// Index range of the nodes at a given step.
#[inline]
pub fn level_range(step: Size) -> std::ops::Range<Size> {
    ((1 << step) - 1)..((1 << (step + 1)) - 1)
}

/// Round a price to 5 decimals, the resolution of the level-aggregated
/// views.
#[inline]
pub(crate) fn round_key(x: Real) -> OrderedFloat<Real> {
    OrderedFloat((x * 1e5).round() / 1e5)
}

/// A fully materialized binomial tree of underlying prices.
///
/// Immutable after construction.  Memory grows as `O(2^N)`, so depths
/// beyond roughly 20 steps call for a collapsed recombining
/// representation instead; this type deliberately keeps every path
/// position addressable for hedging.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTree {
    nodes: Vec<Price>,
    depth: Size,
}

impl PriceTree {
    /// Build the complete tree of depth `depth` from the initial price
    /// `s0` and the per-step up/down rates of return `u` and `d`.
    ///
    /// Children of a node priced `S` are priced `S·(1+u)` and
    /// `S·(1+d)`.  Requires `s0 > 0`, `u > d`, and `d > −1` (prices
    /// stay positive); `depth = 0` yields the single-node tree.
    pub fn build(depth: Size, s0: Price, u: Real, d: Real) -> Result<Self> {
        if s0 <= 0.0 {
            return Err(Error::InvalidModel(format!(
                "initial price must be positive, got {s0}"
            )));
        }
        if u <= d {
            return Err(Error::InvalidModel(format!(
                "up rate ({u}) must exceed down rate ({d})"
            )));
        }
        if d <= -1.0 {
            return Err(Error::InvalidModel(format!(
                "down rate ({d}) must exceed -1 to keep prices positive"
            )));
        }

        let total = node_count(depth);
        let mut nodes = vec![0.0; total];
        nodes[0] = s0;
        // internal nodes occupy the first (total >> 1) = 2^depth − 1 slots
        for j in 0..(total >> 1) {
            nodes[child_up(j)] = nodes[j] * (1.0 + u);
            nodes[child_down(j)] = nodes[j] * (1.0 + d);
        }
        Ok(Self { nodes, depth })
    }

    /// Depth (number of time steps; the root is step 0).
    pub fn depth(&self) -> Size {
        self.depth
    }

    /// Total number of nodes, `2^(depth+1) − 1`.
    pub fn node_count(&self) -> Size {
        self.nodes.len()
    }

    /// Number of internal (non-leaf) nodes, `2^depth − 1`.
    pub fn internal_count(&self) -> Size {
        (1 << self.depth) - 1
    }

    /// Price at node `j`.
    ///
    /// # Panics
    /// Panics if `j` is out of range.
    pub fn price(&self, j: Size) -> Price {
        self.nodes[j]
    }

    /// All node prices in heap order.
    pub fn prices(&self) -> &[Price] {
        &self.nodes
    }

    /// Return `true` if node `j` lies on the final step.
    pub fn is_leaf(&self, j: Size) -> bool {
        child_up(j) >= self.nodes.len()
    }

    /// Aggregated view of one step: each distinct (rounded) price at
    /// `step` mapped to its two children's prices, `(0, 0)` for leaves.
    ///
    /// Distinct tree positions whose prices round to the same key merge
    /// with last-write-wins semantics, so this is a lossy summary of
    /// the level rather than canonical data.
    pub fn level_slice(&self, step: Size) -> Result<BTreeMap<OrderedFloat<Real>, (Price, Price)>> {
        ensure!(
            step <= self.depth,
            "step {step} exceeds tree depth {}",
            self.depth
        );
        let mut slice = BTreeMap::new();
        for j in level_range(step) {
            let children = if self.is_leaf(j) {
                (0.0, 0.0)
            } else {
                (self.nodes[child_up(j)], self.nodes[child_down(j)])
            };
            slice.insert(round_key(self.nodes[j]), children);
        }
        Ok(slice)
    }
}

/// An option value lattice aligned index-for-index with a [`PriceTree`].
///
/// Built by the pricers during backward induction and immutable
/// afterwards.  Node `j` here and node `j` in the tree refer to the
/// same position; the hedge computations require that alignment.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueLattice {
    values: Vec<Real>,
    depth: Size,
}

impl ValueLattice {
    /// Wrap a flat value vector; its length must be `2^(depth+1) − 1`.
    pub fn new(values: Vec<Real>, depth: Size) -> Result<Self> {
        let expected = node_count(depth);
        if values.len() != expected {
            return Err(Error::MisalignedLattice {
                expected,
                found: values.len(),
            });
        }
        Ok(Self { values, depth })
    }

    /// Depth of the lattice.
    pub fn depth(&self) -> Size {
        self.depth
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> Size {
        self.values.len()
    }

    /// Value at node `j`.
    ///
    /// # Panics
    /// Panics if `j` is out of range.
    pub fn value(&self, j: Size) -> Real {
        self.values[j]
    }

    /// All node values in heap order.
    pub fn values(&self) -> &[Real] {
        &self.values
    }

    /// Value at the root (the time-0 price of the option).
    pub fn root(&self) -> Real {
        self.values[0]
    }
}
