//! Error types for mathfin-rs.
//!
//! The whole workspace surfaces failures through a single
//! `thiserror`-derived enum.  Nothing here is retried and no partial
//! results are returned alongside an error: a pricing call either
//! produces a complete result or one of these kinds.

use thiserror::Error;

/// The top-level error type used throughout mathfin-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Model parameters violate the binomial model assumptions:
    /// `U <= D`, non-positive spot, or a risk-free rate outside `(D, U)`
    /// (which would admit arbitrage).
    #[error("invalid model: {0}")]
    InvalidModel(String),

    /// A bounded search failed to terminate within its domain
    /// (e.g. no exercise order `k <= N` ever exceeds the strike).
    #[error("non-convergent: {0}")]
    NonConvergent(String),

    /// A value lattice was paired with a price tree of a different
    /// shape.  This is a programming error on the caller's side, not a
    /// recoverable runtime condition.
    #[error("misaligned lattice: expected {expected} nodes, found {found}")]
    MisalignedLattice {
        /// Node count of the price tree.
        expected: usize,
        /// Node count of the value lattice actually supplied.
        found: usize,
    },

    /// The hedge ratio is undefined because the two child prices of a
    /// node coincide.
    #[error("degenerate hedge at node {index}: sibling prices are equal")]
    DegenerateHedge {
        /// Index of the offending tree node.
        index: usize,
    },

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Precondition violated (raised by the `ensure!` macro).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Postcondition violated (raised by the `ensure_post!` macro).
    #[error("postcondition not satisfied: {0}")]
    Postcondition(String),

    /// General runtime error (raised by the `fail!` macro).
    #[error("{0}")]
    Runtime(String),
}

/// Shorthand `Result` type used throughout mathfin-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use mf_core::ensure;
/// fn positive(x: f64) -> mf_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Postcondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use mf_core::ensure_post;
/// fn compute(x: f64) -> mf_core::errors::Result<f64> {
///     let result = x * 2.0;
///     ensure_post!(result > 0.0, "result must be positive, got {result}");
///     Ok(result)
/// }
/// assert!(compute(1.0).is_ok());
/// assert!(compute(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure_post {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Postcondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use mf_core::fail;
/// fn always_err() -> mf_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
