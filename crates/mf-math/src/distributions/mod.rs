//! Probability distributions.
//!
//! The binomial CDF used by the Cox-Ross-Rubinstein closed form is an
//! exact finite sum (no continuity correction, no incomplete-beta
//! approximation); the normal distribution wraps `statrs`.

pub mod binomial;
pub mod normal;

pub use binomial::cumulative_binomial;
pub use normal::{normal_cdf, normal_cdf_inverse, normal_pdf};
