//! Random number generators.
//!
//! Gaussian deviates are drawn from a Mersenne Twister MT19937-64 core
//! (`rand_mt`) through `rand_distr::Normal`, so simulations are fully
//! reproducible from a seed.

use mf_core::{errors::Result, Error, Real};
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rand_mt::Mt19937GenRand64;

/// A seeded generator of normally-distributed deviates.
pub struct GaussianRng {
    rng: Mt19937GenRand64,
    dist: Normal<Real>,
}

impl GaussianRng {
    /// Create a generator of `N(mean, std_dev²)` deviates with the
    /// given seed.
    pub fn new(seed: u64, mean: Real, std_dev: Real) -> Result<Self> {
        let dist = Normal::new(mean, std_dev)
            .map_err(|e| Error::InvalidArgument(format!("normal distribution: {e}")))?;
        Ok(Self {
            rng: Mt19937GenRand64::seed_from_u64(seed),
            dist,
        })
    }

    /// Generate the next deviate.
    pub fn next_real(&mut self) -> Real {
        self.dist.sample(&mut self.rng)
    }
}
