use std::process;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::PivotPolicy;

/// Per-process sort configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortConfig {
    pub policy: PivotPolicy,
    /// Seed of the random source. Falls back to the process id when unset.
    pub seed: Option<u64>,
}

impl SortConfig {
    pub fn new(policy: PivotPolicy) -> Self {
        Self { policy, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| u64::from(process::id()))
    }

    /// The random source that fills the input and draws random pivots.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed())
    }
}
