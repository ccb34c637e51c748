//! Generates the random input, brackets the sort with a monotonic timer and formats the result.

use std::fmt;
use std::ops::Range;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::debug;

use crate::error::{Error, Result};
use crate::{quicksort, SortConfig, SortStats};

/// Values of the generated input are drawn uniformly from this range.
pub const VALUE_RANGE: Range<i32> = 0..1000;

/// Outcome of sorting one freshly generated input.
#[derive(Debug, Clone)]
pub struct Measurement {
    pub values: Vec<i32>,
    pub elapsed: Duration,
    pub stats: SortStats,
}

impl Measurement {
    /// Generates `count` random values, sorts them and times the sort.
    ///
    /// The same random source fills the input and then feeds random pivot choices, so a fixed
    /// seed reproduces the whole run.
    pub fn run(count: usize, config: &SortConfig) -> Result<Self> {
        let mut rng = config.rng();
        let mut values = random_values(count, &mut rng)?;

        debug!(count, policy = %config.policy, seed = config.seed(), "sorting");

        let before = Instant::now();
        let stats = quicksort::sort_with(&mut values, config.policy, &mut rng);
        let elapsed = before.elapsed();

        debug!(
            elapsed_ns = %elapsed.as_nanos(),
            comparisons = stats.comparisons,
            swaps = stats.swaps,
            max_depth = stats.max_depth,
            "sorted"
        );

        Ok(Self {
            values,
            elapsed,
            stats,
        })
    }

    pub fn elapsed_nanos(&self) -> u128 {
        self.elapsed.as_nanos()
    }

    pub fn braced(&self) -> Braced<'_> {
        Braced(&self.values)
    }
}

/// Allocates `count` values drawn from [`VALUE_RANGE`].
///
/// Reports allocation failure as [`Error::Alloc`] instead of aborting.
pub fn random_values<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Result<Vec<i32>> {
    let mut values = Vec::new();
    values
        .try_reserve_exact(count)
        .map_err(|source| Error::Alloc { count, source })?;

    values.extend((0..count).map(|_| rng.gen_range(VALUE_RANGE)));
    Ok(values)
}

/// Displays values as `{1, 2, 3}`.
#[derive(Debug, Clone, Copy)]
pub struct Braced<'a>(pub &'a [i32]);

impl fmt::Display for Braced<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, value) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("}")
    }
}
