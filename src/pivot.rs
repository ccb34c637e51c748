//! Pivot selection. Every strategy leaves its chosen pivot at `v[0]`, which is where
//! [`partition`](crate::partition::partition) expects it.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::quicksort::SortStats;
use crate::Error;

/// How the engine picks the pivot of each partition step. Chosen once per process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum PivotPolicy {
    /// Median of the first, middle and last element. Deterministic.
    #[default]
    #[value(name = "median3", alias = "median")]
    MedianOfThree,
    /// Uniformly random index drawn from the caller's random source.
    #[value(name = "random")]
    Random,
}

impl PivotPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            PivotPolicy::MedianOfThree => "median3",
            PivotPolicy::Random => "random",
        }
    }
}

impl fmt::Display for PivotPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PivotPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "median3" | "median" => Ok(PivotPolicy::MedianOfThree),
            "random" => Ok(PivotPolicy::Random),
            other => Err(Error::UnknownPivotPolicy(other.to_owned())),
        }
    }
}

/// Moves the median of `v[0]`, `v[len / 2]` and `v[len - 1]` to `v[0]`.
///
/// Runs the three step compare-exchange network on `(0, mid)`, `(mid, len - 1)`, `(0, mid)`, after
/// which `v[0] <= v[mid] <= v[len - 1]`, then swaps the median from `mid` into position 0.
///
/// `v` must hold at least two elements.
pub fn median3(v: &mut [i32], stats: &mut SortStats) {
    let len = v.len();
    debug_assert!(len >= 2);

    let mid = len / 2;
    let last = len - 1;

    compare_exchange(v, 0, mid, stats);
    compare_exchange(v, mid, last, stats);
    compare_exchange(v, 0, mid, stats);

    // The network leaves the minimum at 0, partitioning around it is quadratic on sorted input.
    v.swap(0, mid);
    stats.swaps += 1;
}

/// Swaps a uniformly chosen element of the non-empty `v` into position 0.
pub fn random<R: Rng + ?Sized>(v: &mut [i32], rng: &mut R, stats: &mut SortStats) {
    let pivot_pos = rng.gen_range(0..v.len());

    v.swap(0, pivot_pos);
    stats.swaps += 1;
}

#[inline(always)]
fn compare_exchange(v: &mut [i32], a: usize, b: usize, stats: &mut SortStats) {
    stats.comparisons += 1;
    if v[a] > v[b] {
        v.swap(a, b);
        stats.swaps += 1;
    }
}
