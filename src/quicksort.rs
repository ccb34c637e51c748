use rand::Rng;

use crate::partition::partition;
use crate::pivot::{self, PivotPolicy};

/// Counters collected over one sort call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Element comparisons, pivot selection included.
    pub comparisons: u64,
    /// Swaps performed, including swaps of an element with itself.
    pub swaps: u64,
    /// Deepest recursion level reached, the top-level call is level 0.
    pub max_depth: u32,
}

/// Sorts `v` in place using median-of-three Quicksort.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and *O*(*n*^2) worst-case. Recursion depth is bounded by log2(*n*).
#[inline]
pub fn sort(v: &mut [i32]) {
    sort_by_pivot(v, &mut pivot::median3);
}

/// Sorts `v` in place, picking pivots according to `policy`. `rng` is only drawn from by
/// [`PivotPolicy::Random`], so a fixed seed reproduces the exact same sequence of comparisons and
/// swaps.
pub fn sort_with<R: Rng + ?Sized>(v: &mut [i32], policy: PivotPolicy, rng: &mut R) -> SortStats {
    match policy {
        PivotPolicy::MedianOfThree => sort_by_pivot(v, &mut pivot::median3),
        PivotPolicy::Random => {
            sort_by_pivot(v, &mut |v, stats| pivot::random(v, &mut *rng, stats))
        }
    }
}

fn sort_by_pivot<F>(v: &mut [i32], choose_pivot: &mut F) -> SortStats
where
    F: FnMut(&mut [i32], &mut SortStats),
{
    let mut stats = SortStats::default();
    quicksort(v, choose_pivot, 0, &mut stats);
    stats
}

/// Sorts `v` recursively.
///
/// Recurses into the shorter side and loops on the longer one, each recursion at least halves the
/// length so `depth` never exceeds log2 of the original length.
fn quicksort<'a, F>(
    mut v: &'a mut [i32],
    choose_pivot: &mut F,
    depth: u32,
    stats: &mut SortStats,
) where
    F: FnMut(&mut [i32], &mut SortStats),
{
    stats.max_depth = stats.max_depth.max(depth);

    while v.len() > 1 {
        choose_pivot(v, stats);
        let num_lt = partition(v, stats);

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(num_lt);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left, choose_pivot, depth + 1, stats);
            v = right;
        } else {
            quicksort(right, choose_pivot, depth + 1, stats);
            v = left;
        }
    }
}
