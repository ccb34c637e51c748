use crate::quicksort::SortStats;

/// Takes the input slice `v` with the pivot at `v[0]` and re-arranges elements such that all
/// elements strictly less than the pivot come first, followed by the pivot itself, followed by
/// the elements greater or equal to it.
///
/// Returns the final position of the pivot, which is also the number of elements less than it.
/// A single left-to-right Lomuto scan, elements equal to the pivot all end up on the right side.
pub fn partition(v: &mut [i32], stats: &mut SortStats) -> usize {
    if v.is_empty() {
        return 0;
    }

    let (pivot, v_without_pivot) = v.split_at_mut(1);
    let pivot = pivot[0];

    let num_lt = partition_lomuto(v_without_pivot, pivot, stats);

    // Place the pivot between the two partitions.
    v.swap(0, num_lt);
    stats.swaps += 1;

    num_lt
}

fn partition_lomuto(v: &mut [i32], pivot: i32, stats: &mut SortStats) -> usize {
    let mut num_lt = 0;

    for i in 0..v.len() {
        stats.comparisons += 1;
        if v[i] < pivot {
            v.swap(num_lt, i);
            stats.swaps += 1;
            num_lt += 1;
        }
    }

    num_lt
}
