// Median-of-three pivot, the qsort binary's default.
pub mod rust_quicksort_median3;

// Random pivot from a fixed seed.
pub mod rust_quicksort_random;

// slice::sort_unstable as baseline.
pub mod rust_std;
