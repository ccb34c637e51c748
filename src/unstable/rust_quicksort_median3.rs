sort_impl!("rust_quicksort_median3");

pub fn sort(data: &mut [i32]) {
    crate::quicksort::sort(data);
}
