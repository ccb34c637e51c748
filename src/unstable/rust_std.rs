sort_impl!("rust_std_unstable");

pub fn sort(data: &mut [i32]) {
    data.sort_unstable();
}
