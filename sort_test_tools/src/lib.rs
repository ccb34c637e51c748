pub trait Sort {
    fn name() -> String;

    fn sort(arr: &mut [i32]);
}

pub mod patterns;
