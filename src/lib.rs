//! In-place Quicksort over `i32` with a configurable pivot policy, plus the glue needed to
//! generate random input, time the sort and report the result.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort(arr: &mut [i32]) {
                sort(arr);
            }
        }
    };
}

pub mod config;
pub mod error;
pub mod measure;
pub mod partition;
pub mod pivot;
pub mod quicksort;
pub mod unstable;

pub use config::SortConfig;
pub use error::{Error, Result};
pub use measure::Measurement;
pub use pivot::PivotPolicy;
pub use quicksort::{sort, sort_with, SortStats};
