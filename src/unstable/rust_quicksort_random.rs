use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::PivotPolicy;

sort_impl!("rust_quicksort_random");

// Every call replays the same pivot sequence, which keeps test failures reproducible.
const FIXED_SEED: u64 = 0x2545_F491_4F6C_DD1D;

pub fn sort(data: &mut [i32]) {
    let mut rng = StdRng::seed_from_u64(FIXED_SEED);
    crate::quicksort::sort_with(data, PivotPolicy::Random, &mut rng);
}
