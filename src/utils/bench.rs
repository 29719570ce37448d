//! Random source helpers for reproducible experiments.
//!
//! Experiments never touch a global generator: the caller owns an RNG and
//! passes it down, so a fixed seed reproduces every input array and target.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

/// Build the experiment RNG from an explicit seed.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Exclusive upper bound for generated values: `input_size * 10`, at least 1.
pub fn value_bound(input_size: usize) -> u32 {
    u32::try_from(input_size.saturating_mul(10))
        .unwrap_or(u32::MAX)
        .max(1)
}

/// Fill a fresh array with values in `0..value_bound(input_size)`.
pub fn random_input<R: Rng>(rng: &mut R, input_size: usize) -> Vec<u32> {
    let bound = value_bound(input_size);
    (0..input_size).map(|_| rng.random_range(0..bound)).collect()
}

/// Pick a target that is present in `input`. Returns `None` for empty input.
pub fn random_target<R: Rng>(rng: &mut R, input: &[u32]) -> Option<u32> {
    if input.is_empty() {
        return None;
    }
    Some(input[rng.random_range(0..input.len())])
}
