//! Reference linear search with memory access counting.

use super::ACCESSES_PER_READ;

/// Find the index of the first element equal to `target`.
///
/// Returns `(None, input.len())` when the target is absent.
///
/// # Example
/// ```
/// use cpu_scaling_bench::search::linear_search::linear_search;
///
/// assert_eq!(linear_search(&[5, 3, 5], 5), (Some(0), 1));
/// assert_eq!(linear_search(&[5, 3, 5], 4), (None, 3));
/// ```
pub fn linear_search(input: &[u32], target: u32) -> (Option<usize>, u64) {
    let mut accesses = 0u64;

    for (i, &value) in input.iter().enumerate() {
        accesses += ACCESSES_PER_READ;
        if value == target {
            return (Some(i), accesses);
        }
    }

    (None, accesses)
}
