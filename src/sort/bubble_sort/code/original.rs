//! Reference bubble sort with memory access counting.

use super::{ACCESSES_PER_COMPARISON, ACCESSES_PER_SWAP};

/// Sort a copy of `input` and count the memory accesses it took.
///
/// The input slice is left untouched.
///
/// # Example
/// ```
/// use cpu_scaling_bench::sort::bubble_sort::bubble_sort;
///
/// let (sorted, accesses) = bubble_sort(&[3, 1, 2]);
/// assert_eq!(sorted, vec![1, 2, 3]);
/// // 3 comparisons, 2 swaps
/// assert_eq!(accesses, 3 * 2 + 2 * 4);
/// ```
pub fn bubble_sort(input: &[u32]) -> (Vec<u32>, u64) {
    let mut sorted = input.to_vec();
    let n = sorted.len();
    let mut accesses = 0u64;

    for i in 0..n {
        for j in 0..n - i - 1 {
            accesses += ACCESSES_PER_COMPARISON;
            if sorted[j] > sorted[j + 1] {
                sorted.swap(j, j + 1);
                accesses += ACCESSES_PER_SWAP;
            }
        }
    }

    (sorted, accesses)
}
