//! # Bubble Sort
//!
//! Repeatedly walks the array comparing adjacent pairs and swapping those
//! that are out of order. After pass `i` the largest `i + 1` elements are in
//! their final place, so each pass stops one element earlier.
//!
//! ## Memory access accounting
//!
//! - **Comparison**: 2 accesses (both elements read)
//! - **Swap**: 4 additional accesses (two reads, two writes)
//!
//! There is no early exit on an already sorted pass: the access count
//! depends only on `n` and on the number of inversions in the input.

pub mod code;
#[cfg(test)]
pub mod test;

pub use code::*;
