//! Bubble sort implementation.

mod original;

pub use original::bubble_sort;

/// Accesses charged for reading both sides of a comparison
pub const ACCESSES_PER_COMPARISON: u64 = 2;

/// Accesses charged for exchanging two elements
pub const ACCESSES_PER_SWAP: u64 = 4;
