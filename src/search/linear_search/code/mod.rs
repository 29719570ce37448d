//! Linear search implementation.

mod original;

pub use original::linear_search;

/// Accesses charged per examined element
pub const ACCESSES_PER_READ: u64 = 1;
