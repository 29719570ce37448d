//! # Linear Search
//!
//! Scans the array from left to right and stops at the first element equal
//! to the target. Each examined element costs one memory access, so a miss
//! on an `n`-element array costs exactly `n` accesses.

pub mod code;
#[cfg(test)]
pub mod test;

pub use code::*;
