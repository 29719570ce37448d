//! Searching algorithms.

pub mod linear_search;
