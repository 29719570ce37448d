//! Sorting algorithms.

pub mod bubble_sort;
