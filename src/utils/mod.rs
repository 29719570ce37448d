//! Utility modules for timing, statistics and output.

pub mod bench;
pub mod runner;
pub mod stats;
pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use bench::{random_input, random_target, seeded_rng, time_seed};
pub use stats::{mean, stddev, summarize};
pub use timer::{measure, measure_seconds};
