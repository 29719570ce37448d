//! # CPU-Scaling-Bench
//!
//! Benchmarks textbook algorithms and rescales each wall-clock measurement
//! onto synthetic CPU profiles, reporting mean and standard deviation of
//! the simulated durations.

pub mod cpu;
pub mod error;
pub mod experiment;
pub mod registry;
pub mod search;
pub mod sort;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

pub use error::{BenchError, Result};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::cpu::{default_profiles, CpuProfile};
    pub use crate::experiment::{run_all, run_experiment, ExperimentConfig, ExperimentResult};
    pub use crate::registry::{build_registry, Algorithm, AlgorithmRegistry, RunOutput};
}
