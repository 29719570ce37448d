//! Error types for experiment configuration and execution.

use thiserror::Error;

/// Errors produced while building profiles, validating configuration
/// or running experiments.
#[derive(Error, Debug)]
pub enum BenchError {
    /// A CPU profile parameter is outside its valid range.
    #[error("Invalid CPU profile '{name}': {reason}")]
    InvalidProfile { name: String, reason: String },

    /// An experiment was asked to run on an empty input array.
    #[error("Input size must be greater than zero")]
    EmptyInput,

    /// Statistics were requested over an empty trial sample.
    #[error("Trial sample is empty (runs must be greater than zero)")]
    EmptySample,

    /// No algorithm matches the requested key.
    #[error("Algorithm '{name}' not found. Available: {available:?}")]
    UnknownAlgorithm {
        name: String,
        available: Vec<&'static str>,
    },

    /// No CPU profile matches the requested name.
    #[error("CPU profile '{name}' not found. Available: {available:?}")]
    UnknownProfile {
        name: String,
        available: Vec<String>,
    },

    /// The experiment configuration is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An algorithm produced a result different from its reference.
    #[error("Algorithm '{algorithm}' failed verification: {reason}")]
    Verification {
        algorithm: &'static str,
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BenchError>;
