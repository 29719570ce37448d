//! Experiment runner.
//!
//! An experiment is one (algorithm, CPU profile, input size) combination.
//! Each trial generates fresh random input, times a single algorithm call,
//! scales the measurement onto the profile and appends it to the sample.

use rand::Rng;
use tracing::{debug, info};

use crate::cpu::{default_profiles, CpuProfile};
use crate::error::{BenchError, Result};
use crate::registry::Algorithm;
use crate::utils::bench::{random_input, random_target, seeded_rng, time_seed};
use crate::utils::stats::summarize;
use crate::utils::timer::measure_seconds;

/// Upper bound on trials per experiment
pub const MAX_RUNS: usize = 1_000_000;

/// Configuration for a full benchmark run
#[derive(Clone, Debug)]
pub struct ExperimentConfig {
    /// Algorithms to run, in reporting order
    pub algorithms: Vec<Algorithm>,
    /// CPU profiles to simulate
    pub profiles: Vec<CpuProfile>,
    /// Input sizes (default: 100, 500, 1000)
    pub sizes: Vec<usize>,
    /// Trials per experiment (default: 5)
    pub runs: usize,
    /// Seed for the experiment RNG; `None` seeds from the clock
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            algorithms: Algorithm::ALL.to_vec(),
            profiles: default_profiles(),
            sizes: vec![100, 500, 1000],
            runs: 5,
            seed: None,
        }
    }
}

impl ExperimentConfig {
    /// Reject configurations that would produce no rows or empty samples.
    pub fn validate(&self) -> Result<()> {
        if self.algorithms.is_empty() {
            return Err(BenchError::InvalidConfig("no algorithms selected".into()));
        }
        if self.profiles.is_empty() {
            return Err(BenchError::InvalidConfig("no CPU profiles selected".into()));
        }
        if self.sizes.is_empty() {
            return Err(BenchError::InvalidConfig("no input sizes given".into()));
        }
        if self.sizes.contains(&0) {
            return Err(BenchError::InvalidConfig("input sizes must be greater than zero".into()));
        }
        if self.runs == 0 {
            return Err(BenchError::InvalidConfig("runs must be greater than zero".into()));
        }
        if self.runs > MAX_RUNS {
            return Err(BenchError::InvalidConfig(format!(
                "runs must not exceed {}",
                MAX_RUNS
            )));
        }
        Ok(())
    }

    /// Seed the run will use: the configured one, or one taken from the clock.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(time_seed)
    }

    /// Number of experiments (table rows) this configuration produces
    pub fn experiment_count(&self) -> usize {
        self.algorithms.len() * self.profiles.len() * self.sizes.len()
    }
}

/// Aggregated outcome of one experiment
#[derive(Clone, Debug, PartialEq)]
pub struct ExperimentResult {
    pub algorithm_name: &'static str,
    pub cpu_name: String,
    pub input_size: usize,
    pub runs: usize,
    /// Mean simulated duration in seconds
    pub mean: f64,
    /// Population standard deviation in seconds
    pub stddev: f64,
    /// Simulated duration of each trial, in run order
    pub samples: Vec<f64>,
}

/// Run `runs` trials of `algorithm` on `profile` with arrays of `input_size`.
pub fn run_experiment<R: Rng>(
    algorithm: Algorithm,
    profile: &CpuProfile,
    input_size: usize,
    runs: usize,
    rng: &mut R,
) -> Result<ExperimentResult> {
    if runs == 0 {
        return Err(BenchError::EmptySample);
    }

    let mut samples = Vec::with_capacity(runs.min(MAX_RUNS));

    for run in 0..runs {
        let input = random_input(rng, input_size);
        let target = random_target(rng, &input).ok_or(BenchError::EmptyInput)?;

        let (measured, (_, accesses)) = measure_seconds(|| algorithm.run(&input, target));
        let simulated = profile.simulate(measured, accesses);

        debug!(
            algorithm = algorithm.key(),
            cpu = profile.name(),
            input_size,
            run,
            measured,
            accesses,
            simulated,
            "Trial complete"
        );
        samples.push(simulated);
    }

    let (mean, stddev) = summarize(&samples).ok_or(BenchError::EmptySample)?;

    info!(
        algorithm = algorithm.key(),
        cpu = profile.name(),
        input_size,
        mean,
        stddev,
        "Experiment complete"
    );

    Ok(ExperimentResult {
        algorithm_name: algorithm.name(),
        cpu_name: profile.name().to_string(),
        input_size,
        runs,
        mean,
        stddev,
        samples,
    })
}

/// Run every (algorithm, profile, size) combination in that nesting order.
///
/// The RNG is seeded from `config.seed` (clock when unset), so a fixed seed
/// reproduces every input array and target. `on_result` is called as each
/// experiment finishes so callers can stream rows; all results are also
/// returned in the same order.
pub fn run_all<F>(config: &ExperimentConfig, mut on_result: F) -> Result<Vec<ExperimentResult>>
where
    F: FnMut(&ExperimentResult),
{
    config.validate()?;

    let seed = config.resolve_seed();
    debug!(seed, "Seeding experiment RNG");
    let mut rng = seeded_rng(seed);

    let mut results = Vec::with_capacity(config.experiment_count());
    for &algorithm in &config.algorithms {
        for profile in &config.profiles {
            for &size in &config.sizes {
                let result = run_experiment(algorithm, profile, size, config.runs, &mut rng)?;
                on_result(&result);
                results.push(result);
            }
        }
    }

    Ok(results)
}
