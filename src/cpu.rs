//! # CPU Scaling Model
//!
//! Translates a wall-clock measurement taken on the host into the duration
//! the same work would take "as if" run on a named CPU profile:
//!
//! `simulated = measured / clock_multiplier
//!            + (cache_miss_penalty_us / 1e6) * cache_miss_rate * memory_accesses`
//!
//! The first term models raw clock speed, the second charges a fixed
//! penalty for the fraction of memory accesses that miss the cache.

use crate::error::{BenchError, Result};

/// Microseconds per second
const MICROS_PER_SEC: f64 = 1_000_000.0;

/// A synthetic CPU description. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct CpuProfile {
    name: String,
    clock_multiplier: f64,
    cache_miss_penalty_us: f64,
    cache_miss_rate: f64,
}

impl CpuProfile {
    /// Build a profile, rejecting parameters the scaling formula cannot use.
    ///
    /// # Errors
    /// Returns [`BenchError::InvalidProfile`] if `clock_multiplier` is not
    /// strictly positive, `cache_miss_penalty_us` is negative, or
    /// `cache_miss_rate` is outside `[0, 1]`. Non-finite values are rejected.
    pub fn new(
        name: impl Into<String>,
        clock_multiplier: f64,
        cache_miss_penalty_us: f64,
        cache_miss_rate: f64,
    ) -> Result<Self> {
        let name = name.into();
        let invalid = |reason: &str| BenchError::InvalidProfile {
            name: name.clone(),
            reason: reason.to_string(),
        };

        if !(clock_multiplier.is_finite() && clock_multiplier > 0.0) {
            return Err(invalid("clock multiplier must be a finite value > 0"));
        }
        if !(cache_miss_penalty_us.is_finite() && cache_miss_penalty_us >= 0.0) {
            return Err(invalid("cache miss penalty must be a finite value >= 0"));
        }
        if !(0.0..=1.0).contains(&cache_miss_rate) {
            return Err(invalid("cache miss rate must be within [0, 1]"));
        }

        Ok(Self {
            name,
            clock_multiplier,
            cache_miss_penalty_us,
            cache_miss_rate,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn clock_multiplier(&self) -> f64 {
        self.clock_multiplier
    }

    pub fn cache_miss_penalty_us(&self) -> f64 {
        self.cache_miss_penalty_us
    }

    pub fn cache_miss_rate(&self) -> f64 {
        self.cache_miss_rate
    }

    /// Scale a measured duration (seconds) onto this profile.
    ///
    /// # Example
    /// ```
    /// use cpu_scaling_bench::cpu::CpuProfile;
    ///
    /// let mid = CpuProfile::new("Mid", 2.0, 30.0, 0.015).unwrap();
    /// let simulated = mid.simulate(0.004, 100);
    /// assert!((simulated - 0.002045).abs() < 1e-12);
    /// ```
    pub fn simulate(&self, measured_seconds: f64, memory_accesses: u64) -> f64 {
        let base = measured_seconds / self.clock_multiplier;
        let penalty = (self.cache_miss_penalty_us / MICROS_PER_SEC)
            * self.cache_miss_rate
            * memory_accesses as f64;
        base + penalty
    }
}

/// The three reference profiles: Basic, Mid and Pro.
pub fn default_profiles() -> Vec<CpuProfile> {
    [
        ("Basic", 1.0, 50.0, 0.02),
        ("Mid", 2.0, 30.0, 0.015),
        ("Pro", 4.0, 10.0, 0.01),
    ]
    .into_iter()
    .map(|(name, clock, penalty, rate)| CpuProfile {
        name: name.to_string(),
        clock_multiplier: clock,
        cache_miss_penalty_us: penalty,
        cache_miss_rate: rate,
    })
    .collect()
}

/// Select profiles by name (case-insensitive), preserving the requested order.
///
/// A profile named more than once is only selected the first time.
pub fn select_profiles(available: &[CpuProfile], names: &[String]) -> Result<Vec<CpuProfile>> {
    let mut selected: Vec<CpuProfile> = Vec::with_capacity(names.len());

    for wanted in names {
        let profile = available
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| BenchError::UnknownProfile {
                name: wanted.clone(),
                available: available.iter().map(|p| p.name.clone()).collect(),
            })?;

        if !selected.iter().any(|p| p.name == profile.name) {
            selected.push(profile.clone());
        }
    }

    Ok(selected)
}
