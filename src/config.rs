//! Configuration for resampling runs.

use std::env;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CONFIDENCE_LEVEL, DEFAULT_SAMPLES, DEFAULT_SEED};
use crate::error::{ResampleError, Result};

/// Configuration shared by every resampling operation.
///
/// Passed by reference to each call; nothing here is global state.
///
/// ```ignore
/// use pearson_resample::ResampleConfig;
///
/// let config = ResampleConfig::new().samples(2_000).seed(7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResampleConfig {
    /// Resampling iterations per statistic sample set (default: 10,000).
    pub n_samples: usize,

    /// Base seed for the deterministic random streams (default: 42).
    pub seed: u64,

    /// Two-sided confidence level of bootstrap intervals (default: 0.95).
    pub confidence_level: f64,
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self {
            n_samples: DEFAULT_SAMPLES,
            seed: DEFAULT_SEED,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
        }
    }
}

impl ResampleConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of resampling iterations.
    pub fn samples(mut self, n: usize) -> Self {
        self.n_samples = n;
        self
    }

    /// Set the base seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the confidence level for bootstrap intervals.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.confidence_level = level;
        self
    }

    /// Merge configuration from environment variables.
    ///
    /// Recognised variables: `PR_SAMPLES`, `PR_SEED`, `PR_CONFIDENCE`.
    /// Values that fail to parse are ignored.
    pub fn from_env(mut self) -> Self {
        if let Some(samples) = parse_env::<usize>("PR_SAMPLES") {
            self = self.samples(samples);
        }
        if let Some(seed) = parse_env::<u64>("PR_SEED") {
            self = self.seed(seed);
        }
        if let Some(level) = parse_env::<f64>("PR_CONFIDENCE") {
            self = self.confidence_level(level);
        }
        self
    }

    /// Check that the configuration can drive a resampling run.
    pub fn validate(&self) -> Result<()> {
        if self.n_samples < 1 {
            return Err(ResampleError::InvalidSampleCount {
                got: self.n_samples,
            });
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(ResampleError::InvalidConfidenceLevel {
                value: self.confidence_level,
            });
        }
        Ok(())
    }

    /// Lower and upper quantile probabilities of the bootstrap interval.
    pub fn interval_quantiles(&self) -> (f64, f64) {
        let tail = (1.0 - self.confidence_level) / 2.0;
        (tail, 1.0 - tail)
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}
