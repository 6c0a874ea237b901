//! Default parameters and fixed constants.

/// Default number of resampling iterations.
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Default base seed for the resampling streams.
pub const DEFAULT_SEED: u64 = 42;

/// Default two-sided confidence level for bootstrap intervals.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Minimum number of paired observations for a defined correlation.
pub const MIN_OBSERVATIONS: usize = 2;

/// When either sample has at most this many observations and there are no
/// ties, the Mann-Whitney p-value uses the exact null distribution.
pub const EXACT_RANK_SUM_LIMIT: usize = 8;
