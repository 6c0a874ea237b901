//! # pearson-resample
//!
//! Resampling-based inference for the Pearson correlation between observed
//! values and predictions.
//!
//! This crate provides three estimators:
//! - Bootstrap confidence interval for r (percentile method)
//! - One-sided permutation test p-value for r > 0
//! - Two-sided Mann-Whitney U comparison of two predictors' bootstrap
//!   distributions
//!
//! None of them assume normality of the data, which is the reason to prefer
//! them over the parametric test when scoring predictors on benchmark sets.
//!
//! ## Quick Start
//!
//! ```ignore
//! use pearson_resample::{bootstrap_pearsonr, permutation_pearsonr, ResampleConfig};
//!
//! let config = ResampleConfig::default(); // 10,000 resamples, seed 42
//!
//! let interval = bootstrap_pearsonr(&y_true, &y_pred, &config)?;
//! println!("r = {:.3} [{:.3}, {:.3}]", interval.r, interval.lower, interval.upper);
//!
//! let test = permutation_pearsonr(&y_true, &y_pred, &config)?;
//! println!("p = {:.4}", test.p_value);
//! ```
//!
//! ## Determinism
//!
//! Every resampling iteration draws from its own generator seeded from
//! `config.seed` and the iteration index. Results are bit-identical across
//! runs, thread counts, and with the `parallel` feature turned off.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod error;
mod result;
mod thread_pool;

// Functional modules
pub mod analysis;
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use analysis::{bootstrap_pearsonr, bootstrap_pearsonr_mwu, permutation_pearsonr};
pub use config::ResampleConfig;
pub use constants::{DEFAULT_CONFIDENCE_LEVEL, DEFAULT_SAMPLES, DEFAULT_SEED};
pub use error::{ResampleError, Result};
pub use result::{
    BootstrapInterval, PermutationTest, PredictorComparison, RankSumMethod, RankSumTest,
};
