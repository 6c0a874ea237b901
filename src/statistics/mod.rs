//! Statistical primitives used by the resampling estimators.
//!
//! - Pearson correlation with NaN for undefined inputs
//! - Quantiles with linear interpolation (R-7)
//! - Counter-seeded index resampling and permutation
//! - Two-sided Mann-Whitney U test

mod correlation;
mod quantile;
mod rank_sum;
mod resample;

pub use correlation::pearson_correlation;
pub use quantile::{compute_quantiles_finite, quantile_sorted};
pub use rank_sum::mann_whitney_u;
pub use resample::{
    counter_rng_seed, gather_into, iteration_rng, permute_into, resample_with_replacement_into,
    stream_seed,
};
