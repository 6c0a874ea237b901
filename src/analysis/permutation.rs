//! One-sided permutation test for a positive Pearson correlation.
//!
//! Under the null hypothesis that the correlation is zero, pairing between
//! `y_true` and `y_pred` carries no information, so shuffling `y_pred`
//! produces draws from the null distribution of r. The p-value is the
//! add-one smoothed proportion of shuffles whose correlation strictly
//! exceeds the observed one:
//!
//! ```text
//! p = (b + 1) / (n + 1)
//! ```
//!
//! This avoids the normality assumption of the parametric test.

use crate::config::ResampleConfig;
use crate::error::Result;
use crate::result::PermutationTest;
use crate::statistics::{iteration_rng, pearson_correlation, permute_into};

use super::{check_paired, point_estimate};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Run a one-sided permutation test of the Pearson correlation.
///
/// `y_true` stays fixed; each iteration correlates it against a uniformly
/// random permutation of `y_pred`.
///
/// # Returns
///
/// The point estimate and `p = (b + 1) / (n_samples + 1)`, where `b` counts
/// permutations with a correlation strictly greater than the point estimate.
/// The p-value is never 0; its minimum is `1 / (n_samples + 1)`.
///
/// # Errors
///
/// - `InvalidSampleCount` / `InvalidConfidenceLevel` for a bad `config`
/// - `LengthMismatch` if the sequences differ in length
/// - `InsufficientData` for fewer than 2 pairs
/// - `UndefinedCorrelation` if the full-data correlation is undefined
pub fn permutation_pearsonr(
    y_true: &[f64],
    y_pred: &[f64],
    config: &ResampleConfig,
) -> Result<PermutationTest> {
    config.validate()?;
    check_paired(y_true, y_pred)?;
    let r = point_estimate(y_true, y_pred)?;

    log::debug!(
        "permutation: n={} samples={} seed={}",
        y_true.len(),
        config.n_samples,
        config.seed
    );

    let exceedances = count_exceedances(y_true, y_pred, r, config.n_samples, config.seed);
    let p_value = (exceedances + 1) as f64 / (config.n_samples + 1) as f64;

    log::debug!(
        "permutation: r={:.4} exceedances={} p={:.6}",
        r,
        exceedances,
        p_value
    );

    Ok(PermutationTest {
        r,
        p_value,
        exceedances,
        n_samples: config.n_samples,
    })
}

/// Count permutations of `y_pred` whose correlation with `y_true` is
/// strictly greater than `r`.
fn count_exceedances(
    y_true: &[f64],
    y_pred: &[f64],
    r: f64,
    n_samples: usize,
    base_seed: u64,
) -> usize {
    let n = y_pred.len();

    #[cfg(feature = "parallel")]
    let exceedances = crate::thread_pool::install(|| {
        (0..n_samples)
            .into_par_iter()
            .map_init(
                || vec![0.0_f64; n],
                |permuted, i| permuted_exceeds(y_true, y_pred, r, base_seed, i, permuted),
            )
            .filter(|&exceeds| exceeds)
            .count()
    });

    #[cfg(not(feature = "parallel"))]
    let exceedances = crate::thread_pool::install(|| {
        let mut permuted = vec![0.0_f64; n];
        (0..n_samples)
            .filter(|&i| permuted_exceeds(y_true, y_pred, r, base_seed, i, &mut permuted))
            .count()
    });

    exceedances
}

fn permuted_exceeds(
    y_true: &[f64],
    y_pred: &[f64],
    r: f64,
    base_seed: u64,
    i: usize,
    permuted: &mut [f64],
) -> bool {
    let mut rng = iteration_rng(base_seed, i);
    permute_into(y_pred, &mut rng, permuted);
    pearson_correlation(y_true, permuted) > r
}
