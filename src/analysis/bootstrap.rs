//! Percentile bootstrap confidence interval for the Pearson correlation.
//!
//! Pairs `(y_true[i], y_pred[i])` are resampled with replacement and the
//! correlation recomputed for each resample. The interval bounds are
//! quantiles of the resulting statistic sample set.
//!
//! Iteration `i` of a stream rooted at `base_seed` always draws the same
//! indices, so the sample set is identical with or without the `parallel`
//! feature and for any number of worker threads.

use crate::config::ResampleConfig;
use crate::error::{ResampleError, Result};
use crate::result::BootstrapInterval;
use crate::statistics::{
    compute_quantiles_finite, gather_into, iteration_rng, pearson_correlation,
    resample_with_replacement_into,
};

use super::{check_paired, point_estimate};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Estimate a bootstrap confidence interval for the Pearson correlation.
///
/// # Arguments
///
/// * `y_true` - Observed values
/// * `y_pred` - Predicted values, same length as `y_true`
/// * `config` - Sample count, seed and confidence level
///
/// # Returns
///
/// The point estimate and the `(1 - level) / 2`, `(1 + level) / 2` quantiles
/// of the bootstrap distribution (2.5% and 97.5% by default).
///
/// # Errors
///
/// - `InvalidSampleCount` / `InvalidConfidenceLevel` for a bad `config`
/// - `LengthMismatch` if the sequences differ in length
/// - `InsufficientData` for fewer than 2 pairs
/// - `UndefinedCorrelation` if the full-data correlation is undefined, or
///   every resample is
///
/// # Undefined resamples
///
/// A resample that repeats a single pair (or otherwise has zero variance in
/// either operand) has no correlation. It is recorded as NaN, counted in
/// `undefined_resamples`, and left out of the quantiles.
pub fn bootstrap_pearsonr(
    y_true: &[f64],
    y_pred: &[f64],
    config: &ResampleConfig,
) -> Result<BootstrapInterval> {
    config.validate()?;
    check_paired(y_true, y_pred)?;
    let r = point_estimate(y_true, y_pred)?;

    log::debug!(
        "bootstrap: n={} samples={} seed={}",
        y_true.len(),
        config.n_samples,
        config.seed
    );

    let statistics = bootstrap_statistics(y_true, y_pred, config.n_samples, config.seed);
    let undefined_resamples = count_undefined(&statistics);

    let (p_lo, p_hi) = config.interval_quantiles();
    let bounds = compute_quantiles_finite(&statistics, &[p_lo, p_hi])
        .ok_or_else(|| ResampleError::undefined("every bootstrap resample has zero variance"))?;

    let interval = BootstrapInterval {
        r,
        lower: bounds[0],
        upper: bounds[1],
        confidence_level: config.confidence_level,
        n_samples: config.n_samples,
        undefined_resamples,
    };

    log::debug!(
        "bootstrap: r={:.4} interval=[{:.4}, {:.4}]",
        interval.r,
        interval.lower,
        interval.upper
    );

    Ok(interval)
}

/// Fill the bootstrap statistic sample set for one random stream.
///
/// The set is allocated at its final length up front and each iteration
/// writes its own slot. Entries are NaN for undefined resamples.
pub(crate) fn bootstrap_statistics(
    y_true: &[f64],
    y_pred: &[f64],
    n_samples: usize,
    base_seed: u64,
) -> Vec<f64> {
    let n = y_true.len();

    #[cfg(feature = "parallel")]
    let statistics: Vec<f64> = crate::thread_pool::install(|| {
        let mut out = vec![0.0_f64; n_samples];

        out.par_iter_mut().enumerate().for_each_init(
            // Per-thread scratch: resample indices and both gathered sequences
            || ResampleScratch::new(n),
            |scratch, (i, slot)| {
                *slot = scratch.replicate(y_true, y_pred, base_seed, i);
            },
        );

        out
    });

    #[cfg(not(feature = "parallel"))]
    let statistics: Vec<f64> = crate::thread_pool::install(|| {
        let mut out = vec![0.0_f64; n_samples];
        let mut scratch = ResampleScratch::new(n);
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = scratch.replicate(y_true, y_pred, base_seed, i);
        }
        out
    });

    statistics
}

/// Count undefined entries in a statistic sample set, warning if any.
pub(crate) fn count_undefined(statistics: &[f64]) -> usize {
    let undefined = statistics.iter().filter(|x| x.is_nan()).count();
    if undefined > 0 {
        log::warn!(
            "{} of {} bootstrap resamples had zero variance; excluded from the estimate",
            undefined,
            statistics.len()
        );
    }
    undefined
}

/// Reusable buffers for one bootstrap replicate.
struct ResampleScratch {
    indices: Vec<usize>,
    true_sample: Vec<f64>,
    pred_sample: Vec<f64>,
}

impl ResampleScratch {
    fn new(n: usize) -> Self {
        Self {
            indices: vec![0; n],
            true_sample: vec![0.0; n],
            pred_sample: vec![0.0; n],
        }
    }

    /// Correlation of bootstrap replicate `i` of the stream at `base_seed`.
    fn replicate(&mut self, y_true: &[f64], y_pred: &[f64], base_seed: u64, i: usize) -> f64 {
        let mut rng = iteration_rng(base_seed, i);
        resample_with_replacement_into(y_true.len(), &mut rng, &mut self.indices);
        gather_into(y_true, &self.indices, &mut self.true_sample);
        gather_into(y_pred, &self.indices, &mut self.pred_sample);
        pearson_correlation(&self.true_sample, &self.pred_sample)
    }
}
