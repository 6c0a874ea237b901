//! Comparison of two predictors via their bootstrap correlation distributions.

use crate::config::ResampleConfig;
use crate::error::{ResampleError, Result};
use crate::result::PredictorComparison;
use crate::statistics::{mann_whitney_u, stream_seed};

use super::bootstrap::{bootstrap_statistics, count_undefined};
use super::{check_paired, point_estimate};

/// Compare two predictors with a two-sided Mann-Whitney U test applied to
/// their bootstrapped Pearson correlations against `y_true`.
///
/// Each predictor is bootstrapped on its own random stream derived from
/// `config.seed` (stream 0 for `y_pred_1`, stream 1 for `y_pred_2`), so the
/// two statistic sample sets are independent. Stream 0 is the same stream
/// [`bootstrap_pearsonr`](super::bootstrap_pearsonr) uses for that seed.
///
/// # Returns
///
/// Both point estimates and the rank-sum test of the first predictor's
/// bootstrap set against the second's. Undefined resamples are excluded
/// from the test and counted per predictor.
///
/// # Errors
///
/// - `InvalidSampleCount` / `InvalidConfidenceLevel` for a bad `config`
/// - `LengthMismatch` if either predictor's length differs from `y_true`
/// - `InsufficientData` for fewer than 2 observations
/// - `UndefinedCorrelation` if either point estimate is undefined, or all
///   of a predictor's resamples are
pub fn bootstrap_pearsonr_mwu(
    y_true: &[f64],
    y_pred_1: &[f64],
    y_pred_2: &[f64],
    config: &ResampleConfig,
) -> Result<PredictorComparison> {
    config.validate()?;
    check_paired(y_true, y_pred_1)?;
    check_paired(y_true, y_pred_2)?;
    let r_1 = point_estimate(y_true, y_pred_1)?;
    let r_2 = point_estimate(y_true, y_pred_2)?;

    let seed_1 = stream_seed(config.seed, 0);
    let seed_2 = stream_seed(config.seed, 1);
    log::debug!(
        "comparison: n={} samples={} seed={}",
        y_true.len(),
        config.n_samples,
        config.seed
    );
    log::trace!("comparison: stream seeds {:#018x}, {:#018x}", seed_1, seed_2);

    let statistics_1 = bootstrap_statistics(y_true, y_pred_1, config.n_samples, seed_1);
    let statistics_2 = bootstrap_statistics(y_true, y_pred_2, config.n_samples, seed_2);
    let undefined_resamples = (
        count_undefined(&statistics_1),
        count_undefined(&statistics_2),
    );

    let test = mann_whitney_u(&statistics_1, &statistics_2)
        .ok_or_else(|| ResampleError::undefined("every bootstrap resample has zero variance"))?;

    log::debug!(
        "comparison: r_1={:.4} r_2={:.4} U={} p={:.6}",
        r_1,
        r_2,
        test.statistic,
        test.p_value
    );

    Ok(PredictorComparison {
        r_1,
        r_2,
        test,
        n_samples: config.n_samples,
        undefined_resamples,
    })
}
