//! Resampling estimators for the Pearson correlation.
//!
//! - [`bootstrap_pearsonr`]: percentile bootstrap confidence interval
//! - [`permutation_pearsonr`]: one-sided permutation test p-value
//! - [`bootstrap_pearsonr_mwu`]: rank-sum comparison of two predictors'
//!   bootstrap distributions

mod bootstrap;
mod comparison;
mod permutation;

pub use bootstrap::bootstrap_pearsonr;
pub use comparison::bootstrap_pearsonr_mwu;
pub use permutation::permutation_pearsonr;

use crate::constants::MIN_OBSERVATIONS;
use crate::error::{ResampleError, Result};
use crate::statistics::pearson_correlation;

/// Check that a prediction sequence pairs up with `y_true`.
fn check_paired(y_true: &[f64], y_pred: &[f64]) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(ResampleError::LengthMismatch {
            expected: y_true.len(),
            got: y_pred.len(),
        });
    }
    if y_true.len() < MIN_OBSERVATIONS {
        return Err(ResampleError::InsufficientData {
            required: MIN_OBSERVATIONS,
            got: y_true.len(),
        });
    }
    Ok(())
}

/// Correlation on the full data, which must be defined.
fn point_estimate(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    let r = pearson_correlation(y_true, y_pred);
    if r.is_nan() {
        return Err(ResampleError::undefined(
            "point estimate: an input sequence has zero variance",
        ));
    }
    Ok(r)
}
