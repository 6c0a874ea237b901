//! Pearson product-moment correlation.
//!
//! Two-pass, mean-centred computation. Undefined correlations (zero variance
//! in either operand) are reported as NaN rather than an error so that the
//! resampling loops can record them and decide later.

/// Compute the Pearson correlation coefficient of two paired sequences.
///
/// # Returns
///
/// The coefficient clamped to [-1, 1], or NaN if fewer than 2 pairs are
/// given or either sequence has zero variance.
///
/// # Panics
///
/// Panics if `x.len() != y.len()`.
///
/// # Formula
///
/// ```text
/// r = Σ(x - x̄)(y - ȳ) / sqrt(Σ(x - x̄)² · Σ(y - ȳ)²)
/// ```
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(x.len(), y.len(), "Paired sequences must have the same length");

    let n = x.len();
    if n < 2 {
        return f64::NAN;
    }

    let n_f = n as f64;
    let mean_x = x.iter().sum::<f64>() / n_f;
    let mean_y = y.iter().sum::<f64>() / n_f;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx == 0.0 || syy == 0.0 {
        return f64::NAN;
    }

    (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_sequences() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(pearson_correlation(&x, &x), 1.0);
    }

    #[test]
    fn test_perfect_negative() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y: Vec<f64> = x.iter().map(|v| -3.0 * v + 10.0).collect();
        assert!((pearson_correlation(&x, &y) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_known_value() {
        // Reference: scipy.stats.pearsonr([1, 2, 3, 4, 5], [2, 1, 4, 3, 5])[0] == 0.8
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 1.0, 4.0, 3.0, 5.0];
        assert!((pearson_correlation(&x, &y) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_zero_variance_is_nan() {
        let x = [1.0, 2.0, 3.0];
        let constant = [4.0, 4.0, 4.0];
        assert!(pearson_correlation(&x, &constant).is_nan());
        assert!(pearson_correlation(&constant, &x).is_nan());
    }

    #[test]
    fn test_too_short_is_nan() {
        assert!(pearson_correlation(&[1.0], &[2.0]).is_nan());
        assert!(pearson_correlation(&[], &[]).is_nan());
    }

    #[test]
    fn test_invariant_to_affine_transform() {
        let x = [0.3, 1.7, 2.2, 4.9, 3.1, 0.8];
        let y = [1.1, 2.0, 2.5, 4.0, 3.9, 0.2];
        let y_scaled: Vec<f64> = y.iter().map(|v| 2.5 * v - 7.0).collect();
        let r = pearson_correlation(&x, &y);
        let r_scaled = pearson_correlation(&x, &y_scaled);
        assert!((r - r_scaled).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_length_mismatch_panics() {
        pearson_correlation(&[1.0, 2.0], &[1.0]);
    }
}
