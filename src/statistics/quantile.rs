//! Quantile computation with linear interpolation between order statistics.
//!
//! All functions use the "R-7" definition (NumPy's default `linear` method):
//! `h = (n - 1) * p`, interpolating between `x[floor(h)]` and `x[floor(h) + 1]`.

/// Read a quantile from data that is already sorted ascending.
///
/// # Panics
///
/// Panics if `sorted` is empty or if `p` is outside [0, 1].
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    assert!(!sorted.is_empty(), "Cannot compute quantile of empty slice");
    assert!(
        (0.0..=1.0).contains(&p),
        "Quantile probability must be in [0, 1]"
    );

    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let h_floor = h.floor() as usize;
    let h_frac = h - h.floor();

    if h_floor >= n - 1 {
        sorted[n - 1]
    } else if h_frac == 0.0 {
        sorted[h_floor]
    } else {
        sorted[h_floor] + h_frac * (sorted[h_floor + 1] - sorted[h_floor])
    }
}

/// Compute several quantiles over the finite values of `data`.
///
/// Non-finite entries (NaN from undefined correlations) are skipped. The
/// finite values are copied and sorted once, then each probability in `ps`
/// is read off the sorted copy.
///
/// # Returns
///
/// One value per entry of `ps`, or `None` if `data` holds no finite value.
pub fn compute_quantiles_finite(data: &[f64], ps: &[f64]) -> Option<Vec<f64>> {
    let mut finite: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
    if finite.is_empty() {
        return None;
    }
    finite.sort_unstable_by(|a, b| a.total_cmp(b));

    Some(ps.iter().map(|&p| quantile_sorted(&finite, p)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_median_and_extremes() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(quantile_sorted(&data, 0.5), 3.0);
        assert_eq!(quantile_sorted(&data, 0.0), 1.0);
        assert_eq!(quantile_sorted(&data, 1.0), 5.0);
        assert_eq!(quantile_sorted(&[7.0], 0.3), 7.0);
    }

    #[test]
    fn test_interpolates_like_numpy() {
        // np.quantile([1, 2, 3, 4], [0.025, 0.975]) == [1.075, 3.925]
        let data = [4.0, 1.0, 3.0, 2.0];
        let q = compute_quantiles_finite(&data, &[0.025, 0.975]).unwrap();
        assert!((q[0] - 1.075).abs() < 1e-12);
        assert!((q[1] - 3.925).abs() < 1e-12);
    }

    #[test]
    fn test_finite_quantiles_skip_nan() {
        let data = [f64::NAN, 1.0, 2.0, f64::NAN, 3.0];
        let q = compute_quantiles_finite(&data, &[0.0, 0.5, 1.0]).unwrap();
        assert_eq!(q, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_finite_quantiles_all_nan() {
        let data = [f64::NAN, f64::NAN];
        assert!(compute_quantiles_finite(&data, &[0.5]).is_none());
    }

    #[test]
    #[should_panic(expected = "Cannot compute quantile of empty slice")]
    fn test_empty_slice_panics() {
        quantile_sorted(&[], 0.5);
    }
}
