//! Result types returned by the resampling operations.

use serde::{Deserialize, Serialize};

/// Bootstrap confidence interval for a Pearson correlation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BootstrapInterval {
    /// Point estimate on the full data.
    pub r: f64,

    /// Lower interval bound, the `(1 - level) / 2` quantile.
    pub lower: f64,

    /// Upper interval bound, the `(1 + level) / 2` quantile.
    pub upper: f64,

    /// Two-sided confidence level the bounds correspond to.
    pub confidence_level: f64,

    /// Number of bootstrap resamples drawn.
    pub n_samples: usize,

    /// Resamples whose correlation was undefined (zero variance).
    ///
    /// These are excluded from the quantiles.
    pub undefined_resamples: usize,
}

impl From<BootstrapInterval> for (f64, f64, f64) {
    fn from(interval: BootstrapInterval) -> Self {
        (interval.r, interval.lower, interval.upper)
    }
}

/// One-sided permutation test of a positive Pearson correlation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermutationTest {
    /// Point estimate on the full data.
    pub r: f64,

    /// `(exceedances + 1) / (n_samples + 1)`, always in (0, 1].
    pub p_value: f64,

    /// Permutations whose correlation strictly exceeded `r`.
    pub exceedances: usize,

    /// Number of permutations drawn.
    pub n_samples: usize,
}

impl From<PermutationTest> for (f64, f64) {
    fn from(test: PermutationTest) -> Self {
        (test.r, test.p_value)
    }
}

/// How a rank-sum p-value was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankSumMethod {
    /// Exact null distribution of U (small samples without ties).
    Exact,
    /// Normal approximation with tie and continuity correction.
    Asymptotic,
}

/// Two-sided Mann-Whitney U test result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankSumTest {
    /// U statistic of the first sample.
    pub statistic: f64,

    /// Two-sided p-value.
    pub p_value: f64,

    /// Method used for the p-value.
    pub method: RankSumMethod,
}

impl From<RankSumTest> for (f64, f64) {
    fn from(test: RankSumTest) -> Self {
        (test.statistic, test.p_value)
    }
}

/// Comparison of two predictors by their bootstrap correlation distributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictorComparison {
    /// Point estimate for the first predictor.
    pub r_1: f64,

    /// Point estimate for the second predictor.
    pub r_2: f64,

    /// Rank-sum test of the first bootstrap set against the second.
    pub test: RankSumTest,

    /// Bootstrap resamples drawn per predictor.
    pub n_samples: usize,

    /// Undefined resamples for each predictor, excluded from the test.
    pub undefined_resamples: (usize, usize),
}
