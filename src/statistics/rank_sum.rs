//! Two-sided Mann-Whitney U (Wilcoxon rank-sum) test.
//!
//! Ranks are tie-averaged. When either sample is small and there are no
//! ties, the p-value comes from the exact null distribution of U. Otherwise
//! it uses the normal approximation with tie correction and a 0.5 continuity
//! correction.

use statrs::function::erf::erfc;

use crate::constants::EXACT_RANK_SUM_LIMIT;
use crate::result::{RankSumMethod, RankSumTest};

/// Run a two-sided Mann-Whitney U test of `a` against `b`.
///
/// Non-finite values are ignored.
///
/// # Returns
///
/// The U statistic of `a` and the two-sided p-value, or `None` if either
/// sample has no finite value.
pub fn mann_whitney_u(a: &[f64], b: &[f64]) -> Option<RankSumTest> {
    let a: Vec<f64> = a.iter().copied().filter(|x| x.is_finite()).collect();
    let b: Vec<f64> = b.iter().copied().filter(|x| x.is_finite()).collect();
    if a.is_empty() || b.is_empty() {
        return None;
    }

    let n1 = a.len();
    let n2 = b.len();
    let (rank_sum_a, tie_term) = rank_sum_first(&a, &b);

    let n1_f = n1 as f64;
    let n2_f = n2 as f64;
    let u1 = rank_sum_a - n1_f * (n1_f + 1.0) / 2.0;
    let u2 = n1_f * n2_f - u1;
    let u_max = u1.max(u2);

    let small = n1 <= EXACT_RANK_SUM_LIMIT || n2 <= EXACT_RANK_SUM_LIMIT;
    let exact = if small && tie_term == 0.0 {
        // Without ties U is integral
        exact_sf(u_max.round() as usize, n1, n2)
    } else {
        None
    };
    let (p_value, method) = match exact {
        Some(sf) => (2.0 * sf, RankSumMethod::Exact),
        None => (asymptotic_p(u_max, n1_f, n2_f, tie_term), RankSumMethod::Asymptotic),
    };

    Some(RankSumTest {
        statistic: u1,
        p_value: p_value.clamp(0.0, 1.0),
        method,
    })
}

/// Sum of tie-averaged ranks of `a` in the pooled sample, and the tie
/// correction term Σ(t³ - t) over tie groups.
fn rank_sum_first(a: &[f64], b: &[f64]) -> (f64, f64) {
    let mut pooled: Vec<(f64, bool)> = a
        .iter()
        .map(|&x| (x, true))
        .chain(b.iter().map(|&x| (x, false)))
        .collect();
    pooled.sort_unstable_by(|x, y| x.0.total_cmp(&y.0));

    let mut rank_sum = 0.0;
    let mut tie_term = 0.0;
    let mut start = 0;
    while start < pooled.len() {
        let mut end = start + 1;
        while end < pooled.len() && pooled[end].0 == pooled[start].0 {
            end += 1;
        }

        // Ranks are 1-based: positions start..end share rank (start+1 + end) / 2
        let avg_rank = (start + 1 + end) as f64 / 2.0;
        let in_a = pooled[start..end].iter().filter(|(_, first)| *first).count();
        rank_sum += avg_rank * in_a as f64;

        let t = (end - start) as f64;
        tie_term += t * t * t - t;

        start = end;
    }

    (rank_sum, tie_term)
}

/// P(U >= u) under the exact null distribution for sample sizes `m`, `n`.
///
/// `None` when the number of orderings does not fit in an `i128`.
fn exact_sf(u: usize, m: usize, n: usize) -> Option<f64> {
    let total = orderings(m, n)?;
    let counts = u_null_counts(m, n);
    let upper: i128 = counts.iter().skip(u).sum();
    Some(upper as f64 / total as f64)
}

/// C(m + n, m), the number of distinct orderings of the pooled sample.
fn orderings(m: usize, n: usize) -> Option<i128> {
    let (m, n) = (m.min(n), m.max(n));
    let mut c: i128 = 1;
    for i in 1..=m {
        c = c.checked_mul((n + i) as i128)? / i as i128;
    }
    Some(c)
}

/// Number of orderings giving each U value, indexed by U in `0..=m*n`.
///
/// These are the coefficients of the Gaussian binomial
/// `[m + n, m]_q = prod_{k=1..m} (1 - q^(n+k)) / (1 - q^k)`, built one factor
/// at a time over the smaller sample so memory stays at `O(m * n)`. Every
/// intermediate polynomial is `[n + k, k]_q` or that times `(1 - q^(n+k))`,
/// so no coefficient exceeds `C(m + n, m)`; callers check that it fits first.
fn u_null_counts(m: usize, n: usize) -> Vec<i128> {
    let (m, n) = (m.min(n), m.max(n));
    let mut poly = vec![0_i128; m * n + m + 1];
    poly[0] = 1;

    for k in 1..=m {
        let shift = n + k;
        let degree = (k - 1) * n;

        // Multiply by (1 - q^shift), highest degree first
        for u in (0..=degree).rev() {
            poly[u + shift] -= poly[u];
        }
        // Divide by (1 - q^k): exact, so everything above k*n returns to zero
        for u in k..=degree + shift {
            poly[u] += poly[u - k];
        }
    }

    poly.truncate(m * n + 1);
    poly
}

fn asymptotic_p(u_max: f64, n1: f64, n2: f64, tie_term: f64) -> f64 {
    let n = n1 + n2;
    let mu = n1 * n2 / 2.0;
    let tie_adjust = if n > 1.0 { tie_term / (n * (n - 1.0)) } else { 0.0 };
    let variance = n1 * n2 / 12.0 * ((n + 1.0) - tie_adjust);
    if variance <= 0.0 {
        // Every pooled value tied: no evidence either way
        return 1.0;
    }

    let z = (u_max - mu - 0.5) / variance.sqrt();
    2.0 * normal_sf(z)
}

/// Standard normal survival function.
fn normal_sf(z: f64) -> f64 {
    0.5 * erfc(z / std::f64::consts::SQRT_2)
}
