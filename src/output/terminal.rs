//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::result::{BootstrapInterval, PermutationTest, PredictorComparison, RankSumMethod};

/// Conventional significance level used to colour p-values.
const ALPHA: f64 = 0.05;

/// Format a bootstrap interval for human-readable terminal output.
pub fn format_interval(interval: &BootstrapInterval) -> String {
    let mut output = header("bootstrap confidence interval");

    output.push_str(&format!("  Resamples: {}\n", interval.n_samples));
    if interval.undefined_resamples > 0 {
        output.push_str(&format!(
            "  {}\n",
            format!(
                "\u{26A0} {} undefined resamples excluded",
                interval.undefined_resamples
            )
            .yellow()
        ));
    }
    output.push('\n');

    output.push_str(&format!("    Pearson r: {:.4}\n", interval.r));
    output.push_str(&format!(
        "    {:.0}% CI:    [{:.4}, {:.4}]\n",
        interval.confidence_level * 100.0,
        interval.lower,
        interval.upper
    ));

    let verdict = if interval.lower > 0.0 {
        "\u{2713} Interval excludes zero (positive)".green().bold()
    } else if interval.upper < 0.0 {
        "\u{2713} Interval excludes zero (negative)".green().bold()
    } else {
        "\u{2022} Interval contains zero".yellow().bold()
    };
    output.push('\n');
    output.push_str(&format!("  {}\n", verdict));

    footer(output)
}

/// Format a permutation test for human-readable terminal output.
pub fn format_permutation(test: &PermutationTest) -> String {
    let mut output = header("permutation test (one-sided, H\u{2080}: \u{03C1} = 0)");

    output.push_str(&format!("  Permutations: {}\n", test.n_samples));
    output.push('\n');
    output.push_str(&format!("    Pearson r: {:.4}\n", test.r));
    output.push_str(&format!(
        "    Exceeded by: {} permutations\n",
        test.exceedances
    ));
    output.push_str(&format!("    p-value:   {}\n", format_p(test.p_value)));

    let floor = 1.0 / (test.n_samples + 1) as f64;
    if test.exceedances == 0 {
        output.push('\n');
        output.push_str(&format!(
            "  Note: p-value is at its floor 1/{} = {:.2e}\n",
            test.n_samples + 1,
            floor
        ));
    }

    footer(output)
}

/// Format a two-predictor comparison for human-readable terminal output.
pub fn format_comparison(comparison: &PredictorComparison) -> String {
    let mut output = header("predictor comparison (Mann-Whitney U, two-sided)");

    output.push_str(&format!(
        "  Resamples: {} per predictor\n",
        comparison.n_samples
    ));
    let (undef_1, undef_2) = comparison.undefined_resamples;
    if undef_1 + undef_2 > 0 {
        output.push_str(&format!(
            "  {}\n",
            format!("\u{26A0} undefined resamples excluded: {} / {}", undef_1, undef_2).yellow()
        ));
    }
    output.push('\n');

    output.push_str(&format!("    Predictor 1 r: {:.4}\n", comparison.r_1));
    output.push_str(&format!("    Predictor 2 r: {:.4}\n", comparison.r_2));
    output.push_str(&format!(
        "    U statistic:   {:.1} ({})\n",
        comparison.test.statistic,
        format_method(comparison.test.method)
    ));
    output.push_str(&format!(
        "    p-value:       {}\n",
        format_p(comparison.test.p_value)
    ));

    footer(output)
}

fn header(title: &str) -> String {
    let mut output = String::new();
    output.push_str("pearson-resample: ");
    output.push_str(title);
    output.push('\n');
    output.push_str(&"\u{2500}".repeat(62));
    output.push('\n');
    output
}

fn footer(mut output: String) -> String {
    output.push_str(&"\u{2500}".repeat(62));
    output.push('\n');
    output
}

/// Format a p-value, red below the significance level.
fn format_p(p: f64) -> String {
    let text = if p < 1e-3 {
        format!("{:.2e}", p)
    } else {
        format!("{:.4}", p)
    };
    if p < ALPHA {
        text.red().bold().to_string()
    } else {
        text.green().to_string()
    }
}

fn format_method(method: RankSumMethod) -> &'static str {
    match method {
        RankSumMethod::Exact => "exact",
        RankSumMethod::Asymptotic => "normal approximation",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::RankSumTest;

    #[test]
    fn test_format_interval() {
        let interval = BootstrapInterval {
            r: 0.8123,
            lower: 0.7,
            upper: 0.9,
            confidence_level: 0.95,
            n_samples: 10000,
            undefined_resamples: 3,
        };
        let output = format_interval(&interval);
        assert!(output.contains("pearson-resample"));
        assert!(output.contains("Pearson r: 0.8123"));
        assert!(output.contains("95% CI:    [0.7000, 0.9000]"));
        assert!(output.contains("3 undefined resamples excluded"));
        assert!(output.contains("excludes zero"));
    }

    #[test]
    fn test_format_interval_containing_zero() {
        let interval = BootstrapInterval {
            r: 0.05,
            lower: -0.2,
            upper: 0.3,
            confidence_level: 0.9,
            n_samples: 500,
            undefined_resamples: 0,
        };
        let output = format_interval(&interval);
        assert!(output.contains("90% CI"));
        assert!(output.contains("Interval contains zero"));
        assert!(!output.contains("undefined"));
    }

    #[test]
    fn test_format_permutation_at_floor() {
        let test = PermutationTest {
            r: 1.0,
            p_value: 1.0 / 1001.0,
            exceedances: 0,
            n_samples: 1000,
        };
        let output = format_permutation(&test);
        assert!(output.contains("Permutations: 1000"));
        assert!(output.contains("1/1001"));
    }

    #[test]
    fn test_format_comparison() {
        let comparison = PredictorComparison {
            r_1: 0.61,
            r_2: 0.42,
            test: RankSumTest {
                statistic: 1234.5,
                p_value: 0.2,
                method: RankSumMethod::Asymptotic,
            },
            n_samples: 100,
            undefined_resamples: (0, 0),
        };
        let output = format_comparison(&comparison);
        assert!(output.contains("Predictor 1 r: 0.6100"));
        assert!(output.contains("U statistic:   1234.5 (normal approximation)"));
        assert!(output.contains("0.2000"));
    }
}
