//! Statistical primitives
//!
//! Averaging, split-half trend detection, and Pearson correlation. These are
//! the only numeric building blocks in the engine; every windowed derivation
//! sits on top of them. All three are total over valid-shape input: shape
//! errors (empty or mismatched slices) surface as `AnalyticsError`, numeric
//! degeneracies (zero baselines, zero variance) resolve to documented
//! sentinels instead of NaN.

use crate::error::AnalyticsError;
use crate::types::{Polarity, TrendDirection, TrendResult};

/// Arithmetic mean of a non-empty slice.
///
/// Empty input is a shape error, never a silent NaN.
pub fn average(values: &[f64]) -> Result<f64, AnalyticsError> {
    if values.is_empty() {
        return Err(AnalyticsError::EmptyInput);
    }
    let sum: f64 = values.iter().sum();
    Ok(sum / values.len() as f64)
}

/// Split-half trend over a window.
///
/// The window splits at index `n / 2`; for odd lengths the midpoint element
/// belongs to the second half. Percent change strictly inside the neutral
/// band classifies as `Neutral`, as does a window whose first half averages
/// zero (no baseline to compare against). Windows of fewer than 2 points
/// return a neutral result flagged `insufficient_data`.
pub fn trend(values: &[f64], polarity: Polarity, neutral_band_pct: f64) -> TrendResult {
    if values.len() < 2 {
        return TrendResult {
            direction: TrendDirection::Neutral,
            magnitude_percent: None,
            insufficient_data: true,
        };
    }

    // Both halves are non-empty for len >= 2.
    let mid = values.len() / 2;
    let first_avg = values[..mid].iter().sum::<f64>() / mid as f64;
    let second_avg = values[mid..].iter().sum::<f64>() / (values.len() - mid) as f64;

    if first_avg == 0.0 {
        return TrendResult {
            direction: TrendDirection::Neutral,
            magnitude_percent: None,
            insufficient_data: false,
        };
    }

    let percent_change = (second_avg - first_avg) / first_avg * 100.0;

    if percent_change.abs() < neutral_band_pct {
        return TrendResult {
            direction: TrendDirection::Neutral,
            magnitude_percent: Some(percent_change),
            insufficient_data: false,
        };
    }

    let improving = match polarity {
        Polarity::HigherIsBetter => percent_change > 0.0,
        Polarity::LowerIsBetter => percent_change < 0.0,
    };

    TrendResult {
        direction: if improving {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        },
        magnitude_percent: Some(percent_change),
        insufficient_data: false,
    }
}

/// Pearson correlation coefficient over paired series.
///
/// Zero variance in either series yields `0.0` so downstream threshold
/// comparisons never see NaN. The result is clamped to [-1, 1] against
/// floating-point drift.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Result<f64, AnalyticsError> {
    if x.len() != y.len() {
        return Err(AnalyticsError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    if x.is_empty() {
        return Err(AnalyticsError::EmptyInput);
    }

    let n = x.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    let mut sum_y2 = 0.0;

    for (&xi, &yi) in x.iter().zip(y) {
        sum_x += xi;
        sum_y += yi;
        sum_xy += xi * yi;
        sum_x2 += xi * xi;
        sum_y2 += yi * yi;
    }

    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = ((n * sum_x2 - sum_x * sum_x) * (n * sum_y2 - sum_y * sum_y)).sqrt();

    if denominator == 0.0 {
        return Ok(0.0);
    }

    Ok((numerator / denominator).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BAND: f64 = 5.0;

    #[test]
    fn test_average_single_value() {
        assert_eq!(average(&[3.25]).unwrap(), 3.25);
    }

    #[test]
    fn test_average_reorder_invariant() {
        let a = average(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = average(&[4.0, 2.0, 1.0, 3.0]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_average_empty_is_error() {
        assert!(matches!(average(&[]), Err(AnalyticsError::EmptyInput)));
    }

    #[test]
    fn test_trend_insufficient_data() {
        let result = trend(&[7.0], Polarity::HigherIsBetter, BAND);
        assert_eq!(result.direction, TrendDirection::Neutral);
        assert_eq!(result.magnitude_percent, None);
        assert!(result.insufficient_data);
    }

    #[test]
    fn test_trend_idempotent() {
        let values = [6.0, 6.5, 7.0, 7.5, 8.0, 8.5, 9.0];
        let first = trend(&values, Polarity::HigherIsBetter, BAND);
        let second = trend(&values, Polarity::HigherIsBetter, BAND);
        assert_eq!(first, second);
    }

    #[test]
    fn test_trend_neutral_band_is_strict() {
        // 100 -> 104.99 across the split: 4.99% stays neutral
        let result = trend(&[100.0, 100.0, 104.99, 104.99], Polarity::HigherIsBetter, BAND);
        assert_eq!(result.direction, TrendDirection::Neutral);

        // 100 -> 105: exactly 5.0% classifies as a move
        let result = trend(&[100.0, 100.0, 105.0, 105.0], Polarity::HigherIsBetter, BAND);
        assert_eq!(result.direction, TrendDirection::Up);
        assert_eq!(result.magnitude_percent, Some(5.0));
    }

    #[test]
    fn test_trend_odd_length_split() {
        // n=5 splits 2/3: first half [4, 4], second half [4, 8, 8]
        // averages 4.0 -> 6.666..., a +66% move
        let result = trend(&[4.0, 4.0, 4.0, 8.0, 8.0], Polarity::HigherIsBetter, BAND);
        assert_eq!(result.direction, TrendDirection::Up);
        let pct = result.magnitude_percent.unwrap();
        assert!((pct - 66.666_666_666_666_67).abs() < 1e-9);
    }

    #[test]
    fn test_trend_lower_is_better() {
        // Rising heart rate is a decline
        let result = trend(&[60.0, 60.0, 70.0, 70.0], Polarity::LowerIsBetter, BAND);
        assert_eq!(result.direction, TrendDirection::Down);

        // Falling heart rate is an improvement
        let result = trend(&[70.0, 70.0, 60.0, 60.0], Polarity::LowerIsBetter, BAND);
        assert_eq!(result.direction, TrendDirection::Up);
    }

    #[test]
    fn test_trend_zero_baseline_is_neutral() {
        let result = trend(&[0.0, 0.0, 5.0, 5.0], Polarity::HigherIsBetter, BAND);
        assert_eq!(result.direction, TrendDirection::Neutral);
        assert_eq!(result.magnitude_percent, None);
        assert!(!result.insufficient_data);
    }

    #[test]
    fn test_trend_labels() {
        let up = trend(&[100.0, 100.0, 112.0, 112.0], Polarity::HigherIsBetter, BAND);
        assert_eq!(up.label(), "Up 12%");

        let down = trend(&[100.0, 100.0, 88.0, 88.0], Polarity::HigherIsBetter, BAND);
        assert_eq!(down.label(), "Down 12%");

        let stable = trend(&[100.0, 100.0, 101.0, 101.0], Polarity::HigherIsBetter, BAND);
        assert_eq!(stable.label(), "Stable (±5%)");

        let short = trend(&[100.0], Polarity::HigherIsBetter, BAND);
        assert_eq!(short.label(), "Not enough data");
    }

    #[test]
    fn test_correlation_self_is_one() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let r = pearson_correlation(&x, &x).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_correlation_symmetry() {
        let x = [6.5, 7.0, 8.0, 6.0, 7.5];
        let y = [5.0, 6.0, 8.0, 4.5, 7.0];
        let xy = pearson_correlation(&x, &y).unwrap();
        let yx = pearson_correlation(&y, &x).unwrap();
        assert_eq!(xy, yx);
    }

    #[test]
    fn test_correlation_anticorrelated() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [4.0, 3.0, 2.0, 1.0];
        let r = pearson_correlation(&x, &y).unwrap();
        assert!((r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_correlation_zero_variance_is_zero() {
        let constant = [64.0, 64.0, 64.0, 64.0];
        let moving = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(pearson_correlation(&constant, &moving).unwrap(), 0.0);
        assert_eq!(pearson_correlation(&constant, &constant).unwrap(), 0.0);
    }

    #[test]
    fn test_correlation_length_mismatch() {
        let result = pearson_correlation(&[1.0, 2.0], &[1.0, 2.0, 3.0]);
        assert!(matches!(
            result,
            Err(AnalyticsError::LengthMismatch { left: 2, right: 3 })
        ));
    }

    #[test]
    fn test_correlation_empty_is_error() {
        assert!(matches!(
            pearson_correlation(&[], &[]),
            Err(AnalyticsError::EmptyInput)
        ));
    }

    #[test]
    fn test_correlation_in_range() {
        let x = [3.2, 8.1, 4.4, 9.9, 1.1, 6.6, 7.3];
        let y = [2.0, 7.5, 5.1, 9.0, 0.4, 5.9, 8.8];
        let r = pearson_correlation(&x, &y).unwrap();
        assert!((-1.0..=1.0).contains(&r));
    }
}
