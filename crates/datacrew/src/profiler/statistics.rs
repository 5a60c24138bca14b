//! Descriptive statistics for column profiling.

use crate::error::Result;
use crate::types::{CategoricalStats, NumericStats, ValueCount};
use polars::prelude::*;
use std::collections::HashMap;

/// Percentile of pre-sorted values using linear interpolation, matching the
/// behavior of pandas' default `quantile`.
pub(crate) fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = p * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }

    let frac = rank - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

/// Sample standard deviation (n - 1 denominator) of the values.
pub(crate) fn sample_std(values: &[f64], mean: f64) -> f64 {
    let n = values.len() as f64;
    if n <= 1.0 {
        return 0.0;
    }

    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

/// Compute descriptive statistics for a numeric column.
///
/// Missing values are ignored. A column with no non-missing values yields
/// NaN statistics and an outlier count of zero.
pub(crate) fn numeric_stats(series: &Series, iqr_multiplier: f64) -> Result<NumericStats> {
    let non_null = series.drop_nulls();
    let float_series = non_null.cast(&DataType::Float64)?;
    let mut values: Vec<f64> = float_series.f64()?.into_iter().flatten().collect();

    if values.is_empty() {
        return Ok(NumericStats {
            mean: f64::NAN,
            median: f64::NAN,
            std_dev: f64::NAN,
            min: f64::NAN,
            max: f64::NAN,
            q1: f64::NAN,
            q3: f64::NAN,
            outlier_count: 0,
        });
    }

    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let median = percentile(&values, 0.5);
    let q1 = percentile(&values, 0.25);
    let q3 = percentile(&values, 0.75);
    let std_dev = sample_std(&values, mean);

    // Tukey fences
    let iqr = q3 - q1;
    let lower = q1 - iqr_multiplier * iqr;
    let upper = q3 + iqr_multiplier * iqr;
    let outlier_count = values.iter().filter(|&&v| v < lower || v > upper).count();

    Ok(NumericStats {
        mean,
        median,
        std_dev,
        min: values[0],
        max: values[values.len() - 1],
        q1,
        q3,
        outlier_count,
    })
}

/// Count distinct non-missing values in row order.
///
/// The result is sorted by count descending; the sort is stable, so values
/// with equal counts keep the order in which they first appeared.
pub(crate) fn value_counts(series: &Series) -> Result<Vec<ValueCount>> {
    let as_strings = series.cast(&DataType::String)?;
    let str_values = as_strings.str()?;

    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for value in str_values.into_iter().flatten() {
        let entry = counts.entry(value.to_string()).or_insert(0);
        if *entry == 0 {
            order.push(value.to_string());
        }
        *entry += 1;
    }

    let mut result: Vec<ValueCount> = order
        .into_iter()
        .map(|value| {
            let count = counts[&value];
            ValueCount { value, count }
        })
        .collect();
    result.sort_by(|a, b| b.count.cmp(&a.count));

    Ok(result)
}

/// Compute frequency statistics for a categorical column.
pub(crate) fn categorical_stats(
    series: &Series,
    total_rows: usize,
    top_n: usize,
    high_cardinality_ratio: f64,
) -> Result<CategoricalStats> {
    let mut top_values = value_counts(series)?;
    let distinct_count = top_values.len();
    top_values.truncate(top_n);

    let high_cardinality =
        total_rows > 0 && distinct_count as f64 > total_rows as f64 * high_cardinality_ratio;

    Ok(CategoricalStats {
        top_values,
        high_cardinality,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ==================== percentile tests ====================

    #[test]
    fn test_percentile_interpolates() {
        let values = [25.0, 30.0, 40.0];
        assert!((percentile(&values, 0.25) - 27.5).abs() < 1e-9);
        assert!((percentile(&values, 0.5) - 30.0).abs() < 1e-9);
        assert!((percentile(&values, 0.75) - 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentile_endpoints() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile(&values, 0.0), 1.0);
        assert_eq!(percentile(&values, 1.0), 4.0);
    }

    #[test]
    fn test_percentile_single_value() {
        assert_eq!(percentile(&[7.0], 0.25), 7.0);
        assert_eq!(percentile(&[7.0], 0.75), 7.0);
    }

    #[test]
    fn test_percentile_empty_is_nan() {
        assert!(percentile(&[], 0.5).is_nan());
    }

    // ==================== std tests ====================

    #[test]
    fn test_sample_std_basic() {
        // Values 1..5: sample variance = 10 / 4 = 2.5
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let std = sample_std(&values, 3.0);
        assert!((std - 2.5f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_sample_std_single_value() {
        assert_eq!(sample_std(&[5.0], 5.0), 0.0);
    }

    #[test]
    fn test_sample_std_identical_values() {
        assert_eq!(sample_std(&[5.0, 5.0, 5.0, 5.0], 5.0), 0.0);
    }

    // ==================== numeric_stats tests ====================

    #[test]
    fn test_numeric_stats_with_missing() {
        let series = Series::new("age".into(), &[Some(25i64), Some(30), None, Some(40)]);
        let stats = numeric_stats(&series, 1.5).unwrap();

        assert!((stats.mean - 31.666_666_666_666_668).abs() < 1e-9);
        assert_eq!(stats.min, 25.0);
        assert_eq!(stats.max, 40.0);
        assert_eq!(stats.median, 30.0);
        assert_eq!(stats.outlier_count, 0);
    }

    #[test]
    fn test_numeric_stats_mean_within_bounds() {
        let series = Series::new("v".into(), &[3.0f64, 9.0, 1.0, 7.0, 5.0]);
        let stats = numeric_stats(&series, 1.5).unwrap();

        assert!(stats.min <= stats.mean && stats.mean <= stats.max);
        assert!(stats.q1 <= stats.median && stats.median <= stats.q3);
    }

    #[test]
    fn test_numeric_stats_detects_outlier() {
        let series = Series::new(
            "v".into(),
            &[1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0],
        );
        let stats = numeric_stats(&series, 1.5).unwrap();
        assert_eq!(stats.outlier_count, 1);
    }

    #[test]
    fn test_numeric_stats_no_outliers_inside_fences() {
        let series = Series::new("v".into(), &[1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let stats = numeric_stats(&series, 1.5).unwrap();
        assert_eq!(stats.outlier_count, 0);
    }

    #[test]
    fn test_numeric_stats_all_missing_is_nan() {
        let series = Series::new("v".into(), &[None::<f64>, None, None]);
        let stats = numeric_stats(&series, 1.5).unwrap();
        assert!(stats.mean.is_nan());
        assert_eq!(stats.outlier_count, 0);
    }

    // ==================== value_counts tests ====================

    #[test]
    fn test_value_counts_descending_with_first_encounter_ties() {
        let series = Series::new("city".into(), &["LA", "NYC", "NYC", "SF"]);
        let counts = value_counts(&series).unwrap();

        assert_eq!(
            counts,
            vec![
                ValueCount { value: "NYC".to_string(), count: 2 },
                ValueCount { value: "LA".to_string(), count: 1 },
                ValueCount { value: "SF".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_value_counts_ignores_missing() {
        let series = Series::new("city".into(), &[Some("NYC"), None, Some("NYC"), None]);
        let counts = value_counts(&series).unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].count, 2);
    }

    #[test]
    fn test_value_counts_boolean_column() {
        let series = Series::new("flag".into(), &[true, false, true, true]);
        let counts = value_counts(&series).unwrap();
        assert_eq!(counts[0].value, "true");
        assert_eq!(counts[0].count, 3);
    }

    // ==================== categorical_stats tests ====================

    #[test]
    fn test_categorical_stats_truncates_to_top_n() {
        let series = Series::new("c".into(), &["a", "b", "c", "d", "e", "f", "a"]);
        let stats = categorical_stats(&series, 7, 5, 0.5).unwrap();
        assert_eq!(stats.top_values.len(), 5);
        assert_eq!(stats.top_values[0].value, "a");
    }

    #[test]
    fn test_categorical_stats_high_cardinality() {
        let series = Series::new("id".into(), &["u1", "u2", "u3", "u4"]);
        let stats = categorical_stats(&series, 4, 5, 0.5).unwrap();
        assert!(stats.high_cardinality);

        let series = Series::new("c".into(), &["a", "a", "b", "b"]);
        let stats = categorical_stats(&series, 4, 5, 0.5).unwrap();
        assert!(!stats.high_cardinality);
    }

    #[test]
    fn test_categorical_top_frequencies_bounded_by_non_missing() {
        let series = Series::new("c".into(), &[Some("a"), Some("b"), Some("a"), None]);
        let stats = categorical_stats(&series, 4, 5, 0.5).unwrap();
        let total: usize = stats.top_values.iter().map(|v| v.count).sum();
        assert_eq!(total, 3); // cardinality <= 5, so the sum equals it
    }
}
