//! Statistical summary: descriptive statistics, frequencies, quality flags.

use super::{group_thousands, RULE_HEAVY};
use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::loader::load_table;
use crate::profiler::TableProfiler;
use crate::quality::QualityAnalyzer;
use crate::types::{QualityFlag, TableProfile};
use std::path::Path;
use tracing::debug;

/// Summarize the statistics of a CSV file as plain text.
///
/// Never fails: a missing file or a profiling failure is reported inside the
/// returned string.
pub fn statistical_summary(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    match profile_and_render(path) {
        Ok(text) => text,
        Err(AnalysisError::FileNotFound(p)) => {
            format!("Error: File not found at path: {p}")
        }
        Err(e) => {
            debug!("statistical summary failed for {}: {}", path.display(), e);
            format!("Error computing statistics: {e}")
        }
    }
}

fn profile_and_render(path: &Path) -> Result<String> {
    let config = AnalysisConfig::default();
    let df = load_table(path)?;
    let profile = TableProfiler::profile_with_config(&df, &config)?;
    let flags = QualityAnalyzer::identify_flags(&profile, &config);
    Ok(render_statistics(
        &path.display().to_string(),
        &profile,
        &flags,
    ))
}

/// Render the statistical report for an already-profiled table.
pub fn render_statistics(path: &str, profile: &TableProfile, flags: &[QualityFlag]) -> String {
    let rows = profile.rows();
    let mut out = Vec::new();
    out.push(RULE_HEAVY.to_string());
    out.push("STATISTICAL ANALYSIS".to_string());
    out.push(RULE_HEAVY.to_string());
    out.push(format!("\nDataset: {path}"));
    out.push(format!("Total Records: {}", group_thousands(rows)));
    out.push(format!("Total Features: {}", profile.width()));

    let numeric_count = profile.numeric_columns().count();
    let categorical_count = profile.categorical_columns().count();
    out.push(format!("\nNumeric Columns: {numeric_count}"));
    out.push(format!("Categorical Columns: {categorical_count}"));

    if numeric_count > 0 {
        out.push(format!("\n{RULE_HEAVY}"));
        out.push("NUMERICAL FEATURES STATISTICS".to_string());
        out.push(RULE_HEAVY.to_string());

        for col in profile.numeric_columns() {
            let Some(stats) = col.numeric_stats() else {
                continue;
            };
            out.push(format!("\n{}:", col.name));
            out.push(format!("  Mean: {:.4}", stats.mean));
            out.push(format!("  Median: {:.4}", stats.median));
            out.push(format!("  Std Dev: {:.4}", stats.std_dev));
            out.push(format!("  Min: {:.4}", stats.min));
            out.push(format!("  Max: {:.4}", stats.max));
            out.push(format!("  25th Percentile: {:.4}", stats.q1));
            out.push(format!("  75th Percentile: {:.4}", stats.q3));
            if col.missing_count > 0 {
                out.push(format!(
                    "  Missing Values: {} ({:.2}%)",
                    col.missing_count, col.missing_percentage
                ));
            }
            if stats.outlier_count > 0 {
                let pct = (stats.outlier_count as f64 / rows as f64) * 100.0;
                out.push(format!(
                    "  Potential Outliers: {} ({pct:.2}%)",
                    stats.outlier_count
                ));
            }
        }
    }

    if categorical_count > 0 {
        out.push(format!("\n{RULE_HEAVY}"));
        out.push("CATEGORICAL FEATURES STATISTICS".to_string());
        out.push(RULE_HEAVY.to_string());

        for col in profile.categorical_columns() {
            let Some(stats) = col.categorical_stats() else {
                continue;
            };
            out.push(format!("\n{}:", col.name));
            out.push(format!(
                "  Cardinality: {} unique values",
                col.distinct_count
            ));
            if col.missing_count > 0 {
                out.push(format!(
                    "  Missing Values: {} ({:.2}%)",
                    col.missing_count, col.missing_percentage
                ));
            }
            out.push("  Top 5 Categories:".to_string());
            for (idx, vc) in stats.top_values.iter().enumerate() {
                let pct = (vc.count as f64 / rows as f64) * 100.0;
                out.push(format!(
                    "    {}. {}: {} ({pct:.2}%)",
                    idx + 1,
                    vc.value,
                    vc.count
                ));
            }
            if stats.high_cardinality {
                out.push(
                    "  ⚠️  High cardinality detected (may be an ID or unique identifier)"
                        .to_string(),
                );
            }
        }
    }

    out.push(format!("\n{RULE_HEAVY}"));
    out.push("MISSING VALUES SUMMARY".to_string());
    out.push(RULE_HEAVY.to_string());
    out.push(format!(
        "\nTotal Missing Values: {} ({:.2}% of all data)",
        group_thousands(profile.total_missing),
        profile.missing_cell_percentage()
    ));

    if profile.total_missing > 0 {
        out.push("\nColumns with Missing Values:".to_string());
        let mut with_missing: Vec<_> = profile
            .columns
            .iter()
            .filter(|c| c.missing_count > 0)
            .collect();
        with_missing.sort_by(|a, b| b.missing_count.cmp(&a.missing_count));
        for col in with_missing {
            out.push(format!(
                "  {}: {} ({:.2}%)",
                col.name,
                group_thousands(col.missing_count),
                col.missing_percentage
            ));
        }
    } else {
        out.push("\n✓ No missing values in any column".to_string());
    }

    out.push(format!("\n{RULE_HEAVY}"));
    out.push("DATA QUALITY INSIGHTS".to_string());
    out.push(RULE_HEAVY.to_string());

    match flags
        .iter()
        .find(|f| matches!(f, QualityFlag::DuplicateRows { .. }))
    {
        Some(QualityFlag::DuplicateRows { count, percentage }) => {
            out.push(format!(
                "\n⚠️  Found {count} duplicate rows ({percentage:.2}%)"
            ));
        }
        _ => out.push("\n✓ No duplicate rows detected".to_string()),
    }

    let constant: Vec<&str> = flags
        .iter()
        .filter_map(|f| match f {
            QualityFlag::ConstantColumn { column } => Some(column.as_str()),
            _ => None,
        })
        .collect();
    if !constant.is_empty() {
        out.push(format!(
            "\n⚠️  Constant columns (single value): {}",
            constant.join(", ")
        ));
    }

    let high_missing: Vec<&str> = flags
        .iter()
        .filter_map(|f| match f {
            QualityFlag::HighMissingColumn { column, .. } => Some(column.as_str()),
            _ => None,
        })
        .collect();
    if !high_missing.is_empty() {
        out.push(format!(
            "\n⚠️  Columns with >50% missing values: {}",
            high_missing.join(", ")
        ));
    }

    out.push(format!("\n{RULE_HEAVY}"));
    out.join("\n")
}
