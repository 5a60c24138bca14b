use crate::config::AnalysisConfig;
use crate::types::{QualityFlag, TableProfile};

/// Derives table-level quality flags from a [`TableProfile`].
///
/// Flags are facts, not advice: exact-duplicate rows, constant columns, and
/// columns missing in more than half of their rows. They are produced once
/// per analysis call and discarded after being rendered to text.
pub struct QualityAnalyzer;

impl QualityAnalyzer {
    /// Identify quality flags for a profiled table.
    ///
    /// Flag order is stable: duplicates first, then constant columns in
    /// column order, then high-missing columns in column order.
    pub fn identify_flags(profile: &TableProfile, config: &AnalysisConfig) -> Vec<QualityFlag> {
        let mut flags = Vec::new();

        if profile.duplicate_count > 0 {
            flags.push(QualityFlag::DuplicateRows {
                count: profile.duplicate_count,
                percentage: profile.duplicate_percentage,
            });
        }

        for col in &profile.columns {
            if col.is_constant() {
                flags.push(QualityFlag::ConstantColumn {
                    column: col.name.clone(),
                });
            }
        }

        let threshold = config.high_missing_threshold * 100.0;
        for col in &profile.columns {
            if col.missing_percentage > threshold {
                flags.push(QualityFlag::HighMissingColumn {
                    column: col.name.clone(),
                    percentage: col.missing_percentage,
                });
            }
        }

        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiler::TableProfiler;
    use polars::prelude::*;

    fn flags_for(df: &DataFrame) -> Vec<QualityFlag> {
        let profile = TableProfiler::profile(df).unwrap();
        QualityAnalyzer::identify_flags(&profile, &AnalysisConfig::default())
    }

    #[test]
    fn test_constant_column_flagged() {
        let df = df![
            "status" => ["active", "active", "active"],
            "age" => [20i64, 30, 40],
        ]
        .unwrap();

        let flags = flags_for(&df);
        assert!(flags.iter().any(|f| matches!(
            f,
            QualityFlag::ConstantColumn { column } if column == "status"
        )));
        assert!(!flags.iter().any(|f| matches!(
            f,
            QualityFlag::ConstantColumn { column } if column == "age"
        )));
    }

    #[test]
    fn test_constant_ignores_missing() {
        // One distinct value plus nulls still counts as constant.
        let df = df!["v" => [Some("x"), None, Some("x")]].unwrap();
        let flags = flags_for(&df);
        assert!(flags
            .iter()
            .any(|f| matches!(f, QualityFlag::ConstantColumn { .. })));
    }

    #[test]
    fn test_duplicate_rows_flagged() {
        let df = df![
            "a" => [1i64, 2, 1],
            "b" => ["x", "y", "x"],
        ]
        .unwrap();

        let flags = flags_for(&df);
        assert!(flags.iter().any(|f| matches!(
            f,
            QualityFlag::DuplicateRows { count: 1, .. }
        )));
    }

    #[test]
    fn test_no_flags_for_clean_table() {
        let df = df![
            "a" => [1i64, 2, 3],
            "b" => ["x", "y", "z"],
        ]
        .unwrap();
        assert!(flags_for(&df).is_empty());
    }

    #[test]
    fn test_high_missing_column_flagged() {
        let df = df![
            "mostly_missing" => [Some(1i64), None, None, None],
            "full" => [1i64, 2, 3, 4],
        ]
        .unwrap();

        let flags = flags_for(&df);
        assert!(flags.iter().any(|f| matches!(
            f,
            QualityFlag::HighMissingColumn { column, .. } if column == "mostly_missing"
        )));
    }

    #[test]
    fn test_exactly_half_missing_not_flagged() {
        let df = df!["v" => [Some(1i64), Some(2), None, None]].unwrap();
        let flags = flags_for(&df);
        assert!(!flags
            .iter()
            .any(|f| matches!(f, QualityFlag::HighMissingColumn { .. })));
    }
}
