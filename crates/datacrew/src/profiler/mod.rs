//! Table profiling for dataset analysis.
//!
//! This module turns a loaded `DataFrame` into a [`TableProfile`]: per-column
//! kind, missing counts, distinct counts, and kind-specific descriptive
//! statistics, plus table-level duplicate and missing-cell totals. The text
//! reports in [`crate::summary`] are pure projections of this structure.

mod statistics;

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result, ResultExt};
use crate::types::{ColumnKind, ColumnProfile, ColumnStats, TableProfile};
use polars::prelude::*;

/// Profiler producing structured table summaries.
pub struct TableProfiler;

impl TableProfiler {
    /// Profile a table with the default configuration.
    pub fn profile(df: &DataFrame) -> Result<TableProfile> {
        Self::profile_with_config(df, &AnalysisConfig::default())
    }

    /// Profile a table, computing every column's kind once from its storage
    /// dtype and attaching kind-specific statistics.
    pub fn profile_with_config(df: &DataFrame, config: &AnalysisConfig) -> Result<TableProfile> {
        if df.height() == 0 {
            return Err(AnalysisError::EmptyTable);
        }

        let total_rows = df.height();
        let mut columns = Vec::with_capacity(df.width());
        let mut total_missing = 0usize;

        for col_name in df.get_column_names() {
            let profile = Self::profile_column(df, col_name.as_str(), total_rows, config)?;
            total_missing += profile.missing_count;
            columns.push(profile);
        }

        // A duplicated pair counts once: rows minus distinct rows.
        let duplicate_count = df.height()
            - df.unique::<&str, &str>(None, UniqueKeepStrategy::First, None)
                .context("Counting duplicate rows")?
                .height();
        let duplicate_percentage = (duplicate_count as f64 / total_rows as f64) * 100.0;

        Ok(TableProfile {
            shape: (df.height(), df.width()),
            columns,
            duplicate_count,
            duplicate_percentage,
            total_missing,
            total_cells: df.height() * df.width(),
        })
    }

    fn profile_column(
        df: &DataFrame,
        col_name: &str,
        total_rows: usize,
        config: &AnalysisConfig,
    ) -> Result<ColumnProfile> {
        let col = df
            .column(col_name)
            .map_err(|_| AnalysisError::ColumnNotFound(col_name.to_string()))?;
        let series = col.as_materialized_series();

        let kind = column_kind(series.dtype());
        let missing_count = series.null_count();
        let missing_percentage = (missing_count as f64 / total_rows as f64) * 100.0;
        let distinct_count = series.drop_nulls().n_unique()?;

        let stats = match kind {
            ColumnKind::Numeric => {
                ColumnStats::Numeric(statistics::numeric_stats(series, config.iqr_multiplier)?)
            }
            ColumnKind::Categorical => ColumnStats::Categorical(statistics::categorical_stats(
                series,
                total_rows,
                config.top_values,
                config.high_cardinality_ratio,
            )?),
        };

        Ok(ColumnProfile {
            name: col_name.to_string(),
            dtype: format!("{}", series.dtype()),
            kind,
            missing_count,
            missing_percentage,
            distinct_count,
            stats,
        })
    }
}

/// Decide a column's kind from its storage dtype.
///
/// Integer and floating-point dtypes are numeric; everything else, including
/// booleans and dates, is categorical.
pub fn column_kind(dtype: &DataType) -> ColumnKind {
    match dtype {
        DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt8
        | DataType::UInt16
        | DataType::UInt32
        | DataType::UInt64
        | DataType::Float32
        | DataType::Float64 => ColumnKind::Numeric,
        _ => ColumnKind::Categorical,
    }
}
