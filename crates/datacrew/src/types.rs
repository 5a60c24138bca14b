use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// Kind of a column, decided once at profiling time from the storage dtype.
///
/// The partition is exhaustive and disjoint: integer and floating-point
/// columns are `Numeric`, everything else (strings, booleans, dates) is
/// `Categorical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

impl ColumnKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Categorical => "categorical",
        }
    }
}

/// Descriptive statistics for a numeric column.
///
/// All values are computed over non-missing observations. Standard deviation
/// uses the sample form (n - 1 denominator). Percentiles use linear
/// interpolation over the sorted values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericStats {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// 25th percentile.
    pub q1: f64,
    /// 75th percentile.
    pub q3: f64,
    /// Observations outside the Tukey fences [Q1 - 1.5*IQR, Q3 + 1.5*IQR].
    pub outlier_count: usize,
}

/// A single categorical value with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Frequency analysis for a categorical column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalStats {
    /// Most frequent values in descending count order; ties keep the order in
    /// which the values were first encountered in the column.
    pub top_values: Vec<ValueCount>,
    /// Distinct non-missing count exceeds half the row count.
    pub high_cardinality: bool,
}

/// Kind-specific statistics attached to a column profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ColumnStats {
    Numeric(NumericStats),
    Categorical(CategoricalStats),
}

/// Derived, read-only view of a single column.
///
/// Computed fresh on every profiling call; never cached or persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    /// Storage dtype as reported by polars (e.g. "i64", "str").
    pub dtype: String,
    pub kind: ColumnKind,
    pub missing_count: usize,
    pub missing_percentage: f64,
    /// Count of distinct non-missing values.
    pub distinct_count: usize,
    pub stats: ColumnStats,
}

impl ColumnProfile {
    /// Whether the column holds exactly one distinct non-missing value.
    pub fn is_constant(&self) -> bool {
        self.distinct_count == 1
    }

    pub fn numeric_stats(&self) -> Option<&NumericStats> {
        match &self.stats {
            ColumnStats::Numeric(s) => Some(s),
            ColumnStats::Categorical(_) => None,
        }
    }

    pub fn categorical_stats(&self) -> Option<&CategoricalStats> {
        match &self.stats {
            ColumnStats::Categorical(s) => Some(s),
            ColumnStats::Numeric(_) => None,
        }
    }
}

/// Structured profile of a whole table.
///
/// The text reports produced by the summary layer are pure projections of
/// this record, so tests can assert on structured values instead of
/// substrings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableProfile {
    /// (rows, columns).
    pub shape: (usize, usize),
    /// Per-column profiles in original column order.
    pub columns: Vec<ColumnProfile>,
    /// Rows minus distinct rows: a duplicated pair counts once.
    pub duplicate_count: usize,
    pub duplicate_percentage: f64,
    /// Missing cells across the whole table.
    pub total_missing: usize,
    /// rows * columns.
    pub total_cells: usize,
}

impl TableProfile {
    pub fn rows(&self) -> usize {
        self.shape.0
    }

    pub fn width(&self) -> usize {
        self.shape.1
    }

    /// Look up a column profile by name.
    pub fn column(&self, name: &str) -> Option<&ColumnProfile> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn numeric_columns(&self) -> impl Iterator<Item = &ColumnProfile> {
        self.columns
            .iter()
            .filter(|c| c.kind == ColumnKind::Numeric)
    }

    pub fn categorical_columns(&self) -> impl Iterator<Item = &ColumnProfile> {
        self.columns
            .iter()
            .filter(|c| c.kind == ColumnKind::Categorical)
    }

    /// Percentage of missing cells over all cells.
    pub fn missing_cell_percentage(&self) -> f64 {
        if self.total_cells == 0 {
            0.0
        } else {
            (self.total_missing as f64 / self.total_cells as f64) * 100.0
        }
    }
}

/// A tagged fact about table-level data quality.
///
/// Produced once per analysis call and discarded after rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "flag")]
pub enum QualityFlag {
    /// Exact-duplicate rows exist (count excludes the first occurrence).
    DuplicateRows { count: usize, percentage: f64 },
    /// Column holds a single distinct non-missing value.
    ConstantColumn { column: String },
    /// Column is missing in more than half of its rows.
    HighMissingColumn { column: String, percentage: f64 },
}

/// Result of a full crew run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewReport {
    /// The writer agent's final Markdown report.
    pub final_report: String,
    /// (task name, output) for every task in execution order.
    pub task_outputs: Vec<(String, String)>,
    /// Timestamp of the run, e.g. "2026-08-30 14:02:11".
    pub generated_at: String,
}

impl CrewReport {
    /// Write the final Markdown report to `path`.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, &self.final_report).map_err(|e| AnalysisError::ReportWrite {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
