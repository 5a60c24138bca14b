//! Table-level data quality analysis.

mod analyzer;

pub use analyzer::QualityAnalyzer;
