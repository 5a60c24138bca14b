//! Configuration types for the analysis crew.
//!
//! This module provides configuration options using the builder pattern
//! for flexible and ergonomic setup of the summarizers.

use serde::{Deserialize, Serialize};

/// Configuration for the dataset summarizers.
///
/// Use [`AnalysisConfig::builder()`] to create a new configuration with a
/// fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use datacrew::config::AnalysisConfig;
///
/// let config = AnalysisConfig::builder()
///     .sample_rows(10)
///     .high_missing_threshold(0.4)
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of sample rows shown in the structural summary.
    /// Default: 5
    pub sample_rows: usize,

    /// Number of most frequent values listed per categorical column.
    /// Default: 5
    pub top_values: usize,

    /// Distinct-to-row ratio above which a categorical column is flagged as
    /// high cardinality (a heuristic identifier detector).
    /// Default: 0.5
    pub high_cardinality_ratio: f64,

    /// Missing-value fraction above which a column is flagged in the quality
    /// insights section.
    /// Default: 0.5
    pub high_missing_threshold: f64,

    /// Multiplier applied to the IQR when fencing outliers.
    /// Default: 1.5 (Tukey's rule)
    pub iqr_multiplier: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sample_rows: 5,
            top_values: 5,
            high_cardinality_ratio: 0.5,
            high_missing_threshold: 0.5,
            iqr_multiplier: 1.5,
        }
    }
}

impl AnalysisConfig {
    /// Create a new configuration builder.
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.sample_rows == 0 {
            return Err(ConfigValidationError::InvalidCount {
                field: "sample_rows".to_string(),
                value: self.sample_rows,
            });
        }

        if self.top_values == 0 {
            return Err(ConfigValidationError::InvalidCount {
                field: "top_values".to_string(),
                value: self.top_values,
            });
        }

        if self.high_cardinality_ratio <= 0.0 || self.high_cardinality_ratio > 1.0 {
            return Err(ConfigValidationError::InvalidThreshold {
                field: "high_cardinality_ratio".to_string(),
                value: self.high_cardinality_ratio,
            });
        }

        if self.high_missing_threshold <= 0.0 || self.high_missing_threshold > 1.0 {
            return Err(ConfigValidationError::InvalidThreshold {
                field: "high_missing_threshold".to_string(),
                value: self.high_missing_threshold,
            });
        }

        if self.iqr_multiplier <= 0.0 {
            return Err(ConfigValidationError::InvalidMultiplier(
                self.iqr_multiplier,
            ));
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid threshold for '{field}': {value} (must be in (0.0, 1.0])")]
    InvalidThreshold { field: String, value: f64 },

    #[error("Invalid count for '{field}': {value} (must be at least 1)")]
    InvalidCount { field: String, value: usize },

    #[error("Invalid IQR multiplier: {0} (must be positive)")]
    InvalidMultiplier(f64),
}

/// Builder for [`AnalysisConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct AnalysisConfigBuilder {
    sample_rows: Option<usize>,
    top_values: Option<usize>,
    high_cardinality_ratio: Option<f64>,
    high_missing_threshold: Option<f64>,
    iqr_multiplier: Option<f64>,
}

impl AnalysisConfigBuilder {
    /// Set the number of sample rows in the structural summary.
    pub fn sample_rows(mut self, n: usize) -> Self {
        self.sample_rows = Some(n);
        self
    }

    /// Set how many most frequent values are listed per categorical column.
    pub fn top_values(mut self, n: usize) -> Self {
        self.top_values = Some(n);
        self
    }

    /// Set the high-cardinality ratio (0.0 - 1.0).
    pub fn high_cardinality_ratio(mut self, ratio: f64) -> Self {
        self.high_cardinality_ratio = Some(ratio);
        self
    }

    /// Set the high-missing threshold (0.0 - 1.0).
    pub fn high_missing_threshold(mut self, threshold: f64) -> Self {
        self.high_missing_threshold = Some(threshold);
        self
    }

    /// Set the IQR multiplier used for outlier fences.
    pub fn iqr_multiplier(mut self, multiplier: f64) -> Self {
        self.iqr_multiplier = Some(multiplier);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<AnalysisConfig, ConfigValidationError> {
        let defaults = AnalysisConfig::default();
        let config = AnalysisConfig {
            sample_rows: self.sample_rows.unwrap_or(defaults.sample_rows),
            top_values: self.top_values.unwrap_or(defaults.top_values),
            high_cardinality_ratio: self
                .high_cardinality_ratio
                .unwrap_or(defaults.high_cardinality_ratio),
            high_missing_threshold: self
                .high_missing_threshold
                .unwrap_or(defaults.high_missing_threshold),
            iqr_multiplier: self.iqr_multiplier.unwrap_or(defaults.iqr_multiplier),
        };
        config.validate()?;
        Ok(config)
    }
}
