//! Custom error types for the analysis crew.
//!
//! This module provides a structured error hierarchy using `thiserror`.
//! Library-level operations (`load_table`, `TableProfiler::profile`,
//! `Crew::kickoff`) return these errors; the summary layer renders them as
//! user-facing text because the narrative agents consume only strings.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

/// The main error type for dataset analysis and crew execution.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Input file does not exist.
    #[error("File not found at path: {0}")]
    FileNotFound(String),

    /// CSV content could not be parsed into a table.
    #[error("Failed to parse CSV file '{path}': {reason}")]
    CsvParse { path: String, reason: String },

    /// Table has no rows to analyze.
    #[error("Table contains no rows")]
    EmptyTable,

    /// Column was not found in the table.
    #[error("Column '{0}' not found in table")]
    ColumnNotFound(String),

    /// LLM provider error.
    #[error("LLM client error: {0}")]
    LlmClient(String),

    /// Final report could not be written.
    #[error("Failed to write report to '{path}': {reason}")]
    ReportWrite { path: String, reason: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<AnalysisError>,
    },
}

impl AnalysisError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        AnalysisError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Get a stable error code for programmatic handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::FileNotFound(_) => "FILE_NOT_FOUND",
            Self::CsvParse { .. } => "CSV_PARSE_ERROR",
            Self::EmptyTable => "EMPTY_TABLE",
            Self::ColumnNotFound(_) => "COLUMN_NOT_FOUND",
            Self::LlmClient(_) => "LLM_CLIENT_ERROR",
            Self::ReportWrite { .. } => "REPORT_WRITE_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Check if this error refers to a missing input file.
    pub fn is_file_not_found(&self) -> bool {
        match self {
            Self::FileNotFound(_) => true,
            Self::WithContext { source, .. } => source.is_file_not_found(),
            _ => false,
        }
    }
}

/// Errors are serialized as a struct with `code` and `message` fields.
impl Serialize for AnalysisError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("AnalysisError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| AnalysisError::Polars(e).with_context(context))
    }
}
