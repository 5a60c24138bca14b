//! Table loading from delimited files.
//!
//! Loads the full file eagerly into a polars `DataFrame`. A missing path is
//! reported as [`AnalysisError::FileNotFound`]; malformed content is retried
//! with progressively more forgiving strategies before surfacing as
//! [`AnalysisError::CsvParse`].

use crate::error::{AnalysisError, Result};
use polars::io::csv::read::{CsvParseOptions, CsvReadOptions};
use polars::prelude::*;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load a CSV file into a `DataFrame`.
///
/// Loading strategies, in order:
/// 1. Standard read with quote handling and schema inference over the first
///    100 rows.
/// 2. Read without quote handling.
/// 3. Read after stripping doubled quotes and blank lines from the content.
pub fn load_table(path: impl AsRef<Path>) -> Result<DataFrame> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(AnalysisError::FileNotFound(path.display().to_string()));
    }

    // Strategy 1: standard loading with quote handling
    match CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_quote_char(Some(b'"')))
        .try_into_reader_with_file_path(Some(PathBuf::from(path)))
        .and_then(|reader| reader.finish())
    {
        Ok(df) => return Ok(df),
        Err(e) => {
            debug!("Standard CSV loading failed: {}", e);
        }
    }

    // Strategy 2: without quote handling
    match CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(PathBuf::from(path)))
        .and_then(|reader| reader.finish())
    {
        Ok(df) => return Ok(df),
        Err(e) => {
            debug!("CSV loading without quotes failed: {}", e);
        }
    }

    // Strategy 3: pre-clean content
    let content = std::fs::read_to_string(path)?;
    let cleaned = clean_csv_content(&content);
    CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .into_reader_with_file_handle(Cursor::new(cleaned))
        .finish()
        .map_err(|e| AnalysisError::CsvParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
}

/// Strip doubled quotes and empty lines from raw CSV content.
fn clean_csv_content(content: &str) -> String {
    content
        .replace("\"\"\"", "\"")
        .replace("\"\"", "\"")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write csv");
        file
    }

    #[test]
    fn test_load_simple_csv() {
        let file = write_csv("age,city\n25,NYC\n30,LA\n");
        let df = load_table(file.path()).unwrap();
        assert_eq!(df.shape(), (2, 2));
        assert_eq!(df.get_column_names()[0].as_str(), "age");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_table("/nonexistent/path/data.csv").unwrap_err();
        assert!(err.is_file_not_found());
        assert!(err.to_string().contains("/nonexistent/path/data.csv"));
    }

    #[test]
    fn test_load_csv_with_nulls() {
        let file = write_csv("age,city\n25,NYC\n,LA\n40,\n");
        let df = load_table(file.path()).unwrap();
        assert_eq!(df.shape(), (3, 2));
        assert_eq!(df.column("age").unwrap().null_count(), 1);
        assert_eq!(df.column("city").unwrap().null_count(), 1);
    }

    #[test]
    fn test_load_csv_skips_blank_lines_in_fallback() {
        let cleaned = clean_csv_content("a,b\n\n1,2\n\n3,4\n");
        assert_eq!(cleaned, "a,b\n1,2\n3,4");
    }

    #[test]
    fn test_clean_csv_content_collapses_doubled_quotes() {
        let cleaned = clean_csv_content("a\n\"\"x\"\"\n");
        assert_eq!(cleaned, "a\n\"x\"");
    }
}
