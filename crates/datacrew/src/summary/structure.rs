//! Structural summary: shape, columns, missing values, sample rows.

use super::{RULE_HEAVY, RULE_LIGHT};
use crate::error::AnalysisError;
use crate::loader::load_table;
use polars::prelude::*;
use std::path::Path;
use tracing::debug;

/// Summarize the structure of a CSV file as plain text.
///
/// Never fails: a missing file or unreadable content is reported inside the
/// returned string.
pub fn structural_summary(path: impl AsRef<Path>, sample_rows: usize) -> String {
    let path = path.as_ref();
    match load_table(path) {
        Ok(df) => render_structure(&path.display().to_string(), &df, sample_rows),
        Err(AnalysisError::FileNotFound(p)) => {
            format!("Error: File not found at path: {p}")
        }
        Err(e) => {
            debug!("structural summary failed for {}: {}", path.display(), e);
            format!("Error reading CSV file: {e}")
        }
    }
}

/// Render the structural report for an already-loaded table.
pub fn render_structure(path: &str, df: &DataFrame, sample_rows: usize) -> String {
    let mut out = Vec::new();
    out.push(RULE_HEAVY.to_string());
    out.push("CSV FILE INFORMATION".to_string());
    out.push(RULE_HEAVY.to_string());
    out.push(format!("\nFile Path: {path}"));
    out.push(format!(
        "Dataset Shape: {} rows × {} columns",
        df.height(),
        df.width()
    ));

    out.push(format!("\n{RULE_LIGHT}"));
    out.push("COLUMN INFORMATION".to_string());
    out.push(RULE_LIGHT.to_string());
    out.push(format!("\nTotal Columns: {}", df.width()));
    out.push("\nColumn Names and Data Types:".to_string());
    for (idx, col) in df.get_columns().iter().enumerate() {
        out.push(format!("  {}. {} ({})", idx + 1, col.name(), col.dtype()));
    }

    let missing: Vec<(&str, usize)> = df
        .get_columns()
        .iter()
        .map(|c| (c.name().as_str(), c.null_count()))
        .filter(|(_, n)| *n > 0)
        .collect();
    if missing.is_empty() {
        out.push("\nNo missing values detected.".to_string());
    } else {
        out.push(format!("\n{RULE_LIGHT}"));
        out.push("MISSING VALUES".to_string());
        out.push(RULE_LIGHT.to_string());
        for (name, count) in missing {
            let pct = (count as f64 / df.height() as f64) * 100.0;
            out.push(format!("  {name}: {count} ({pct:.2}%)"));
        }
    }

    out.push(format!("\n{RULE_LIGHT}"));
    out.push(format!("SAMPLE DATA (First {sample_rows} rows)"));
    out.push(RULE_LIGHT.to_string());
    out.push(format!("\n{}", df.head(Some(sample_rows))));

    out.push(format!("\n{RULE_HEAVY}"));
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_is_reported_as_text() {
        let text = structural_summary("/no/such/file.csv", 5);
        assert_eq!(text, "Error: File not found at path: /no/such/file.csv");
    }

    #[test]
    fn test_unreadable_content_is_reported_as_text() {
        // A zero-byte file defeats every loading strategy.
        let file = write_csv("");
        let text = structural_summary(file.path(), 5);
        assert!(
            text.starts_with("Error reading CSV file:"),
            "unexpected text: {text}"
        );
    }

    #[test]
    fn test_shape_and_columns() {
        let file = write_csv("name,age\nAda,36\nBob,41\n");
        let text = structural_summary(file.path(), 5);
        assert!(text.contains("CSV FILE INFORMATION"));
        assert!(text.contains("Dataset Shape: 2 rows × 2 columns"));
        assert!(text.contains("Total Columns: 2"));
        assert!(text.contains("1. name (str)"));
        assert!(text.contains("2. age (i64)"));
    }

    #[test]
    fn test_no_missing_values_message() {
        let file = write_csv("a,b\n1,x\n2,y\n");
        let text = structural_summary(file.path(), 5);
        assert!(text.contains("No missing values detected."));
        assert!(!text.contains("MISSING VALUES\n"));
    }

    #[test]
    fn test_missing_values_section() {
        let file = write_csv("a,b\n1,\n2,y\n3,\n4,z\n");
        let text = structural_summary(file.path(), 5);
        assert!(text.contains("MISSING VALUES"));
        assert!(text.contains("b: 2 (50.00%)"));
        assert!(!text.contains("No missing values detected."));
    }

    #[test]
    fn test_sample_row_header_respects_count() {
        let file = write_csv("a\n1\n2\n3\n");
        let text = structural_summary(file.path(), 2);
        assert!(text.contains("SAMPLE DATA (First 2 rows)"));
    }
}
