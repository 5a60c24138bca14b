//! Integration tests for the analysis crew.
//!
//! These tests verify end-to-end behavior using fixture datasets: profiling,
//! text summary rendering, and the sequential crew pipeline with a scripted
//! provider.

use datacrew::ai::{CompletionRequest, LlmProvider};
use datacrew::crew::{Crew, CrewInputs};
use datacrew::summary::render_statistics;
use datacrew::{
    load_table, statistical_summary, structural_summary, AnalysisConfig, ColumnKind,
    QualityAnalyzer, QualityFlag, TableProfiler,
};
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn fixture(filename: &str) -> String {
    fixtures_path().join(filename).display().to_string()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// Profiling
// ============================================================================

#[test]
fn test_profile_customers_shape_and_kinds() {
    let df = load_table(fixture("customers.csv")).unwrap();
    let profile = TableProfiler::profile(&df).unwrap();

    assert_eq!(profile.shape, (8, 6));
    assert_eq!(profile.column("age").unwrap().kind, ColumnKind::Numeric);
    assert_eq!(
        profile.column("monthly_spend").unwrap().kind,
        ColumnKind::Numeric
    );
    assert_eq!(profile.column("city").unwrap().kind, ColumnKind::Categorical);
    assert_eq!(
        profile.column("customer_id").unwrap().kind,
        ColumnKind::Categorical
    );
}

#[test]
fn test_profile_customers_missing_and_duplicates() {
    let df = load_table(fixture("customers.csv")).unwrap();
    let profile = TableProfiler::profile(&df).unwrap();

    // age has 1 missing, monthly_spend 2, notes 7
    assert_eq!(profile.column("age").unwrap().missing_count, 1);
    assert_eq!(profile.column("monthly_spend").unwrap().missing_count, 2);
    assert_eq!(profile.column("notes").unwrap().missing_count, 7);
    assert_eq!(profile.total_missing, 10);
    assert_eq!(profile.total_cells, 48);

    // The C005 row appears twice; the pair counts once
    assert_eq!(profile.duplicate_count, 1);
    assert_close(profile.duplicate_percentage, 12.5);
}

#[test]
fn test_numeric_statistics_match_reference_values() {
    let df = load_table(fixture("ages.csv")).unwrap();
    let profile = TableProfiler::profile(&df).unwrap();
    let stats = profile.column("age").unwrap().numeric_stats().unwrap();

    assert_close(stats.mean, 31.6667);
    assert_close(stats.median, 30.0);
    assert_close(stats.min, 25.0);
    assert_close(stats.max, 40.0);
    assert_close(stats.q1, 27.5);
    assert_close(stats.q3, 35.0);
    assert_close(stats.std_dev, 7.6376);
    assert_eq!(stats.outlier_count, 0);
}

#[test]
fn test_outlier_detection_with_tukey_fences() {
    let df = load_table(fixture("outliers.csv")).unwrap();
    let profile = TableProfiler::profile(&df).unwrap();
    let stats = profile.column("value").unwrap().numeric_stats().unwrap();

    // q1=2, q3=4, IQR=2, fences [-1, 7]: only 100 is outside
    assert_eq!(stats.outlier_count, 1);
}

#[test]
fn test_categorical_frequencies_in_first_encounter_tie_order() {
    let df = load_table(fixture("customers.csv")).unwrap();
    let profile = TableProfiler::profile(&df).unwrap();
    let stats = profile
        .column("city")
        .unwrap()
        .categorical_stats()
        .unwrap();

    assert_eq!(stats.top_values[0].value, "berlin");
    assert_eq!(stats.top_values[0].count, 5);
    assert_eq!(stats.top_values[1].value, "munich");
    assert_eq!(stats.top_values[1].count, 2);
    assert_eq!(stats.top_values[2].value, "hamburg");
    assert_eq!(stats.top_values[2].count, 1);
}

#[test]
fn test_quality_flags_for_customers() {
    let df = load_table(fixture("customers.csv")).unwrap();
    let config = AnalysisConfig::default();
    let profile = TableProfiler::profile_with_config(&df, &config).unwrap();
    let flags = QualityAnalyzer::identify_flags(&profile, &config);

    assert!(flags
        .iter()
        .any(|f| matches!(f, QualityFlag::DuplicateRows { count: 1, .. })));
    assert!(flags.iter().any(
        |f| matches!(f, QualityFlag::ConstantColumn { column } if column == "plan")
    ));
    assert!(flags.iter().any(
        |f| matches!(f, QualityFlag::HighMissingColumn { column, .. } if column == "notes")
    ));

    // customer_id has 7 distinct values over 8 rows
    assert!(
        profile
            .column("customer_id")
            .unwrap()
            .categorical_stats()
            .unwrap()
            .high_cardinality
    );
}

// ============================================================================
// Text Summaries
// ============================================================================

#[test]
fn test_structural_summary_content() {
    let text = structural_summary(fixture("customers.csv"), 5);

    assert!(text.contains("CSV FILE INFORMATION"));
    assert!(text.contains("Dataset Shape: 8 rows × 6 columns"));
    assert!(text.contains("Total Columns: 6"));
    assert!(text.contains("MISSING VALUES"));
    assert!(text.contains("notes: 7 (87.50%)"));
    assert!(text.contains("SAMPLE DATA (First 5 rows)"));
}

#[test]
fn test_statistical_summary_content() {
    let text = statistical_summary(fixture("customers.csv"));

    assert!(text.contains("STATISTICAL ANALYSIS"));
    assert!(text.contains("Total Records: 8"));
    assert!(text.contains("Total Features: 6"));
    assert!(text.contains("Numeric Columns: 2"));
    assert!(text.contains("Categorical Columns: 4"));
    assert!(text.contains("NUMERICAL FEATURES STATISTICS"));
    assert!(text.contains("CATEGORICAL FEATURES STATISTICS"));
    assert!(text.contains("High cardinality detected"));
    assert!(text.contains("Found 1 duplicate rows (12.50%)"));
    assert!(text.contains("Constant columns (single value): plan"));
    assert!(text.contains("Columns with >50% missing values: notes"));
}

#[test]
fn test_summaries_never_fail_on_missing_file() {
    let structural = structural_summary("/nope/missing.csv", 5);
    let statistical = statistical_summary("/nope/missing.csv");

    assert_eq!(structural, "Error: File not found at path: /nope/missing.csv");
    assert_eq!(statistical, "Error: File not found at path: /nope/missing.csv");
}

#[test]
fn test_statistical_summary_is_a_projection_of_the_profile() {
    let path = fixture("customers.csv");
    let config = AnalysisConfig::default();
    let df = load_table(&path).unwrap();
    let profile = TableProfiler::profile_with_config(&df, &config).unwrap();
    let flags = QualityAnalyzer::identify_flags(&profile, &config);

    let rendered = render_statistics(&path, &profile, &flags);
    assert_eq!(statistical_summary(&path), rendered);
}

// ============================================================================
// Crew Pipeline
// ============================================================================

/// Returns a fixed answer per task and records every prompt.
struct ScriptedProvider {
    prompts: Mutex<Vec<String>>,
}

impl LlmProvider for ScriptedProvider {
    fn complete(&self, request: &CompletionRequest) -> anyhow::Result<String> {
        let mut prompts = self.prompts.lock().unwrap();
        prompts.push(request.prompt.clone());
        Ok(format!("task {} answer", prompts.len()))
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

#[test]
fn test_crew_end_to_end_with_scripted_provider() {
    let provider = Arc::new(ScriptedProvider {
        prompts: Mutex::new(Vec::new()),
    });
    let crew = Crew::new(provider.clone());

    let report = crew
        .kickoff(&CrewInputs {
            topic: "Which customers are likely to churn?".to_string(),
            csv_path: fixture("customers.csv"),
        })
        .unwrap();

    assert_eq!(report.task_outputs.len(), 4);
    assert_eq!(report.final_report, "task 4 answer");
    assert!(!report.generated_at.is_empty());

    let prompts = provider.prompts.lock().unwrap();
    // Planning prompt carries the topic
    assert!(prompts[0].contains("Which customers are likely to churn?"));
    // The analyst gets the locally computed dataset reports
    assert!(prompts[1].contains("CSV FILE INFORMATION"));
    assert!(prompts[1].contains("STATISTICAL ANALYSIS"));
    assert!(prompts[1].contains("Total Records: 8"));
    // The writer sees all three earlier outputs
    assert!(prompts[3].contains("task 1 answer"));
    assert!(prompts[3].contains("task 2 answer"));
    assert!(prompts[3].contains("task 3 answer"));
}
