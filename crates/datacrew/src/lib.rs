//! Multi-Agent Data Analysis Library
//!
//! Turns a business question and a CSV file into a Markdown technical report
//! by running four role-playing LLM agents in sequence: planner, analyst,
//! modeler, and report writer.
//!
//! # Overview
//!
//! The library has two halves:
//!
//! - **Dataset summaries**: deterministic, locally computed reports about a
//!   CSV file. [`summary::structural_summary`] describes shape, columns, and
//!   sample rows; [`summary::statistical_summary`] covers descriptive
//!   statistics, frequencies, missing data, and quality flags. Both are
//!   text-in/text-out and never fail; errors come back as readable text.
//! - **The crew**: a fixed sequential pipeline ([`crew::Crew`]) that prompts
//!   an LLM once per task, feeding each task the outputs of its
//!   predecessors. The analyst task additionally receives the two dataset
//!   summaries, so every number in the final report comes from local
//!   computation rather than model recall.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use datacrew::ai::OpenAiProvider;
//! use datacrew::crew::{Crew, CrewInputs};
//! use std::sync::Arc;
//!
//! let provider = Arc::new(OpenAiProvider::new(api_key)?);
//! let crew = Crew::new(provider);
//!
//! let report = crew.kickoff(&CrewInputs {
//!     topic: "Which customers are likely to churn?".to_string(),
//!     csv_path: "customers.csv".to_string(),
//! })?;
//!
//! std::fs::write("report_final.md", &report.final_report)?;
//! ```
//!
//! # Structured access
//!
//! The text summaries are projections of a structured profile. Callers that
//! want numbers instead of prose can profile directly:
//!
//! ```rust,ignore
//! use datacrew::{load_table, TableProfiler};
//!
//! let df = load_table("customers.csv")?;
//! let profile = TableProfiler::profile(&df)?;
//! println!("{} rows, {} duplicates", profile.rows(), profile.duplicate_count);
//! ```
//!
//! # LLM Providers
//!
//! Backends implement the [`ai::LlmProvider`] trait. Shipped providers
//! (behind the default `ai` feature): [`ai::OpenAiProvider`],
//! [`ai::OllamaProvider`], and [`ai::GeminiProvider`].

pub mod ai;
pub mod config;
pub mod crew;
pub mod error;
pub mod loader;
pub mod profiler;
pub mod quality;
pub mod summary;
pub mod types;

// Re-exports for convenient access
pub use config::{AnalysisConfig, AnalysisConfigBuilder, ConfigValidationError};
pub use crew::{Crew, CrewInputs};
pub use error::{AnalysisError, Result as AnalysisResult, ResultExt};
pub use loader::load_table;
pub use profiler::TableProfiler;
pub use quality::QualityAnalyzer;
pub use summary::{statistical_summary, structural_summary};
pub use types::{
    CategoricalStats, ColumnKind, ColumnProfile, ColumnStats, CrewReport, NumericStats,
    QualityFlag, TableProfile, ValueCount,
};
