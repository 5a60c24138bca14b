//! Sequential multi-agent pipeline.
//!
//! A [`Crew`] wires four role-playing agents (planner, analyst, modeler,
//! writer) into a fixed sequential process. Each task's prompt carries the
//! outputs of the tasks it depends on; the analyst additionally receives the
//! structural and statistical reports computed locally from the dataset, so
//! the model never has to guess at numbers.

mod agents;
mod tasks;

pub use agents::{data_analyst, modeler, planner, report_writer, AgentKind, AgentSpec};
pub use tasks::{create_tasks, TaskSpec};

use crate::ai::{CompletionRequest, LlmProvider};
use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::summary::{statistical_summary, structural_summary};
use crate::types::CrewReport;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Inputs for a crew run.
#[derive(Debug, Clone)]
pub struct CrewInputs {
    /// Business description or analysis objective.
    pub topic: String,
    /// Path to the CSV dataset.
    pub csv_path: String,
}

/// The sequential analysis crew.
pub struct Crew {
    provider: Arc<dyn LlmProvider>,
    sample_rows: usize,
}

impl Crew {
    /// Create a crew backed by the given provider.
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            sample_rows: AnalysisConfig::default().sample_rows,
        }
    }

    /// Override how many sample rows the analyst sees in the structural
    /// report.
    pub fn with_sample_rows(mut self, sample_rows: usize) -> Self {
        self.sample_rows = sample_rows;
        self
    }

    /// Run all tasks in order and return the collected outputs.
    ///
    /// Task context is wired planning -> analysis -> modeling -> report;
    /// every task sees the outputs of the tasks it depends on. Fails fast on
    /// the first provider error.
    pub fn kickoff(&self, inputs: &CrewInputs) -> Result<CrewReport> {
        if !Path::new(&inputs.csv_path).exists() {
            return Err(AnalysisError::FileNotFound(inputs.csv_path.clone()));
        }

        let agents = [planner(), data_analyst(), modeler(), report_writer()];
        let tasks = create_tasks(&inputs.topic, &inputs.csv_path);

        info!(
            provider = self.provider.name(),
            model = self.provider.model().unwrap_or("unknown"),
            tasks = tasks.len(),
            "starting crew run"
        );

        let mut outputs: Vec<String> = Vec::with_capacity(tasks.len());
        for task in &tasks {
            let agent = agents
                .iter()
                .find(|a| a.kind == task.agent)
                .ok_or_else(|| AnalysisError::LlmClient(format!(
                    "no agent registered for task '{}'",
                    task.name
                )))?;

            let context: Vec<&str> = task
                .context
                .iter()
                .map(|&idx| outputs[idx].as_str())
                .collect();

            // The analyst works from locally computed reports, not from
            // model recall.
            let tool_reports = if task.agent == AgentKind::Analyst {
                vec![
                    structural_summary(&inputs.csv_path, self.sample_rows),
                    statistical_summary(&inputs.csv_path),
                ]
            } else {
                Vec::new()
            };
            let tool_refs: Vec<&str> = tool_reports.iter().map(String::as_str).collect();

            info!(task = task.name, agent = agent.role, "running task");
            let prompt = task.prompt(&context, &tool_refs);
            let output = self
                .provider
                .complete(&CompletionRequest::new(agent.system_prompt(), prompt))
                .map_err(|e| AnalysisError::LlmClient(e.to_string()))?;
            debug!(task = task.name, chars = output.len(), "task complete");

            outputs.push(output);
        }

        let final_report = outputs.last().cloned().unwrap_or_default();
        Ok(CrewReport {
            final_report,
            task_outputs: tasks
                .iter()
                .map(|t| t.name.to_string())
                .zip(outputs)
                .collect(),
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        })
    }
}
