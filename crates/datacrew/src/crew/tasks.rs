//! Task definitions for the analysis crew.
//!
//! Each task carries a description interpolated with the run inputs, the
//! expected output criteria, the agent that handles it, and the indices of
//! earlier tasks whose outputs feed into its context.

use super::agents::AgentKind;

/// A single unit of work in the sequential pipeline.
#[derive(Debug, Clone)]
pub struct TaskSpec {
    /// Short name used in logs and in [`CrewReport`](crate::types::CrewReport).
    pub name: &'static str,
    pub description: String,
    pub expected_output: String,
    pub agent: AgentKind,
    /// Indices into the task list of earlier tasks this one depends on.
    pub context: Vec<usize>,
}

impl TaskSpec {
    /// Build the user prompt for this task given the outputs of its context
    /// tasks and any extra context blocks (tool reports).
    pub fn prompt(&self, context_outputs: &[&str], extra_context: &[&str]) -> String {
        let mut prompt = self.description.clone();
        prompt.push_str(&format!(
            "\n\nThis is the expected criteria for your final answer:\n{}",
            self.expected_output
        ));

        if !context_outputs.is_empty() || !extra_context.is_empty() {
            prompt.push_str("\n\nThis is the context you're working with:");
            for block in context_outputs.iter().chain(extra_context.iter()) {
                prompt.push_str("\n\n----------\n");
                prompt.push_str(block);
            }
        }

        prompt
    }
}

/// Create the four tasks in execution order: planning, analysis, modeling,
/// report writing.
pub fn create_tasks(topic: &str, csv_path: &str) -> Vec<TaskSpec> {
    let planning = TaskSpec {
        name: "planning",
        description: format!(
            "Based on the business objective: '{topic}', create a comprehensive \
             data science work plan. Your plan should include:\n\
             1. Problem definition and business context\n\
             2. Key questions to answer through analysis\n\
             3. Detailed steps for exploratory data analysis (EDA)\n\
             4. Considerations for data quality and preprocessing\n\
             5. Potential modeling approaches to consider\n\
             6. Success criteria and evaluation approach\n\
             7. Timeline and milestones\n\n\
             The plan should be actionable and guide the entire analysis process. \
             Consider the dataset located at: {csv_path}\n\n\
             Be thorough but concise. Focus on what's important for this specific project."
        ),
        expected_output: "A detailed, structured work plan document (500-800 words) organized with clear sections:\n\
             - Project Overview and Objectives\n\
             - Key Business Questions\n\
             - Exploratory Data Analysis Steps\n\
             - Data Quality Considerations\n\
             - Modeling Strategy\n\
             - Evaluation Criteria\n\
             - Project Timeline\n\n\
             The plan should be specific to the business objective and provide clear guidance \
             for subsequent analysis and modeling tasks."
            .to_string(),
        agent: AgentKind::Planner,
        context: vec![],
    };

    let analysis = TaskSpec {
        name: "analysis",
        description: format!(
            "Perform comprehensive exploratory data analysis on the dataset at: {csv_path}\n\n\
             Follow the work plan from the Project Planner. Use the attached dataset \
             reports to:\n\
             1. Read and understand the dataset structure (columns, data types, shape)\n\
             2. Compute detailed statistical summaries for all features\n\
             3. Identify data quality issues (missing values, outliers, duplicates)\n\
             4. Analyze distributions of key variables\n\
             5. Identify potential relationships and patterns\n\
             6. Highlight important features for modeling\n\n\
             Your analysis should be thorough and data-driven, grounded in the structural \
             and statistical reports included in your context. Focus on findings that are \
             relevant to the business objective: {topic}\n\n\
             Provide both statistical rigor and practical insights."
        ),
        expected_output: "A comprehensive EDA report (800-1200 words) structured as:\n\
             - Dataset Overview (shape, features, types)\n\
             - Statistical Summary (descriptive statistics for all features)\n\
             - Data Quality Assessment (missing values, outliers, anomalies)\n\
             - Distribution Analysis (key patterns and characteristics)\n\
             - Feature Insights (important variables and relationships)\n\
             - Recommendations for preprocessing and modeling\n\n\
             The report should be detailed, data-driven, and include specific numbers \
             and percentages from the actual dataset analysis."
            .to_string(),
        agent: AgentKind::Analyst,
        context: vec![0],
    };

    let modeling = TaskSpec {
        name: "modeling",
        description: format!(
            "Based on the business objective '{topic}' and the EDA findings, propose \
             2-3 appropriate baseline machine learning models.\n\n\
             Your recommendations should:\n\
             1. Identify the problem type (classification, regression, clustering, etc.)\n\
             2. Propose 2-3 suitable baseline models with clear rationale\n\
             3. Explain why each model is appropriate for this specific problem\n\
             4. Define comprehensive evaluation metrics for the problem type\n\
             5. Discuss expected model performance and limitations\n\
             6. Provide implementation considerations\n\n\
             Focus on simple, interpretable baseline models that can be implemented quickly \
             and serve as benchmarks. Consider the data characteristics revealed in the EDA."
        ),
        expected_output: "A structured modeling recommendation document (600-900 words) containing:\n\
             - Problem Type Classification (with justification)\n\
             - Baseline Model Recommendations (2-3 models):\n\
               * Model name and type\n\
               * Why it's appropriate for this problem\n\
               * Key hyperparameters to consider\n\
               * Strengths and limitations\n\
             - Evaluation Metrics:\n\
               * Primary metrics (with definitions)\n\
               * Secondary metrics\n\
               * Rationale for metric selection\n\
             - Implementation Considerations\n\
             - Expected Performance Range\n\n\
             Provide clear, actionable recommendations grounded in ML best practices."
            .to_string(),
        agent: AgentKind::Modeler,
        context: vec![0, 1],
    };

    let report = TaskSpec {
        name: "report",
        description: format!(
            "Compile all findings into a comprehensive, professional technical report.\n\n\
             Synthesize the work plan, EDA findings, and modeling recommendations into \
             a cohesive narrative. The report should:\n\
             1. Start with an executive summary\n\
             2. Provide clear introduction with business context\n\
             3. Present EDA findings in an organized, accessible manner\n\
             4. Explain proposed models and evaluation approach\n\
             5. Include discussion of key insights and implications\n\
             6. Conclude with actionable recommendations\n\n\
             Business objective: {topic}\n\
             Dataset: {csv_path}\n\n\
             Use proper Markdown formatting with clear headings, bullet points, \
             and logical flow. Make the report accessible to both technical and \
             business audiences. Ensure all sections are well-connected and tell \
             a coherent story from problem to solution."
        ),
        expected_output: "A complete, well-formatted technical report in Markdown (1500-2500 words) with:\n\n\
             # Executive Summary\n\
             - Brief overview of objectives, approach, and key findings (150-200 words)\n\n\
             # 1. Introduction\n\
             - Business context and objectives\n\
             - Dataset description\n\
             - Analysis approach\n\n\
             # 2. Exploratory Data Analysis\n\
             - Dataset overview and statistics\n\
             - Data quality assessment\n\
             - Key patterns and insights\n\
             - Feature analysis\n\n\
             # 3. Baseline Models and Evaluation\n\
             - Problem formulation\n\
             - Proposed baseline models (2-3)\n\
             - Evaluation metrics and rationale\n\
             - Implementation considerations\n\n\
             # 4. Discussion and Insights\n\
             - Key findings from analysis\n\
             - Modeling implications\n\
             - Limitations and challenges\n\n\
             # 5. Conclusions and Recommendations\n\
             - Summary of main findings\n\
             - Actionable next steps\n\
             - Expected business impact\n\n\
             The report should be professional, well-organized, and ready for stakeholder review."
            .to_string(),
        agent: AgentKind::Writer,
        context: vec![0, 1, 2],
    };

    vec![planning, analysis, modeling, report]
}
