//! CLI entry point for the multi-agent analysis crew.

use anyhow::{anyhow, Result};
use clap::Parser;
use datacrew::ai::{
    GeminiConfig, GeminiProvider, LlmProvider, OllamaConfig, OllamaProvider, OpenAiConfig,
    OpenAiProvider,
};
use datacrew::crew::{Crew, CrewInputs};
use datacrew::{statistical_summary, structural_summary};
use dotenv::dotenv;
use std::env;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Multi-Agent Data Science Analysis System",
    long_about = "Runs a sequential crew of four LLM agents (planner, analyst, modeler, \
                  writer) over a CSV dataset and writes a Markdown technical report.\n\n\
                  ENVIRONMENT VARIABLES:\n  \
                  OPENAI_API_KEY     API key for OpenAI (default backend)\n  \
                  OPENAI_MODEL       Model override for OpenAI (default: gpt-4o-mini)\n  \
                  USE_OLLAMA         Set to 'true' to use a local Ollama daemon\n  \
                  OLLAMA_MODEL       Ollama model name (default: llama2)\n  \
                  OLLAMA_BASE_URL    Ollama daemon URL (default: http://localhost:11434)\n  \
                  USE_GEMINI         Set to 'true' to use Google Gemini\n  \
                  GEMINI_API_KEY     API key for Gemini\n\n\
                  EXAMPLES:\n  \
                  # Full analysis run\n  \
                  datacrew --topic \"Why do customers churn?\" --csv customers.csv\n\n  \
                  # Preview the dataset reports without calling any LLM\n  \
                  datacrew --topic \"churn\" --csv customers.csv --dry-run"
)]
struct Args {
    /// Business description or analysis objective
    #[arg(short, long)]
    topic: String,

    /// Path to the CSV dataset file
    #[arg(short, long)]
    csv: String,

    /// Output filename for the final report
    #[arg(short, long, default_value = "report_final.md")]
    output: String,

    /// Number of sample rows shown in the structural report
    #[arg(long, default_value = "5")]
    sample_rows: usize,

    /// Print the dataset reports and exit without calling any LLM
    #[arg(long)]
    dry_run: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show warnings and errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Initialize the tracing subscriber for logging.
fn init_logging(level: &str, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Select an LLM backend from the environment.
///
/// Precedence follows the env switches: `USE_OLLAMA`, then `USE_GEMINI`,
/// then `OPENAI_API_KEY`.
fn provider_from_env() -> Result<Arc<dyn LlmProvider>> {
    let flag = |name: &str| {
        env::var(name)
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };

    if flag("USE_OLLAMA") {
        let mut config = OllamaConfig::builder();
        if let Ok(model) = env::var("OLLAMA_MODEL") {
            config = config.model(model);
        }
        if let Ok(base_url) = env::var("OLLAMA_BASE_URL") {
            config = config.base_url(base_url);
        }
        return Ok(Arc::new(OllamaProvider::with_config(config.build())?));
    }

    if flag("USE_GEMINI") {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| anyhow!("USE_GEMINI is set but GEMINI_API_KEY is missing"))?;
        let mut config = GeminiConfig::builder();
        if let Ok(model) = env::var("GEMINI_MODEL") {
            config = config.model(model);
        }
        return Ok(Arc::new(GeminiProvider::with_config(api_key, config.build())?));
    }

    if let Ok(api_key) = env::var("OPENAI_API_KEY") {
        let mut config = OpenAiConfig::builder();
        if let Ok(model) = env::var("OPENAI_MODEL") {
            config = config.model(model);
        }
        return Ok(Arc::new(OpenAiProvider::with_config(api_key, config.build())?));
    }

    Err(anyhow!(
        "No LLM configured. Set one of:\n  \
         OPENAI_API_KEY=sk-...          (OpenAI)\n  \
         USE_OLLAMA=true                (local Ollama; also OLLAMA_MODEL, OLLAMA_BASE_URL)\n  \
         USE_GEMINI=true GEMINI_API_KEY=... (Google Gemini)\n\
         These can also go in a .env file next to the binary."
    ))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load the .env file first so RUST_LOG set there reaches the log filter
    dotenv().ok();

    init_logging(&args.log_level, args.quiet);

    if !Path::new(&args.csv).exists() {
        return Err(anyhow!("CSV file not found: {}", args.csv));
    }
    let csv_path = std::fs::canonicalize(&args.csv)?
        .display()
        .to_string();

    info!("Business objective: {}", args.topic);
    info!("Dataset: {}", csv_path);

    // Dry-run prints the locally computed reports and skips the LLM entirely
    if args.dry_run {
        println!("{}", structural_summary(&csv_path, args.sample_rows));
        println!();
        println!("{}", statistical_summary(&csv_path));
        return Ok(());
    }

    let provider = provider_from_env()?;
    info!(
        "Using {} backend (model: {})",
        provider.name(),
        provider.model().unwrap_or("default")
    );

    let crew = Crew::new(provider).with_sample_rows(args.sample_rows);
    let report = crew.kickoff(&CrewInputs {
        topic: args.topic.clone(),
        csv_path,
    })?;

    report.write_to(&args.output)?;
    let size = std::fs::metadata(&args.output)?.len();
    info!("Final report saved to: {} ({} bytes)", args.output, size);

    Ok(())
}
