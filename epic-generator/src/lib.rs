//! Generate Agile planning artifacts from a project description.
//!
//! ## Module Structure
//!
//! - `cli` - Command-line argument definitions
//! - `config` - Model settings and env file loading
//! - `prompt` - Prompt template
//! - `model` - Chat model trait and OpenAI-compatible client
//! - `generator` - Prompt → model → extract → parse pipeline
//! - `logging` - stderr tracing subscriber

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod model;
pub mod prompt;

pub use error::{GeneratorError, Result};
pub use generator::{generate_epics, EpicGenerator};
pub use model::{ChatModel, OpenAiChatModel};

// Re-export the artifact types for convenience
pub use epic_generator_sdk;

use anyhow::Context;
use std::io::Write;

/// Run the CLI: build config, generate artifacts, write pretty JSON to `out`
///
/// Expects the env file to be loaded already. Nothing is written to `out`
/// unless generation succeeds.
pub async fn run<W: Write>(args: cli::Args, out: &mut W) -> anyhow::Result<()> {
    let model_config = args.apply_overrides(config::ModelConfig::from_env()?);
    let template = args
        .prompt_template()
        .context("Failed to load prompt template")?;

    let model = OpenAiChatModel::new(model_config)?;
    let generator = EpicGenerator::new(model)
        .with_template(template)
        .with_validation(args.validate);

    let artifacts = generator.generate_epics(args.description()).await?;

    let json = serde_json::to_string_pretty(&artifacts)?;
    writeln!(out, "{}", json)?;
    out.flush()?;
    Ok(())
}
