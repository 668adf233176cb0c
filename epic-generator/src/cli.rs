//! CLI argument definitions for the epic generator.

use crate::config::ModelConfig;
use crate::error::Result;
use crate::prompt::PromptTemplate;
use clap::Parser;
use std::path::PathBuf;

/// Description used when none is passed on the command line
pub const DEFAULT_DESCRIPTION: &str = "A default project description if no argument is passed.";

/// Convert a project description into Agile artifacts (epics > stories > tasks > bugs)
///
/// Prints exactly one pretty-printed JSON document to stdout. Diagnostics go
/// to stderr.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "epic-generator")]
#[command(version)]
pub struct Args {
    /// Free-text project description
    #[arg(value_name = "DESCRIPTION")]
    pub description: Option<String>,

    /// Chat model to use
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Sampling temperature
    #[arg(long, value_name = "TEMP")]
    pub temperature: Option<f32>,

    /// Maximum number of output tokens
    #[arg(long, value_name = "N")]
    pub max_tokens: Option<u32>,

    /// Base URL of an OpenAI-compatible API (overrides OPENAI_BASE_URL)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Env file to load before reading OPENAI_API_KEY
    ///
    /// Defaults to ../.env relative to the working directory.
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Custom prompt template file
    ///
    /// Must contain a {description} placeholder.
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Fail unless the output matches the epics/stories/tasks/bugs shape
    #[arg(long)]
    pub validate: bool,

    /// Enable debug logging on stderr
    #[arg(long, short)]
    pub verbose: bool,
}

impl Args {
    /// The description to generate for, or the placeholder if none was given
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
    }

    /// Apply command-line overrides on top of an environment-derived config
    pub fn apply_overrides(&self, mut config: ModelConfig) -> ModelConfig {
        if let Some(model) = &self.model {
            config = config.with_model(model.clone());
        }
        if let Some(temperature) = self.temperature {
            config = config.with_temperature(temperature);
        }
        if let Some(max_tokens) = self.max_tokens {
            config = config.with_max_tokens(max_tokens);
        }
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.clone());
        }
        config
    }

    /// Load the custom template if one was given, else the built-in one
    pub fn prompt_template(&self) -> Result<PromptTemplate> {
        match &self.template {
            Some(path) => PromptTemplate::from_file(path),
            None => Ok(PromptTemplate::default()),
        }
    }
}
