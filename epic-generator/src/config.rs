//! Configuration for the chat model and the generation pipeline.
//!
//! Nothing here is read lazily from the environment: `ModelConfig::from_env`
//! is called once at startup and the result is passed explicitly to the
//! model client.

use crate::error::{GeneratorError, Result};
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL: &str = "gpt-4-turbo";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 2048;
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Env file loaded before reading variables, relative to the working directory
pub const DEFAULT_ENV_FILE: &str = "../.env";

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";

/// Settings for an OpenAI-compatible chat completion endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl ModelConfig {
    /// Create a config with the default model, temperature and token limit
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Build from `OPENAI_API_KEY` and optional `OPENAI_BASE_URL`
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(GeneratorError::MissingApiKey)?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var(BASE_URL_VAR) {
            if !base_url.trim().is_empty() {
                config.base_url = base_url;
            }
        }
        Ok(config)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Full URL of the chat completions endpoint
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// Load variables from an env file if it exists
///
/// Variables already present in the process environment are left alone.
/// Returns the path that was loaded, if any. Runs before the log subscriber
/// is installed, so load failures are printed to stderr directly.
pub fn load_env_file(path: Option<&Path>) -> Option<PathBuf> {
    let path = path
        .map(Path::to_path_buf)
        .or_else(|| {
            std::env::current_dir()
                .ok()
                .map(|dir| dir.join(DEFAULT_ENV_FILE))
        })?;

    if !path.exists() {
        return None;
    }

    match dotenv::from_path(&path) {
        Ok(()) => Some(path),
        Err(e) => {
            eprintln!("Warning: failed to load env file {}: {}", path.display(), e);
            None
        }
    }
}
