use epic_generator_sdk::ArtifactError;
use thiserror::Error;

/// Errors raised while generating artifacts from a project description
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("OPENAI_API_KEY is not set (export it or add it to the env file)")]
    MissingApiKey,

    #[error("Chat completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Chat completion API error {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Chat completion response was malformed: {0}")]
    MalformedResponse(String),

    #[error("Invalid prompt template: {0}")]
    Template(String),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
