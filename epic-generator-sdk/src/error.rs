use thiserror::Error;

/// Errors raised while turning model output into an artifact tree
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The extracted candidate text was not valid JSON
    #[error("LLM output was not valid JSON: {snippet}...")]
    Decode {
        /// Leading characters of the offending text
        snippet: String,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but does not have the epics/stories/tasks/bugs shape
    #[error("LLM output does not match the artifact schema: {source}")]
    Schema {
        #[source]
        source: serde_json::Error,
    },
}
