//! Agile artifact types and decoding of LLM responses into them.
//!
//! This crate has no network dependencies. It covers the part of epic
//! generation that runs after the model has replied:
//!
//! - `types` - Typed epic/story/task/bug tree
//! - `json` - JSON-region extraction, decoding, and optional validation
//! - `error` - Decode and validation errors

pub mod error;
pub mod json;
pub mod types;

pub use error::ArtifactError;
pub use json::{
    balanced_objects, decode_response, extract_json, legacy_brace_span, parse_artifacts,
    snippet, validate_artifacts, SNIPPET_LEN,
};
pub use types::{ArtifactCounts, ArtifactTree, Bug, Epic, Severity, Story, Task};
