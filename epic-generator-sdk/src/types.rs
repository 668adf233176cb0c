//! Data types for generated Agile artifacts.
//!
//! The model is prompted for this shape but nothing forces it to comply, so
//! these types are only used when a caller opts into validation. List fields
//! default to empty and optional text fields to `None`.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Artifact Tree
// ============================================================================

/// Root of a generated document: `{ "epics": [...] }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactTree {
    pub epics: Vec<Epic>,
}

/// Top-level planning unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Epic {
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub stories: Vec<Story>,
}

/// User-facing requirement under an epic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub title: String,

    /// Falls back to the epic description when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub acceptance_criteria: Vec<String>,

    #[serde(default)]
    pub tasks: Vec<Task>,

    #[serde(default)]
    pub bugs: Vec<Bug>,
}

/// Atomic unit of work under a story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Defect record attached to a story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bug {
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub steps_to_reproduce: String,

    #[serde(default)]
    pub severity: Severity,
}

// ============================================================================
// Severity
// ============================================================================

/// Bug severity level
///
/// Known levels match case-insensitively; anything else the model invents is
/// kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
    Critical,
    Other(String),
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
            Severity::Other(s) => s,
        }
    }
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Severity::Low,
            "medium" => Severity::Medium,
            "high" => Severity::High,
            "critical" => Severity::Critical,
            _ => Severity::Other(value),
        }
    }
}

impl From<Severity> for String {
    fn from(value: Severity) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Number of artifacts of each kind in a tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArtifactCounts {
    pub epics: usize,
    pub stories: usize,
    pub tasks: usize,
    pub bugs: usize,
}

impl ArtifactTree {
    pub fn counts(&self) -> ArtifactCounts {
        let mut counts = ArtifactCounts {
            epics: self.epics.len(),
            ..Default::default()
        };
        for story in self.epics.iter().flat_map(|e| &e.stories) {
            counts.stories += 1;
            counts.tasks += story.tasks.len();
            counts.bugs += story.bugs.len();
        }
        counts
    }
}
