//! Prompt template for epic generation

use crate::error::{GeneratorError, Result};
use std::path::Path;

/// Placeholder substituted with the project description
pub const DESCRIPTION_PLACEHOLDER: &str = "{description}";

/// Built-in instructions describing the epics > stories > tasks > bugs shape
///
/// The example bug's `steps_to_reproduce` uses `\n` escapes rather than raw
/// line breaks so the example block is itself valid JSON.
pub const EPIC_TEMPLATE: &str = r#"
As a project manager, convert this project description into Agile artifacts following a structure similar to Jira (Epics > Stories > Tasks > Bugs).
{description}

Output format (JSON only, no other text or markdown):
{
  "epics": [
    {
      "title": "Epic title",
      "description": "Epic description",
      "stories": [
        {
          "title": "User story title",
          "acceptance_criteria": ["Criteria 1", "Criteria 2"],
          "tasks": [
            { "title": "Task 1 for story" },
            { "title": "Task 2 for story" }
          ],
          "bugs": [
            { "title": "Potential bug related to this story", "description": "Description of the bug...", "steps_to_reproduce": "1. Do X\n2. Do Y\n3. See error Z", "severity": "Medium" }
          ]
        }
      ]
    }
  ]
}
"#;

/// Prompt template with a single `{description}` placeholder
#[derive(Debug, Clone, PartialEq)]
pub struct PromptTemplate {
    text: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            text: EPIC_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplate {
    /// Create a template, rejecting text without the description placeholder
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if !text.contains(DESCRIPTION_PLACEHOLDER) {
            return Err(GeneratorError::Template(format!(
                "template must contain the {} placeholder",
                DESCRIPTION_PLACEHOLDER
            )));
        }
        Ok(Self { text })
    }

    /// Load a template from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            GeneratorError::Template(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::new(text)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Substitute the description verbatim
    pub fn render(&self, description: &str) -> String {
        self.text.replace(DESCRIPTION_PLACEHOLDER, description)
    }
}
