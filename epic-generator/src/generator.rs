//! Epic generation pipeline.
//!
//! Runs strictly in sequence, once per call:
//!
//! 1. Render the prompt template with the project description
//! 2. Send it to the chat model
//! 3. Extract the JSON region from the reply
//! 4. Parse it (and optionally validate the artifact shape)

use crate::error::Result;
use crate::model::ChatModel;
use crate::prompt::PromptTemplate;
use epic_generator_sdk::{decode_response, validate_artifacts};
use serde_json::Value;

/// Turns project descriptions into artifact trees using a chat model
pub struct EpicGenerator<M> {
    model: M,
    template: PromptTemplate,
    validate: bool,
}

impl<M: ChatModel> EpicGenerator<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            template: PromptTemplate::default(),
            validate: false,
        }
    }

    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    /// Require the parsed document to have the epics/stories/tasks/bugs shape
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    /// Generate epics, stories, tasks and bugs for a project description
    ///
    /// Returns the parsed JSON document exactly as the model produced it.
    /// Fails rather than returning partial or placeholder data.
    pub async fn generate_epics(&self, description: &str) -> Result<Value> {
        let prompt = self.template.render(description);
        let raw_output = self.model.complete(&prompt).await?;

        let artifacts = decode_response(&raw_output)?;

        if self.validate {
            let counts = validate_artifacts(&artifacts)?.counts();
            tracing::info!(
                epics = counts.epics,
                stories = counts.stories,
                tasks = counts.tasks,
                bugs = counts.bugs,
                "Validated generated artifacts"
            );
        }

        Ok(artifacts)
    }
}

/// Generate artifacts with the default template and no validation
pub async fn generate_epics<M: ChatModel>(model: M, description: &str) -> Result<Value> {
    EpicGenerator::new(model).generate_epics(description).await
}
