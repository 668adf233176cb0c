//! Chat model abstraction and the OpenAI-compatible HTTP client.

use crate::config::ModelConfig;
use crate::error::{GeneratorError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A chat model that turns one prompt into one text reply
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

#[async_trait]
impl<M: ChatModel + ?Sized> ChatModel for Box<M> {
    async fn complete(&self, prompt: &str) -> Result<String> {
        (**self).complete(prompt).await
    }
}

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

// ============================================================================
// OpenAI Client
// ============================================================================

/// Client for `POST {base_url}/chat/completions`
///
/// Sends a single user message per call. No retry, timeout, or backoff is
/// applied: transport errors surface as-is.
pub struct OpenAiChatModel {
    client: reqwest::Client,
    config: ModelConfig,
}

impl OpenAiChatModel {
    pub fn new(config: ModelConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("epic-generator/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }
}

#[async_trait]
impl ChatModel for OpenAiChatModel {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.config.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            return Err(GeneratorError::Api { status, body });
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GeneratorError::MalformedResponse("no choices returned".into()))?
            .message
            .content
            .ok_or_else(|| GeneratorError::MalformedResponse("choice has no content".into()))?;

        tracing::debug!(response_len = content.len(), "Received chat completion");
        Ok(content)
    }
}
