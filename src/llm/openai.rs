use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Settings;
use crate::llm::client::LlmProvider;
use crate::llm::prompts::SYSTEM_INSTRUCTION;

const DEEPSEEK_ENDPOINT: &str = "https://api.deepseek.com";
const OPENAI_ENDPOINT: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "deepseek-chat";

/// Client for any API speaking the OpenAI chat-completions protocol.
pub struct OpenAiCompatClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl OpenAiCompatClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            http: Client::builder()
                .timeout(timeout)
                .build()
                .context("Failed to build chat-completion HTTP client")?,
            api_key: api_key.into(),
            model: model.into(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.require_api_key()?.to_string();

        let model = if settings.llm.model.trim().is_empty() {
            DEFAULT_MODEL
        } else {
            settings.llm.model.trim()
        };

        let endpoint = match settings.llm.endpoint.trim() {
            "" if settings.llm.provider.eq_ignore_ascii_case("openai") => OPENAI_ENDPOINT,
            "" => DEEPSEEK_ENDPOINT,
            custom => custom,
        };

        Self::new(
            api_key,
            model,
            endpoint,
            Duration::from_secs(settings.llm.timeout_secs),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_INSTRUCTION,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            stream: false,
        };

        let response = self
            .http
            .post(self.request_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Chat-completion request failed"))
            .context("Chat-completion request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            anyhow::bail!("API error: {} - {}", status, message.trim());
        }

        let payload: ChatCompletionResponse = response
            .json()
            .await
            .context("Failed to parse chat-completion response")?;

        payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .context("Chat-completion response did not contain summary text")
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}
