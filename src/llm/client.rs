use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::config::Settings;
use crate::llm::openai::OpenAiCompatClient;

/// A chat-completion backend that turns a composed prompt into reply text.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Build an LLM provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Arc<dyn LlmProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "deepseek" | "openai" => Ok(Arc::new(OpenAiCompatClient::from_settings(settings)?)),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: deepseek, openai",
            other
        ),
    }
}
