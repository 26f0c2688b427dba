//! Gateway operations

use std::sync::Arc;
use tracing::{debug, error, info};

use crate::config::Settings;
use crate::gateway::models::{
    Acknowledgement, AgendaRequest, PromptOverride, SummaryRequest, SummaryResult,
};
use crate::gateway::state::{new_shared_state, PromptState, SharedState};
use crate::llm::prompts::{build_agenda_prompt, build_minutes_prompt};
use crate::llm::{build_provider, LlmProvider};
use crate::{GatewayError, Result};

/// Summarization gateway shared by every request handler
#[derive(Clone)]
pub struct Gateway {
    provider: Arc<dyn LlmProvider>,
    state: SharedState,
}

impl Gateway {
    pub fn new(provider: Arc<dyn LlmProvider>, state: PromptState) -> Self {
        Self {
            provider,
            state: new_shared_state(state),
        }
    }

    /// Build a gateway with the configured provider and starting template.
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let provider = build_provider(settings)?;

        let template = settings.prompts.default_template.trim();
        let state = if template.is_empty() {
            PromptState::default()
        } else {
            PromptState::new(template)
        };

        Ok(Self::new(provider, state))
    }

    /// Summarize meeting minutes using the active template.
    pub async fn summarize_meeting(&self, request: &SummaryRequest) -> Result<SummaryResult> {
        // Snapshot so the lock is not held across the upstream call.
        let template = self.state.read().await.active_template.clone();

        let prompt = build_minutes_prompt(
            &template,
            &request.title,
            &request.creator_name,
            &request.date,
            &request.minutes,
        );

        self.complete_and_record(prompt).await
    }

    /// Summarize an agenda using the fixed agenda template.
    pub async fn summarize_agenda(&self, request: &AgendaRequest) -> Result<SummaryResult> {
        let prompt = build_agenda_prompt(&request.title, &request.agenda);
        self.complete_and_record(prompt).await
    }

    /// Resend the most recently composed prompt.
    pub async fn retry_summary(&self) -> Result<SummaryResult> {
        let prompt = self
            .state
            .read()
            .await
            .last_prompt
            .clone()
            .ok_or(GatewayError::NoPreviousPrompt)?;

        debug!(prompt_len = prompt.len(), "Retrying last prompt");
        self.complete(&prompt).await
    }

    /// Replace the active minutes template.
    pub async fn set_custom_prompt(&self, request: PromptOverride) -> Result<Acknowledgement> {
        let mut state = self.state.write().await;
        state.active_template = request.custom_prompt;
        info!(
            template_len = state.active_template.len(),
            "Custom prompt updated"
        );

        Ok(Acknowledgement::prompt_updated())
    }

    /// Current minutes template
    pub async fn active_prompt(&self) -> String {
        self.state.read().await.active_template.clone()
    }

    /// Prompt that a retry would resend, if any
    pub async fn last_prompt(&self) -> Option<String> {
        self.state.read().await.last_prompt.clone()
    }

    async fn complete_and_record(&self, prompt: String) -> Result<SummaryResult> {
        debug!(prompt_len = prompt.len(), "Sending prompt upstream");
        let result = self.complete(&prompt).await?;

        self.state.write().await.last_prompt = Some(prompt);
        Ok(result)
    }

    async fn complete(&self, prompt: &str) -> Result<SummaryResult> {
        let summary = self
            .provider
            .complete(prompt)
            .await
            .map_err(GatewayError::upstream)
            .inspect_err(|e| error!(error = %e, "Summary generation failed"))?;

        Ok(SummaryResult { summary })
    }
}
