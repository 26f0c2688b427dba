//! Request and response bodies for gateway operations

use serde::{Deserialize, Serialize};

/// Meeting minutes to summarize
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub minutes: String,
    pub title: String,
    pub creator_name: String,
    pub date: String,
}

/// Meeting agenda to summarize
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaRequest {
    /// Agenda body. Older clients send it as `minutes`.
    #[serde(alias = "minutes")]
    pub agenda: String,
    pub title: String,
}

/// Replacement for the active minutes template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptOverride {
    pub custom_prompt: String,
}

/// Model reply, returned verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub message: String,
}

impl Acknowledgement {
    pub const PROMPT_UPDATED: &'static str = "Custom prompt updated successfully.";

    pub fn prompt_updated() -> Self {
        Self {
            message: Self::PROMPT_UPDATED.to_string(),
        }
    }
}
