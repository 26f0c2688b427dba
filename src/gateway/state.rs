//! Prompt state shared by all requests

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::llm::prompts::DEFAULT_MINUTES_TEMPLATE;

/// Mutable prompt state of the gateway
#[derive(Debug)]
pub struct PromptState {
    /// Template prepended to minutes
    pub active_template: String,

    /// Most recently composed prompt that produced a summary
    pub last_prompt: Option<String>,
}

impl PromptState {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            active_template: template.into(),
            last_prompt: None,
        }
    }
}

impl Default for PromptState {
    fn default() -> Self {
        Self::new(DEFAULT_MINUTES_TEMPLATE)
    }
}

/// Thread-safe state container
pub type SharedState = Arc<RwLock<PromptState>>;

/// Create a new shared state
pub fn new_shared_state(state: PromptState) -> SharedState {
    Arc::new(RwLock::new(state))
}
