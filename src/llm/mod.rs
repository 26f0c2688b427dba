//! LLM module for minutes-gateway
//!
//! Prompt composition and the chat-completion client used to produce summaries.

mod client;
mod openai;
pub mod prompts;

pub use client::{build_provider, LlmProvider};
pub use openai::OpenAiCompatClient;
