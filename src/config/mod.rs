//! Configuration module for minutes-gateway
//!
//! Handles loading settings from a TOML file and the process environment.

mod settings;

pub use settings::{LlmSettings, PromptSettings, ServerSettings, Settings};
pub use settings::{API_KEY_ENV, PORT_ENV};
