//! minutes-gateway - An HTTP gateway that turns meeting minutes and agendas into summaries
//!
//! Requests are composed into a prompt and relayed to an OpenAI-compatible
//! chat-completion API; the model's reply is handed back verbatim.

pub mod cli;
pub mod config;
pub mod gateway;
pub mod llm;
pub mod server;

use thiserror::Error;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The chat-completion call failed (network, auth, status, malformed reply)
    #[error("{0}")]
    Upstream(String),

    /// Retry was requested before any prompt was composed
    #[error("No previous prompt to retry.")]
    NoPreviousPrompt,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GatewayError {
    /// Wrap an upstream failure, keeping the whole context chain in the message.
    pub fn upstream(err: anyhow::Error) -> Self {
        Self::Upstream(format!("{err:#}"))
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "minutes-gateway";
