//! Summarization gateway
//!
//! Owns the prompt state and the upstream provider, and implements the
//! summarize, retry and customize operations independent of any transport.

pub mod models;
pub mod service;
pub mod state;

pub use models::{Acknowledgement, AgendaRequest, PromptOverride, SummaryRequest, SummaryResult};
pub use service::Gateway;
pub use state::{new_shared_state, PromptState, SharedState};
