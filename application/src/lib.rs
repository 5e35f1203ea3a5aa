//! Application layer for session-relay
//!
//! This crate contains the unified response generation engine and the port
//! it drives. It depends only on the domain layer; the remote session
//! adapter implementing [`ports::backend::PromptBackend`] lives in
//! infrastructure.

pub mod engine;
pub mod ports;

// Re-export commonly used types
pub use engine::{EngineOutcome, ResponseEngine, prompt::DecisionPrompt};
pub use ports::backend::{ExchangeError, ExchangeReply, PromptBackend};
