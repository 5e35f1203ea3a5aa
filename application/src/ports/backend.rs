//! Prompt backend port
//!
//! Defines the interface for one prompt/response exchange against the
//! remote conversational service. The adapter owns the full session
//! lifecycle (create → submit → poll → delete) behind a single call.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during a backend exchange.
///
/// Only [`ExchangeError::CreateSession`] and [`ExchangeError::Unavailable`]
/// are fatal — they propagate out of the engine untouched. Everything else
/// is absorbed by the fallback chain.
#[derive(Error, Debug, Clone)]
pub enum ExchangeError {
    #[error("Failed to create session: {0}")]
    CreateSession(String),

    #[error("Backend client not connected")]
    Unavailable,

    #[error("Submission timed out")]
    SubmissionTimeout,

    #[error("Response timed out")]
    ResponseTimeout,

    #[error("Backend error: {0}")]
    Backend(String),
}

impl ExchangeError {
    /// Fatal errors surface to the caller; they never enter the fallback
    /// chain.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ExchangeError::CreateSession(_) | ExchangeError::Unavailable
        )
    }
}

/// Result of one successful exchange.
#[derive(Debug, Clone)]
pub struct ExchangeReply {
    /// The backend's raw response text
    pub text: String,
    /// Wall-clock time spent on the exchange
    pub elapsed_ms: u64,
}

/// One logical prompt/response round-trip against the remote backend.
///
/// Each call opens a fresh session, performs exactly one round-trip, and
/// deletes the session best-effort before returning — success and failure
/// alike. Sessions are never reused across calls.
#[async_trait]
pub trait PromptBackend: Send + Sync {
    async fn exchange(
        &self,
        title: &str,
        system_prompt: &str,
        prompt: &str,
        model: &str,
    ) -> Result<ExchangeReply, ExchangeError>;
}
