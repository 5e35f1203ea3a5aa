//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Conversation contains no user message")]
    NoUserMessage,

    #[error("Malformed model decision: {0}")]
    MalformedDecision(String),
}

impl DomainError {
    /// Check whether this error came from unparseable model output.
    ///
    /// Malformed decisions feed the fallback chain; `NoUserMessage` is a
    /// caller-visible validation failure and never does.
    pub fn is_malformed_decision(&self) -> bool {
        matches!(self, DomainError::MalformedDecision(_))
    }
}
