//! Error types for the remote session backend

use relay_application::ExchangeError;
use thiserror::Error;

/// Result type alias for backend operations
pub type Result<T> = std::result::Result<T, BackendError>;

/// Errors that can occur when talking to the remote session service
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Backend API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to create session: {0}")]
    SessionCreate(String),

    #[error("Submission timed out")]
    SubmissionTimeout,

    #[error("Response timed out")]
    ResponseTimeout,
}

impl From<BackendError> for ExchangeError {
    fn from(e: BackendError) -> Self {
        match e {
            BackendError::SessionCreate(msg) => ExchangeError::CreateSession(msg),
            BackendError::SubmissionTimeout => ExchangeError::SubmissionTimeout,
            BackendError::ResponseTimeout => ExchangeError::ResponseTimeout,
            other => ExchangeError::Backend(other.to_string()),
        }
    }
}
