//! Wire types for the remote session protocol.
//!
//! Four operations exist and nothing else: create-session, submit-prompt,
//! list-messages, delete-session.

use serde::{Deserialize, Serialize};

/// `POST /v1/sessions` request body
#[derive(Debug, Serialize)]
pub struct CreateSessionRequest {
    pub title: String,
    pub model: String,
}

/// `POST /v1/sessions` response body
#[derive(Debug, Deserialize)]
pub struct CreateSessionResponse {
    pub id: String,
}

/// `POST /v1/sessions/{id}/prompt` request body
#[derive(Debug, Serialize)]
pub struct SubmitPromptRequest {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub system_prompt: String,
    pub prompt: String,
    pub model: String,
}

/// `GET /v1/sessions/{id}/messages` response body
#[derive(Debug, Deserialize)]
pub struct ListMessagesResponse {
    #[serde(default)]
    pub messages: Vec<SessionMessage>,
}

/// One message inside a remote session
#[derive(Debug, Clone, Deserialize)]
pub struct SessionMessage {
    pub id: String,
    pub author: Author,
    #[serde(default)]
    pub segments: Vec<MessageSegment>,
}

/// Author of a session message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Assistant,
}

/// One segment of a session message.
///
/// Generation streams into segments; a segment is only usable once the
/// backend marks it completed.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageSegment {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl SessionMessage {
    /// The message's completed, non-empty text, if generation finished.
    pub fn completed_text(&self) -> Option<&str> {
        self.segments
            .iter()
            .find(|s| s.completed && !s.text.is_empty())
            .map(|s| s.text.as_str())
    }
}

/// Error body the remote service returns on non-2xx responses
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
}
