//! Transport trait over the four remote session operations.
//!
//! Separating the raw calls from the timeout/cleanup discipline in
//! [`RemoteSession`](super::session::RemoteSession) keeps the latter
//! testable without a network.

use crate::backend::error::Result;
use crate::backend::protocol::SessionMessage;
use async_trait::async_trait;

/// The four remote calls, one method each, no retries or timeouts here.
#[async_trait]
pub trait RelayTransport: Send + Sync {
    /// Allocate a remote session; returns its id.
    async fn create_session(&self, title: &str, model: &str) -> Result<String>;

    /// Begin generation for a prompt inside the session.
    async fn submit_prompt(
        &self,
        session_id: &str,
        system_prompt: &str,
        prompt: &str,
        model: &str,
    ) -> Result<()>;

    /// Fetch the session's current message list.
    async fn list_messages(&self, session_id: &str) -> Result<Vec<SessionMessage>>;

    /// Destroy the session.
    async fn delete_session(&self, session_id: &str) -> Result<()>;
}
