//! Port adapter: one engine exchange = one full session lifecycle.

use crate::backend::error::Result;
use crate::backend::session::{BackendTimeouts, RemoteSession};
use crate::backend::transport::RelayTransport;
use async_trait::async_trait;
use relay_application::{ExchangeError, ExchangeReply, PromptBackend};
use std::sync::Arc;
use tracing::debug;

/// Implements the engine's [`PromptBackend`] port over the four-phase
/// remote protocol.
///
/// Holds the process-wide transport handle; everything per-exchange lives
/// in a [`RemoteSession`] constructed and destroyed inside `exchange`.
pub struct SessionBackendGateway {
    transport: Arc<dyn RelayTransport>,
    timeouts: BackendTimeouts,
}

impl SessionBackendGateway {
    pub fn new(transport: Arc<dyn RelayTransport>, timeouts: BackendTimeouts) -> Self {
        Self { transport, timeouts }
    }

    async fn round_trip(
        &self,
        session: &RemoteSession,
        system_prompt: &str,
        prompt: &str,
        model: &str,
    ) -> Result<(String, u64)> {
        session.submit(system_prompt, prompt, model).await?;
        session.poll().await
    }
}

#[async_trait]
impl PromptBackend for SessionBackendGateway {
    async fn exchange(
        &self,
        title: &str,
        system_prompt: &str,
        prompt: &str,
        model: &str,
    ) -> std::result::Result<ExchangeReply, ExchangeError> {
        // Create failure is fatal and skips cleanup — there is nothing to
        // clean up yet.
        let session =
            RemoteSession::create(Arc::clone(&self.transport), title, model, self.timeouts)
                .await
                .map_err(ExchangeError::from)?;
        debug!("Exchange running in session {}", session.session_id());

        let outcome = self.round_trip(&session, system_prompt, prompt, model).await;

        // Unconditional, exactly once, result-preserving.
        session.delete().await;

        let (text, elapsed_ms) = outcome.map_err(ExchangeError::from)?;
        Ok(ExchangeReply { text, elapsed_ms })
    }
}
