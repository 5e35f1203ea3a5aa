//! Remote session lifecycle with per-phase timeouts.
//!
//! One [`RemoteSession`] per logical exchange: created at exchange start,
//! exactly one prompt/response round-trip, deletion attempted exactly once
//! regardless of outcome. The three timeout tiers are independent — a
//! submission hang, slow generation, and a cleanup hang are different
//! failure modes and are never collapsed into one bound.

use crate::backend::error::{BackendError, Result};
use crate::backend::protocol::Author;
use crate::backend::transport::RelayTransport;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, sleep, timeout};
use tracing::{debug, warn};

/// The three timeout tiers plus the poll interval.
#[derive(Debug, Clone, Copy)]
pub struct BackendTimeouts {
    /// Guards the submission call itself, independent of generation time
    pub submission: Duration,
    /// Bounds total generation + polling time
    pub response: Duration,
    /// Bounds the best-effort session delete
    pub cleanup: Duration,
    /// Fixed interval between poll iterations
    pub poll_interval: Duration,
}

impl Default for BackendTimeouts {
    fn default() -> Self {
        Self {
            submission: Duration::from_secs(30),
            response: Duration::from_secs(60),
            cleanup: Duration::from_secs(5),
            poll_interval: Duration::from_millis(500),
        }
    }
}

/// An ephemeral session on the remote service, one per exchange.
pub struct RemoteSession {
    transport: Arc<dyn RelayTransport>,
    session_id: String,
    timeouts: BackendTimeouts,
}

impl RemoteSession {
    /// Allocate a session.
    ///
    /// Failure here means the exchange cannot start at all; it maps to
    /// [`BackendError::SessionCreate`] and is never absorbed downstream.
    pub async fn create(
        transport: Arc<dyn RelayTransport>,
        title: &str,
        model: &str,
        timeouts: BackendTimeouts,
    ) -> Result<Self> {
        let session_id = transport
            .create_session(title, model)
            .await
            .map_err(|e| BackendError::SessionCreate(e.to_string()))?;

        Ok(Self {
            transport,
            session_id,
            timeouts,
        })
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Begin generation, raced against the submission timeout.
    pub async fn submit(&self, system_prompt: &str, prompt: &str, model: &str) -> Result<()> {
        timeout(
            self.timeouts.submission,
            self.transport
                .submit_prompt(&self.session_id, system_prompt, prompt, model),
        )
        .await
        .map_err(|_| BackendError::SubmissionTimeout)?
    }

    /// Poll until the latest assistant message carries completed text.
    ///
    /// Fixed-interval loop bounded by the response timeout over total
    /// generation + polling time. Returns the text and elapsed wall-clock
    /// milliseconds.
    pub async fn poll(&self) -> Result<(String, u64)> {
        let started = Instant::now();
        let text = timeout(self.timeouts.response, self.poll_loop())
            .await
            .map_err(|_| BackendError::ResponseTimeout)??;
        Ok((text, started.elapsed().as_millis() as u64))
    }

    async fn poll_loop(&self) -> Result<String> {
        loop {
            let messages = self.transport.list_messages(&self.session_id).await?;
            // Only the most recent assistant message is inspected
            let latest = messages.iter().rev().find(|m| m.author == Author::Assistant);
            if let Some(message) = latest
                && let Some(text) = message.completed_text()
            {
                debug!("Session {} completed message {}", self.session_id, message.id);
                return Ok(text.to_string());
            }
            sleep(self.timeouts.poll_interval).await;
        }
    }

    /// Best-effort delete, raced against the cleanup timeout.
    ///
    /// Called exactly once per exchange, after submit/poll succeed or fail.
    /// Failures are logged and swallowed so they can never mask the
    /// exchange's actual result.
    pub async fn delete(self) {
        match timeout(
            self.timeouts.cleanup,
            self.transport.delete_session(&self.session_id),
        )
        .await
        {
            Ok(Ok(())) => debug!("Session {} deleted", self.session_id),
            Ok(Err(e)) => warn!("Failed to delete session {}: {}", self.session_id, e),
            Err(_) => warn!("Session {} delete timed out", self.session_id),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::backend::protocol::{MessageSegment, SessionMessage};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Transport double with scripted poll snapshots and failure switches.
    pub(crate) struct FakeTransport {
        pub hang_submit: bool,
        pub fail_create: bool,
        pub fail_delete: bool,
        /// Message-list snapshots returned by successive `list_messages` calls;
        /// the last snapshot repeats once exhausted.
        pub snapshots: Mutex<Vec<Vec<SessionMessage>>>,
        pub deletes: AtomicUsize,
        pub polls: AtomicUsize,
    }

    impl FakeTransport {
        pub fn completing_after(empty_polls: usize, text: &str) -> Self {
            let mut snapshots = vec![Vec::new(); empty_polls];
            snapshots.push(vec![assistant_message(text, true)]);
            Self {
                hang_submit: false,
                fail_create: false,
                fail_delete: false,
                snapshots: Mutex::new(snapshots),
                deletes: AtomicUsize::new(0),
                polls: AtomicUsize::new(0),
            }
        }

        pub fn never_completing() -> Self {
            Self {
                hang_submit: false,
                fail_create: false,
                fail_delete: false,
                snapshots: Mutex::new(vec![vec![assistant_message("partial", false)]]),
                deletes: AtomicUsize::new(0),
                polls: AtomicUsize::new(0),
            }
        }
    }

    pub(crate) fn assistant_message(text: &str, completed: bool) -> SessionMessage {
        SessionMessage {
            id: "m1".to_string(),
            author: Author::Assistant,
            segments: vec![MessageSegment {
                text: text.to_string(),
                completed,
            }],
        }
    }

    #[async_trait]
    impl RelayTransport for FakeTransport {
        async fn create_session(&self, _title: &str, _model: &str) -> Result<String> {
            if self.fail_create {
                return Err(BackendError::Api {
                    status: 503,
                    message: "no capacity".to_string(),
                });
            }
            Ok("sess-1".to_string())
        }

        async fn submit_prompt(
            &self,
            _session_id: &str,
            _system_prompt: &str,
            _prompt: &str,
            _model: &str,
        ) -> Result<()> {
            if self.hang_submit {
                // Sleeps past any submission timeout used in tests
                sleep(Duration::from_secs(3600)).await;
            }
            Ok(())
        }

        async fn list_messages(&self, _session_id: &str) -> Result<Vec<SessionMessage>> {
            self.polls.fetch_add(1, Ordering::SeqCst);
            let mut snapshots = self.snapshots.lock().unwrap();
            if snapshots.len() > 1 {
                Ok(snapshots.remove(0))
            } else {
                Ok(snapshots.first().cloned().unwrap_or_default())
            }
        }

        async fn delete_session(&self, _session_id: &str) -> Result<()> {
            self.deletes.fetch_add(1, Ordering::SeqCst);
            if self.fail_delete {
                return Err(BackendError::Api {
                    status: 500,
                    message: "delete failed".to_string(),
                });
            }
            Ok(())
        }
    }

    fn fast_timeouts() -> BackendTimeouts {
        BackendTimeouts {
            submission: Duration::from_millis(100),
            response: Duration::from_millis(500),
            cleanup: Duration::from_millis(50),
            poll_interval: Duration::from_millis(10),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_returns_completed_text() {
        let transport = Arc::new(FakeTransport::completing_after(3, "hello"));
        let session =
            RemoteSession::create(transport.clone(), "t", "m", fast_timeouts()).await.unwrap();

        session.submit("", "prompt", "m").await.unwrap();
        let (text, _elapsed) = session.poll().await.unwrap();

        assert_eq!(text, "hello");
        assert_eq!(transport.polls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_times_out_without_completion() {
        let transport = Arc::new(FakeTransport::never_completing());
        let session =
            RemoteSession::create(transport, "t", "m", fast_timeouts()).await.unwrap();

        session.submit("", "prompt", "m").await.unwrap();
        let err = session.poll().await.unwrap_err();
        assert!(matches!(err, BackendError::ResponseTimeout));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_timeout_is_independent() {
        let transport = Arc::new(FakeTransport {
            hang_submit: true,
            ..FakeTransport::completing_after(0, "x")
        });
        let session =
            RemoteSession::create(transport, "t", "m", fast_timeouts()).await.unwrap();

        let err = session.submit("", "prompt", "m").await.unwrap_err();
        assert!(matches!(err, BackendError::SubmissionTimeout));
    }

    #[tokio::test]
    async fn test_create_failure_maps_to_session_create() {
        let transport = Arc::new(FakeTransport {
            fail_create: true,
            ..FakeTransport::completing_after(0, "x")
        });

        let err = RemoteSession::create(transport, "t", "m", fast_timeouts())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, BackendError::SessionCreate(_)));
    }

    #[tokio::test]
    async fn test_delete_failure_is_swallowed() {
        let transport = Arc::new(FakeTransport {
            fail_delete: true,
            ..FakeTransport::completing_after(0, "x")
        });
        let session =
            RemoteSession::create(transport.clone(), "t", "m", fast_timeouts()).await.unwrap();

        // Returns unit either way
        session.delete().await;
        assert_eq!(transport.deletes.load(Ordering::SeqCst), 1);
    }
}
