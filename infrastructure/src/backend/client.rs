//! HTTP transport for the remote session service.
//!
//! One [`HttpTransport`] is constructed at process start and shared across
//! all requests; it is stateless with respect to individual exchanges.
//! Sessions are per-exchange, never pooled or reused.

use crate::backend::error::{BackendError, Result};
use crate::backend::protocol::{
    ApiErrorBody, CreateSessionRequest, CreateSessionResponse, ListMessagesResponse,
    SessionMessage, SubmitPromptRequest,
};
use crate::backend::transport::RelayTransport;
use async_trait::async_trait;
use tracing::debug;

/// Reqwest-based implementation of [`RelayTransport`].
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpTransport {
    /// Build the shared client handle.
    ///
    /// This is the explicit open step of the client lifecycle; dropping the
    /// transport at shutdown is the close step.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<ApiErrorBody>()
            .await
            .map(|b| b.message)
            .unwrap_or_default();
        Err(BackendError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl RelayTransport for HttpTransport {
    async fn create_session(&self, title: &str, model: &str) -> Result<String> {
        debug!("Creating session (model: {model})");
        let body = CreateSessionRequest {
            title: title.to_string(),
            model: model.to_string(),
        };
        let response = self
            .request(self.http.post(self.url("/v1/sessions")))
            .json(&body)
            .send()
            .await?;
        let created: CreateSessionResponse = Self::check(response).await?.json().await?;
        debug!("Session created: {}", created.id);
        Ok(created.id)
    }

    async fn submit_prompt(
        &self,
        session_id: &str,
        system_prompt: &str,
        prompt: &str,
        model: &str,
    ) -> Result<()> {
        debug!("Submitting prompt to session {session_id}");
        let body = SubmitPromptRequest {
            system_prompt: system_prompt.to_string(),
            prompt: prompt.to_string(),
            model: model.to_string(),
        };
        let response = self
            .request(
                self.http
                    .post(self.url(&format!("/v1/sessions/{session_id}/prompt"))),
            )
            .json(&body)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn list_messages(&self, session_id: &str) -> Result<Vec<SessionMessage>> {
        let response = self
            .request(
                self.http
                    .get(self.url(&format!("/v1/sessions/{session_id}/messages"))),
            )
            .send()
            .await?;
        let list: ListMessagesResponse = Self::check(response).await?.json().await?;
        Ok(list.messages)
    }

    async fn delete_session(&self, session_id: &str) -> Result<()> {
        debug!("Deleting session {session_id}");
        let response = self
            .request(
                self.http
                    .delete(self.url(&format!("/v1/sessions/{session_id}"))),
            )
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let transport = HttpTransport::new("http://localhost:8080/", None).unwrap();
        assert_eq!(transport.url("/v1/sessions"), "http://localhost:8080/v1/sessions");
    }
}
