//! File configuration schema

use crate::backend::session::BackendTimeouts;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub server: ServerConfig,
    pub backend: BackendConfig,
}

/// HTTP surface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address for the chat API
    pub bind: String,
    /// Model names advertised by the metadata endpoints
    pub models: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:11434".to_string(),
            models: vec!["session-relay:latest".to_string()],
        }
    }
}

/// Remote session backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the remote session service
    pub base_url: String,
    /// Bearer token, if the service requires one
    pub api_key: Option<String>,
    /// Guards the submission call itself
    pub submission_timeout_secs: u64,
    /// Bounds total generation + polling time
    pub response_timeout_secs: u64,
    /// Bounds the best-effort session delete
    pub cleanup_timeout_secs: u64,
    /// Fixed interval between poll iterations
    pub poll_interval_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            api_key: None,
            submission_timeout_secs: 30,
            response_timeout_secs: 60,
            cleanup_timeout_secs: 5,
            poll_interval_ms: 500,
        }
    }
}

impl BackendConfig {
    /// The three timeout tiers plus poll interval, as durations.
    pub fn timeouts(&self) -> BackendTimeouts {
        BackendTimeouts {
            submission: Duration::from_secs(self.submission_timeout_secs),
            response: Duration::from_secs(self.response_timeout_secs),
            cleanup: Duration::from_secs(self.cleanup_timeout_secs),
            poll_interval: Duration::from_millis(self.poll_interval_ms),
        }
    }
}
