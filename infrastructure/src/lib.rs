//! Infrastructure layer for session-relay
//!
//! External adapters: the remote session backend implementing the
//! application's [`PromptBackend`](relay_application::PromptBackend) port,
//! and file/env configuration loading.

pub mod backend;
pub mod config;

// Re-export commonly used types
pub use backend::{
    client::HttpTransport,
    error::BackendError,
    gateway::SessionBackendGateway,
    session::{BackendTimeouts, RemoteSession},
    transport::RelayTransport,
};
pub use config::{BackendConfig, ConfigLoader, FileConfig, ServerConfig};
