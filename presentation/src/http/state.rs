//! Shared application state for HTTP handlers

use relay_application::ResponseEngine;
use std::sync::Arc;

/// Application state shared across all API handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ResponseEngine>,
    /// Model names advertised by the metadata endpoints
    pub models: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(engine: Arc<ResponseEngine>, models: Vec<String>) -> Self {
        Self {
            engine,
            models: Arc::new(models),
        }
    }
}
