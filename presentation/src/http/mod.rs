//! Axum HTTP surface.
//!
//! Thin I/O wrappers: request validation and routing only — every decision
//! lives in the engine.

pub mod chat;
pub mod models;
pub mod state;

pub use state::AppState;

use axum::{
    Router,
    routing::{get, post},
};

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(chat::chat))
        .route("/api/tags", get(models::tags))
        .route("/api/version", get(models::version))
        .route("/api/show", post(models::show))
        .with_state(state)
}
