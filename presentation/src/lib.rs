//! Presentation layer for session-relay
//!
//! The external tool-calling chat API: wire-format types, the pure adapter
//! between wire records and domain types, and the axum HTTP surface.

pub mod http;
pub mod wire;

// Re-export commonly used types
pub use http::{AppState, router};
pub use wire::{
    adapter,
    types::{ChatRequest, ChatResponse, WireMessage, WireTool, WireToolCall},
};
