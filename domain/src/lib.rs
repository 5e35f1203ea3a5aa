//! Domain layer for session-relay
//!
//! This crate contains the core entities and pure decision logic for
//! bridging a tool-calling chat API onto a free-text session backend.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Unified Response
//!
//! Every request resolves to exactly one of three shapes:
//!
//! - **ToolCall**: the model wants the caller to invoke a tool
//! - **Answer**: the model answers from a prior tool result
//! - **Chat**: plain conversational reply
//!
//! ## Fallback chain
//!
//! The backend emits free text, not structured calls. Everything in this
//! crate that parses or classifies that text is written so a degraded
//! result is always available — see [`response::decision`] and
//! [`language`].

pub mod conversation;
pub mod core;
pub mod language;
pub mod response;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use conversation::{
    entities::{ConversationContext, ConversationHistory, ConversationMessage, Role},
    window::{DEFAULT_WINDOW, WindowMode, last_user_message, recent_window},
};
pub use core::error::DomainError;
pub use language::{Script, apology, detect_script, is_information_query};
pub use response::{
    UNKNOWN_TOOL, UnifiedResponse,
    decision::{Decision, extract_json_object, parse_decision, strip_code_fences},
    ensure_known_tool,
};
pub use tool::entities::{ToolCallRequest, ToolCatalog, ToolDefinition, ToolParameter};
pub use util::truncate_str;
