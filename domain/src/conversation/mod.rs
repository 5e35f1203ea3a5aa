//! Conversation domain types
//!
//! The context builder ([`entities::ConversationContext::build`]) splits a
//! raw turn list into system context plus ordered history; the window
//! functions ([`window`]) derive bounded views of that history for prompt
//! composition.

pub mod entities;
pub mod window;

pub use entities::{ConversationContext, ConversationHistory, ConversationMessage, Role};
