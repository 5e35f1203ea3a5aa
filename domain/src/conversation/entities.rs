//! Conversation entities

use crate::tool::entities::{ToolCallRequest, ToolCatalog, ToolDefinition};
use serde::{Deserialize, Serialize};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// A message in a conversation (Entity)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub role: Role,
    pub content: String,
    /// Tool invocations carried on an assistant turn
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCallRequest>,
}

impl ConversationMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// A tool-result turn, content is the tool's raw output
    pub fn tool(content: impl Into<String>) -> Self {
        Self::new(Role::Tool, content)
    }

    pub fn with_tool_call(mut self, call: ToolCallRequest) -> Self {
        self.tool_calls.push(call);
        self
    }

    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            tool_calls: Vec::new(),
        }
    }
}

/// Ordered, non-system conversation turns for one request.
///
/// Created once from raw input and immutable thereafter. Never truncated at
/// ingestion — windowing happens later, non-destructively, in
/// [`crate::conversation::window`].
#[derive(Debug, Clone, Default)]
pub struct ConversationHistory {
    messages: Vec<ConversationMessage>,
}

impl ConversationHistory {
    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ConversationMessage> {
        self.messages.last()
    }

    /// Whether at least one user turn exists
    pub fn has_user_message(&self) -> bool {
        self.messages.iter().any(|m| m.role == Role::User)
    }
}

/// Per-request view of a conversation: system context, ordered history,
/// and the advertised tool catalog.
#[derive(Debug, Clone, Default)]
pub struct ConversationContext {
    /// All system-role contents in order, joined by newline, trimmed
    pub system_context: String,
    /// All non-system messages, original order preserved
    pub history: ConversationHistory,
    /// Tools advertised by the caller; empty if none provided
    pub tools: ToolCatalog,
}

impl ConversationContext {
    /// Split raw turns into system context and history.
    ///
    /// All tool and assistant messages are preserved verbatim so downstream
    /// windowing has full information. A missing tool list yields an empty
    /// catalog, not an error; there are no error conditions here.
    pub fn build(messages: Vec<ConversationMessage>, tools: Vec<ToolDefinition>) -> Self {
        let mut system_parts: Vec<String> = Vec::new();
        let mut history = Vec::new();

        for message in messages {
            match message.role {
                Role::System => system_parts.push(message.content),
                _ => history.push(message),
            }
        }

        Self {
            system_context: system_parts.join("\n").trim().to_string(),
            history: ConversationHistory { messages: history },
            tools: ToolCatalog::new(tools),
        }
    }
}
