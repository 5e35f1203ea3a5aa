//! Context window functions
//!
//! Stateless, pure views over a [`ConversationHistory`]. These never mutate
//! their input; they exist to bound prompt size and focus the decision on
//! recent turns.

use crate::conversation::entities::{ConversationHistory, Role};

/// Default number of trailing messages included in the recent window.
pub const DEFAULT_WINDOW: usize = 10;

/// Content of the most recent user turn, or `""` when the history holds
/// no user turn at all (all-assistant / all-tool histories included).
pub fn last_user_message(history: &ConversationHistory) -> &str {
    history
        .messages()
        .iter()
        .rev()
        .find(|m| m.role == Role::User)
        .map(|m| m.content.as_str())
        .unwrap_or("")
}

/// Controls whether tool-result turns appear in the rendered window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMode {
    /// Only user and assistant turns
    Dialogue,
    /// Dialogue plus tool-result contents as raw lines
    WithToolResults,
}

/// Render the last `max_messages` turns as one line each.
///
/// Single-turn histories (`len <= 1`) need no windowing and render as `""`.
/// User and assistant turns render as `"Role: content"`; an assistant turn
/// carrying at least one tool call renders as
/// `"Assistant: [Executed Name(args)]"` instead of its (typically empty)
/// content. Tool-result turns are included as raw content lines only in
/// [`WindowMode::WithToolResults`]. Returns `""` when no renderable lines
/// remain.
pub fn recent_window(history: &ConversationHistory, max_messages: usize, mode: WindowMode) -> String {
    if history.len() <= 1 {
        return String::new();
    }

    let messages = history.messages();
    let start = messages.len().saturating_sub(max_messages);
    let mut lines: Vec<String> = Vec::new();

    for message in &messages[start..] {
        match message.role {
            Role::User => lines.push(format!("User: {}", message.content)),
            Role::Assistant => {
                if let Some(call) = message.tool_calls.first() {
                    let args = serde_json::to_string(&call.arguments).unwrap_or_default();
                    lines.push(format!("Assistant: [Executed {}({})]", call.name, args));
                } else {
                    lines.push(format!("Assistant: {}", message.content));
                }
            }
            Role::Tool => {
                if mode == WindowMode::WithToolResults {
                    lines.push(message.content.clone());
                }
            }
            // System turns never reach a ConversationHistory
            Role::System => {}
        }
    }

    lines.join("\n")
}
