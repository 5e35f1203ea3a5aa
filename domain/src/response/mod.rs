//! Unified response types
//!
//! The engine's sole output type plus its post-validation rule.

pub mod decision;

use crate::tool::entities::ToolCatalog;
use serde_json::{Map, Value};

/// Name substituted when the model selects a tool the caller never advertised.
pub const UNKNOWN_TOOL: &str = "unknown";

/// The engine's three-variant decision output.
///
/// Exactly one variant per request; the engine never leaves a request
/// without one.
#[derive(Debug, Clone, PartialEq)]
pub enum UnifiedResponse {
    /// Invoke a tool
    ToolCall {
        tool_name: String,
        arguments: Map<String, Value>,
    },
    /// Answer the user from a prior tool result
    Answer { content: String },
    /// Plain conversational reply
    Chat { content: String },
}

impl UnifiedResponse {
    pub fn tool_call(tool_name: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self::ToolCall {
            tool_name: tool_name.into(),
            arguments,
        }
    }

    pub fn answer(content: impl Into<String>) -> Self {
        Self::Answer {
            content: content.into(),
        }
    }

    pub fn chat(content: impl Into<String>) -> Self {
        Self::Chat {
            content: content.into(),
        }
    }
}

/// Post-validation: rewrite a tool call naming an unadvertised tool.
///
/// A `ToolCall` whose name is neither `"unknown"` nor present in the catalog
/// becomes `ToolCall { tool_name: "unknown", arguments: {} }`. Never an
/// error; `Answer` and `Chat` pass through untouched.
pub fn ensure_known_tool(response: UnifiedResponse, catalog: &ToolCatalog) -> UnifiedResponse {
    match response {
        UnifiedResponse::ToolCall { tool_name, arguments } => {
            if tool_name == UNKNOWN_TOOL || catalog.contains(&tool_name) {
                UnifiedResponse::ToolCall { tool_name, arguments }
            } else {
                UnifiedResponse::ToolCall {
                    tool_name: UNKNOWN_TOOL.to_string(),
                    arguments: Map::new(),
                }
            }
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::entities::ToolDefinition;

    fn catalog() -> ToolCatalog {
        ToolCatalog::new(vec![
            ToolDefinition::new("TurnOnLight", "Turn on"),
            ToolDefinition::new("TurnOffLight", "Turn off"),
            ToolDefinition::new("GetLiveContext", "Device state"),
        ])
    }

    #[test]
    fn test_known_tool_passes_through() {
        let mut args = Map::new();
        args.insert("entity".into(), "light.living_room".into());
        let response = UnifiedResponse::tool_call("TurnOnLight", args.clone());

        assert_eq!(
            ensure_known_tool(response, &catalog()),
            UnifiedResponse::tool_call("TurnOnLight", args)
        );
    }

    #[test]
    fn test_unadvertised_tool_rewritten_to_unknown() {
        let mut args = Map::new();
        args.insert("x".into(), 1.into());
        let response = UnifiedResponse::tool_call("OpenGarage", args);

        assert_eq!(
            ensure_known_tool(response, &catalog()),
            UnifiedResponse::tool_call(UNKNOWN_TOOL, Map::new())
        );
    }

    #[test]
    fn test_unknown_name_is_preserved() {
        let response = UnifiedResponse::tool_call(UNKNOWN_TOOL, Map::new());
        assert_eq!(
            ensure_known_tool(response.clone(), &catalog()),
            response
        );
    }

    #[test]
    fn test_answer_and_chat_untouched() {
        let answer = UnifiedResponse::answer("done");
        let chat = UnifiedResponse::chat("hi");

        assert_eq!(ensure_known_tool(answer.clone(), &catalog()), answer);
        assert_eq!(ensure_known_tool(chat.clone(), &catalog()), chat);
    }
}
