//! Prompt templates for the decision flow

use relay_domain::{ConversationContext, WindowMode, last_user_message, recent_window};

/// Templates and composers for the engine's prompts
pub struct DecisionPrompt;

impl DecisionPrompt {
    /// Fixed decision policy appended to every primary prompt.
    ///
    /// Describes the three output shapes and the priority rules between
    /// them, and forbids assuming external state persists across turns.
    pub fn policy() -> &'static str {
        r#"Decide how to respond and output ONLY a single JSON object, no other text.

Output exactly one of these shapes:
1. {"action": "tool_call", "tool_name": "<name>", "arguments": {<key>: <value>}}
2. {"action": "answer", "content": "<text>"}
3. {"action": "chat", "content": "<text>"}

Priority rules:
- If a tool result is present above and it answers the user's request, use "answer".
- If the request requires performing an action or information you do not have, use "tool_call" with a tool from the list.
- Otherwise use "chat".

Never assume the current state of devices or external resources from earlier turns. State may have changed at any time; when in doubt, query or act again instead of guessing."#
    }

    /// Compose the primary decision prompt.
    ///
    /// The caller's system context travels as the session's system prompt,
    /// not here. Window size is fixed at 10 trailing turns; the tool result
    /// (when the request ends in one) is surfaced in its own section rather
    /// than as a window line.
    pub fn decision(context: &ConversationContext, tool_result: Option<&str>) -> String {
        let mut sections: Vec<String> = Vec::new();

        let window = recent_window(&context.history, 10, WindowMode::Dialogue);
        if !window.is_empty() {
            sections.push(format!("Recent conversation:\n{window}"));
        }

        if let Some(result) = tool_result {
            sections.push(format!("Tool result:\n{result}"));
        }

        if !context.tools.is_empty() {
            sections.push(format!("Available tools:\n{}", context.tools.render()));
        }

        sections.push(format!("User request: {}", last_user_message(&context.history)));
        sections.push(Self::policy().to_string());

        sections.join("\n\n")
    }

    /// Narrow secondary prompt for the tool-result fallback.
    ///
    /// Asks for nothing but a short answer in the user's language — no JSON,
    /// no tool selection.
    pub fn answer_from_tool_result(user_text: &str, tool_result: &str) -> String {
        format!(
            r#"A tool was executed for the user's request and produced this result:

{tool_result}

User request: {user_text}

Reply with a one-to-two sentence answer to the user, in the same language as the user's request, based only on the tool result. Output plain text only."#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_domain::{ConversationMessage, ToolDefinition};

    #[test]
    fn test_decision_prompt_sections() {
        let context = ConversationContext::build(
            vec![
                ConversationMessage::system("You control a smart home."),
                ConversationMessage::user("what lights are on?"),
                ConversationMessage::assistant("Let me check."),
            ],
            vec![ToolDefinition::new("GetLiveContext", "Read device state")],
        );

        let prompt = DecisionPrompt::decision(&context, Some("3 lights on"));

        // System context travels separately as the session system prompt
        assert!(!prompt.contains("You control a smart home."));
        assert!(prompt.contains("Recent conversation:\nUser: what lights are on?"));
        assert!(prompt.contains("Tool result:\n3 lights on"));
        assert!(prompt.contains("Available tools:\n- GetLiveContext"));
        assert!(prompt.contains("User request: what lights are on?"));
        assert!(prompt.contains(r#""action": "tool_call""#));
    }

    #[test]
    fn test_decision_prompt_omits_empty_sections() {
        let context =
            ConversationContext::build(vec![ConversationMessage::user("hello")], vec![]);
        let prompt = DecisionPrompt::decision(&context, None);

        assert!(!prompt.contains("Recent conversation:"));
        assert!(!prompt.contains("Tool result:"));
        assert!(!prompt.contains("Available tools:"));
        assert!(prompt.contains("User request: hello"));
    }

    #[test]
    fn test_secondary_prompt_mentions_result_and_language() {
        let prompt = DecisionPrompt::answer_from_tool_result("電気は？", "Light is on");
        assert!(prompt.contains("Light is on"));
        assert!(prompt.contains("電気は？"));
        assert!(prompt.contains("same language"));
    }
}
