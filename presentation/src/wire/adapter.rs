//! Pure, stateless mapping between wire records and engine types.
//!
//! No I/O and no state; the only non-deterministic outputs are the
//! timestamp and durations in [`chat_response`].

use crate::wire::types::{
    ChatResponse, WireFunctionCall, WireMessage, WireTool, WireToolCall,
};
use chrono::Utc;
use relay_application::EngineOutcome;
use relay_domain::{
    ConversationMessage, Role, ToolCallRequest, ToolDefinition, ToolParameter, UnifiedResponse,
};
use serde_json::{Map, Value};

/// Map wire messages into domain conversation messages.
///
/// Unknown role strings are treated as user turns rather than rejected —
/// the backend decides what to do with odd input, not the wire layer.
pub fn messages_from_wire(messages: &[WireMessage]) -> Vec<ConversationMessage> {
    messages
        .iter()
        .map(|m| {
            let role = match m.role.as_str() {
                "system" => Role::System,
                "assistant" => Role::Assistant,
                "tool" => Role::Tool,
                _ => Role::User,
            };
            let mut message = ConversationMessage {
                role,
                content: m.content.clone(),
                tool_calls: Vec::new(),
            };
            if let Some(calls) = &m.tool_calls {
                for call in calls {
                    message.tool_calls.push(ToolCallRequest {
                        name: call.function.name.clone(),
                        arguments: normalize_arguments(&call.function.arguments),
                    });
                }
            }
            message
        })
        .collect()
}

/// Normalize inbound tool-call arguments to a structured map.
///
/// Objects pass through; a JSON-encoded string is decoded (some callers
/// double-encode); anything else becomes an empty map.
pub fn normalize_arguments(arguments: &Value) -> Map<String, Value> {
    match arguments {
        Value::Object(map) => map.clone(),
        Value::String(s) => match serde_json::from_str::<Value>(s) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        },
        _ => Map::new(),
    }
}

/// Map wire tool schemas into domain tool definitions.
pub fn tools_from_wire(tools: Option<&[WireTool]>) -> Vec<ToolDefinition> {
    let Some(tools) = tools else {
        return Vec::new();
    };

    tools
        .iter()
        .map(|tool| {
            let function = &tool.function;
            let mut definition = ToolDefinition::new(&function.name, &function.description);
            for (name, schema) in &function.parameters.properties {
                let required = function.parameters.required.iter().any(|r| r == name);
                let description = schema
                    .get("description")
                    .and_then(|v| v.as_str())
                    .unwrap_or("");
                let param_type = schema.get("type").and_then(|v| v.as_str()).unwrap_or("string");
                let mut parameter =
                    ToolParameter::new(name, description, required).with_type(param_type);
                if let Some(item_type) = schema
                    .get("items")
                    .and_then(|i| i.get("type"))
                    .and_then(|v| v.as_str())
                {
                    parameter = parameter.with_item_type(item_type);
                }
                definition = definition.with_parameter(parameter);
            }
            definition
        })
        .collect()
}

/// Map the engine's decision onto the single assistant wire message.
///
/// `ToolCall` → empty content plus one tool-call entry with structured
/// arguments (never re-encoded as a string); `Answer`/`Chat` → the content
/// with no tool calls.
pub fn to_wire_message(response: &UnifiedResponse) -> WireMessage {
    match response {
        UnifiedResponse::ToolCall { tool_name, arguments } => WireMessage {
            role: "assistant".to_string(),
            content: String::new(),
            tool_calls: Some(vec![WireToolCall {
                function: WireFunctionCall {
                    name: tool_name.clone(),
                    arguments: Value::Object(arguments.clone()),
                },
            }]),
        },
        UnifiedResponse::Answer { content } | UnifiedResponse::Chat { content } => WireMessage {
            role: "assistant".to_string(),
            content: content.clone(),
            tool_calls: None,
        },
    }
}

/// Assemble the full chat response record with derived timing fields.
pub fn chat_response(model: &str, outcome: &EngineOutcome) -> ChatResponse {
    ChatResponse {
        model: model.to_string(),
        created_at: Utc::now().to_rfc3339(),
        message: to_wire_message(&outcome.response),
        done: true,
        done_reason: "stop".to_string(),
        // Milliseconds to nanoseconds
        total_duration: outcome.elapsed_ms * 1_000_000,
        load_duration: 0,
        prompt_eval_count: 0,
        eval_count: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_messages_from_wire_roles() {
        let wire: Vec<WireMessage> = serde_json::from_value(json!([
            {"role": "system", "content": "be brief"},
            {"role": "user", "content": "hi"},
            {"role": "assistant", "content": "hello"},
            {"role": "tool", "content": "result"},
            {"role": "weird", "content": "??"}
        ]))
        .unwrap();

        let messages = messages_from_wire(&wire);
        let roles: Vec<Role> = messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![Role::System, Role::User, Role::Assistant, Role::Tool, Role::User]
        );
    }

    #[test]
    fn test_inbound_structured_arguments() {
        let wire: Vec<WireMessage> = serde_json::from_value(json!([
            {"role": "assistant", "content": "", "tool_calls": [
                {"function": {"name": "TurnOnLight", "arguments": {"entity": "light.kitchen"}}}
            ]}
        ]))
        .unwrap();

        let messages = messages_from_wire(&wire);
        assert_eq!(messages[0].tool_calls[0].arguments["entity"], "light.kitchen");
    }

    #[test]
    fn test_inbound_string_encoded_arguments_decoded() {
        let value = json!("{\"entity\": \"light.kitchen\"}");
        let arguments = normalize_arguments(&value);
        assert_eq!(arguments["entity"], "light.kitchen");
    }

    #[test]
    fn test_inbound_junk_arguments_become_empty() {
        assert!(normalize_arguments(&json!(42)).is_empty());
        assert!(normalize_arguments(&json!("not json")).is_empty());
        assert!(normalize_arguments(&Value::Null).is_empty());
    }

    #[test]
    fn test_tools_from_wire_schema() {
        let tools: Vec<WireTool> = serde_json::from_value(json!([
            {"type": "function", "function": {
                "name": "SetScenes",
                "description": "Activate scenes",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "scenes": {"type": "array", "description": "Scene names", "items": {"type": "string"}},
                        "room": {"type": "string", "description": "Room"}
                    },
                    "required": ["scenes"]
                }
            }}
        ]))
        .unwrap();

        let definitions = tools_from_wire(Some(&tools));
        assert_eq!(definitions.len(), 1);
        let scenes = definitions[0]
            .parameters
            .iter()
            .find(|p| p.name == "scenes")
            .unwrap();
        assert!(scenes.required);
        assert_eq!(scenes.param_type, "array");
        assert_eq!(scenes.item_type.as_deref(), Some("string"));
        let room = definitions[0].parameters.iter().find(|p| p.name == "room").unwrap();
        assert!(!room.required);
    }

    #[test]
    fn test_tools_from_wire_none() {
        assert!(tools_from_wire(None).is_empty());
    }

    #[test]
    fn test_tool_call_round_trip() {
        let mut arguments = Map::new();
        arguments.insert("entity".to_string(), json!("light.living_room"));
        let response = UnifiedResponse::tool_call("TurnOnLight", arguments.clone());

        let wire = to_wire_message(&response);
        assert_eq!(wire.content, "");
        let calls = wire.tool_calls.as_ref().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].function.name, "TurnOnLight");
        // Structured value on the wire, never a JSON-encoded string
        assert!(calls[0].function.arguments.is_object());

        // And back
        let json = serde_json::to_value(&wire).unwrap();
        let parsed: WireMessage = serde_json::from_value(json).unwrap();
        let back = messages_from_wire(&[parsed]);
        assert_eq!(back[0].tool_calls[0].name, "TurnOnLight");
        assert_eq!(back[0].tool_calls[0].arguments, arguments);
    }

    #[test]
    fn test_answer_and_chat_round_trip() {
        for response in [
            UnifiedResponse::answer("The light is on."),
            UnifiedResponse::chat("Hello!"),
        ] {
            let wire = to_wire_message(&response);
            assert!(wire.tool_calls.is_none());
            match &response {
                UnifiedResponse::Answer { content } | UnifiedResponse::Chat { content } => {
                    assert_eq!(&wire.content, content);
                }
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn test_adapter_idempotent_except_timing() {
        let outcome = EngineOutcome {
            response: UnifiedResponse::chat("Hello!"),
            elapsed_ms: 42,
        };

        let first = chat_response("session-relay:latest", &outcome);
        let second = chat_response("session-relay:latest", &outcome);

        assert_eq!(first.message, second.message);
        assert_eq!(first.model, second.model);
        assert_eq!(first.done, second.done);
        assert_eq!(first.done_reason, second.done_reason);
        assert_eq!(first.total_duration, second.total_duration);
    }

    #[test]
    fn test_duration_is_nanoseconds() {
        let outcome = EngineOutcome {
            response: UnifiedResponse::chat("x"),
            elapsed_ms: 42,
        };
        let response = chat_response("m", &outcome);
        assert_eq!(response.total_duration, 42_000_000);
        assert!(response.done);
    }
}
