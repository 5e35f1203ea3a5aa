//! Serde records of the external chat API.
//!
//! The surface is Ollama-compatible: `/api/chat` plus the wire-format-only
//! model metadata endpoints. Durations are nanoseconds, timestamps ISO-8601.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `POST /api/chat` request body
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<WireMessage>,
    #[serde(default)]
    pub tools: Option<Vec<WireTool>>,
    #[serde(default)]
    pub stream: Option<bool>,
}

/// A chat message on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<WireToolCall>>,
}

/// A tool invocation carried on a wire message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireToolCall {
    pub function: WireFunctionCall,
}

/// The function half of a wire tool call.
///
/// `arguments` is kept as a raw [`Value`] on input because some callers
/// double-encode it as a JSON string; the adapter normalizes it. Output is
/// always a structured object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireFunctionCall {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

/// A tool definition on the wire (JSON-schema shaped)
#[derive(Debug, Clone, Deserialize)]
pub struct WireTool {
    #[serde(rename = "type", default)]
    pub tool_type: String,
    pub function: WireToolFunction,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireToolFunction {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: WireToolParameters,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireToolParameters {
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub required: Vec<String>,
}

/// `POST /api/chat` response body
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub model: String,
    /// ISO-8601 timestamp
    pub created_at: String,
    pub message: WireMessage,
    pub done: bool,
    pub done_reason: String,
    /// Nanoseconds
    pub total_duration: u64,
    pub load_duration: u64,
    pub prompt_eval_count: u64,
    pub eval_count: u64,
}

/// Error-shaped body for caller-visible failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `GET /api/tags` response body
#[derive(Debug, Clone, Serialize)]
pub struct TagsResponse {
    pub models: Vec<ModelInfo>,
}

/// Static metadata for one advertised model
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub name: String,
    pub model: String,
    pub modified_at: String,
    pub size: u64,
    pub digest: String,
    pub details: ModelDetails,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelDetails {
    pub format: String,
    pub family: String,
    pub parameter_size: String,
    pub quantization_level: String,
}

/// `GET /api/version` response body
#[derive(Debug, Clone, Serialize)]
pub struct VersionResponse {
    pub version: String,
}

/// `POST /api/show` request body
#[derive(Debug, Clone, Deserialize)]
pub struct ShowRequest {
    pub model: String,
}

/// `POST /api/show` response body
#[derive(Debug, Clone, Serialize)]
pub struct ShowResponse {
    pub modelfile: String,
    pub parameters: String,
    pub template: String,
    pub details: ModelDetails,
    pub capabilities: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_minimal() {
        let request: ChatRequest = serde_json::from_str(
            r#"{"model":"session-relay:latest","messages":[{"role":"user","content":"hi"}]}"#,
        )
        .unwrap();

        assert_eq!(request.model, "session-relay:latest");
        assert!(request.tools.is_none());
        assert!(request.stream.is_none());
    }

    #[test]
    fn test_wire_tool_schema() {
        let tool: WireTool = serde_json::from_str(
            r#"{
                "type": "function",
                "function": {
                    "name": "TurnOnLight",
                    "description": "Turn on a light",
                    "parameters": {
                        "type": "object",
                        "properties": {"entity": {"type": "string", "description": "Entity id"}},
                        "required": ["entity"]
                    }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(tool.function.name, "TurnOnLight");
        assert_eq!(tool.function.parameters.required, vec!["entity"]);
    }
}
