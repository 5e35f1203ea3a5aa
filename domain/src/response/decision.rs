//! Decision parsing from model response text.
//!
//! The backend has no structured output mode, so the decision arrives as
//! free text that *should* contain a JSON object of the form
//! `{"action": "tool_call" | "answer" | "chat", ...}`. Fences are
//! stripped, the object is located by a brace-matching scan that honors
//! string literals, and every missing or ill-typed field maps to
//! [`DomainError::MalformedDecision`] so the caller can degrade instead
//! of crash.

use crate::core::error::DomainError;
use crate::response::UnifiedResponse;
use serde_json::{Map, Value};

/// A parsed decision plus extraction anomalies the caller may want to log.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub response: UnifiedResponse,
    /// The text contained more than one JSON object; the first was used.
    pub multiple_objects: bool,
}

/// Remove Markdown code-fence wrappers (```json ... ``` or ``` ... ```).
///
/// Only leading/trailing fences are removed; fences in the middle of the
/// text are left alone.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json", "JSON", ...) up to the first newline
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Locate the first balanced `{...}` object via a brace-matching scan.
///
/// String literals and escapes are respected, so braces inside JSON strings
/// do not confuse the scan. Returns the object slice and whether a second
/// balanced object follows it (the multiple-objects anomaly); a stray
/// unclosed `{` in trailing prose does not count.
pub fn extract_json_object(text: &str) -> Option<(&str, bool)> {
    let (start, end) = balanced_object(text)?;
    let multiple = balanced_object(&text[end..]).is_some();
    Some((&text[start..end], multiple))
}

/// Byte range of the first balanced `{...}` region, or `None` when no `{`
/// is ever closed at depth zero.
fn balanced_object(text: &str) -> Option<(usize, usize)> {
    let start = text.find('{')?;
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &b) in bytes[start..].iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((start, start + offset + 1));
                }
            }
            _ => {}
        }
    }

    // Unbalanced — never closed
    None
}

/// Parse the backend's raw response text into a [`Decision`].
///
/// Requires `action` ∈ {`tool_call`, `answer`, `chat`}. A `tool_call` needs
/// a non-empty `tool_name` and defaults `arguments` to `{}`; `answer` and
/// `chat` need a string `content` (empty is fine).
pub fn parse_decision(raw: &str) -> Result<Decision, DomainError> {
    let text = strip_code_fences(raw);
    let (json_text, multiple_objects) = extract_json_object(text)
        .ok_or_else(|| DomainError::MalformedDecision("no JSON object in response".to_string()))?;

    let value: Value = serde_json::from_str(json_text)
        .map_err(|e| DomainError::MalformedDecision(format!("invalid JSON: {e}")))?;

    let action = value
        .get("action")
        .and_then(|v| v.as_str())
        .ok_or_else(|| DomainError::MalformedDecision("missing action field".to_string()))?;

    let response = match action {
        "tool_call" => {
            let tool_name = value
                .get("tool_name")
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .ok_or_else(|| {
                    DomainError::MalformedDecision("tool_call without tool_name".to_string())
                })?;
            let arguments = match value.get("arguments") {
                None | Some(Value::Null) => Map::new(),
                Some(Value::Object(map)) => map.clone(),
                Some(_) => {
                    return Err(DomainError::MalformedDecision(
                        "arguments is not an object".to_string(),
                    ));
                }
            };
            UnifiedResponse::tool_call(tool_name, arguments)
        }
        "answer" | "chat" => {
            let content = value
                .get("content")
                .and_then(|v| v.as_str())
                .ok_or_else(|| {
                    DomainError::MalformedDecision(format!("{action} without content"))
                })?;
            if action == "answer" {
                UnifiedResponse::answer(content)
            } else {
                UnifiedResponse::chat(content)
            }
        }
        other => {
            return Err(DomainError::MalformedDecision(format!(
                "unknown action: {other}"
            )));
        }
    };

    Ok(Decision {
        response,
        multiple_objects,
    })
}
