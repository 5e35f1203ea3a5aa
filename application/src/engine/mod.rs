//! Unified response generation engine.
//!
//! Drives one request from composed prompt to a guaranteed
//! [`UnifiedResponse`]:
//!
//! 1. Tail inspection — pick up a trailing tool result, if any
//! 2. Prompt composition ([`prompt::DecisionPrompt`])
//! 3. Exactly one primary exchange through [`PromptBackend`]
//! 4. Parse/validate of the returned text
//! 5. Fallback chain on any absorbed failure:
//!    (a) answer derived from the tool result,
//!    (b) heuristic tool call for information queries,
//!    (c) templated apology in the user's detected script
//!
//! Only session-create failures and an unconnected backend escape as
//! errors; every other failure mode degrades into a valid response.

pub mod prompt;

use crate::ports::backend::{ExchangeError, PromptBackend};
use prompt::DecisionPrompt;
use relay_domain::{
    ConversationContext, Role, UnifiedResponse, apology, detect_script, is_information_query,
    last_user_message, parse_decision, truncate_str,
};
use serde_json::Map;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// The engine's result: one response plus the measured wall-clock time.
#[derive(Debug, Clone)]
pub struct EngineOutcome {
    pub response: UnifiedResponse,
    /// Wall-clock time across all backend exchanges this request performed
    pub elapsed_ms: u64,
}

/// Unified response generation engine.
///
/// Stateless across requests; the only shared resource is the injected
/// backend handle.
pub struct ResponseEngine {
    backend: Arc<dyn PromptBackend>,
}

impl ResponseEngine {
    pub fn new(backend: Arc<dyn PromptBackend>) -> Self {
        Self { backend }
    }

    /// Generate exactly one [`UnifiedResponse`] for the request.
    ///
    /// Errors only on the two fatal preconditions
    /// ([`ExchangeError::is_fatal`]); everything else falls through the
    /// fallback chain.
    pub async fn generate(
        &self,
        context: &ConversationContext,
        model: &str,
    ) -> Result<EngineOutcome, ExchangeError> {
        let started = Instant::now();
        let user_text = last_user_message(&context.history).to_string();
        let tool_result = extract_tool_result(context);

        info!(
            model,
            has_tool_result = tool_result.is_some(),
            "Generating response for: {}",
            truncate_str(&user_text, 100)
        );

        let decision_prompt = DecisionPrompt::decision(context, tool_result.as_deref());
        let title = session_title(&user_text);

        let primary = self
            .backend
            .exchange(&title, &context.system_context, &decision_prompt, model)
            .await;

        let failure = match primary {
            Ok(reply) => match parse_decision(&reply.text) {
                Ok(decision) => {
                    if decision.multiple_objects {
                        warn!("Backend emitted multiple JSON objects; using the first");
                    }
                    return Ok(self.outcome(decision.response, started));
                }
                Err(e) => {
                    debug!("Raw backend text was not a valid decision: {}", e);
                    e.to_string()
                }
            },
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => e.to_string(),
        };

        warn!("Primary decision failed ({failure}); entering fallback chain");

        // (a) Derive a short answer from the tool result
        if let Some(result) = &tool_result {
            let answer_prompt = DecisionPrompt::answer_from_tool_result(&user_text, result);
            match self
                .backend
                .exchange(&title, "", &answer_prompt, model)
                .await
            {
                Ok(reply) if !reply.text.trim().is_empty() => {
                    info!("Fallback: answered from tool result");
                    let answer = UnifiedResponse::answer(reply.text.trim());
                    return Ok(self.outcome(answer, started));
                }
                Ok(_) => debug!("Fallback answer was empty"),
                Err(e) => debug!("Fallback answer exchange failed: {}", e),
            }
        }

        // (b) Heuristic tool call for information queries
        if is_information_query(&user_text)
            && let Some(tool) = context.tools.find_query_tool()
        {
            info!("Fallback: heuristic tool call to {}", tool.name);
            let call = UnifiedResponse::tool_call(&tool.name, Map::new());
            return Ok(self.outcome(call, started));
        }

        // (c) Apology in the user's script
        let script = detect_script(&user_text);
        info!("Fallback: apology ({script:?})");
        Ok(self.outcome(UnifiedResponse::chat(apology(script)), started))
    }

    fn outcome(&self, response: UnifiedResponse, started: Instant) -> EngineOutcome {
        EngineOutcome {
            response,
            elapsed_ms: started.elapsed().as_millis() as u64,
        }
    }
}

/// Tail inspection: content of a trailing tool-role turn.
///
/// If the content parses as JSON with a `result` field, that field's value
/// is the effective result text; otherwise the raw content is used as-is.
fn extract_tool_result(context: &ConversationContext) -> Option<String> {
    let last = context.history.last()?;
    if last.role != Role::Tool {
        return None;
    }

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&last.content)
        && let Some(result) = value.get("result")
    {
        return Some(match result {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        });
    }

    Some(last.content.clone())
}

/// Session title shown on the remote side, derived from the user's text.
fn session_title(user_text: &str) -> String {
    let trimmed = user_text.trim();
    if trimmed.is_empty() {
        "session-relay".to_string()
    } else {
        truncate_str(trimmed, 48).to_string()
    }
}
