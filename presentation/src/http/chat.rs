//! The chat endpoint.

use crate::http::state::AppState;
use crate::wire::adapter;
use crate::wire::types::{ChatRequest, ErrorResponse};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use relay_domain::{ConversationContext, DomainError, ensure_known_tool};
use tracing::{error, info};

/// `POST /api/chat`
///
/// Validation failures (no user turn) and the two fatal backend errors are
/// the only caller-visible failures; everything else arrives as a normal
/// chat response thanks to the engine's fallback chain. Streaming is not
/// supported — `stream: true` is answered with one final chunk.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    let messages = adapter::messages_from_wire(&request.messages);
    let tools = adapter::tools_from_wire(request.tools.as_deref());
    let context = ConversationContext::build(messages, tools);

    if !context.history.has_user_message() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: DomainError::NoUserMessage.to_string(),
            }),
        )
            .into_response();
    }

    info!(
        model = %request.model,
        turns = context.history.len(),
        tools = context.tools.len(),
        "chat request"
    );

    match state.engine.generate(&context, &request.model).await {
        Ok(mut outcome) => {
            outcome.response = ensure_known_tool(outcome.response, &context.tools);
            Json(adapter::chat_response(&request.model, &outcome)).into_response()
        }
        Err(e) => {
            error!("Engine failed fatally: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse { error: e.to_string() }),
            )
                .into_response()
        }
    }
}
