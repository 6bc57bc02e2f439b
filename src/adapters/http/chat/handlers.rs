//! HTTP handlers for chat endpoints.

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::application::handlers::GenerateReplyCommand;
use crate::domain::conversation::{sanitize_history, ChatTurn};
use crate::domain::foundation::UserId;
use crate::domain::wellness::DomainLabel;

use super::dto::{ChatRequest, ChatResponse, SummaryRequest, SummaryResponse};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::AppState;

/// Answer one chat message.
///
/// POST /api/chat
///
/// Model failures become fallback replies; only an empty message is rejected.
pub async fn send_message(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err(ApiError::bad_request(
            "EMPTY_MESSAGE",
            "message must not be empty",
        ));
    }

    let user_id = request.uid.and_then(|uid| UserId::new(uid).ok());
    let domain_hint = request
        .domain
        .as_deref()
        .and_then(|d| DomainLabel::from_token(&d.trim().to_lowercase()));

    let mut history = sanitize_history(&request.history);
    history.push(ChatTurn::user(message));

    let user_context = match user_id {
        Some(ref id) => Some(state.user_context.handle(Some(id)).await),
        None => None,
    };

    let cmd = GenerateReplyCommand::new(history)
        .with_domain_hint(domain_hint)
        .with_user_context(user_context)
        .with_user_id(user_id)
        .with_pending(request.pending);

    let result = state.reply.handle(cmd).await;
    tracing::info!(domain = %result.domain, stage = ?result.stage, "chat reply sent");

    Ok(Json(ChatResponse {
        reply: result.reply,
        domain: result.domain.as_str().to_string(),
        pending: result.pending,
    }))
}

/// Title a conversation.
///
/// POST /api/chat/summary
pub async fn summarize(
    State(state): State<AppState>,
    Json(request): Json<SummaryRequest>,
) -> impl IntoResponse {
    let summary = state.summarizer.handle(&request.messages).await;
    Json(SummaryResponse { summary })
}
