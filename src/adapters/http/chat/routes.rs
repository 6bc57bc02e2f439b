//! Axum router configuration for chat endpoints.

use axum::{routing::post, Router};

use super::handlers::{send_message, summarize};
use crate::adapters::http::AppState;

/// Create the chat API router.
///
/// # Routes
///
/// - `POST /` - Answer a chat message
/// - `POST /summary` - Title a conversation
///
/// Suitable for mounting at `/api/chat`.
pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(send_message))
        .route("/summary", post(summarize))
}
