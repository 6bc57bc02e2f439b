//! HTTP adapters - REST API implementations.
//!
//! Each endpoint group has its own module with `dto`, `handlers` and
//! `routes`. All groups share one `AppState`.

pub mod chat;
pub mod error;
pub mod mood;
pub mod voice;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::application::handlers::{
    FetchUserContextHandler, GenerateReplyHandler, MoodExtractor, SummarizeChatHandler,
};
use crate::ports::SpeechService;

pub use chat::chat_routes;
pub use error::{ApiError, ErrorResponse};
pub use mood::mood_routes;
pub use voice::voice_routes;

/// Shared application state containing all dependencies.
///
/// Cloned for each request; everything inside is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub reply: Arc<GenerateReplyHandler>,
    pub summarizer: Arc<SummarizeChatHandler>,
    pub user_context: Arc<FetchUserContextHandler>,
    pub mood: Arc<MoodExtractor>,
    /// `None` when voice is disabled; voice endpoints answer 503.
    pub speech: Option<Arc<dyn SpeechService>>,
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Builds the complete API router with CORS and request tracing.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/chat", chat_routes())
        .nest("/api/mood", mood_routes())
        .nest("/api/voice", voice_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
