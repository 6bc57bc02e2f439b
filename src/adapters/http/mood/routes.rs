//! Axum router configuration for the mood endpoint.

use axum::{routing::post, Router};

use super::handlers::extract_mood;
use crate::adapters::http::AppState;

/// Create the mood API router.
///
/// Suitable for mounting at `/api/mood`.
pub fn mood_routes() -> Router<AppState> {
    Router::new().route("/extract", post(extract_mood))
}
