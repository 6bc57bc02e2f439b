//! Axum router configuration for voice endpoints.

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use super::handlers::{speak, transcribe};
use crate::adapters::http::AppState;

/// Upload cap of the transcription endpoint (25 MB).
const MAX_AUDIO_BYTES: usize = 25 * 1024 * 1024;

/// Create the voice API router.
///
/// # Routes
///
/// - `POST /transcribe` - Audio body to text
/// - `POST /speak` - Text to MP3
///
/// Suitable for mounting at `/api/voice`.
pub fn voice_routes() -> Router<AppState> {
    Router::new()
        .route("/transcribe", post(transcribe))
        .route("/speak", post(speak))
        .layer(DefaultBodyLimit::max(MAX_AUDIO_BYTES))
}
