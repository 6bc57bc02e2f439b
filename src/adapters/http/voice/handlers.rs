//! HTTP handlers for voice endpoints.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Json, Query, State};
use axum::http::header;
use axum::response::IntoResponse;

use super::dto::{SpeakRequest, TranscribeQuery, TranscribeResponse};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::AppState;
use crate::ports::SpeechService;

fn speech(state: &AppState) -> Result<Arc<dyn SpeechService>, ApiError> {
    state
        .speech
        .clone()
        .ok_or_else(|| ApiError::service_unavailable("voice is not configured"))
}

/// Transcribe uploaded audio.
///
/// POST /api/voice/transcribe?ext=.m4a
pub async fn transcribe(
    State(state): State<AppState>,
    Query(query): Query<TranscribeQuery>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let speech = speech(&state)?;
    let text = speech.transcribe(body.to_vec(), &query.ext).await.map_err(|err| {
        tracing::warn!(error = %err, "transcription failed");
        ApiError::from(err)
    })?;

    Ok(Json(TranscribeResponse { text }))
}

/// Synthesize speech as MP3.
///
/// POST /api/voice/speak
pub async fn speak(
    State(state): State<AppState>,
    Json(request): Json<SpeakRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let speech = speech(&state)?;
    let audio = speech
        .synthesize(&request.text, request.voice.as_deref())
        .await
        .map_err(|err| {
            tracing::warn!(error = %err, "speech synthesis failed");
            ApiError::from(err)
        })?;

    Ok(([(header::CONTENT_TYPE, "audio/mpeg")], audio))
}
