//! HTTP handlers for the mood endpoint.

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use super::dto::{MoodExtractRequest, MoodExtractResponse};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::AppState;
use crate::domain::foundation::UserId;

/// Extract a mood check-in from free text.
///
/// POST /api/mood/extract
pub async fn extract_mood(
    State(state): State<AppState>,
    Json(request): Json<MoodExtractRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if request.message.trim().is_empty() {
        return Err(ApiError::bad_request(
            "EMPTY_MESSAGE",
            "message must not be empty",
        ));
    }

    let user_id = request.uid.and_then(|uid| UserId::new(uid).ok());
    let details = state.mood.extract(&request.message, user_id.as_ref()).await;

    Ok(Json(MoodExtractResponse::from(details)))
}
