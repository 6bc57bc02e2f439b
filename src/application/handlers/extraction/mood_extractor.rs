//! Mood extraction: vocabulary scan plus a JSON fallback.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::domain::extraction::{MoodDetails, MoodFallbackReply};
use crate::domain::foundation::UserId;
use crate::ports::{AIError, AIProvider, CompletionRequest, Message, RequestMetadata, RequestPurpose};

/// Instruction for the mood fallback model.
pub const MOOD_JSON_INSTRUCTION: &str = "Extract the following from the user's message:\n\
1. A list of specific emotions (words only, as a JSON list)\n\
2. The overall mood (one word, like 'good', 'bad', or 'neutral')\n\
Reply in strict JSON:\n\
{\"emotions\": [...], \"mood\": \"...\"}";

/// Supplies mood and emotions when the vocabulary scan comes up short.
#[async_trait]
pub trait MoodFallback: Send + Sync {
    /// Returns `Ok(None)` when the model's reply is not the expected JSON.
    async fn suggest(
        &self,
        message: &str,
        user_id: Option<&UserId>,
    ) -> Result<Option<MoodFallbackReply>, AIError>;
}

/// Asks a chat model for strict JSON.
pub struct ModelMoodFallback {
    provider: Arc<dyn AIProvider>,
}

impl ModelMoodFallback {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl MoodFallback for ModelMoodFallback {
    async fn suggest(
        &self,
        message: &str,
        user_id: Option<&UserId>,
    ) -> Result<Option<MoodFallbackReply>, AIError> {
        let metadata =
            RequestMetadata::new(RequestPurpose::MoodExtraction).with_user(user_id.cloned());
        let request = CompletionRequest::new(metadata)
            .with_messages([Message::system(MOOD_JSON_INSTRUCTION), Message::user(message)]);

        let response = self.provider.complete(request).await?;
        let parsed = MoodFallbackReply::parse(&response.content);
        if parsed.is_none() {
            tracing::debug!("mood fallback reply was not valid JSON");
        }
        Ok(parsed)
    }
}

/// Runs the vocabulary scan and, when needed, the fallback.
#[derive(Clone)]
pub struct MoodExtractor {
    fallback: Arc<dyn MoodFallback>,
}

impl MoodExtractor {
    pub fn new(fallback: Arc<dyn MoodFallback>) -> Self {
        Self { fallback }
    }

    /// Extracts a mood check-in. Never fails: fallback problems leave fields unset.
    pub async fn extract(&self, message: &str, user_id: Option<&UserId>) -> MoodDetails {
        let mut details = MoodDetails::scan(message, Utc::now());

        if details.needs_fallback() {
            match self.fallback.suggest(message, user_id).await {
                Ok(Some(reply)) => details.apply_fallback(reply),
                Ok(None) => {}
                Err(err) => tracing::warn!(error = %err, "mood fallback failed"),
            }
        }

        details
    }
}
