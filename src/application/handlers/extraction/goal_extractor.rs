//! Goal extraction: pattern stage plus a title fallback.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::extraction::{truncate_title, GoalDetails};
use crate::domain::foundation::UserId;
use crate::ports::{AIError, AIProvider, CompletionRequest, Message, RequestMetadata, RequestPurpose};

/// Instruction for the title fallback model.
pub const GOAL_TITLE_INSTRUCTION: &str = "Return a concise (≤50 chars) goal title:";

/// Supplies a goal title when no phrasing template matched.
#[async_trait]
pub trait GoalTitleFallback: Send + Sync {
    async fn suggest_title(
        &self,
        message: &str,
        user_id: Option<&UserId>,
    ) -> Result<String, AIError>;
}

/// Asks a chat model for a short title.
pub struct ModelGoalTitleFallback {
    provider: Arc<dyn AIProvider>,
}

impl ModelGoalTitleFallback {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl GoalTitleFallback for ModelGoalTitleFallback {
    async fn suggest_title(
        &self,
        message: &str,
        user_id: Option<&UserId>,
    ) -> Result<String, AIError> {
        let metadata = RequestMetadata::new(RequestPurpose::GoalTitle).with_user(user_id.cloned());
        let request = CompletionRequest::new(metadata)
            .with_messages([Message::system(GOAL_TITLE_INSTRUCTION), Message::user(message)]);

        let response = self.provider.complete(request).await?;
        Ok(response.content)
    }
}

/// Runs the pattern stage and, when needed, the title fallback.
#[derive(Clone)]
pub struct GoalExtractor {
    fallback: Arc<dyn GoalTitleFallback>,
}

impl GoalExtractor {
    pub fn new(fallback: Arc<dyn GoalTitleFallback>) -> Self {
        Self { fallback }
    }

    /// Extracts goal details from free text.
    ///
    /// The fallback is only consulted when no template produced a name. Its
    /// answer is truncated to the title limit whatever it returns.
    pub async fn extract(
        &self,
        message: &str,
        user_id: Option<&UserId>,
    ) -> Result<GoalDetails, AIError> {
        let mut details = GoalDetails::scan(message);

        if details.name.is_none() {
            let title = self.fallback.suggest_title(message, user_id).await?;
            let title = truncate_title(&title);
            tracing::debug!(title = %title, "goal title from fallback");
            details.set_name(&title);
        }

        Ok(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::domain::extraction::GoalField;
    use crate::domain::wellness::WellnessCategory;

    fn extractor(provider: MockAIProvider) -> GoalExtractor {
        GoalExtractor::new(Arc::new(ModelGoalTitleFallback::new(Arc::new(provider))))
    }

    #[tokio::test]
    async fn template_match_skips_the_model() {
        let provider = MockAIProvider::new();
        let details = extractor(provider.clone())
            .extract("I want to save more money", None)
            .await
            .unwrap();

        assert_eq!(details.name.as_deref(), Some("save more money"));
        assert_eq!(details.category, Some(WellnessCategory::Financial));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn fallback_title_is_truncated() {
        let long_title = "x".repeat(80);
        let provider = MockAIProvider::new().with_response(format!("  {}  ", long_title));
        let details = extractor(provider.clone())
            .extract("Recycling more at home", None)
            .await
            .unwrap();

        assert_eq!(details.name.as_deref().map(|n| n.chars().count()), Some(50));
        assert_eq!(details.category, Some(WellnessCategory::Environmental));
        assert!(details.is_complete());

        let calls = provider.get_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].messages[0].content, GOAL_TITLE_INSTRUCTION);
        assert_eq!(calls[0].messages[1].content, "Recycling more at home");
    }

    #[tokio::test]
    async fn empty_fallback_title_leaves_name_missing() {
        let provider = MockAIProvider::new().with_response("   ");
        let details = extractor(provider).extract("hmm", None).await.unwrap();

        assert_eq!(details.missing_fields, vec![GoalField::Name, GoalField::Category]);
    }

    #[tokio::test]
    async fn fallback_transport_error_is_returned() {
        let provider = MockAIProvider::new().with_error(MockError::Network {
            message: "reset".into(),
        });
        let result = extractor(provider).extract("hmm", None).await;

        assert!(matches!(result, Err(AIError::Network(_))));
    }
}
