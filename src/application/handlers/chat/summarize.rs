//! SummarizeChatHandler - short titles for the chat list.

use std::sync::Arc;

use crate::domain::conversation::{
    sanitize_history, ChatRole, RawTurn, EMPTY_SUMMARY, FAILED_SUMMARY,
};
use crate::ports::{AIProvider, CompletionRequest, Message, RequestMetadata, RequestPurpose};

/// Instruction for the title model.
pub const SUMMARY_INSTRUCTION: &str = "You're a helpful assistant that creates short, concise titles (max 4 words) \
to summarize a conversation. Respond with only the title text.";

/// Only the opening of a conversation is summarized.
const SUMMARY_WINDOW: usize = 6;

const MAX_SUMMARY_CHARS: usize = 50;

pub struct SummarizeChatHandler {
    provider: Arc<dyn AIProvider>,
}

impl SummarizeChatHandler {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self { provider }
    }

    /// Produces a title of at most 50 characters. Never fails.
    pub async fn handle(&self, messages: &[RawTurn]) -> String {
        let window = &messages[..messages.len().min(SUMMARY_WINDOW)];
        let turns = sanitize_history(window);
        if turns.is_empty() {
            return EMPTY_SUMMARY.to_string();
        }

        let request = CompletionRequest::new(RequestMetadata::new(RequestPurpose::Summary))
            .with_messages([Message::system(SUMMARY_INSTRUCTION)])
            .with_messages(turns.into_iter().map(|turn| match turn.role {
                ChatRole::User => Message::user(turn.content),
                ChatRole::Assistant => Message::assistant(turn.content),
            }));

        match self.provider.complete(request).await {
            Ok(response) => {
                let title = clean_title(&response.content);
                if title.is_empty() {
                    FAILED_SUMMARY.to_string()
                } else {
                    title
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "chat summary failed");
                FAILED_SUMMARY.to_string()
            }
        }
    }
}

fn clean_title(raw: &str) -> String {
    raw.trim()
        .trim_matches('"')
        .chars()
        .take(MAX_SUMMARY_CHARS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::ports::MessageRole;

    fn handler(provider: &MockAIProvider) -> SummarizeChatHandler {
        SummarizeChatHandler::new(Arc::new(provider.clone()))
    }

    #[tokio::test]
    async fn empty_list_skips_the_model() {
        let provider = MockAIProvider::new();

        assert_eq!(handler(&provider).handle(&[]).await, EMPTY_SUMMARY);
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn list_without_chat_roles_skips_the_model() {
        let provider = MockAIProvider::new();
        let messages = vec![RawTurn::new("system", "setup")];

        assert_eq!(handler(&provider).handle(&messages).await, EMPTY_SUMMARY);
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn strips_quotes_and_truncates() {
        let provider = MockAIProvider::new().with_response(format!("  \"{}\"  ", "a".repeat(70)));
        let messages = vec![RawTurn::new("user", "I want to run a marathon")];

        let title = handler(&provider).handle(&messages).await;

        assert_eq!(title, "a".repeat(50));
    }

    #[tokio::test]
    async fn inner_quotes_are_kept() {
        let provider = MockAIProvider::new().with_response("\"The \"Big\" Move\"");
        let messages = vec![RawTurn::new("user", "We're relocating")];

        assert_eq!(handler(&provider).handle(&messages).await, "The \"Big\" Move");
    }

    #[tokio::test]
    async fn only_first_six_messages_are_sent() {
        let provider = MockAIProvider::new().with_response("Marathon Training Plan");
        let messages: Vec<RawTurn> = (0..10)
            .map(|i| RawTurn::new(if i % 2 == 0 { "user" } else { "assistant" }, format!("m{}", i)))
            .collect();

        let title = handler(&provider).handle(&messages).await;

        assert_eq!(title, "Marathon Training Plan");
        let call = &provider.get_calls()[0];
        assert_eq!(call.messages.len(), 7);
        assert_eq!(call.messages[0].role, MessageRole::System);
        assert_eq!(call.messages[6].content, "m5");
    }

    #[tokio::test]
    async fn failure_and_blank_title_use_placeholder() {
        let messages = vec![RawTurn::new("user", "hi")];

        let failing = MockAIProvider::new().with_error(MockError::Network { message: "x".into() });
        assert_eq!(handler(&failing).handle(&messages).await, FAILED_SUMMARY);

        let blank = MockAIProvider::new().with_response(" \"\" ");
        assert_eq!(handler(&blank).handle(&messages).await, FAILED_SUMMARY);
    }
}
