//! RouteMessageHandler - Classify a message into a wellness domain.

use std::sync::Arc;

use crate::domain::conversation::{parse_route_token, ROUTER_INSTRUCTION};
use crate::domain::foundation::UserId;
use crate::domain::wellness::DomainLabel;
use crate::ports::{AIProvider, CompletionRequest, Message, RequestMetadata, RequestPurpose};

/// Handler for routing a user message to a persona domain.
///
/// Routing never fails: an unusable reply or a transport error routes to
/// the general persona.
#[derive(Clone)]
pub struct RouteMessageHandler {
    provider: Arc<dyn AIProvider>,
}

impl RouteMessageHandler {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self { provider }
    }

    pub async fn handle(&self, message: &str, user_id: Option<&UserId>) -> DomainLabel {
        let metadata = RequestMetadata::new(RequestPurpose::Routing).with_user(user_id.cloned());
        let request = CompletionRequest::new(metadata)
            .with_messages([Message::system(ROUTER_INSTRUCTION), Message::user(message)]);

        match self.provider.complete(request).await {
            Ok(response) => {
                let label = parse_route_token(&response.content);
                tracing::debug!(domain = %label, raw = %response.content.trim(), "message routed");
                label
            }
            Err(err) => {
                tracing::warn!(error = %err, "routing failed, using main persona");
                DomainLabel::Main
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::domain::wellness::WellnessCategory;

    #[tokio::test]
    async fn routes_on_exact_token() {
        let provider = MockAIProvider::new().with_response("  Financial\n");
        let handler = RouteMessageHandler::new(Arc::new(provider.clone()));

        let label = handler.handle("I keep overspending", None).await;

        assert_eq!(label, DomainLabel::Wellness(WellnessCategory::Financial));
        let call = &provider.get_calls()[0];
        assert_eq!(call.messages[0].content, ROUTER_INSTRUCTION);
        assert_eq!(call.messages[1].content, "I keep overspending");
        assert!(call.tools.is_empty());
    }

    #[tokio::test]
    async fn unknown_reply_routes_to_main() {
        let provider = MockAIProvider::new().with_response("I think this is about money");
        let handler = RouteMessageHandler::new(Arc::new(provider));

        assert_eq!(handler.handle("hello", None).await, DomainLabel::Main);
    }

    #[tokio::test]
    async fn transport_error_routes_to_main() {
        let provider = MockAIProvider::new().with_error(MockError::Timeout { timeout_secs: 30 });
        let handler = RouteMessageHandler::new(Arc::new(provider));

        assert_eq!(handler.handle("hello", None).await, DomainLabel::Main);
    }

    #[tokio::test]
    async fn carries_user_identity() {
        let provider = MockAIProvider::new().with_response("social");
        let handler = RouteMessageHandler::new(Arc::new(provider.clone()));
        let user = UserId::new("uid-1").unwrap();

        handler.handle("lonely lately", Some(&user)).await;

        assert_eq!(provider.get_calls()[0].metadata.user_id, Some(user));
    }
}
