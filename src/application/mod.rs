//! Application layer - Handlers.
//!
//! This layer sequences domain logic and port calls for each use case:
//! routing, extraction, reply generation, summaries and user context.

pub mod handlers;

pub use handlers::{
    ChatModels, FetchUserContextHandler, GenerateReplyCommand, GenerateReplyHandler,
    GenerateReplyResult, GoalExtractor, MoodExtractor, OrchestratorConfig, RouteMessageHandler,
    SummarizeChatHandler,
};
