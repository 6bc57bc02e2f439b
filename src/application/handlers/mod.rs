//! Application handlers.
//!
//! Handlers that orchestrate domain operations over the ports.

pub mod chat;
pub mod extraction;
pub mod routing;
pub mod user;

pub use chat::{
    dispatch_tool, ChatModels, GenerateReplyCommand, GenerateReplyHandler, GenerateReplyResult,
    OrchestratorConfig, ReplyStage, SummarizeChatHandler,
};
pub use extraction::{
    GoalExtractor, GoalTitleFallback, ModelGoalTitleFallback, ModelMoodFallback, MoodExtractor,
    MoodFallback,
};
pub use routing::RouteMessageHandler;
pub use user::FetchUserContextHandler;
