//! Chat handlers - reply generation, tool dispatch and summaries.

mod reply;
mod summarize;
mod tool_dispatch;

pub use reply::{
    ChatModels, GenerateReplyCommand, GenerateReplyHandler, GenerateReplyResult,
    OrchestratorConfig, ReplyStage,
};
pub use summarize::{SummarizeChatHandler, SUMMARY_INSTRUCTION};
pub use tool_dispatch::dispatch_tool;
