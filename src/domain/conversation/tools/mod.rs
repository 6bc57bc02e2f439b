//! Tools the chat models can call.

mod tool_call;
mod tool_definition;
mod tool_registry;

pub use tool_call::{ToolCall, ToolResponse};
pub use tool_definition::ToolDefinition;
pub use tool_registry::{
    canonical_tool_name, AddGoalArguments, ToolRegistry, ADD_GOAL, ADD_GOAL_ALIAS,
    LIST_GOAL_CATEGORIES,
};
