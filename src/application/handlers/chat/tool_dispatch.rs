//! Tool dispatch - runs one model-requested tool call.

use crate::domain::conversation::tools::{ToolCall, ToolResponse};
use crate::domain::foundation::UserId;
use crate::ports::ToolExecutor;

/// Runs a tool call with the caller identity injected.
///
/// The caller's `user_id` overrides whatever the model put in the arguments.
/// Without a caller identity any model-supplied `user_id` is dropped.
/// Failures come back as an error response for the model, never as `Err`.
pub async fn dispatch_tool(
    executor: &dyn ToolExecutor,
    call: &ToolCall,
    user_id: Option<&UserId>,
) -> ToolResponse {
    let arguments = match user_id {
        Some(user_id) => call.arguments_with_user(user_id.as_str()),
        None => call.arguments_without_user(),
    };
    let call = ToolCall::new(call.id(), call.name(), arguments);

    match executor.execute(&call).await {
        Ok(data) => {
            tracing::info!(tool = call.name(), "tool executed");
            ToolResponse::success(data)
        }
        Err(err) => {
            tracing::warn!(tool = call.name(), error = %err, "tool execution failed");
            ToolResponse::error(err.to_string())
        }
    }
}
