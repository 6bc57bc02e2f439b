//! Tool call and response types.
//!
//! These are the request/response value objects for tool execution.

use serde::{Deserialize, Serialize};

/// A model-requested invocation of a tool.
///
/// Arguments are kept as JSON because each tool has its own schema.
///
/// # Examples
///
/// ```ignore
/// use tabi::domain::conversation::tools::ToolCall;
///
/// let call = ToolCall::new(
///     "call_1",
///     "add_goal",
///     serde_json::json!({
///         "goal_name": "Save more money",
///         "goal_description": "Put aside 10% of income",
///         "category_slug": "financial"
///     }),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Provider-assigned call id, echoed back with the result
    id: String,

    /// Name of the tool to invoke
    name: String,

    /// Arguments for the tool (JSON object)
    arguments: serde_json::Value,
}

impl ToolCall {
    /// Creates a new tool call.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: serde_json::Value,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &serde_json::Value {
        &self.arguments
    }

    /// Returns a copy of the arguments with `user_id` set.
    ///
    /// Non-object arguments are replaced by an object holding only `user_id`.
    pub fn arguments_with_user(&self, user_id: &str) -> serde_json::Value {
        let mut arguments = match &self.arguments {
            serde_json::Value::Object(map) => map.clone(),
            _ => serde_json::Map::new(),
        };
        arguments.insert(
            "user_id".to_string(),
            serde_json::Value::String(user_id.to_string()),
        );
        serde_json::Value::Object(arguments)
    }

    /// Returns a copy of the arguments with any `user_id` removed.
    ///
    /// Used for anonymous callers, so identity never comes from the model.
    pub fn arguments_without_user(&self) -> serde_json::Value {
        match &self.arguments {
            serde_json::Value::Object(map) => {
                let mut arguments = map.clone();
                arguments.remove("user_id");
                serde_json::Value::Object(arguments)
            }
            other => other.clone(),
        }
    }
}

/// Outcome of a tool execution, as handed back to the model.
///
/// Errors are data: a failed tool produces `{"error": "..."}` rather than
/// aborting the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResponse {
    /// Data returned by the tool (if successful)
    data: Option<serde_json::Value>,

    /// Error message (if failed)
    error: Option<String>,
}

impl ToolResponse {
    /// Creates a successful response with data.
    pub fn success(data: serde_json::Value) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    /// Creates an error response.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn data(&self) -> Option<&serde_json::Value> {
        self.data.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The JSON the model sees as the tool result.
    pub fn to_payload(&self) -> serde_json::Value {
        match (&self.error, &self.data) {
            (Some(error), _) => serde_json::json!({ "error": error }),
            (None, Some(data)) => data.clone(),
            (None, None) => serde_json::Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_call_new_creates_with_arguments() {
        let call = ToolCall::new("call_1", "add_goal", serde_json::json!({"goal_name": "Run"}));

        assert_eq!(call.id(), "call_1");
        assert_eq!(call.name(), "add_goal");
        assert_eq!(call.arguments()["goal_name"], "Run");
    }

    #[test]
    fn arguments_with_user_injects_identity() {
        let call = ToolCall::new("c", "add_goal", serde_json::json!({"goal_name": "Run"}));
        let args = call.arguments_with_user("uid-7");

        assert_eq!(args["user_id"], "uid-7");
        assert_eq!(args["goal_name"], "Run");
        assert!(call.arguments().get("user_id").is_none());
    }

    #[test]
    fn arguments_with_user_overrides_model_supplied_identity() {
        let call = ToolCall::new("c", "add_goal", serde_json::json!({"user_id": "someone-else"}));
        assert_eq!(call.arguments_with_user("uid-7")["user_id"], "uid-7");
    }

    #[test]
    fn arguments_with_user_handles_non_objects() {
        let call = ToolCall::new("c", "list_goal_categories", serde_json::Value::Null);
        assert_eq!(call.arguments_with_user("u"), serde_json::json!({"user_id": "u"}));
    }

    #[test]
    fn arguments_without_user_strips_model_identity() {
        let call = ToolCall::new("c1", "add_goal", serde_json::json!({"user_id": "x", "goal_name": "Run"}));
        assert_eq!(call.arguments_without_user(), serde_json::json!({"goal_name": "Run"}));
    }

    #[test]
    fn tool_response_success_payload_is_data() {
        let response = ToolResponse::success(serde_json::json!({"id": "123"}));

        assert!(response.is_success());
        assert_eq!(response.to_payload(), serde_json::json!({"id": "123"}));
    }

    #[test]
    fn tool_response_error_payload_has_error_key() {
        let response = ToolResponse::error("Unknown tool: foo");

        assert!(!response.is_success());
        assert_eq!(response.error_message(), Some("Unknown tool: foo"));
        assert_eq!(response.to_payload(), serde_json::json!({"error": "Unknown tool: foo"}));
    }
}
