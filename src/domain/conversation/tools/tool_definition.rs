//! Tool definition - schema and metadata for a tool.
//!
//! Defines the interface for a tool that the model can invoke.

use serde::{Deserialize, Serialize};

/// Definition of a tool that can be invoked by the model.
///
/// # Examples
///
/// ```ignore
/// use tabi::domain::conversation::tools::ToolDefinition;
///
/// let definition = ToolDefinition::new(
///     "list_goal_categories",
///     "List the wellness categories a goal can belong to",
///     serde_json::json!({ "type": "object", "properties": {} }),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "add_goal")
    name: String,

    /// Human-readable description for the model
    description: String,

    /// JSON Schema for the parameters
    parameters_schema: serde_json::Value,
}

impl ToolDefinition {
    /// Creates a new tool definition.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters_schema: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters_schema,
        }
    }

    /// Returns the tool name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the parameters schema.
    pub fn parameters_schema(&self) -> &serde_json::Value {
        &self.parameters_schema
    }

    /// Converts to OpenAI tool format.
    ///
    /// DeepSeek accepts the same structure.
    pub fn to_openai_format(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": self.parameters_schema
            }
        })
    }
}
