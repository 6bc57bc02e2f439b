//! Tool Registry - the wellness tools advertised to chat models.
//!
//! # Example
//!
//! ```
//! use tabi::domain::conversation::tools::{ToolRegistry, ADD_GOAL};
//!
//! let registry = ToolRegistry::wellness();
//! assert!(registry.get_tool(ADD_GOAL).is_some());
//! assert_eq!(registry.to_openai_format().len(), 2);
//! ```

use serde::Deserialize;

use super::ToolDefinition;
use crate::domain::wellness::{Timeframe, DEFAULT_DURATION_WEEKS};

/// Creates a goal for the current user.
pub const ADD_GOAL: &str = "add_goal";

/// Older name for `add_goal` that some models still emit.
pub const ADD_GOAL_ALIAS: &str = "add_goal_tool";

/// Lists the categories a goal can be filed under.
pub const LIST_GOAL_CATEGORIES: &str = "list_goal_categories";

/// Arguments accepted by `add_goal`.
///
/// `user_id` is never advertised to the model; it is injected before dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddGoalArguments {
    #[serde(default)]
    pub user_id: Option<String>,
    pub goal_name: String,
    pub goal_description: String,
    pub category_slug: String,
    #[serde(default)]
    pub timeframe: Timeframe,
    #[serde(default = "default_reminder")]
    pub reminder_enabled: bool,
    #[serde(default = "default_duration")]
    pub duration_weeks: u32,
}

fn default_reminder() -> bool {
    true
}

fn default_duration() -> u32 {
    DEFAULT_DURATION_WEEKS
}

/// The set of tools a chat model may call.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
}

impl ToolRegistry {
    /// Creates a new empty tool registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The goal tools every persona gets.
    pub fn wellness() -> Self {
        let mut registry = Self::new();
        registry.register(add_goal_definition());
        registry.register(list_goal_categories_definition());
        registry
    }

    /// Registers a tool, replacing any tool with the same name.
    pub fn register(&mut self, definition: ToolDefinition) {
        self.tools.retain(|t| t.name() != definition.name());
        self.tools.push(definition);
    }

    /// Gets a tool definition by name, resolving the `add_goal` alias.
    pub fn get_tool(&self, name: &str) -> Option<&ToolDefinition> {
        let name = canonical_tool_name(name);
        self.tools.iter().find(|t| t.name() == name)
    }

    pub fn definitions(&self) -> &[ToolDefinition] {
        &self.tools
    }

    /// All tools in OpenAI function-calling format, in registration order.
    pub fn to_openai_format(&self) -> Vec<serde_json::Value> {
        self.tools.iter().map(ToolDefinition::to_openai_format).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Maps tool aliases to their canonical name.
pub fn canonical_tool_name(name: &str) -> &str {
    if name == ADD_GOAL_ALIAS {
        ADD_GOAL
    } else {
        name
    }
}

fn add_goal_definition() -> ToolDefinition {
    ToolDefinition::new(
        ADD_GOAL,
        "Create a new wellness goal for the user. Call this once the goal name and wellness category are known.",
        serde_json::json!({
            "type": "object",
            "required": ["goal_name", "goal_description", "category_slug"],
            "properties": {
                "goal_name": {
                    "type": "string",
                    "description": "Short title for the goal (50 characters or fewer)"
                },
                "goal_description": {
                    "type": "string",
                    "description": "What the user wants to achieve, in their words"
                },
                "category_slug": {
                    "type": "string",
                    "enum": ["physical", "mental", "spiritual", "vocational", "environmental", "financial", "social", "intellectual"],
                    "description": "Wellness dimension the goal belongs to"
                },
                "timeframe": {
                    "type": "string",
                    "enum": ["Week", "Month", "Quarter", "Year"],
                    "default": "Month",
                    "description": "How often the goal is checked in on"
                },
                "reminder_enabled": {
                    "type": "boolean",
                    "default": true
                },
                "duration_weeks": {
                    "type": "integer",
                    "minimum": 1,
                    "default": 6,
                    "description": "How many weeks the goal runs for"
                }
            }
        }),
    )
}

fn list_goal_categories_definition() -> ToolDefinition {
    ToolDefinition::new(
        LIST_GOAL_CATEGORIES,
        "List the wellness categories a goal can belong to.",
        serde_json::json!({
            "type": "object",
            "properties": {}
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wellness_registry_has_both_tools_in_order() {
        let registry = ToolRegistry::wellness();
        let names: Vec<&str> = registry.definitions().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec![ADD_GOAL, LIST_GOAL_CATEGORIES]);
    }

    #[test]
    fn alias_resolves_to_add_goal() {
        let registry = ToolRegistry::wellness();
        assert_eq!(registry.get_tool(ADD_GOAL_ALIAS).unwrap().name(), ADD_GOAL);
        assert!(registry.get_tool("foo").is_none());
    }

    #[test]
    fn user_id_is_not_advertised() {
        let registry = ToolRegistry::wellness();
        let schema = registry.get_tool(ADD_GOAL).unwrap().parameters_schema();
        assert!(schema["properties"].get("user_id").is_none());
        assert!(!schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .any(|v| v == "user_id"));
    }

    #[test]
    fn register_replaces_same_name() {
        let mut registry = ToolRegistry::wellness();
        registry.register(ToolDefinition::new(ADD_GOAL, "v2", serde_json::json!({})));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get_tool(ADD_GOAL).unwrap().description(), "v2");
    }

    #[test]
    fn add_goal_arguments_apply_defaults() {
        let args: AddGoalArguments = serde_json::from_value(serde_json::json!({
            "goal_name": "Save",
            "goal_description": "Save more",
            "category_slug": "financial",
            "user_id": "uid-1"
        }))
        .unwrap();

        assert_eq!(args.timeframe, Timeframe::Month);
        assert!(args.reminder_enabled);
        assert_eq!(args.duration_weeks, 6);
        assert_eq!(args.user_id.as_deref(), Some("uid-1"));
    }

    #[test]
    fn add_goal_arguments_require_name() {
        let result: Result<AddGoalArguments, _> = serde_json::from_value(serde_json::json!({
            "goal_description": "Save more",
            "category_slug": "financial"
        }));
        assert!(result.is_err());
    }
}
