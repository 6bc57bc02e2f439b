//! Wellness Tool Executor - runs `add_goal` and `list_goal_categories`.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

use crate::domain::conversation::tools::{
    canonical_tool_name, AddGoalArguments, ToolCall, ADD_GOAL, LIST_GOAL_CATEGORIES,
};
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::wellness::{Goal, NewGoal, WellnessCategory};
use crate::ports::{GoalRepository, ToolExecutionError, ToolExecutor};

/// Executes wellness tools against a goal repository.
#[derive(Clone)]
pub struct WellnessToolExecutor {
    goals: Arc<dyn GoalRepository>,
}

impl WellnessToolExecutor {
    pub fn new(goals: Arc<dyn GoalRepository>) -> Self {
        Self { goals }
    }

    async fn add_goal(&self, arguments: &serde_json::Value) -> Result<serde_json::Value, ToolExecutionError> {
        let args: AddGoalArguments = serde_json::from_value(arguments.clone())
            .map_err(|e| ToolExecutionError::invalid_arguments(e.to_string()))?;
        let user_id = UserId::new(args.user_id.unwrap_or_default())?;

        // The app and the store disagree on one slug.
        let stored_slug = args
            .category_slug
            .parse::<WellnessCategory>()
            .map(|c| c.stored_slug().to_string())
            .unwrap_or_else(|_| args.category_slug.trim().to_lowercase());

        let category = self
            .goals
            .find_category_by_slug(&stored_slug)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::CategoryNotFound,
                    format!("Category with slug '{}' not found.", stored_slug),
                )
            })?;
        let wellness_category = category.slug.parse::<WellnessCategory>()?;

        let new_goal = NewGoal::new(user_id, args.goal_name, args.goal_description, wellness_category)?
            .with_time_frame(args.timeframe)
            .with_reminder(args.reminder_enabled)
            .with_duration_weeks(args.duration_weeks)?;
        let goal = Goal::create(new_goal, &category, Utc::now());
        self.goals.save(&goal).await?;

        tracing::info!(goal_id = %goal.id, category = %category.slug, "goal created");
        serde_json::to_value(&goal).map_err(|e| {
            ToolExecutionError::Domain(DomainError::new(ErrorCode::InternalError, e.to_string()))
        })
    }

    async fn list_goal_categories(&self) -> Result<serde_json::Value, ToolExecutionError> {
        let categories = self.goals.list_categories().await?;
        let categories: Vec<serde_json::Value> = categories
            .into_iter()
            .map(|c| {
                json!({
                    "id": c.id,
                    "name": c.name,
                    "slug": c.slug,
                    "description": c.description,
                })
            })
            .collect();
        Ok(json!({ "categories": categories }))
    }
}

#[async_trait]
impl ToolExecutor for WellnessToolExecutor {
    async fn execute(&self, call: &ToolCall) -> Result<serde_json::Value, ToolExecutionError> {
        match canonical_tool_name(call.name()) {
            ADD_GOAL => self.add_goal(call.arguments()).await,
            LIST_GOAL_CATEGORIES => self.list_goal_categories().await,
            other => Err(ToolExecutionError::UnknownTool(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryWellnessStore;
    use crate::domain::conversation::tools::ADD_GOAL_ALIAS;

    fn executor() -> (WellnessToolExecutor, InMemoryWellnessStore) {
        let store = InMemoryWellnessStore::seeded();
        (WellnessToolExecutor::new(Arc::new(store.clone())), store)
    }

    fn add_goal_call(name: &str, arguments: serde_json::Value) -> ToolCall {
        ToolCall::new("call_1", name, arguments)
    }

    #[tokio::test]
    async fn add_goal_stores_and_returns_record() {
        let (executor, store) = executor();
        let call = add_goal_call(
            ADD_GOAL,
            json!({
                "user_id": "uid-1",
                "goal_name": "Budget",
                "goal_description": "Track spending",
                "category_slug": "financial",
                "duration_weeks": 2
            }),
        );

        let result = executor.execute(&call).await.unwrap();

        assert_eq!(result["goalName"], "Budget");
        assert_eq!(result["timeFrame"], "Month");
        assert_eq!(result["goalReminder"], true);
        assert_eq!(result["status"], true);
        assert_eq!(result["user_id"], "uid-1");
        assert_eq!(result["wellnessDimension"], "cat-financial");
        assert_eq!(result["wellnessDimension_ref"], "/goals_categories/cat-financial");
        assert!(result["id"].as_str().is_some());
        assert_eq!(store.goal_count().await, 1);

        let start: chrono::DateTime<Utc> = result["startDate"].as_str().unwrap().parse().unwrap();
        let end: chrono::DateTime<Utc> = result["endDate"].as_str().unwrap().parse().unwrap();
        assert_eq!(end - start, chrono::Duration::weeks(2));
    }

    #[tokio::test]
    async fn alias_and_vocational_slug_are_mapped() {
        let (executor, _) = executor();
        let call = add_goal_call(
            ADD_GOAL_ALIAS,
            json!({
                "user_id": "uid-1",
                "goal_name": "Get certified",
                "goal_description": "Finish the AWS cert",
                "category_slug": "vocational",
                "timeframe": "quarterly"
            }),
        );

        let result = executor.execute(&call).await.unwrap();

        assert_eq!(result["wellnessDimension"], "cat-occupational");
        assert_eq!(result["timeFrame"], "Quarter");
    }

    #[tokio::test]
    async fn unknown_category_is_reported() {
        let (executor, _) = executor();
        let call = add_goal_call(
            ADD_GOAL,
            json!({
                "user_id": "uid-1",
                "goal_name": "Fly",
                "goal_description": "Learn to fly",
                "category_slug": "astral"
            }),
        );

        let err = executor.execute(&call).await.unwrap_err();

        assert_eq!(err.to_string(), "Category with slug 'astral' not found.");
    }

    #[tokio::test]
    async fn add_goal_requires_user_id() {
        let (executor, store) = executor();
        let call = add_goal_call(
            ADD_GOAL,
            json!({"goal_name": "Run", "goal_description": "5k", "category_slug": "physical"}),
        );

        let err = executor.execute(&call).await.unwrap_err();

        assert!(matches!(err, ToolExecutionError::Validation(_)));
        assert_eq!(store.goal_count().await, 0);
    }

    #[tokio::test]
    async fn missing_required_argument_is_invalid() {
        let (executor, _) = executor();
        let call = add_goal_call(ADD_GOAL, json!({"user_id": "uid-1"}));

        let err = executor.execute(&call).await.unwrap_err();

        assert!(matches!(err, ToolExecutionError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn list_goal_categories_returns_all() {
        let (executor, _) = executor();
        let call = ToolCall::new("c", LIST_GOAL_CATEGORIES, json!({"user_id": "uid-1"}));

        let result = executor.execute(&call).await.unwrap();

        let categories = result["categories"].as_array().unwrap();
        assert_eq!(categories.len(), 8);
        assert!(categories.iter().any(|c| c["slug"] == "occupational"));
        assert!(categories[0].get("description").is_some());
    }

    #[tokio::test]
    async fn unknown_tool_is_an_error() {
        let (executor, _) = executor();
        let err = executor
            .execute(&ToolCall::new("c", "foo", json!({})))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Unknown tool: foo");
    }
}
