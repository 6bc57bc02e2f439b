//! PostgreSQL implementation of GoalRepository.
//!
//! Persists goals and reads goal categories.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, GoalId, UserId};
use crate::domain::wellness::{Goal, GoalCategory, Timeframe};
use crate::ports::GoalRepository;

/// PostgreSQL implementation of GoalRepository.
#[derive(Clone)]
pub struct PostgresGoalRepository {
    pool: PgPool,
}

impl PostgresGoalRepository {
    /// Creates a new PostgresGoalRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GoalRepository for PostgresGoalRepository {
    async fn save(&self, goal: &Goal) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO goals (
                id, user_id, goal_name, goal_description, time_frame,
                goal_reminder, status, start_date, end_date, category_id
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(goal.id.as_uuid())
        .bind(goal.user_id.as_str())
        .bind(&goal.goal_name)
        .bind(&goal.goal_description)
        .bind(goal.time_frame.as_str())
        .bind(goal.goal_reminder)
        .bind(goal.status)
        .bind(goal.start_date)
        .bind(goal.end_date)
        .bind(&goal.wellness_dimension)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert goal: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_category_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<GoalCategory>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, slug, description
            FROM goal_categories
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch category: {}", e),
            )
        })?;

        row.map(row_to_category).transpose()
    }

    async fn list_categories(&self) -> Result<Vec<GoalCategory>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, slug, description
            FROM goal_categories
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list categories: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_category).collect()
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Goal>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, goal_name, goal_description, time_frame,
                   goal_reminder, status, start_date, end_date, category_id
            FROM goals
            WHERE user_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list goals: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_goal).collect()
    }
}

fn column_error(e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Failed to read column: {}", e))
}

fn row_to_category(row: PgRow) -> Result<GoalCategory, DomainError> {
    Ok(GoalCategory::new(
        row.try_get::<String, _>("id").map_err(column_error)?,
        row.try_get::<String, _>("name").map_err(column_error)?,
        row.try_get::<String, _>("slug").map_err(column_error)?,
        row.try_get::<String, _>("description").map_err(column_error)?,
    ))
}

fn row_to_goal(row: PgRow) -> Result<Goal, DomainError> {
    let id: Uuid = row.try_get("id").map_err(column_error)?;
    let user_id: String = row.try_get("user_id").map_err(column_error)?;
    let time_frame: String = row.try_get("time_frame").map_err(column_error)?;
    let start_date: DateTime<Utc> = row.try_get("start_date").map_err(column_error)?;
    let end_date: DateTime<Utc> = row.try_get("end_date").map_err(column_error)?;
    let category_id: String = row.try_get("category_id").map_err(column_error)?;

    Ok(Goal {
        id: GoalId::from_uuid(id),
        user_id: UserId::new(user_id)?,
        goal_name: row.try_get("goal_name").map_err(column_error)?,
        goal_description: row.try_get("goal_description").map_err(column_error)?,
        time_frame: time_frame.parse::<Timeframe>()?,
        goal_reminder: row.try_get("goal_reminder").map_err(column_error)?,
        status: row.try_get("status").map_err(column_error)?,
        start_date,
        end_date,
        wellness_dimension_ref: format!("/goals_categories/{}", category_id),
        wellness_dimension: category_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postgres_goal_repository_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PostgresGoalRepository>();
    }
}
