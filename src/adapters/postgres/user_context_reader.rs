//! PostgreSQL implementation of UserContextReader.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::wellness::{GoalSummary, MoodEntry, UserProfile};
use crate::ports::UserContextReader;

/// PostgreSQL implementation of UserContextReader.
#[derive(Clone)]
pub struct PostgresUserContextReader {
    pool: PgPool,
}

impl PostgresUserContextReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn query_error(what: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Failed to fetch {}: {}", what, e))
}

#[async_trait]
impl UserContextReader for PostgresUserContextReader {
    async fn get_profile(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT name, age, gender
            FROM user_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| query_error("profile", e))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let age: Option<i32> = row.try_get("age").map_err(|e| query_error("profile", e))?;
        Ok(Some(UserProfile {
            name: row.try_get("name").map_err(|e| query_error("profile", e))?,
            age: age.and_then(|a| u32::try_from(a).ok()),
            gender: row.try_get("gender").map_err(|e| query_error("profile", e))?,
        }))
    }

    async fn list_goal_summaries(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<GoalSummary>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT goal_name, goal_description
            FROM goals
            WHERE user_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_error("goals", e))?;

        rows.into_iter()
            .map(|row| {
                Ok(GoalSummary::new(
                    row.try_get::<String, _>("goal_name")
                        .map_err(|e| query_error("goals", e))?,
                    row.try_get::<String, _>("goal_description")
                        .map_err(|e| query_error("goals", e))?,
                ))
            })
            .collect()
    }

    async fn list_moods_since(
        &self,
        user_id: &UserId,
        since: DateTime<Utc>,
    ) -> Result<Vec<MoodEntry>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT mood, emotions, note, end_date
            FROM mood_entries
            WHERE user_id = $1 AND end_date >= $2
            ORDER BY end_date
            "#,
        )
        .bind(user_id.as_str())
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_error("moods", e))?;

        rows.into_iter()
            .map(|row| {
                Ok(MoodEntry::new(
                    row.try_get::<String, _>("mood")
                        .map_err(|e| query_error("moods", e))?,
                    row.try_get::<Vec<String>, _>("emotions")
                        .map_err(|e| query_error("moods", e))?,
                    row.try_get::<String, _>("note")
                        .map_err(|e| query_error("moods", e))?,
                    row.try_get::<DateTime<Utc>, _>("end_date")
                        .map_err(|e| query_error("moods", e))?,
                ))
            })
            .collect()
    }
}
