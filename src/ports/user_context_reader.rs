//! User context reader port (read side).
//!
//! Supplies the profile, goals and recent moods shown to the persona model.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::wellness::{GoalSummary, MoodEntry, UserProfile};

/// Reader port for user context queries.
#[async_trait]
pub trait UserContextReader: Send + Sync {
    /// The user's profile, or `None` if they never filled one in.
    async fn get_profile(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError>;

    /// Name and description of every goal the user has.
    async fn list_goal_summaries(&self, user_id: &UserId)
        -> Result<Vec<GoalSummary>, DomainError>;

    /// Mood check-ins whose end date is at or after `since`, oldest first.
    async fn list_moods_since(
        &self,
        user_id: &UserId,
        since: DateTime<Utc>,
    ) -> Result<Vec<MoodEntry>, DomainError>;
}
