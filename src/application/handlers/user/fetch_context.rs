//! FetchUserContextHandler - gathers profile, goals and recent moods.

use chrono::Utc;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::wellness::{recent_cutoff, UserContext};
use crate::ports::UserContextReader;

pub struct FetchUserContextHandler {
    reader: Arc<dyn UserContextReader>,
}

impl FetchUserContextHandler {
    pub fn new(reader: Arc<dyn UserContextReader>) -> Self {
        Self { reader }
    }

    /// Loads the context for a user.
    ///
    /// Anonymous callers get an empty context without touching the store.
    /// Store failures are logged and also produce an empty context.
    pub async fn handle(&self, user_id: Option<&UserId>) -> UserContext {
        let Some(user_id) = user_id else {
            return UserContext::empty();
        };

        match self.load(user_id).await {
            Ok(context) => context,
            Err(err) => {
                tracing::warn!(user_id = %user_id, error = %err, "failed to load user context");
                UserContext::empty()
            }
        }
    }

    async fn load(&self, user_id: &UserId) -> Result<UserContext, DomainError> {
        let profile = self.reader.get_profile(user_id).await?.unwrap_or_default();
        let goals = self.reader.list_goal_summaries(user_id).await?;
        let recent_moods = self
            .reader
            .list_moods_since(user_id, recent_cutoff(Utc::now()))
            .await?;

        Ok(UserContext {
            profile,
            goals,
            recent_moods,
        })
    }
}
