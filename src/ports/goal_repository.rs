//! Goal repository port (write side plus category lookup).
//!
//! # Example
//!
//! ```ignore
//! async fn file_goal(repo: &dyn GoalRepository, new_goal: NewGoal) -> Result<Goal, DomainError> {
//!     let category = repo
//!         .find_category_by_slug(new_goal.category.stored_slug())
//!         .await?
//!         .ok_or_else(|| DomainError::new(ErrorCode::CategoryNotFound, "missing"))?;
//!     let goal = Goal::create(new_goal, &category, Utc::now());
//!     repo.save(&goal).await?;
//!     Ok(goal)
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::wellness::{Goal, GoalCategory};

/// Repository port for goals and their categories.
#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Persist a new goal.
    async fn save(&self, goal: &Goal) -> Result<(), DomainError>;

    /// Look up a category by its stored slug.
    ///
    /// Returns `None` if no category has that slug.
    async fn find_category_by_slug(&self, slug: &str)
        -> Result<Option<GoalCategory>, DomainError>;

    /// All categories, ordered by name.
    async fn list_categories(&self) -> Result<Vec<GoalCategory>, DomainError>;

    /// Goals belonging to a user, oldest first.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Goal>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_repository_is_object_safe() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn GoalRepository>();
    }
}
