//! In-Memory Wellness Store Adapter
//!
//! Holds goal categories, goals, profiles and mood check-ins in memory.
//! Used when no database is configured, and as the store in tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::wellness::{
    Goal, GoalCategory, GoalSummary, MoodEntry, UserProfile, WellnessCategory,
};
use crate::ports::{GoalRepository, UserContextReader};

/// In-memory store for everything the assistant reads or writes.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWellnessStore {
    categories: Arc<RwLock<Vec<GoalCategory>>>,
    goals: Arc<RwLock<HashMap<UserId, Vec<Goal>>>>,
    profiles: Arc<RwLock<HashMap<UserId, UserProfile>>>,
    moods: Arc<RwLock<HashMap<UserId, Vec<MoodEntry>>>>,
}

impl InMemoryWellnessStore {
    /// Creates an empty store with no categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the eight wellness categories.
    pub fn seeded() -> Self {
        let categories = WellnessCategory::all()
            .iter()
            .map(|category| {
                GoalCategory::new(
                    format!("cat-{}", category.stored_slug()),
                    category.display_name(),
                    category.stored_slug(),
                    format!("{} wellness", category.display_name()),
                )
            })
            .collect();

        Self {
            categories: Arc::new(RwLock::new(categories)),
            ..Self::default()
        }
    }

    /// Stores or replaces a user's profile.
    pub async fn put_profile(&self, user_id: &UserId, profile: UserProfile) {
        self.profiles.write().await.insert(user_id.clone(), profile);
    }

    /// Records a mood check-in.
    pub async fn add_mood(&self, user_id: &UserId, entry: MoodEntry) {
        self.moods
            .write()
            .await
            .entry(user_id.clone())
            .or_default()
            .push(entry);
    }

    /// Number of goals stored across all users.
    pub async fn goal_count(&self) -> usize {
        self.goals.read().await.values().map(Vec::len).sum()
    }
}

#[async_trait]
impl GoalRepository for InMemoryWellnessStore {
    async fn save(&self, goal: &Goal) -> Result<(), DomainError> {
        self.goals
            .write()
            .await
            .entry(goal.user_id.clone())
            .or_default()
            .push(goal.clone());
        Ok(())
    }

    async fn find_category_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<GoalCategory>, DomainError> {
        Ok(self
            .categories
            .read()
            .await
            .iter()
            .find(|c| c.slug == slug)
            .cloned())
    }

    async fn list_categories(&self) -> Result<Vec<GoalCategory>, DomainError> {
        let mut categories = self.categories.read().await.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Goal>, DomainError> {
        Ok(self
            .goals
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl UserContextReader for InMemoryWellnessStore {
    async fn get_profile(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }

    async fn list_goal_summaries(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<GoalSummary>, DomainError> {
        let goals = self.list_for_user(user_id).await?;
        Ok(goals
            .into_iter()
            .map(|g| GoalSummary::new(g.goal_name, g.goal_description))
            .collect())
    }

    async fn list_moods_since(
        &self,
        user_id: &UserId,
        since: DateTime<Utc>,
    ) -> Result<Vec<MoodEntry>, DomainError> {
        let mut entries: Vec<MoodEntry> = self
            .moods
            .read()
            .await
            .get(user_id)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|e| e.end_date >= since)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        entries.sort_by_key(|e| e.end_date);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wellness::NewGoal;
    use chrono::Duration;

    fn user() -> UserId {
        UserId::new("uid-1").unwrap()
    }

    #[tokio::test]
    async fn seeded_store_uses_stored_slugs() {
        let store = InMemoryWellnessStore::seeded();

        let categories = store.list_categories().await.unwrap();
        assert_eq!(categories.len(), 8);
        assert!(store.find_category_by_slug("occupational").await.unwrap().is_some());
        assert!(store.find_category_by_slug("vocational").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn categories_are_sorted_by_name() {
        let store = InMemoryWellnessStore::seeded();

        let names: Vec<String> = store
            .list_categories()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[tokio::test]
    async fn saved_goals_show_up_as_summaries() {
        let store = InMemoryWellnessStore::seeded();
        let category = store.find_category_by_slug("financial").await.unwrap().unwrap();
        let new_goal =
            NewGoal::new(user(), "Budget", "Track monthly spend", WellnessCategory::Financial)
                .unwrap();
        store
            .save(&Goal::create(new_goal, &category, Utc::now()))
            .await
            .unwrap();

        let summaries = store.list_goal_summaries(&user()).await.unwrap();
        assert_eq!(summaries, vec![GoalSummary::new("Budget", "Track monthly spend")]);
        assert_eq!(store.goal_count().await, 1);
    }

    #[tokio::test]
    async fn moods_are_filtered_and_ordered() {
        let store = InMemoryWellnessStore::new();
        let now = Utc::now();
        store
            .add_mood(&user(), MoodEntry::new("good", vec![], "", now - Duration::days(1)))
            .await;
        store
            .add_mood(&user(), MoodEntry::new("bad", vec![], "", now - Duration::days(5)))
            .await;
        store
            .add_mood(&user(), MoodEntry::new("old", vec![], "", now - Duration::days(100)))
            .await;

        let moods = store
            .list_moods_since(&user(), now - Duration::days(60))
            .await
            .unwrap();

        let labels: Vec<&str> = moods.iter().map(|m| m.mood.as_str()).collect();
        assert_eq!(labels, vec!["bad", "good"]);
    }

    #[tokio::test]
    async fn unknown_user_has_no_profile() {
        let store = InMemoryWellnessStore::new();
        assert!(store.get_profile(&user()).await.unwrap().is_none());
    }
}
