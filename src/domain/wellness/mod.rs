//! Wellness module - categories, goals, moods and user context.

mod category;
mod domain_label;
mod goal;
mod mood;
mod profile;

pub use category::WellnessCategory;
pub use domain_label::DomainLabel;
pub use goal::{
    Goal, GoalCategory, NewGoal, Timeframe, DEFAULT_DURATION_WEEKS, MAX_DURATION_WEEKS,
};
pub use mood::{recent_cutoff, MoodEntry, RECENT_MOOD_WINDOW_DAYS};
pub use profile::{GoalSummary, UserContext, UserProfile};
