//! Extraction handlers - pattern stages backed by model fallbacks.

mod goal_extractor;
mod mood_extractor;

pub use goal_extractor::{
    GoalExtractor, GoalTitleFallback, ModelGoalTitleFallback, GOAL_TITLE_INSTRUCTION,
};
pub use mood_extractor::{MoodExtractor, MoodFallback, ModelMoodFallback, MOOD_JSON_INSTRUCTION};
