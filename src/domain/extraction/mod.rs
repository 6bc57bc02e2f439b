//! Extraction module - pattern stages and the clarification prompter.
//!
//! Both extractors are pure: they never call a model. The model-backed
//! fallback stage lives in the application layer.

mod clarification;
mod goal_patterns;
mod mood_patterns;

pub use clarification::{compose_question, RequiredField};
pub use goal_patterns::{
    detect_timeframe, match_goal_name, normalize_name, parse_duration_weeks, truncate_title,
    GoalDetails, GoalField, GENERIC_GOAL_QUESTION, MAX_GOAL_NAME_CHARS,
};
pub use mood_patterns::{MoodDetails, MoodFallbackReply, MoodField, GENERIC_MOOD_QUESTION};
