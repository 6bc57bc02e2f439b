//! Mood check-in entries.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Only check-ins this recent are shown to the model.
pub const RECENT_MOOD_WINDOW_DAYS: i64 = 60;

/// A recorded mood check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub mood: String,
    pub emotions: Vec<String>,
    pub note: String,
    pub end_date: DateTime<Utc>,
}

impl MoodEntry {
    /// Creates a check-in.
    pub fn new(
        mood: impl Into<String>,
        emotions: Vec<String>,
        note: impl Into<String>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            mood: mood.into(),
            emotions,
            note: note.into(),
            end_date,
        }
    }
}

/// Oldest timestamp still considered recent.
pub fn recent_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(RECENT_MOOD_WINDOW_DAYS)
}
