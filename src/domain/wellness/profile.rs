//! User context handed to the persona prompt.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use super::MoodEntry;

const UNKNOWN: &str = "[unknown]";

/// Basic profile fields the app collects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
}

/// Name and description of one of the user's goals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalSummary {
    pub goal_name: String,
    pub goal_description: String,
}

impl GoalSummary {
    pub fn new(goal_name: impl Into<String>, goal_description: impl Into<String>) -> Self {
        Self {
            goal_name: goal_name.into(),
            goal_description: goal_description.into(),
        }
    }
}

/// Everything known about the user at the start of a turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
    pub profile: UserProfile,
    pub goals: Vec<GoalSummary>,
    pub recent_moods: Vec<MoodEntry>,
}

impl UserContext {
    /// Context used when the user is anonymous or the lookup failed.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Renders the context summary placed at the top of the system message.
    pub fn format(&self) -> String {
        let mut out = String::new();
        let field = |value: Option<String>| value.unwrap_or_else(|| UNKNOWN.to_string());

        // Writing to a String cannot fail.
        let _ = writeln!(out, "User Profile:");
        let _ = writeln!(out, "Name: {}", field(self.profile.name.clone()));
        let _ = writeln!(out, "Age: {}", field(self.profile.age.map(|a| a.to_string())));
        let _ = writeln!(out, "Gender: {}", field(self.profile.gender.clone()));

        if !self.goals.is_empty() {
            let _ = writeln!(out, "User Goals:");
            for goal in &self.goals {
                let _ = writeln!(out, "- {}: {}", goal.goal_name, goal.goal_description);
            }
        }

        if !self.recent_moods.is_empty() {
            let _ = writeln!(out, "Recent Moods:");
            for entry in &self.recent_moods {
                let _ = write!(out, "- {}: {}", entry.end_date.format("%Y-%m-%d"), entry.mood);
                if !entry.emotions.is_empty() {
                    let _ = write!(out, " ({})", entry.emotions.join(", "));
                }
                out.push('\n');
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn empty_context_prints_unknowns() {
        let text = UserContext::empty().format();
        assert_eq!(
            text,
            "User Profile:\nName: [unknown]\nAge: [unknown]\nGender: [unknown]\n"
        );
    }

    #[test]
    fn goals_section_only_when_present() {
        let context = UserContext {
            profile: UserProfile {
                name: Some("Ana".into()),
                age: Some(29),
                gender: None,
            },
            goals: vec![GoalSummary::new("Run 5k", "Build up to a 5k run")],
            recent_moods: vec![],
        };

        let text = context.format();
        assert!(text.contains("Name: Ana\nAge: 29\nGender: [unknown]\n"));
        assert!(text.ends_with("User Goals:\n- Run 5k: Build up to a 5k run\n"));
        assert!(!text.contains("Recent Moods"));
    }

    #[test]
    fn moods_render_date_and_emotions() {
        let date = Utc.with_ymd_and_hms(2024, 5, 3, 12, 0, 0).unwrap();
        let context = UserContext {
            recent_moods: vec![
                MoodEntry::new("good", vec!["calm".into(), "grateful".into()], "", date),
                MoodEntry::new("bad", vec![], "", date),
            ],
            ..UserContext::default()
        };

        let text = context.format();
        assert!(text.contains("Recent Moods:\n- 2024-05-03: good (calm, grateful)\n- 2024-05-03: bad\n"));
    }
}
