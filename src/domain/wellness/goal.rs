//! Goal records and the categories they belong to.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::WellnessCategory;
use crate::domain::foundation::{GoalId, UserId, ValidationError};

/// Longest goal a user can set, in weeks (ten years).
pub const MAX_DURATION_WEEKS: u32 = 520;

/// Default goal length when the user names none.
pub const DEFAULT_DURATION_WEEKS: u32 = 6;

/// How often a goal is checked in on.
///
/// Serialized capitalized ("Month"); parsing is lenient so model-supplied
/// values like "monthly" are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum Timeframe {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl Timeframe {
    /// Returns all timeframes in scan order.
    pub fn all() -> &'static [Timeframe] {
        &[
            Timeframe::Week,
            Timeframe::Month,
            Timeframe::Quarter,
            Timeframe::Year,
        ]
    }

    /// Returns the capitalized name stored with the goal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Week => "Week",
            Timeframe::Month => "Month",
            Timeframe::Quarter => "Quarter",
            Timeframe::Year => "Year",
        }
    }

    /// Phrases that signal this cadence in free text.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Timeframe::Week => &["week", "weekly", "7 days"],
            Timeframe::Month => &["month", "monthly", "30 days"],
            Timeframe::Quarter => &["quarter", "quarterly", "3 months"],
            Timeframe::Year => &["year", "yearly", "annual", "12 months"],
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" | "weekly" => Ok(Timeframe::Week),
            "month" | "monthly" => Ok(Timeframe::Month),
            "quarter" | "quarterly" => Ok(Timeframe::Quarter),
            "year" | "yearly" | "annual" => Ok(Timeframe::Year),
            _ => Err(ValidationError::invalid_format(
                "timeframe",
                format!("unknown timeframe '{}'", s),
            )),
        }
    }
}

impl TryFrom<String> for Timeframe {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Timeframe> for String {
    fn from(timeframe: Timeframe) -> Self {
        timeframe.as_str().to_string()
    }
}

/// A category row in the goal store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalCategory {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
}

impl GoalCategory {
    /// Creates a category record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        slug: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            description: description.into(),
        }
    }

    /// Path-style reference stored alongside goals.
    pub fn reference(&self) -> String {
        format!("/goals_categories/{}", self.id)
    }
}

/// Validated input for creating a goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGoal {
    pub user_id: UserId,
    pub goal_name: String,
    pub goal_description: String,
    pub category: WellnessCategory,
    pub time_frame: Timeframe,
    pub reminder_enabled: bool,
    pub duration_weeks: u32,
}

impl NewGoal {
    /// Creates a new goal request, validating name and duration.
    pub fn new(
        user_id: UserId,
        goal_name: impl Into<String>,
        goal_description: impl Into<String>,
        category: WellnessCategory,
    ) -> Result<Self, ValidationError> {
        let goal_name = goal_name.into();
        if goal_name.trim().is_empty() {
            return Err(ValidationError::empty_field("goal_name"));
        }
        Ok(Self {
            user_id,
            goal_name: goal_name.trim().to_string(),
            goal_description: goal_description.into(),
            category,
            time_frame: Timeframe::default(),
            reminder_enabled: true,
            duration_weeks: DEFAULT_DURATION_WEEKS,
        })
    }

    /// Sets the cadence.
    pub fn with_time_frame(mut self, time_frame: Timeframe) -> Self {
        self.time_frame = time_frame;
        self
    }

    /// Enables or disables reminders.
    pub fn with_reminder(mut self, enabled: bool) -> Self {
        self.reminder_enabled = enabled;
        self
    }

    /// Sets the goal length in weeks.
    pub fn with_duration_weeks(mut self, weeks: u32) -> Result<Self, ValidationError> {
        if weeks == 0 || weeks > MAX_DURATION_WEEKS {
            return Err(ValidationError::out_of_range(
                "duration_weeks",
                1,
                MAX_DURATION_WEEKS as i64,
                weeks as i64,
            ));
        }
        self.duration_weeks = weeks;
        Ok(self)
    }
}

/// A stored goal.
///
/// Field names on the wire follow the mobile app's goal documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub user_id: UserId,
    #[serde(rename = "goalName")]
    pub goal_name: String,
    #[serde(rename = "goalDescription")]
    pub goal_description: String,
    #[serde(rename = "timeFrame")]
    pub time_frame: Timeframe,
    #[serde(rename = "goalReminder")]
    pub goal_reminder: bool,
    pub status: bool,
    #[serde(rename = "startDate")]
    pub start_date: DateTime<Utc>,
    #[serde(rename = "endDate")]
    pub end_date: DateTime<Utc>,
    #[serde(rename = "wellnessDimension")]
    pub wellness_dimension: String,
    #[serde(rename = "wellnessDimension_ref")]
    pub wellness_dimension_ref: String,
}

impl Goal {
    /// Builds an active goal starting at `now` in the given category.
    pub fn create(new_goal: NewGoal, category: &GoalCategory, now: DateTime<Utc>) -> Self {
        let end_date = now + Duration::weeks(i64::from(new_goal.duration_weeks));
        Self {
            id: GoalId::new(),
            user_id: new_goal.user_id,
            goal_name: new_goal.goal_name,
            goal_description: new_goal.goal_description,
            time_frame: new_goal.time_frame,
            goal_reminder: new_goal.reminder_enabled,
            status: true,
            start_date: now,
            end_date,
            wellness_dimension: category.id.clone(),
            wellness_dimension_ref: category.reference(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserId {
        UserId::new("uid-1").unwrap()
    }

    fn category() -> GoalCategory {
        GoalCategory::new("cat-fin", "Financial", "financial", "Money matters")
    }

    #[test]
    fn timeframe_defaults_to_month() {
        assert_eq!(Timeframe::default(), Timeframe::Month);
    }

    #[test]
    fn timeframe_parses_case_insensitively() {
        assert_eq!("weekly".parse::<Timeframe>().unwrap(), Timeframe::Week);
        assert_eq!("QUARTER".parse::<Timeframe>().unwrap(), Timeframe::Quarter);
        assert!("fortnight".parse::<Timeframe>().is_err());
    }

    #[test]
    fn timeframe_serializes_capitalized() {
        let json = serde_json::to_string(&Timeframe::Year).unwrap();
        assert_eq!(json, "\"Year\"");
    }

    #[test]
    fn timeframe_deserializes_leniently() {
        let parsed: Timeframe = serde_json::from_str("\"monthly\"").unwrap();
        assert_eq!(parsed, Timeframe::Month);
        assert!(serde_json::from_str::<Timeframe>("\"someday\"").is_err());
    }

    #[test]
    fn new_goal_rejects_blank_name() {
        let result = NewGoal::new(user(), "  ", "desc", WellnessCategory::Financial);
        assert!(result.is_err());
    }

    #[test]
    fn new_goal_rejects_zero_duration() {
        let goal = NewGoal::new(user(), "Save", "desc", WellnessCategory::Financial).unwrap();
        assert!(goal.clone().with_duration_weeks(0).is_err());
        assert!(goal.with_duration_weeks(MAX_DURATION_WEEKS + 1).is_err());
    }

    #[test]
    fn create_computes_end_date_and_reference() {
        let now = Utc::now();
        let new_goal = NewGoal::new(user(), "Save money", "I want to save", WellnessCategory::Financial)
            .unwrap()
            .with_duration_weeks(4)
            .unwrap();

        let goal = Goal::create(new_goal, &category(), now);

        assert_eq!(goal.end_date - goal.start_date, Duration::weeks(4));
        assert!(goal.status);
        assert!(goal.goal_reminder);
        assert_eq!(goal.wellness_dimension, "cat-fin");
        assert_eq!(goal.wellness_dimension_ref, "/goals_categories/cat-fin");
    }

    #[test]
    fn goal_serializes_with_app_field_names() {
        let new_goal = NewGoal::new(user(), "Save money", "desc", WellnessCategory::Financial).unwrap();
        let goal = Goal::create(new_goal, &category(), Utc::now());

        let json = serde_json::to_value(&goal).unwrap();
        assert_eq!(json["goalName"], "Save money");
        assert_eq!(json["timeFrame"], "Month");
        assert_eq!(json["user_id"], "uid-1");
        assert_eq!(json["wellnessDimension_ref"], "/goals_categories/cat-fin");
        assert!(json["id"].is_string());
    }
}
