//! Explicit clarification state.
//!
//! When a reply asks a clarifying question it hands the caller a
//! `PendingRequest`. The caller sends it back with the next message, and the
//! answer is merged into it instead of being guessed from the transcript.

use serde::{Deserialize, Serialize};

use crate::domain::extraction::{match_goal_name, normalize_name, GoalDetails, GoalField};
use crate::domain::wellness::{DomainLabel, WellnessCategory};

/// A goal request waiting for the user to fill in missing fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRequest {
    pub domain: DomainLabel,
    pub goal: GoalDetails,
}

impl PendingRequest {
    pub fn new(domain: DomainLabel, goal: GoalDetails) -> Self {
        Self { domain, goal }
    }

    /// The question to ask for whatever is still missing.
    pub fn question(&self) -> Option<String> {
        self.goal.clarification_question()
    }

    /// Folds the user's answer into the pending goal.
    ///
    /// A category answer fills `category`. If `name` is still missing and the
    /// answer was not just a category token, the name comes from the goal
    /// phrasing templates, or from the whole answer when none match.
    pub fn merge_answer(&mut self, answer: &str) {
        let bare_token = WellnessCategory::from_token(answer).is_some();

        if self.goal.is_missing(GoalField::Category) {
            if let Some(category) = WellnessCategory::from_answer(answer) {
                self.goal.set_category(category);
            }
        }

        if self.goal.is_missing(GoalField::Name) && !bare_token {
            let name = match_goal_name(&answer.to_lowercase())
                .unwrap_or_else(|| normalize_name(answer));
            self.goal.set_name(&name);
            if self.goal.description.is_none() && !answer.trim().is_empty() {
                self.goal.description = Some(answer.trim().to_string());
            }
        }

        self.goal.refresh_missing();
    }

    pub fn is_complete(&self) -> bool {
        self.goal.is_complete()
    }
}
