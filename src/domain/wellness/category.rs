//! WellnessCategory enum representing the eight wellness dimensions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// The eight wellness dimensions a goal (and a persona) can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WellnessCategory {
    Physical,
    Mental,
    Spiritual,
    Vocational,
    Environmental,
    Financial,
    Social,
    Intellectual,
}

impl WellnessCategory {
    /// Returns all categories in canonical order.
    pub fn all() -> &'static [WellnessCategory] {
        &[
            WellnessCategory::Physical,
            WellnessCategory::Mental,
            WellnessCategory::Spiritual,
            WellnessCategory::Vocational,
            WellnessCategory::Environmental,
            WellnessCategory::Financial,
            WellnessCategory::Social,
            WellnessCategory::Intellectual,
        ]
    }

    /// Order in which keyword sets are scanned during goal extraction.
    ///
    /// Earlier categories win when a message hits several keyword sets.
    pub fn keyword_scan_order() -> &'static [WellnessCategory] {
        &[
            WellnessCategory::Physical,
            WellnessCategory::Mental,
            WellnessCategory::Spiritual,
            WellnessCategory::Financial,
            WellnessCategory::Social,
            WellnessCategory::Intellectual,
            WellnessCategory::Vocational,
            WellnessCategory::Environmental,
        ]
    }

    /// Returns the slug used by the app and by the router contract.
    pub fn slug(&self) -> &'static str {
        match self {
            WellnessCategory::Physical => "physical",
            WellnessCategory::Mental => "mental",
            WellnessCategory::Spiritual => "spiritual",
            WellnessCategory::Vocational => "vocational",
            WellnessCategory::Environmental => "environmental",
            WellnessCategory::Financial => "financial",
            WellnessCategory::Social => "social",
            WellnessCategory::Intellectual => "intellectual",
        }
    }

    /// Returns the slug under which the category is stored.
    ///
    /// The goal store predates the "vocational" naming and keeps "occupational".
    pub fn stored_slug(&self) -> &'static str {
        match self {
            WellnessCategory::Vocational => "occupational",
            other => other.slug(),
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            WellnessCategory::Physical => "Physical",
            WellnessCategory::Mental => "Mental",
            WellnessCategory::Spiritual => "Spiritual",
            WellnessCategory::Vocational => "Vocational",
            WellnessCategory::Environmental => "Environmental",
            WellnessCategory::Financial => "Financial",
            WellnessCategory::Social => "Social",
            WellnessCategory::Intellectual => "Intellectual",
        }
    }

    /// Keywords that place free text in this category.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            WellnessCategory::Physical => &[
                "exercise", "workout", "fitness", "weight", "lose", "gain", "run", "walk",
                "swim", "gym", "strength", "cardio", "nutrition", "diet", "water", "drink",
                "hydrate", "sleep", "rest",
            ],
            WellnessCategory::Mental => &[
                "stress", "anxiety", "meditation", "mindfulness", "therapy", "mental health",
                "depression", "mood", "emotional", "journal", "gratitude",
            ],
            WellnessCategory::Spiritual => &[
                "meditate", "pray", "spiritual", "faith", "religion", "mindfulness", "purpose",
                "meaning", "soul", "inner peace",
            ],
            WellnessCategory::Financial => &[
                "save", "budget", "money", "invest", "debt", "financial", "income", "expense",
                "retirement", "emergency fund",
            ],
            WellnessCategory::Social => &[
                "friends", "family", "social", "relationship", "network", "community",
                "volunteer", "connect", "communication",
            ],
            WellnessCategory::Intellectual => &[
                "read", "learn", "study", "course", "book", "skill", "knowledge", "education",
                "research", "write",
            ],
            WellnessCategory::Vocational => &[
                "career", "job", "work", "professional", "promotion", "skill", "certification",
                "resume", "interview", "business",
            ],
            WellnessCategory::Environmental => &[
                "environment", "green", "eco", "sustainable", "recycle", "nature", "climate",
                "pollution", "conservation",
            ],
        }
    }

    /// Matches a bare category token (trimmed, case-insensitive).
    ///
    /// Only the eight slugs are accepted; this is the token set a deferred
    /// clarification answer is compared against.
    pub fn from_token(token: &str) -> Option<WellnessCategory> {
        let token = token.trim().to_lowercase();
        Self::all().iter().copied().find(|c| c.slug() == token)
    }

    /// Interprets a free-form answer to the "which wellness area" question.
    ///
    /// Accepts a bare slug, the aliases offered in the question ("career",
    /// "occupational"), or an answer that mentions exactly one category word.
    pub fn from_answer(answer: &str) -> Option<WellnessCategory> {
        if let Some(category) = Self::from_token(answer) {
            return Some(category);
        }

        let lowered = answer.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        let mut found: Vec<WellnessCategory> = Vec::new();
        for word in words {
            let hit = match word {
                "career" | "occupational" => Some(WellnessCategory::Vocational),
                other => Self::all().iter().copied().find(|c| c.slug() == other),
            };
            if let Some(category) = hit {
                if !found.contains(&category) {
                    found.push(category);
                }
            }
        }

        match found.as_slice() {
            [single] => Some(*single),
            _ => None,
        }
    }

    /// Scans text for the first category whose keyword list has a hit.
    pub fn detect(text: &str) -> Option<WellnessCategory> {
        let lowered = text.to_lowercase();
        Self::keyword_scan_order()
            .iter()
            .copied()
            .find(|c| c.keywords().iter().any(|k| lowered.contains(k)))
    }
}

impl fmt::Display for WellnessCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for WellnessCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        if lowered == "occupational" {
            return Ok(WellnessCategory::Vocational);
        }
        Self::from_token(&lowered).ok_or_else(|| {
            ValidationError::invalid_format("category_slug", format!("unknown category '{}'", s))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_8_categories() {
        assert_eq!(WellnessCategory::all().len(), 8);
        assert_eq!(WellnessCategory::keyword_scan_order().len(), 8);
    }

    #[test]
    fn from_token_is_case_insensitive_and_trimmed() {
        assert_eq!(WellnessCategory::from_token(" Financial "), Some(WellnessCategory::Financial));
        assert_eq!(WellnessCategory::from_token("MENTAL"), Some(WellnessCategory::Mental));
    }

    #[test]
    fn from_token_rejects_sentences_and_aliases() {
        assert_eq!(WellnessCategory::from_token("financial stuff"), None);
        assert_eq!(WellnessCategory::from_token("career"), None);
        assert_eq!(WellnessCategory::from_token(""), None);
    }

    #[test]
    fn from_answer_accepts_aliases_and_single_mentions() {
        assert_eq!(WellnessCategory::from_answer("Career"), Some(WellnessCategory::Vocational));
        assert_eq!(
            WellnessCategory::from_answer("I'd say it's physical."),
            Some(WellnessCategory::Physical)
        );
    }

    #[test]
    fn from_answer_rejects_ambiguous_answers() {
        assert_eq!(WellnessCategory::from_answer("physical or mental"), None);
        assert_eq!(WellnessCategory::from_answer("not sure"), None);
    }

    #[test]
    fn stored_slug_maps_vocational() {
        assert_eq!(WellnessCategory::Vocational.stored_slug(), "occupational");
        assert_eq!(WellnessCategory::Social.stored_slug(), "social");
    }

    #[test]
    fn detect_uses_scan_order() {
        // "skill" is both intellectual and vocational; intellectual is scanned first
        assert_eq!(
            WellnessCategory::detect("Build a new skill"),
            Some(WellnessCategory::Intellectual)
        );
        assert_eq!(
            WellnessCategory::detect("I want to save more money"),
            Some(WellnessCategory::Financial)
        );
        assert_eq!(WellnessCategory::detect("hello there"), None);
    }

    #[test]
    fn from_str_accepts_stored_slug() {
        assert_eq!("occupational".parse::<WellnessCategory>().unwrap(), WellnessCategory::Vocational);
        assert!("astral".parse::<WellnessCategory>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&WellnessCategory::Environmental).unwrap();
        assert_eq!(json, "\"environmental\"");
    }
}
