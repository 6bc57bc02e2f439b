//! Pattern stage of mood check-in extraction.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::clarification::{compose_question, RequiredField};

/// Asked when more than two mood fields are missing.
pub const GENERIC_MOOD_QUESTION: &str = "Could you share more about how you're feeling?";

const MOOD_WORDS: &[&str] = &[
    "good", "bad", "neutral", "happy", "sad", "ok", "great", "awful", "fine",
];

const EMOTION_WORDS: &[&str] = &[
    "grateful", "hope", "content", "connected", "drained", "envy", "disappointed", "relief",
    "happy", "sad", "angry", "anxious", "excited", "calm", "lonely", "overwhelmed",
];

fn word_patterns(words: &[&'static str]) -> Vec<(&'static str, Regex)> {
    words
        .iter()
        .map(|word| {
            let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(word)))
                .expect("valid regex");
            (*word, re)
        })
        .collect()
}

static MOOD_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| word_patterns(MOOD_WORDS));
static EMOTION_PATTERNS: Lazy<Vec<(&'static str, Regex)>> =
    Lazy::new(|| word_patterns(EMOTION_WORDS));

/// Mood fields a check-in needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodField {
    Mood,
    Emotions,
}

impl RequiredField for MoodField {
    fn question(&self) -> &'static str {
        match self {
            MoodField::Mood => "How would you describe your overall mood?",
            MoodField::Emotions => {
                "Which emotions did you experience? (e.g., grateful, anxious, calm, etc.)"
            }
        }
    }
}

/// The JSON shape the mood fallback model is asked to reply with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MoodFallbackReply {
    #[serde(default)]
    pub emotions: Option<Vec<String>>,
    #[serde(default)]
    pub mood: Option<String>,
}

impl MoodFallbackReply {
    /// Parses strict JSON; anything malformed is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        serde_json::from_str(raw.trim()).ok()
    }
}

/// A partially-filled mood check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodDetails {
    pub mood: Option<String>,
    pub emotions: Vec<String>,
    pub note: String,
    pub end_date: DateTime<Utc>,
    pub missing_fields: Vec<MoodField>,
}

impl MoodDetails {
    /// Runs the vocabulary scans over `message`, stamping the check-in at `now`.
    pub fn scan(message: &str, now: DateTime<Utc>) -> Self {
        let text = message.trim();
        let mood = MOOD_PATTERNS
            .iter()
            .find(|(_, re)| re.is_match(text))
            .map(|(word, _)| word.to_string());
        let emotions = EMOTION_PATTERNS
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(word, _)| word.to_string())
            .collect();

        let mut details = Self {
            mood,
            emotions,
            note: text.to_string(),
            end_date: now,
            missing_fields: Vec::new(),
        };
        details.refresh_missing();
        details
    }

    /// Whether the fallback stage should be consulted.
    pub fn needs_fallback(&self) -> bool {
        self.mood.is_none() || self.emotions.is_empty()
    }

    /// Fills only the fields that are still unset.
    pub fn apply_fallback(&mut self, reply: MoodFallbackReply) {
        if self.emotions.is_empty() {
            if let Some(emotions) = reply.emotions {
                let mut cleaned: Vec<String> = Vec::new();
                for emotion in emotions {
                    let emotion = emotion.trim().to_lowercase();
                    if !emotion.is_empty() && !cleaned.contains(&emotion) {
                        cleaned.push(emotion);
                    }
                }
                self.emotions = cleaned;
            }
        }
        if self.mood.is_none() {
            self.mood = reply
                .mood
                .map(|m| m.trim().to_lowercase())
                .filter(|m| !m.is_empty());
        }
        self.refresh_missing();
    }

    /// Recomputes `missing_fields` in the fixed order `[mood, emotions]`.
    pub fn refresh_missing(&mut self) {
        self.missing_fields.clear();
        if self.mood.is_none() {
            self.missing_fields.push(MoodField::Mood);
        }
        if self.emotions.is_empty() {
            self.missing_fields.push(MoodField::Emotions);
        }
    }

    pub fn clarification_question(&self) -> Option<String> {
        compose_question(&self.missing_fields, GENERIC_MOOD_QUESTION)
    }
}
