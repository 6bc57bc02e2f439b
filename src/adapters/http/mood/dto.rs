//! Request and response bodies for the mood endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::extraction::MoodDetails;

/// Body of `POST /api/mood/extract`.
#[derive(Debug, Clone, Deserialize)]
pub struct MoodExtractRequest {
    pub message: String,
    #[serde(default)]
    pub uid: Option<String>,
}

/// Extracted check-in plus the question for whatever is missing.
#[derive(Debug, Clone, Serialize)]
pub struct MoodExtractResponse {
    #[serde(flatten)]
    pub details: MoodDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

impl From<MoodDetails> for MoodExtractResponse {
    fn from(details: MoodDetails) -> Self {
        let question = details.clarification_question();
        Self { details, question }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn response_flattens_details() {
        let details = MoodDetails::scan("Feeling great and grateful", Utc::now());
        let json = serde_json::to_value(MoodExtractResponse::from(details)).unwrap();

        assert_eq!(json["mood"], "great");
        assert_eq!(json["emotions"][0], "grateful");
        assert!(json["endDate"].is_string());
        assert!(json["missingFields"].as_array().unwrap().is_empty());
        assert!(json.get("question").is_none());
    }
}
