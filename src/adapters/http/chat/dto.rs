//! Request and response bodies for the chat endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::conversation::{PendingRequest, RawTurn};

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<RawTurn>,
    /// Signed-in user, if any.
    #[serde(default)]
    pub uid: Option<String>,
    /// Persona requested by the client; skips routing when valid.
    #[serde(default)]
    pub domain: Option<String>,
    /// Token returned with the previous clarifying question.
    #[serde(default)]
    pub pending: Option<PendingRequest>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<PendingRequest>,
}

/// Body of `POST /api/chat/summary`.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub messages: Vec<RawTurn>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_accepts_message_only() {
        let request: ChatRequest = serde_json::from_str(r#"{"message": "hi"}"#).unwrap();
        assert_eq!(request.message, "hi");
        assert!(request.history.is_empty());
        assert!(request.uid.is_none());
        assert!(request.pending.is_none());
    }

    #[test]
    fn chat_response_omits_missing_pending() {
        let response = ChatResponse {
            reply: "Hello".into(),
            domain: "main".into(),
            pending: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("pending").is_none());
        assert_eq!(json["domain"], "main");
    }
}
