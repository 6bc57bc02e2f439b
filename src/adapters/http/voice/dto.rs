//! Request and response bodies for the voice endpoints.

use serde::{Deserialize, Serialize};

/// Query of `POST /api/voice/transcribe`.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscribeQuery {
    /// Container extension of the uploaded audio.
    #[serde(default = "default_extension")]
    pub ext: String,
}

fn default_extension() -> String {
    ".m4a".to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct TranscribeResponse {
    pub text: String,
}

/// Body of `POST /api/voice/speak`.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeakRequest {
    pub text: String,
    #[serde(default)]
    pub voice: Option<String>,
}
