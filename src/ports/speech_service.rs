//! Speech Service Port - speech-to-text and text-to-speech.

use async_trait::async_trait;
use thiserror::Error;

/// Port for voice input and output.
#[async_trait]
pub trait SpeechService: Send + Sync {
    /// Transcribe recorded audio.
    ///
    /// `extension` is the container format of `audio` (e.g. `".m4a"`), used
    /// to name the upload so the provider can detect the codec.
    async fn transcribe(&self, audio: Vec<u8>, extension: &str) -> Result<String, SpeechError>;

    /// Synthesize speech, returning MP3 bytes.
    ///
    /// `voice` falls back to the configured default when `None`.
    async fn synthesize(&self, text: &str, voice: Option<&str>) -> Result<Vec<u8>, SpeechError>;
}

/// Speech adapter errors.
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("empty input: {0}")]
    EmptyInput(String),

    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("speech provider error {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_displays_status() {
        let err = SpeechError::Provider {
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(err.to_string(), "speech provider error 500: boom");
    }
}
