//! OpenAI speech adapter.
//!
//! Transcribes audio through the transcriptions endpoint (`whisper-1`,
//! plain-text response) and synthesizes MP3 audio through the speech
//! endpoint (`tts-1`).

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::time::Duration;

use crate::ports::{SpeechError, SpeechService};

const SUPPORTED_EXTENSIONS: &[&str] = &[
    "flac", "m4a", "mp3", "mp4", "mpeg", "mpga", "oga", "ogg", "wav", "webm",
];

/// Configuration for the OpenAI speech endpoints.
#[derive(Debug, Clone)]
pub struct OpenAISpeechConfig {
    api_key: Secret<String>,
    pub base_url: String,
    pub stt_model: String,
    pub tts_model: String,
    pub default_voice: String,
    pub timeout: Duration,
}

impl OpenAISpeechConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://api.openai.com/v1".to_string(),
            stt_model: "whisper-1".to_string(),
            tts_model: "tts-1".to_string(),
            default_voice: "alloy".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_models(mut self, stt: impl Into<String>, tts: impl Into<String>) -> Self {
        self.stt_model = stt.into();
        self.tts_model = tts.into();
        self
    }

    pub fn with_default_voice(mut self, voice: impl Into<String>) -> Self {
        self.default_voice = voice.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
}

/// Speech service backed by OpenAI audio endpoints.
pub struct OpenAISpeechService {
    config: OpenAISpeechConfig,
    client: Client,
}

impl OpenAISpeechService {
    pub fn new(config: OpenAISpeechConfig) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SpeechError::Network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn check_status(response: Response) -> Result<Response, SpeechError> {
        let status = response.status().as_u16();
        if response.status().is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(error_for_status(status, body))
    }
}

/// Normalizes ".M4A" and "m4a" to "m4a", rejecting unknown containers.
fn normalize_extension(extension: &str) -> Result<String, SpeechError> {
    let ext = extension.trim().trim_start_matches('.').to_lowercase();
    if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(SpeechError::UnsupportedFormat(extension.to_string()))
    }
}

fn error_for_status(status: u16, body: String) -> SpeechError {
    match status {
        401 | 403 => SpeechError::AuthenticationFailed,
        _ => SpeechError::Provider {
            status,
            message: body,
        },
    }
}

fn network_error(e: reqwest::Error) -> SpeechError {
    SpeechError::Network(e.to_string())
}

#[async_trait]
impl SpeechService for OpenAISpeechService {
    async fn transcribe(&self, audio: Vec<u8>, extension: &str) -> Result<String, SpeechError> {
        if audio.is_empty() {
            return Err(SpeechError::EmptyInput("audio".to_string()));
        }
        let ext = normalize_extension(extension)?;
        let size = audio.len();

        let part = Part::bytes(audio).file_name(format!("audio.{}", ext));
        let form = Form::new()
            .text("model", self.config.stt_model.clone())
            .text("response_format", "text")
            .part("file", part);

        tracing::debug!(model = %self.config.stt_model, bytes = size, "transcribing audio");

        let response = self
            .client
            .post(self.url("audio/transcriptions"))
            .bearer_auth(self.config.api_key.expose_secret())
            .multipart(form)
            .send()
            .await
            .map_err(network_error)?;
        let response = Self::check_status(response).await?;
        let text = response.text().await.map_err(network_error)?;

        Ok(text.trim().to_string())
    }

    async fn synthesize(&self, text: &str, voice: Option<&str>) -> Result<Vec<u8>, SpeechError> {
        if text.trim().is_empty() {
            return Err(SpeechError::EmptyInput("text".to_string()));
        }
        let voice = voice
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(&self.config.default_voice);

        tracing::debug!(model = %self.config.tts_model, voice, chars = text.len(), "synthesizing speech");

        let response = self
            .client
            .post(self.url("audio/speech"))
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&SpeechRequest {
                model: &self.config.tts_model,
                input: text,
                voice,
            })
            .send()
            .await
            .map_err(network_error)?;
        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await.map_err(network_error)?;

        Ok(bytes.to_vec())
    }
}
