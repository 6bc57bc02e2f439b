//! HTTP adapter for voice input and output.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{SpeakRequest, TranscribeQuery, TranscribeResponse};
pub use routes::voice_routes;
