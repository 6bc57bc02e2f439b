//! HTTP adapter for mood check-ins.
//!
//! - `POST /api/mood/extract` - Mood, emotions and a follow-up question

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{MoodExtractRequest, MoodExtractResponse};
pub use routes::mood_routes;
