//! HTTP adapter for chat endpoints.
//!
//! - `POST /api/chat` - Persona reply with clarification and tool calls
//! - `POST /api/chat/summary` - Short conversation title

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ChatRequest, ChatResponse, SummaryRequest, SummaryResponse};
pub use routes::chat_routes;
