//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Model Ports
//!
//! - `AIProvider` - Chat completions, with tool calling
//! - `SpeechService` - Speech-to-text and text-to-speech
//!
//! ## Store Ports
//!
//! - `GoalRepository` - Goal persistence and category lookup
//! - `UserContextReader` - Profile, goals and recent moods for prompts
//!
//! ## Tool Ports
//!
//! - `ToolExecutor` - Runs model-requested tools

mod ai_provider;
mod goal_repository;
mod speech_service;
mod tool_executor;
mod user_context_reader;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, RequestPurpose, TokenUsage,
};
pub use goal_repository::GoalRepository;
pub use speech_service::{SpeechError, SpeechService};
pub use tool_executor::{ToolExecutionError, ToolExecutor};
pub use user_context_reader::UserContextReader;
