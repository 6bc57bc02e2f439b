//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - OpenAI-compatible chat provider and the scripted mock
//! - `http` - axum REST API
//! - `memory` - In-memory goal and user context store
//! - `postgres` - PostgreSQL goal and user context store
//! - `speech` - OpenAI transcription and synthesis
//! - `tools` - Wellness tool executor

pub mod ai;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod speech;
pub mod tools;
