//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `wellness` - Categories, goals, moods and user context
//! - `extraction` - Pattern stages of field extraction and the clarification prompter
//! - `conversation` - Turns, routing contract, personas, pending state and tools

pub mod conversation;
pub mod extraction;
pub mod foundation;
pub mod wellness;
