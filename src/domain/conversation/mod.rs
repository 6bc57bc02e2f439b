//! Conversation domain module.
//!
//! Pure pieces of the chat pipeline: turns, routing contract, persona
//! table, pending clarification state, tools and fallback sentences.

mod fallback;
mod pending;
mod persona;
mod routing;
mod turn;
pub mod tools;

pub use fallback::{
    after_tools, EMPTY_SUMMARY, FAILED_SUMMARY, GENERIC_REPLY, TOOL_ERROR_REPLY,
    TOOL_SUCCESS_REPLY, TROUBLE_REPLY,
};
pub use pending::PendingRequest;
pub use persona::{ModelTier, PersonaEntry, PersonaError, PersonaTable};
pub use routing::{parse_route_token, ROUTER_INSTRUCTION};
pub use turn::{
    last_user_turn, previous_user_turn, sanitize_history, ChatRole, ChatTurn, RawTurn,
};
