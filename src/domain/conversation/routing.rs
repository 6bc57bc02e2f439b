//! Router output contract.

use crate::domain::wellness::DomainLabel;

/// System instruction for the routing model.
pub const ROUTER_INSTRUCTION: &str = "You are a routing assistant for a wellness chatbot. \
Given a user's message, decide which wellness domain it best fits. \
Reply with only one word (all lowercase) from this list: \
'mental', 'physical', 'spiritual', 'vocational', 'environmental', 'financial', 'social', or 'intellectual'. \
If it does not fit any, reply with 'main'.";

/// Validates a routing reply against the allow-list.
///
/// The reply is trimmed and lower-cased first; anything that is not exactly
/// one allowed token becomes `main`.
pub fn parse_route_token(reply: &str) -> DomainLabel {
    let token = reply.trim().to_lowercase();
    DomainLabel::from_token(&token).unwrap_or(DomainLabel::Main)
}
