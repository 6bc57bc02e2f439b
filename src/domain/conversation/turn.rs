//! Chat turns exchanged with the client app.

use serde::{Deserialize, Serialize};

/// Who wrote a turn. The client only ever shows user and assistant turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    /// Parses a wire role. Unknown roles are `None`.
    pub fn parse(role: &str) -> Option<ChatRole> {
        match role {
            "user" => Some(ChatRole::User),
            "assistant" => Some(ChatRole::Assistant),
            _ => None,
        }
    }
}

/// One message in a conversation, as the client sends it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }
}

/// A turn as received over the wire, before role validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTurn {
    pub role: String,
    pub content: String,
}

impl RawTurn {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// Keeps only user and assistant turns, in order.
pub fn sanitize_history(raw: &[RawTurn]) -> Vec<ChatTurn> {
    raw.iter()
        .filter_map(|turn| {
            ChatRole::parse(&turn.role).map(|role| ChatTurn {
                role,
                content: turn.content.clone(),
            })
        })
        .collect()
}

/// The most recent user turn.
pub fn last_user_turn(history: &[ChatTurn]) -> Option<&ChatTurn> {
    history.iter().rev().find(|t| t.is_user())
}

/// The user turn before the most recent one.
pub fn previous_user_turn(history: &[ChatTurn]) -> Option<&ChatTurn> {
    history.iter().rev().filter(|t| t.is_user()).nth(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_drops_unknown_roles() {
        let raw = vec![
            RawTurn::new("system", "ignore me"),
            RawTurn::new("user", "hi"),
            RawTurn::new("tool", "{}"),
            RawTurn::new("assistant", "hello"),
        ];
        let history = sanitize_history(&raw);
        assert_eq!(history, vec![ChatTurn::user("hi"), ChatTurn::assistant("hello")]);
    }

    #[test]
    fn finds_last_and_previous_user_turns() {
        let history = vec![
            ChatTurn::user("I want to save more money"),
            ChatTurn::assistant("Which area?"),
            ChatTurn::user("financial"),
        ];
        assert_eq!(last_user_turn(&history).unwrap().content, "financial");
        assert_eq!(
            previous_user_turn(&history).unwrap().content,
            "I want to save more money"
        );
    }

    #[test]
    fn previous_user_turn_absent_for_single_message() {
        let history = vec![ChatTurn::user("financial")];
        assert!(previous_user_turn(&history).is_none());
    }

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_string(&ChatTurn::assistant("ok")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"ok"}"#);
    }
}
