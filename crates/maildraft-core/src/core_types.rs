//! Core type definitions for the chat-completion wire protocol
//!
//! These types form the contract between the conversation composer and the
//! request dispatcher. The wire format follows the OpenAI chat-completion
//! convention: role-tagged messages serialized as lowercase role strings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One role-tagged entry in the conversation sent to the endpoint.
///
/// The dispatcher sends exactly two of these per request: the fixed system
/// instruction followed by the accumulated operator prompt, in that order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_roles_serialize_lowercase() {
        let message = Message::system("be terse");
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value, json!({"role": "system", "content": "be terse"}));

        let message = Message::user("hello");
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value, json!({"role": "user", "content": "hello"}));
    }

    #[test]
    fn test_message_deserializes_from_wire_form() {
        let message: Message =
            serde_json::from_value(json!({"role": "user", "content": "hi"})).unwrap();
        assert_eq!(message.role, Role::User);
        assert_eq!(message.content, "hi");
    }
}
