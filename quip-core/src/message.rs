//! Inbound chat messages.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// `sender_type` value carried by messages written by a human.
pub const USER_SENDER: &str = "user";

/// A chat message delivered by the webhook.
///
/// Only `text` and `sender_type` are interpreted. Every other field of the
/// JSON payload is kept verbatim in [`Message::extra`] so responders can read
/// it (`name`, `group_id`, `attachments`, ...) without the core caring.
///
/// # Example
///
/// ```rust
/// use quip_core::Message;
///
/// let msg: Message = serde_json::from_str(
///     r#"{"text":"/ping","sender_type":"user","name":"Ada"}"#,
/// ).unwrap();
///
/// assert!(msg.is_from_user());
/// assert_eq!(msg.field("name").and_then(|v| v.as_str()), Some("Ada"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Message body. Image-only messages arrive with `null`, read as `""`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,

    /// Who wrote the message: `"user"`, `"bot"`, `"system"`...
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sender_type: String,

    /// Every other field of the payload, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Message {
    /// Create a message with the given text and sender type.
    pub fn new(text: impl Into<String>, sender_type: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender_type: sender_type.into(),
            extra: Map::new(),
        }
    }

    /// Create a message written by a human.
    pub fn from_user(text: impl Into<String>) -> Self {
        Self::new(text, USER_SENDER)
    }

    /// Attach a pass-through field.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Whether a human wrote this message.
    ///
    /// Bots (including this one) never trigger features.
    pub fn is_from_user(&self) -> bool {
        self.sender_type == USER_SENDER
    }

    /// Look up a pass-through field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_keeps_unknown_fields() {
        let msg: Message = serde_json::from_str(
            r#"{"text":"hi","sender_type":"user","group_id":"42","attachments":[]}"#,
        )
        .unwrap();

        assert_eq!(msg.text, "hi");
        assert_eq!(msg.field("group_id"), Some(&Value::from("42")));
        assert_eq!(msg.field("attachments"), Some(&Value::Array(vec![])));
        assert!(msg.field("text").is_none());
    }

    #[test]
    fn test_null_text_is_empty() {
        let msg: Message =
            serde_json::from_str(r#"{"text":null,"sender_type":"user"}"#).unwrap();
        assert_eq!(msg.text, "");
    }

    #[test]
    fn test_sender_type() {
        assert!(Message::from_user("x").is_from_user());
        assert!(!Message::new("x", "bot").is_from_user());
        assert!(!Message::new("x", "system").is_from_user());
        assert!(!Message::new("x", "User").is_from_user());
    }

    #[test]
    fn test_encode_flattens_extra() {
        let msg = Message::from_user("hey").with_field("name", "Ada");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["name"], "Ada");
        assert_eq!(value["sender_type"], "user");
    }
}
