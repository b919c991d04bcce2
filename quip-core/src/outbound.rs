//! Outbound posting seam.

use crate::error::SendError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Payload posted to the bot endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Identity of the posting bot.
    pub bot_id: String,
    /// Message body.
    pub text: String,
    /// Optional image attached to the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
}

/// Delivers posts to the chat service.
///
/// One attempt per call: implementations must not retry.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Deliver `post`, reporting success only when the service accepted it.
    async fn post(&self, post: &Post) -> Result<(), SendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picture_url_omitted_when_absent() {
        let post = Post {
            bot_id: "b1".into(),
            text: "hi".into(),
            picture_url: None,
        };
        let json = serde_json::to_string(&post).unwrap();
        assert_eq!(json, r#"{"bot_id":"b1","text":"hi"}"#);
    }

    #[test]
    fn test_picture_url_serialized() {
        let post = Post {
            bot_id: "b1".into(),
            text: "look".into(),
            picture_url: Some("https://i.example/cat.png".into()),
        };
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["picture_url"], "https://i.example/cat.png");
    }
}
