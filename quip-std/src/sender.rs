//! Outbound sending through a configured bot identity.

use quip_core::{Post, SendError, Transport};
use std::sync::{Arc, RwLock};

/// Cloneable handle responders use to post replies.
///
/// Every clone shares the same transport and the same bot identity, so the
/// identity can be configured after responders captured their sender but
/// before any traffic arrives.
#[derive(Clone)]
pub struct Sender {
    transport: Arc<dyn Transport>,
    bot_id: Arc<RwLock<Option<String>>>,
}

impl Sender {
    /// Create an unconfigured sender over `transport`.
    pub fn new<T: Transport>(transport: T) -> Self {
        Self::from_arc(Arc::new(transport))
    }

    /// Create an unconfigured sender over a shared transport.
    pub fn from_arc(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            bot_id: Arc::new(RwLock::new(None)),
        }
    }

    /// Set the bot identity used by every clone of this sender.
    pub fn set_bot_id(&self, bot_id: impl Into<String>) {
        *self.bot_id.write().unwrap_or_else(|e| e.into_inner()) = Some(bot_id.into());
    }

    /// The configured bot identity, if any.
    pub fn bot_id(&self) -> Option<String> {
        self.bot_id.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Post a text message.
    pub async fn send(&self, text: impl Into<String>) -> Result<(), SendError> {
        self.post(text.into(), None).await
    }

    /// Post a text message with an attached picture.
    pub async fn send_picture(
        &self,
        text: impl Into<String>,
        picture_url: impl Into<String>,
    ) -> Result<(), SendError> {
        self.post(text.into(), Some(picture_url.into())).await
    }

    async fn post(&self, text: String, picture_url: Option<String>) -> Result<(), SendError> {
        let bot_id = self.bot_id().ok_or(SendError::Unconfigured)?;
        let post = Post {
            bot_id,
            text,
            picture_url,
        };
        tracing::debug!(len = post.text.len(), picture = post.picture_url.is_some(), "posting message");
        self.transport.post(&post).await
    }
}

impl std::fmt::Debug for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sender")
            .field("bot_id", &self.bot_id())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingTransport;

    #[tokio::test]
    async fn test_send_requires_bot_id() {
        let transport = RecordingTransport::new();
        let sender = Sender::new(transport.clone());

        let err = sender.send("hi").await.unwrap_err();
        assert!(matches!(err, SendError::Unconfigured));
        assert_eq!(transport.count(), 0);
    }

    #[tokio::test]
    async fn test_clones_share_identity() {
        let transport = RecordingTransport::new();
        let sender = Sender::new(transport.clone());
        let captured = sender.clone();

        sender.set_bot_id("bot-1");
        captured.send("hello").await.unwrap();
        captured.send_picture("look", "https://i.example/a.png").await.unwrap();

        let posts = transport.posts();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].bot_id, "bot-1");
        assert_eq!(posts[0].text, "hello");
        assert_eq!(posts[0].picture_url, None);
        assert_eq!(posts[1].picture_url.as_deref(), Some("https://i.example/a.png"));
    }

    #[tokio::test]
    async fn test_transport_error_is_reported() {
        let transport = RecordingTransport::failing(500, "nope");
        let sender = Sender::new(transport);
        sender.set_bot_id("bot-1");

        let err = sender.send("hi").await.unwrap_err();
        assert!(matches!(err, SendError::Rejected { status: 500, .. }));
    }
}
