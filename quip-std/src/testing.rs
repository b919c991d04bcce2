//! Testing utilities for Quip.
//!
//! This module provides doubles that make testing features and bots easier.
//!
//! # Features
//!
//! - [`RecordingTransport`]: A transport that records every post instead of sending it
//! - [`RecordingHandler`]: A handler that records every input it receives
//! - [`CountingHandler`]: A handler that counts invocations

use async_trait::async_trait;
use quip_core::{Handler, Post, SendError, Transport};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Transport
// ============================================================================

/// A transport that records posts.
///
/// Clones share the same record, so keep one clone for assertions and hand
/// the other to a [`Sender`](crate::Sender).
///
/// # Example
///
/// ```rust,ignore
/// let transport = RecordingTransport::new();
/// let sender = Sender::new(transport.clone());
/// sender.set_bot_id("bot");
///
/// sender.send("hello").await?;
/// assert_eq!(transport.texts(), vec!["hello"]);
/// ```
#[derive(Clone, Default)]
pub struct RecordingTransport {
    posts: Arc<Mutex<Vec<Post>>>,
    reject: Option<(u16, String)>,
}

impl RecordingTransport {
    /// Create a transport that accepts every post.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport that records posts but rejects them with `status`.
    pub fn failing(status: u16, body: impl Into<String>) -> Self {
        Self {
            posts: Arc::new(Mutex::new(Vec::new())),
            reject: Some((status, body.into())),
        }
    }

    /// Get a clone of the recorded posts.
    pub fn posts(&self) -> Vec<Post> {
        self.posts.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Texts of the recorded posts, in order.
    pub fn texts(&self) -> Vec<String> {
        self.posts().into_iter().map(|p| p.text).collect()
    }

    /// Get the number of recorded posts.
    pub fn count(&self) -> usize {
        self.posts.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Clear all recorded posts.
    pub fn clear(&self) {
        self.posts.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn post(&self, post: &Post) -> Result<(), SendError> {
        self.posts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(post.clone());
        match &self.reject {
            Some((status, body)) => Err(SendError::Rejected {
                status: *status,
                body: body.clone(),
            }),
            None => Ok(()),
        }
    }
}

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records every input it receives.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHandler::<CommandCall>::new();
/// bot.command("ping", recorder.clone());
///
/// // ... dispatch ...
/// assert_eq!(recorder.count(), 1);
/// ```
pub struct RecordingHandler<In> {
    inputs: Arc<Mutex<Vec<In>>>,
}

impl<In: Clone> RecordingHandler<In> {
    /// Create a new recording handler.
    pub fn new() -> Self {
        Self {
            inputs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded inputs.
    pub fn inputs(&self) -> Vec<In> {
        self.inputs.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Get the number of recorded inputs.
    pub fn count(&self) -> usize {
        self.inputs.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl<In: Clone> Default for RecordingHandler<In> {
    fn default() -> Self {
        Self::new()
    }
}

impl<In> Clone for RecordingHandler<In> {
    fn clone(&self) -> Self {
        Self {
            inputs: self.inputs.clone(),
        }
    }
}

impl<In: Send + 'static> Handler<In> for RecordingHandler<In> {
    type Output = ();

    async fn call(&self, input: In) {
        self.inputs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(input);
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts invocations.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CountingHandler::new();
/// bot.feature_fn("", |_: &Message| true, counter.clone());
///
/// // ... dispatch ...
/// assert_eq!(counter.count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<In: Send + 'static> Handler<In> for CountingHandler {
    type Output = ();

    async fn call(&self, _input: In) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recording_transport_clear() {
        let transport = RecordingTransport::new();
        let post = Post {
            bot_id: "bot".into(),
            text: "hi".into(),
            picture_url: None,
        };
        transport.post(&post).await.unwrap();
        assert_eq!(transport.count(), 1);

        transport.clear();
        assert_eq!(transport.count(), 0);
        assert!(transport.texts().is_empty());
    }

    #[tokio::test]
    async fn test_counting_handler_reset() {
        let counter = CountingHandler::new();
        Handler::<u8>::call(&counter, 1).await;
        Handler::<u8>::call(&counter, 2).await;
        assert_eq!(counter.count(), 2);

        counter.reset();
        assert_eq!(counter.count(), 0);
    }
}
