//! # Feature Primitive
//!
//! A [`Feature`] is one bot behavior: a description for the help listing, a
//! [`Check`] deciding whether an inbound message concerns it, and a responder
//! run when it does. Patterns, commands, random responders and help are all
//! built on top of this single primitive.

use crate::{
    error::BoxError,
    handler::{DynHandler, Handler},
    message::Message,
};
use std::{fmt, future::Future, pin::Pin, sync::Arc};

/// Predicate deciding whether a feature fires for a message.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Check`",
    label = "missing `Check` implementation",
    note = "Checks are `Fn(&Message) -> bool` closures or types implementing `check`."
)]
pub trait Check: Send + Sync + 'static {
    /// Returns `true` when the feature should respond to `message`.
    fn check(&self, message: &Message) -> bool;
}

impl<F> Check for F
where
    F: Fn(&Message) -> bool + Send + Sync + 'static,
{
    fn check(&self, message: &Message) -> bool {
        (self)(message)
    }
}

/// A registered bot behavior.
///
/// Features are immutable once built. Cloning is cheap (the check and
/// responder are shared), and a clone registered twice fires twice.
///
/// # Example
///
/// ```rust
/// use quip_core::{Feature, Message};
///
/// let shout = Feature::new(
///     |msg: &Message| msg.text.ends_with('!'),
///     |_msg: Message| async {},
/// )
/// .with_description("reacts to exclamations");
///
/// assert!(shout.check(&Message::from_user("hey!")));
/// assert!(shout.is_visible());
/// ```
#[derive(Clone)]
pub struct Feature {
    description: String,
    check: Arc<dyn Check>,
    respond: Arc<dyn DynHandler<Message>>,
}

impl Feature {
    /// Create a hidden feature (empty description).
    pub fn new<C, H>(check: C, respond: H) -> Self
    where
        C: Check,
        H: Handler<Message>,
    {
        Self {
            description: String::new(),
            check: Arc::new(check),
            respond: Arc::new(respond),
        }
    }

    /// Set the description shown by the help listing.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The help text; empty when hidden.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the feature is listed by help.
    pub fn is_visible(&self) -> bool {
        !self.description.is_empty()
    }

    /// Evaluate the feature's check.
    pub fn check(&self, message: &Message) -> bool {
        self.check.check(message)
    }

    /// Run the feature's responder.
    pub fn respond(
        &self,
        message: Message,
    ) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + '_>> {
        self.respond.call_dyn(message)
    }
}

impl fmt::Debug for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Feature")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    #[test]
    fn test_hidden_by_default() {
        let feature = Feature::new(|_: &Message| true, |_: Message| async {});
        assert_eq!(feature.description(), "");
        assert!(!feature.is_visible());
    }

    #[tokio::test]
    async fn test_respond_receives_message() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let feature = Feature::new(
            |m: &Message| m.text.contains("ping"),
            move |m: Message| {
                let sink = sink.clone();
                async move {
                    sink.lock().unwrap().push(m.text);
                }
            },
        );

        let msg = Message::from_user("ping?");
        assert!(feature.check(&msg));
        feature.respond(msg).await.unwrap();
        assert_eq!(*seen.lock().unwrap(), vec!["ping?".to_string()]);
    }

    #[tokio::test]
    async fn test_clone_shares_callbacks() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let feature = Feature::new(
            |_: &Message| true,
            move |_: Message| {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                }
            },
        );
        let twin = feature.clone();

        feature.respond(Message::from_user("a")).await.unwrap();
        twin.respond(Message::from_user("b")).await.unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
