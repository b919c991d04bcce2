//! Message dispatch.

use crate::registry::Registry;
use futures::FutureExt;
use quip_core::{Feature, Message, ResponderError};
use std::{any::Any, panic::AssertUnwindSafe, sync::Arc};

/// Routes inbound messages to every matching feature.
///
/// The dispatcher owns a frozen [`Registry`] behind an `Arc`, so cloning it
/// is cheap and concurrent dispatches need no locking.
///
/// # Semantics
///
/// 1. Messages not written by a human are ignored.
/// 2. Every feature's check runs, with no short-circuit.
/// 3. Matching responders run one after another in registry order. A failing
///    or panicking responder is logged and the rest still run.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<Registry>,
}

impl Dispatcher {
    /// Create a dispatcher over a frozen registry.
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// The registry this dispatcher reads from.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Dispatch one inbound message.
    pub async fn dispatch(&self, message: &Message) {
        if !message.is_from_user() {
            tracing::trace!(sender_type = %message.sender_type, "ignoring non-user message");
            return;
        }

        let matched: Vec<&Feature> = self
            .registry
            .iter()
            .filter(|feature| feature.check(message))
            .collect();

        tracing::debug!(
            matched = matched.len(),
            registered = self.registry.len(),
            "dispatching message"
        );

        for feature in matched {
            if let Err(error) = respond_isolated(feature, message.clone()).await {
                tracing::warn!(
                    feature = %feature.description(),
                    %error,
                    "responder failed"
                );
            }
        }
    }
}

/// Run one responder, turning both errors and panics into a [`ResponderError`].
pub async fn respond_isolated(feature: &Feature, message: Message) -> Result<(), ResponderError> {
    match AssertUnwindSafe(feature.respond(message)).catch_unwind().await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(error)) => Err(ResponderError::Failed(error)),
        Err(payload) => Err(ResponderError::Panic(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegistryBuilder;
    use std::sync::Mutex;

    async fn explode(_: Message) {
        panic!("kaboom");
    }

    fn recording(id: usize, order: Arc<Mutex<Vec<usize>>>) -> Feature {
        Feature::new(
            |_: &Message| true,
            move |_: Message| {
                let order = order.clone();
                async move {
                    order.lock().unwrap().push(id);
                }
            },
        )
    }

    #[tokio::test]
    async fn test_ignores_bots() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let dispatcher = Dispatcher::new(
            RegistryBuilder::new()
                .add(recording(1, order.clone()))
                .build(),
        );

        dispatcher.dispatch(&Message::new("hello", "bot")).await;
        dispatcher.dispatch(&Message::new("hello", "system")).await;
        assert!(order.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_runs_in_registry_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let dispatcher = Dispatcher::new(
            RegistryBuilder::new()
                .add(recording(1, order.clone()))
                .add(recording(2, order.clone()))
                .add(recording(3, order.clone()))
                .build(),
        );

        dispatcher.dispatch(&Message::from_user("go")).await;
        assert_eq!(*order.lock().unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_failure_does_not_stop_others() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let failing = Feature::new(|_: &Message| true, |_: Message| async {
            Err::<(), _>("broken")
        });
        let panicking = Feature::new(|_: &Message| true, explode);

        let dispatcher = Dispatcher::new(
            RegistryBuilder::new()
                .add(failing)
                .add(panicking)
                .add(recording(7, order.clone()))
                .build(),
        );

        dispatcher.dispatch(&Message::from_user("go")).await;
        assert_eq!(*order.lock().unwrap(), vec![7]);
    }

    #[tokio::test]
    async fn test_respond_isolated_reports_panic() {
        let feature = Feature::new(|_: &Message| true, explode);

        let err = respond_isolated(&feature, Message::from_user("x"))
            .await
            .unwrap_err();
        assert!(matches!(err, ResponderError::Panic(ref msg) if msg == "kaboom"));
    }
}
