//! # Responder Layer (Handler)
//!
//! A handler is the business logic a feature runs once its check passes.
//! Most handlers are plain async closures; the matcher layer feeds them a
//! richer input than the bare [`Message`] (the pattern's matches, the parsed
//! command arguments).
//!
//! # Usage Patterns
//!
//! 1. **Direct closure**: `|msg: Message| async move { ... }`
//! 2. **Struct implementation**: `impl Handler<Message> for Greeter`
//! 3. **Type-erased**: [`DynHandler`] when stored inside a [`Feature`]
//!
//! [`Message`]: crate::Message
//! [`Feature`]: crate::Feature

use crate::{error::BoxError, response::IntoOutcome};
use std::{future::Future, pin::Pin};

/// The responder invoked when a feature matches.
///
/// Handlers receive an owned input and perform async side effects, usually
/// posting a reply. Whatever they return is turned into success or failure
/// through [`IntoOutcome`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle input of type `{In}`",
    label = "missing `Handler<{In}>` implementation",
    note = "Handlers must implement the `call` method for the input type `{In}`."
)]
pub trait Handler<In>: Send + Sync + 'static {
    /// What the handler returns, usually `()` or a `Result`.
    type Output: IntoOutcome;

    /// Executes the handler logic.
    fn call(&self, input: In) -> impl Future<Output = Self::Output> + Send;
}

// Blanket impl for closures
impl<F, In, Out, Fut> Handler<In> for F
where
    Out: IntoOutcome,
    F: Fn(In) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Out> + Send,
{
    type Output = Out;

    fn call(&self, input: In) -> impl Future<Output = Self::Output> + Send {
        (self)(input)
    }
}

/// Object-safe version of [`Handler`].
///
/// Features store their responder behind this trait so that differently
/// typed handlers can share one registry.
pub trait DynHandler<In>: Send + Sync + 'static {
    /// Run the handler and normalize its output.
    fn call_dyn<'a>(
        &'a self,
        input: In,
    ) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + 'a>>;
}

impl<H, In> DynHandler<In> for H
where
    H: Handler<In>,
    In: Send + 'static,
{
    fn call_dyn<'a>(
        &'a self,
        input: In,
    ) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + 'a>> {
        Box::pin(async move { self.call(input).await.into_outcome() })
    }
}
