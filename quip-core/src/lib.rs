//! # quip-core
//!
//! Core types for the Quip chat bot dispatch engine.
//!
//! This crate has minimal dependencies and is meant to be imported by plugins
//! that only need to describe features, not run them.
//!
//! # Building Blocks
//!
//! ## [`Message`]
//!
//! The inbound chat message. Only `text` and `sender_type` are interpreted;
//! every other field is opaque pass-through data.
//!
//! ## [`Feature`]
//!
//! The single primitive every behavior compiles down to: a description, a
//! [`Check`] predicate, and a responder. Higher-level builders (patterns,
//! commands, random responders, help) live in `quip-std` and produce
//! Features.
//!
//! ## [`Handler`]
//!
//! Async business logic run when a feature matches. Closures work directly;
//! their output is normalized through [`IntoOutcome`].
//!
//! ## [`Transport`]
//!
//! The outbound seam. A transport delivers a [`Post`] and reports whether the
//! chat service accepted it.
//!
//! # Error Types
//!
//! - [`ResponderError`] - A responder failed or panicked during dispatch
//! - [`SendError`] - An outbound post failed

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod feature;
mod handler;
mod message;
mod outbound;
mod response;

// Re-exports
pub use error::{BoxError, ResponderError, SendError};
pub use feature::{Check, Feature};
pub use handler::{DynHandler, Handler};
pub use message::{Message, USER_SENDER};
pub use outbound::{Post, Transport};
pub use response::IntoOutcome;
