//! # quip-std
//!
//! Standard machinery for the Quip chat bot dispatch engine.
//!
//! This crate provides:
//! - **Registry**: [`RegistryBuilder`] collects features, [`Registry`] is the frozen, sorted result
//! - **Matchers**: [`matchers`] derives features from patterns, commands and random pools
//! - **Dispatch**: [`Dispatcher`] runs every matching responder for an inbound message
//! - **Sending**: [`Sender`] posts replies through a [`Transport`](quip_core::Transport)
//! - **Testing**: [`testing`] doubles for transports and handlers

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use quip_core;

// Modules
pub mod dispatcher;
pub mod matchers;
pub mod registry;
pub mod sender;
pub mod testing;

pub use dispatcher::{Dispatcher, respond_isolated};
pub use registry::{Registry, RegistryBuilder};
pub use sender::Sender;
