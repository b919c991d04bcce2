//! Error types for Quip.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`ResponderError`] - A feature's responder failed during dispatch
//! - [`SendError`] - An outbound post could not be delivered

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by a single responder while a message is dispatched.
///
/// These never cross the dispatch boundary: the dispatcher logs them and
/// moves on to the next matched feature.
#[derive(Error, Debug)]
pub enum ResponderError {
    /// The responder returned an error.
    #[error("responder failed: {0}")]
    Failed(#[source] BoxError),

    /// The responder panicked.
    #[error("responder panicked: {0}")]
    Panic(String),
}

/// Errors that can occur while posting a message through a transport.
#[derive(Error, Debug)]
pub enum SendError {
    /// No bot identity has been configured yet.
    #[error("bot is not configured; set a bot id before sending")]
    Unconfigured,

    /// The request never got a response (connection, TLS, timeout...).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The endpoint answered with something other than `202 Accepted`.
    #[error("post rejected with status {status}: {body}")]
    Rejected {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Response body, kept verbatim as error detail.
        body: String,
    },
}

impl From<BoxError> for ResponderError {
    fn from(err: BoxError) -> Self {
        ResponderError::Failed(err)
    }
}

impl From<BoxError> for SendError {
    fn from(err: BoxError) -> Self {
        SendError::Transport(err)
    }
}
