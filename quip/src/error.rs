//! Error types for the bot surface.
//!
//! - [`ConfigError`] - Raised while assembling a bot; fatal by contract
//! - [`ServeError`] - Raised while binding or running the webhook server

use quip_core::BoxError;
use std::{io, net::SocketAddr};
use thiserror::Error;

/// Errors raised while configuring a bot.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A plugin name collides with a built-in entry point or another plugin.
    #[error("plugin name `{0}` is already taken")]
    DuplicatePlugin(String),

    /// No plugin is installed under this name.
    #[error("no plugin named `{0}`")]
    UnknownPlugin(String),

    /// A plugin's install function failed.
    #[error("plugin `{name}` failed: {source}")]
    Plugin {
        /// Name the plugin was invoked under.
        name: String,
        /// Error returned by the plugin.
        #[source]
        source: BoxError,
    },

    /// A required environment variable is not set.
    #[error("missing environment variable {0}")]
    MissingEnv(&'static str),

    /// The bind address could not be parsed.
    #[error("invalid bind address: {0}")]
    InvalidBind(#[from] std::net::AddrParseError),
}

/// Errors raised by the webhook server.
#[derive(Error, Debug)]
pub enum ServeError {
    /// The listening socket could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Requested address.
        addr: SocketAddr,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}
