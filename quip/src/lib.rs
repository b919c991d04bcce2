//! # quip - Chat Bots From Composable Features
//!
//! `quip` receives chat messages over a webhook, matches each one against an
//! ordered set of features and runs every feature that matches. Features are
//! declared through a fluent [`Bot`] builder; patterns, slash commands,
//! random responders and `/help` are all layers over one primitive,
//! [`Feature`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quip::{Bot, BotConfig, prelude::*};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BotConfig::from_env()?;
//!     let mut bot = Bot::from_config(&config);
//!     let sender = bot.sender();
//!
//!     bot.command(Command::new("roll").description("roll a die"), move |_: CommandCall| {
//!         let sender = sender.clone();
//!         async move { sender.send("4").await }
//!     })
//!     .random("8ball", ["yes", "no", "ask again later"])
//!     .help();
//!
//!     bot.listen(config.bind).await?;
//!     Ok(())
//! }
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod bot;
mod config;
mod error;
mod help;
mod plugin;
pub mod server;
mod transport;

pub use bot::Bot;
pub use config::{BotConfig, ENV_BIND, ENV_BOT_ID, ENV_ENDPOINT};
pub use error::{ConfigError, ServeError};
pub use plugin::{InstallFn, Plugin, RESERVED_NAMES};
pub use transport::{DEFAULT_ENDPOINT, HttpTransport};

pub use quip_core::{
    BoxError, Check, DynHandler, Feature, Handler, IntoOutcome, Message, Post, ResponderError,
    SendError, Transport, USER_SENDER,
};
pub use quip_std::{Dispatcher, Registry, RegistryBuilder, Sender};

/// Matchers deriving features from patterns and commands.
pub mod matchers {
    pub use quip_std::matchers::{
        Choices, Command, CommandCall, Pattern, PatternMatch, Separator, command_feature,
        pattern_feature, random_feature,
    };
    pub use regex::Regex;
}

/// Testing utilities.
pub mod testing {
    pub use quip_std::testing::{CountingHandler, RecordingHandler, RecordingTransport};
}

/// Prelude module - common imports for Quip.
///
/// # Usage
///
/// ```rust,ignore
/// use quip::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Bot, BoxError, Feature, Handler, Message, Plugin, Sender,
        matchers::{Choices, Command, CommandCall, Pattern, PatternMatch},
    };
}
