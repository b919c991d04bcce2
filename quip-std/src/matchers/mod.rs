//! Matcher layer.
//!
//! Each matcher derives a [`Feature`](quip_core::Feature) from a higher-level
//! description: a pattern found in the text, a slash command, or a command
//! answering with a random pick.

pub mod command;
pub mod pattern;
pub mod random;

pub use command::{Command, CommandCall, Separator, command_feature};
pub use pattern::{Pattern, PatternMatch, pattern_feature};
pub use random::{Choices, random_feature};
