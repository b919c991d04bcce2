//! Named plugins extending the bot surface.
//!
//! A plugin is an install function stored under a unique name. Once
//! installed through [`Bot::use_plugins`], it is resolved by name with
//! [`Bot::invoke`], which hands it the bot and the caller's arguments.
//!
//! [`Bot::use_plugins`]: crate::Bot::use_plugins
//! [`Bot::invoke`]: crate::Bot::invoke

use crate::{bot::Bot, error::ConfigError};
use quip_core::BoxError;
use serde_json::Value;
use std::{
    collections::{HashMap, HashSet},
    fmt,
    sync::Arc,
};

/// Names of the built-in entry points; plugins may not reuse them.
pub const RESERVED_NAMES: [&str; 9] = [
    "feature", "pattern", "command", "random", "help", "config", "use", "send", "listen",
];

/// Signature of a plugin's install function.
pub type InstallFn = dyn Fn(&mut Bot, &[Value]) -> Result<(), BoxError> + Send + Sync;

/// A named extension of the bot surface.
///
/// # Example
///
/// ```rust
/// use quip::{Bot, Plugin, prelude::*};
/// use quip::testing::RecordingTransport;
///
/// let echo = Plugin::new("echo", |bot: &mut Bot, args: &[serde_json::Value]| {
///     for word in args.iter().filter_map(|a| a.as_str()) {
///         bot.pattern(Pattern::literal(word)?, |_: PatternMatch| async {});
///     }
///     Ok(())
/// });
///
/// let mut bot = Bot::new(RecordingTransport::new());
/// bot.use_plugins([echo])
///     .unwrap()
///     .invoke("echo", &["hi".into(), "yo".into()])
///     .unwrap();
/// assert_eq!(bot.len(), 2);
/// ```
#[derive(Clone)]
pub struct Plugin {
    name: String,
    install: Arc<InstallFn>,
}

impl Plugin {
    /// Create a plugin from its name and install function.
    pub fn new<F>(name: impl Into<String>, install: F) -> Self
    where
        F: Fn(&mut Bot, &[Value]) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            install: Arc::new(install),
        }
    }

    /// The name the plugin is invoked under.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn run(&self, bot: &mut Bot, args: &[Value]) -> Result<(), BoxError> {
        (self.install)(bot, args)
    }
}

impl fmt::Debug for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plugin")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Capability map from plugin names to plugins.
#[derive(Debug, Default)]
pub(crate) struct PluginRegistry {
    plugins: HashMap<String, Plugin>,
}

impl PluginRegistry {
    /// Install a batch of plugins, all or nothing.
    pub(crate) fn install(&mut self, batch: Vec<Plugin>) -> Result<(), ConfigError> {
        let mut incoming = HashSet::new();
        for plugin in &batch {
            let name = plugin.name();
            if RESERVED_NAMES.contains(&name)
                || self.plugins.contains_key(name)
                || !incoming.insert(name)
            {
                return Err(ConfigError::DuplicatePlugin(name.to_string()));
            }
        }

        for plugin in batch {
            tracing::debug!(plugin = %plugin.name(), "installing plugin");
            self.plugins.insert(plugin.name.clone(), plugin);
        }
        Ok(())
    }

    pub(crate) fn get(&self, name: &str) -> Option<Plugin> {
        self.plugins.get(name).cloned()
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }
}
