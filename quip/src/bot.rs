//! The composition surface.

use crate::{
    config::BotConfig,
    error::{ConfigError, ServeError},
    help::{HelpIndex, help_feature},
    plugin::{Plugin, PluginRegistry},
    server,
    transport::HttpTransport,
};
use quip_core::{Check, Feature, Handler, Message, Transport};
use quip_std::{
    Dispatcher, RegistryBuilder, Sender,
    matchers::{
        Choices, Command, CommandCall, Pattern, PatternMatch, command_feature, pattern_feature,
        random_feature,
    },
};
use serde_json::Value;
use std::net::SocketAddr;

/// A bot under construction.
///
/// Every builder method returns the bot again so calls chain. Registration
/// ends with [`build`](Self::build), which sorts the features by description
/// and freezes them into a [`Dispatcher`]; [`listen`](Self::listen) does the
/// same and then serves the webhook.
///
/// # Example
///
/// ```rust
/// use quip::{Bot, prelude::*};
/// use quip::testing::RecordingTransport;
///
/// let mut bot = Bot::new(RecordingTransport::new());
/// let sender = bot.sender();
///
/// bot.config("my-bot-id")
///     .command(Command::new("ping").description("check I'm alive"), move |_: CommandCall| {
///         let sender = sender.clone();
///         async move { sender.send("pong").await }
///     })
///     .random(Command::new("coin").description("flip a coin"), ["heads", "tails"])
///     .help();
///
/// let dispatcher = bot.build();
/// assert_eq!(dispatcher.registry().len(), 3);
/// ```
#[derive(Debug)]
pub struct Bot {
    features: RegistryBuilder,
    plugins: PluginRegistry,
    sender: Sender,
    help: HelpIndex,
}

impl Bot {
    /// Create an unconfigured bot posting through `transport`.
    pub fn new<T: Transport>(transport: T) -> Self {
        Self {
            features: RegistryBuilder::new(),
            plugins: PluginRegistry::default(),
            sender: Sender::new(transport),
            help: HelpIndex::default(),
        }
    }

    /// Create a bot posting over HTTP, already configured from `config`.
    pub fn from_config(config: &BotConfig) -> Self {
        let mut bot = Self::new(HttpTransport::new(config.endpoint.clone()));
        bot.config(config.bot_id.clone());
        bot
    }

    /// Set the bot identity used by every reply.
    pub fn config(&mut self, bot_id: impl Into<String>) -> &mut Self {
        self.sender.set_bot_id(bot_id);
        self
    }

    /// A handle responders capture to post replies.
    pub fn sender(&self) -> Sender {
        self.sender.clone()
    }

    /// Register a prebuilt feature.
    pub fn feature(&mut self, feature: Feature) -> &mut Self {
        self.features.add_mut(feature);
        self
    }

    /// Register a feature from its parts. An empty description hides it
    /// from help.
    pub fn feature_fn<C, H>(&mut self, description: impl Into<String>, check: C, respond: H) -> &mut Self
    where
        C: Check,
        H: Handler<Message>,
    {
        self.feature(Feature::new(check, respond).with_description(description))
    }

    /// Respond whenever `pattern` occurs in a message.
    pub fn pattern<H>(&mut self, pattern: impl Into<Pattern>, handler: H) -> &mut Self
    where
        H: Handler<PatternMatch>,
    {
        self.feature(pattern_feature(pattern.into(), handler))
    }

    /// Respond to a slash command.
    pub fn command<H>(&mut self, command: impl Into<Command>, handler: H) -> &mut Self
    where
        H: Handler<CommandCall>,
    {
        self.feature(command_feature(command.into(), handler))
    }

    /// Answer a slash command with one random pick.
    pub fn random(&mut self, command: impl Into<Command>, choices: impl Into<Choices>) -> &mut Self {
        let feature = random_feature(command.into(), choices.into(), self.sender());
        self.feature(feature)
    }

    /// Register `/help`, listing every visible feature.
    pub fn help(&mut self) -> &mut Self {
        let feature = help_feature(self.help.clone(), self.sender());
        self.feature(feature)
    }

    /// Install plugins.
    ///
    /// Names are checked against the built-in entry points, already installed
    /// plugins and each other before anything is installed.
    pub fn use_plugins<I>(&mut self, plugins: I) -> Result<&mut Self, ConfigError>
    where
        I: IntoIterator<Item = Plugin>,
    {
        self.plugins.install(plugins.into_iter().collect())?;
        Ok(self)
    }

    /// Run an installed plugin with `args`.
    pub fn invoke(&mut self, name: &str, args: &[Value]) -> Result<&mut Self, ConfigError> {
        let plugin = self
            .plugins
            .get(name)
            .ok_or_else(|| ConfigError::UnknownPlugin(name.to_string()))?;
        plugin
            .run(self, args)
            .map_err(|source| ConfigError::Plugin {
                name: name.to_string(),
                source,
            })?;
        Ok(self)
    }

    /// Whether a plugin is installed under `name`.
    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.contains(name)
    }

    /// Number of registered features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether no feature is registered.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Freeze registration.
    ///
    /// Features are sorted by description once, here; the help listing is
    /// published from the sorted order.
    pub fn build(self) -> Dispatcher {
        let registry = self.features.build();
        self.help.publish(&registry);
        tracing::debug!(features = registry.len(), "registry frozen");
        Dispatcher::new(registry)
    }

    /// Freeze registration and serve the webhook on `addr`.
    pub async fn listen(self, addr: SocketAddr) -> Result<(), ServeError> {
        server::listen(addr, self.build()).await
    }
}
