//! Bot configuration.

use crate::{error::ConfigError, transport::DEFAULT_ENDPOINT};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Environment variable holding the bot identity.
pub const ENV_BOT_ID: &str = "QUIP_BOT_ID";
/// Environment variable overriding the posting endpoint.
pub const ENV_ENDPOINT: &str = "QUIP_ENDPOINT";
/// Environment variable overriding the webhook bind address.
pub const ENV_BIND: &str = "QUIP_BIND";

/// Everything needed to run a bot over HTTP.
///
/// # Example
///
/// ```rust
/// use quip::BotConfig;
///
/// let config: BotConfig = serde_json::from_str(r#"{"bot_id":"abc123"}"#).unwrap();
/// assert_eq!(config.endpoint, "https://api.groupme.com/v3/bots/post");
/// assert_eq!(config.bind.port(), 8080);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotConfig {
    /// Opaque identity sent with every post.
    pub bot_id: String,
    /// Bot-posting endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Address the webhook listens on.
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
}

impl BotConfig {
    /// Configuration with default endpoint and bind address.
    pub fn new(bot_id: impl Into<String>) -> Self {
        Self {
            bot_id: bot_id.into(),
            endpoint: default_endpoint(),
            bind: default_bind(),
        }
    }

    /// Load from `QUIP_BOT_ID`, `QUIP_ENDPOINT` and `QUIP_BIND`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_id = lookup(ENV_BOT_ID)
            .filter(|id| !id.trim().is_empty())
            .ok_or(ConfigError::MissingEnv(ENV_BOT_ID))?;
        let endpoint = lookup(ENV_ENDPOINT).unwrap_or_else(default_endpoint);
        let bind = match lookup(ENV_BIND) {
            Some(addr) => addr.parse()?,
            None => default_bind(),
        };
        Ok(Self {
            bot_id,
            endpoint,
            bind,
        })
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}
