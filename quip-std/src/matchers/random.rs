//! Random Responder - a command answering with one pick from a pool.

use super::command::{Command, CommandCall, command_feature};
use crate::sender::Sender;
use quip_core::{BoxError, Feature, Handler};
use rand::Rng;
use std::{fmt, sync::Arc};

/// Where a random responder gets its reply from.
#[derive(Clone)]
pub enum Choices {
    /// Pick uniformly from a fixed pool.
    Fixed(Vec<String>),
    /// Ask a supplier for a fresh reply every time.
    Supplier(Arc<dyn Fn() -> String + Send + Sync>),
}

impl Choices {
    /// Wrap a supplier closure.
    pub fn supplier<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Choices::Supplier(Arc::new(f))
    }

    /// Produce one reply, or `None` for an empty pool.
    pub fn pick(&self) -> Option<String> {
        match self {
            Choices::Fixed(pool) if pool.is_empty() => None,
            Choices::Fixed(pool) => {
                let index = rand::rng().random_range(0..pool.len());
                Some(pool[index].clone())
            }
            Choices::Supplier(supply) => Some(supply()),
        }
    }
}

impl fmt::Debug for Choices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choices::Fixed(pool) => f.debug_tuple("Fixed").field(pool).finish(),
            Choices::Supplier(_) => f.write_str("Supplier(..)"),
        }
    }
}

impl From<Vec<String>> for Choices {
    fn from(pool: Vec<String>) -> Self {
        Choices::Fixed(pool)
    }
}

impl From<Vec<&str>> for Choices {
    fn from(pool: Vec<&str>) -> Self {
        Choices::Fixed(pool.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Choices {
    fn from(pool: [&str; N]) -> Self {
        Choices::Fixed(pool.iter().map(|s| s.to_string()).collect())
    }
}

struct RandomResponder {
    command: String,
    choices: Choices,
    sender: Sender,
}

impl Handler<CommandCall> for RandomResponder {
    type Output = Result<(), BoxError>;

    async fn call(&self, _call: CommandCall) -> Self::Output {
        let reply = self
            .choices
            .pick()
            .ok_or_else(|| format!("/{} has nothing to pick from", self.command))?;
        self.sender.send(reply).await?;
        Ok(())
    }
}

/// Derive a command feature that replies with one random choice.
///
/// Arguments given to the command are ignored.
pub fn random_feature(command: Command, choices: Choices, sender: Sender) -> Feature {
    let responder = RandomResponder {
        command: command.name().to_string(),
        choices,
        sender,
    };
    command_feature(command, responder)
}
