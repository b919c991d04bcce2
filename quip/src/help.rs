//! The `/help` command.

use quip_core::{BoxError, Feature, Handler};
use quip_std::{
    Registry, Sender,
    matchers::{Command, CommandCall, command_feature},
};
use std::sync::{Arc, OnceLock};

/// Listing shared between every `/help` feature of one bot.
///
/// It is empty until the registry is frozen; the listing then reflects the
/// final, sorted order.
#[derive(Debug, Clone, Default)]
pub(crate) struct HelpIndex {
    listing: Arc<OnceLock<String>>,
}

impl HelpIndex {
    /// Record the visible descriptions of the frozen registry.
    pub(crate) fn publish(&self, registry: &Registry) {
        let listing = registry.descriptions().collect::<Vec<_>>().join("\n");
        let _ = self.listing.set(listing);
    }

    fn listing(&self) -> &str {
        self.listing.get().map(String::as_str).unwrap_or_default()
    }
}

struct HelpResponder {
    index: HelpIndex,
    sender: Sender,
}

impl Handler<CommandCall> for HelpResponder {
    type Output = Result<(), BoxError>;

    async fn call(&self, _call: CommandCall) -> Self::Output {
        let listing = self.index.listing();
        if listing.is_empty() {
            tracing::debug!("nothing to list for /help");
            return Ok(());
        }
        self.sender.send(listing).await?;
        Ok(())
    }
}

/// The hidden `/help` feature.
pub(crate) fn help_feature(index: HelpIndex, sender: Sender) -> Feature {
    command_feature(Command::new("help"), HelpResponder { index, sender }).with_description("")
}
