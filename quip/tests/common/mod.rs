#![allow(dead_code)]

use quip::{
    Bot, Feature, Message,
    testing::{CountingHandler, RecordingTransport},
};
use std::sync::{Arc, Mutex};

// ============================================================================
// Bots
// ============================================================================

/// A configured bot whose replies land in the returned transport.
pub fn test_bot() -> (Bot, RecordingTransport) {
    let transport = RecordingTransport::new();
    let mut bot = Bot::new(transport.clone());
    bot.config("test-bot");
    (bot, transport)
}

pub fn user(text: &str) -> Message {
    Message::from_user(text)
}

// ============================================================================
// Features
// ============================================================================

/// A feature that always matches and counts its invocations.
pub fn always(description: &str, counter: &CountingHandler) -> Feature {
    Feature::new(|_: &Message| true, counter.clone()).with_description(description)
}

/// A feature that always matches and records `id` when it runs.
pub fn ordered(description: &str, id: usize, order: Arc<Mutex<Vec<usize>>>) -> Feature {
    Feature::new(|_: &Message| true, move |_: Message| {
        let order = order.clone();
        async move {
            order.lock().unwrap().push(id);
        }
    })
    .with_description(description)
}
