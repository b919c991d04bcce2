//! Random responders through the bot surface.

use quip::matchers::{Choices, Command};
use std::collections::HashSet;

mod common;
use common::{test_bot, user};

#[tokio::test]
async fn test_random_picks_from_pool() {
    let (mut bot, transport) = test_bot();
    bot.random("pick", ["x", "y", "z"]);
    let dispatcher = bot.build();

    for _ in 0..300 {
        dispatcher.dispatch(&user("/pick with ignored args")).await;
    }

    let texts = transport.texts();
    assert_eq!(texts.len(), 300);
    let distinct: HashSet<_> = texts.iter().map(String::as_str).collect();
    assert_eq!(distinct, HashSet::from(["x", "y", "z"]));
}

#[tokio::test]
async fn test_random_supplier() {
    let (mut bot, transport) = test_bot();
    bot.random(
        Command::new("now").description("current tick"),
        Choices::supplier(|| "tick".to_string()),
    );
    let dispatcher = bot.build();

    dispatcher.dispatch(&user("/now")).await;
    dispatcher.dispatch(&user("/nowhere")).await;
    assert_eq!(transport.texts(), vec!["tick"]);
    assert_eq!(dispatcher.registry().features()[0].description(), "/now - current tick");
}

#[tokio::test]
async fn test_random_unconfigured_bot_sends_nothing() {
    let transport = quip::testing::RecordingTransport::new();
    let mut bot = quip::Bot::new(transport.clone());
    bot.random("pick", ["only"]);
    let dispatcher = bot.build();

    dispatcher.dispatch(&user("/pick")).await;
    assert_eq!(transport.count(), 0);
}
