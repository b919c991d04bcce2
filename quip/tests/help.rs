//! The `/help` listing.

use quip::{Feature, Message, matchers::Command, testing::CountingHandler};

mod common;
use common::{always, test_bot, user};

#[tokio::test]
async fn test_help_lists_visible_sorted() {
    let counter = CountingHandler::new();
    let (mut bot, transport) = test_bot();
    bot.feature(Feature::new(|_: &Message| false, counter.clone()).with_description("b"))
        .feature(Feature::new(|_: &Message| false, counter.clone()))
        .feature(Feature::new(|_: &Message| false, counter.clone()).with_description("a"))
        .help();
    let dispatcher = bot.build();

    dispatcher.dispatch(&user("/help")).await;
    assert_eq!(transport.texts(), vec!["a\nb"]);
    assert_eq!(counter.count(), 0);
}

#[tokio::test]
async fn test_help_includes_command_descriptions() {
    let counter = CountingHandler::new();
    let (mut bot, transport) = test_bot();
    bot.help()
        .command(Command::new("roll").description("roll a die"), counter.clone())
        .command("quiet", counter.clone())
        .random(Command::new("coin").description(" flip "), ["h", "t"]);
    let dispatcher = bot.build();

    dispatcher.dispatch(&user("/help me")).await;
    assert_eq!(transport.texts(), vec!["/coin - flip\n/quiet\n/roll - roll a die"]);
}

#[tokio::test]
async fn test_help_runs_alongside_other_matches() {
    let counter = CountingHandler::new();
    let (mut bot, transport) = test_bot();
    bot.feature(always("z catch-all", &counter)).help();
    let dispatcher = bot.build();

    dispatcher.dispatch(&user("/help")).await;
    assert_eq!(transport.texts(), vec!["z catch-all"]);
    assert_eq!(counter.count(), 1);
}

#[tokio::test]
async fn test_help_without_visible_features_posts_nothing() {
    let (mut bot, transport) = test_bot();
    bot.help();
    let dispatcher = bot.build();

    dispatcher.dispatch(&user("/help")).await;
    assert_eq!(transport.count(), 0);
}
