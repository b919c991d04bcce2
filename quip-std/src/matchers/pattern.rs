//! Pattern Matcher - fires on a regex or literal found anywhere in the text.

use quip_core::{Feature, Handler, Message};
use regex::Regex;

/// A regex tested against the message text, plus an optional description.
///
/// # Example
///
/// ```rust
/// use quip_std::matchers::Pattern;
///
/// let pattern = Pattern::literal("a.b").unwrap();
/// assert!(pattern.is_match("xa.by"));
/// assert!(!pattern.is_match("axb"));
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    description: String,
}

impl Pattern {
    /// Match `text` verbatim: every regex metacharacter is escaped.
    pub fn literal(text: &str) -> Result<Self, regex::Error> {
        Ok(Self::from(Regex::new(&regex::escape(text))?))
    }

    /// Compile `pattern` as a regular expression.
    pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::from(Regex::new(pattern)?))
    }

    /// Set the description shown by help.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether the pattern occurs anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Every non-overlapping occurrence of the pattern in `text`.
    pub fn find_all(&self, text: &str) -> Vec<String> {
        self.regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// The underlying regex.
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self {
            regex,
            description: String::new(),
        }
    }
}

/// Input handed to a pattern responder.
#[derive(Debug, Clone)]
pub struct PatternMatch {
    /// The message that matched.
    pub message: Message,
    /// All occurrences of the pattern, in order.
    pub matches: Vec<String>,
}

struct PatternResponder<H> {
    pattern: Pattern,
    handler: H,
}

impl<H: Handler<PatternMatch>> Handler<Message> for PatternResponder<H> {
    type Output = H::Output;

    async fn call(&self, message: Message) -> Self::Output {
        let matches = self.pattern.find_all(&message.text);
        self.handler.call(PatternMatch { message, matches }).await
    }
}

/// Derive a feature from a pattern.
pub fn pattern_feature<H>(pattern: Pattern, handler: H) -> Feature
where
    H: Handler<PatternMatch>,
{
    let description = pattern.description.clone();
    let check = pattern.clone();
    Feature::new(
        move |message: &Message| check.is_match(&message.text),
        PatternResponder { pattern, handler },
    )
    .with_description(description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn collecting(sink: Arc<Mutex<Vec<Vec<String>>>>) -> impl Handler<PatternMatch> {
        move |hit: PatternMatch| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push(hit.matches);
            }
        }
    }

    #[test]
    fn test_literal_escapes_metacharacters() {
        for special in [".", "?", "*", "+", "^", "$", "[", "]", "\\", "(", ")", "{", "}", "|", "-"] {
            let pattern = Pattern::literal(special).unwrap();
            assert!(pattern.is_match(&format!("x{special}y")), "{special}");
        }

        let dot = Pattern::literal("a.b").unwrap();
        assert!(dot.is_match("a.b"));
        assert!(!dot.is_match("axb"));
    }

    #[test]
    fn test_regex_is_not_escaped() {
        let pattern = Pattern::regex(r"a.b").unwrap();
        assert!(pattern.is_match("axb"));
        assert_eq!(pattern.as_regex().as_str(), "a.b");
        assert_eq!(Pattern::literal("a.b").unwrap().as_regex().as_str(), r"a\.b");
    }

    #[test]
    fn test_invalid_regex() {
        assert!(Pattern::regex("(unclosed").is_err());
    }

    #[test]
    fn test_find_all_is_global() {
        let pattern = Pattern::regex(r"\d+").unwrap();
        assert_eq!(pattern.find_all("1 and 22 and 333"), vec!["1", "22", "333"]);
        assert!(pattern.find_all("none").is_empty());
    }

    #[tokio::test]
    async fn test_feature_passes_all_matches() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let feature = pattern_feature(
            Pattern::literal("ha").unwrap().description("laughs along"),
            collecting(seen.clone()),
        );

        assert_eq!(feature.description(), "laughs along");

        let msg = Message::from_user("hahaha");
        assert!(feature.check(&msg));
        feature.respond(msg).await.unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![vec!["ha", "ha", "ha"]]);
    }

    #[test]
    fn test_feature_hidden_without_description() {
        let feature = pattern_feature(Pattern::literal("x").unwrap(), |_: PatternMatch| async {});
        assert!(!feature.is_visible());
        assert!(!feature.check(&Message::from_user("abc")));
    }
}
