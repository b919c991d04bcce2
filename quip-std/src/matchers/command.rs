//! Command Matcher - slash commands such as `/ban alice bob`.

use quip_core::{Feature, Handler, Message};
use regex::Regex;

/// How the text after a command name is split into arguments.
#[derive(Debug, Clone, Default)]
pub enum Separator {
    /// One or more whitespace characters.
    #[default]
    Whitespace,
    /// An exact delimiter, such as `","`.
    Literal(String),
    /// A regex delimiter.
    Regex(Regex),
}

impl Separator {
    fn split(&self, rest: &str) -> Vec<String> {
        match self {
            Separator::Whitespace => rest
                .split(is_space)
                .filter(|arg| !arg.is_empty())
                .map(str::to_string)
                .collect(),
            Separator::Literal(delim) if delim.is_empty() => {
                rest.chars().map(String::from).collect()
            }
            Separator::Literal(delim) => rest.split(delim.as_str()).map(str::to_string).collect(),
            Separator::Regex(re) => split_regex(re, rest),
        }
    }
}

/// Whitespace as command syntax sees it: Unicode white space plus the byte
/// order mark, minus NEL.
fn is_space(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Split on `re`, skipping empty matches at a split point and at the end of
/// the text so an empty-matching separator never yields empty edge arguments.
fn split_regex(re: &Regex, text: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut last = 0;
    let mut at = 0;
    while at < text.len() {
        let Some(m) = re.find_at(text, at) else {
            break;
        };
        if m.start() >= text.len() {
            break;
        }
        if m.end() == last {
            at = m.start() + text[m.start()..].chars().next().map_or(1, char::len_utf8);
            continue;
        }
        parts.push(text[last..m.start()].to_string());
        last = m.end();
        at = m.end();
    }
    parts.push(text[last..].to_string());
    parts
}

impl From<&str> for Separator {
    fn from(delim: &str) -> Self {
        Separator::Literal(delim.to_string())
    }
}

impl From<String> for Separator {
    fn from(delim: String) -> Self {
        Separator::Literal(delim)
    }
}

impl From<Regex> for Separator {
    fn from(re: Regex) -> Self {
        Separator::Regex(re)
    }
}

/// A slash command definition.
///
/// Description and separator are optional; a bare name converts directly:
///
/// ```rust
/// use quip_std::matchers::Command;
///
/// let bare: Command = "roll".into();
/// assert_eq!(bare.help_text(), "/roll");
///
/// let full = Command::new("tag").description(" label people ").separator(",");
/// assert_eq!(full.help_text(), "/tag - label people");
/// assert_eq!(full.parse("/tag a,b").unwrap(), vec!["a", "b"]);
/// ```
#[derive(Debug, Clone)]
pub struct Command {
    name: String,
    description: Option<String>,
    separator: Separator,
}

impl Command {
    /// A command triggered by `/<name>`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            separator: Separator::default(),
        }
    }

    /// Set the human description shown by help.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set how arguments are split.
    pub fn separator(mut self, separator: impl Into<Separator>) -> Self {
        self.separator = separator.into();
        self
    }

    /// The command name, without the slash.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The description stored on the derived feature.
    ///
    /// `"/<name> - <description>"`, or just `"/<name>"` when no non-blank
    /// description was given.
    pub fn help_text(&self) -> String {
        match self.description.as_deref().map(str::trim) {
            Some(description) if !description.is_empty() => {
                format!("/{} - {}", self.name, description)
            }
            _ => format!("/{}", self.name),
        }
    }

    /// The text following `/<name>`, if `text` invokes this command.
    ///
    /// Equivalent to matching `^/<name>(\s|$)`: the name must be followed by
    /// whitespace or the end of the text, so `/ban` never fires on `/banana`.
    fn remainder<'t>(&self, text: &'t str) -> Option<&'t str> {
        let rest = text.strip_prefix('/')?.strip_prefix(self.name.as_str())?;
        match rest.chars().next() {
            None => Some(rest),
            Some(c) if is_space(c) => Some(rest),
            Some(_) => None,
        }
    }

    /// Whether `text` invokes this command.
    pub fn is_match(&self, text: &str) -> bool {
        self.remainder(text).is_some()
    }

    /// Parse the arguments of `text`, or `None` if it does not invoke this
    /// command.
    pub fn parse(&self, text: &str) -> Option<Vec<String>> {
        let rest = self.remainder(text)?.trim_matches(is_space);
        if rest.is_empty() {
            return Some(Vec::new());
        }
        Some(self.separator.split(rest))
    }
}

impl From<&str> for Command {
    fn from(name: &str) -> Self {
        Command::new(name)
    }
}

impl From<String> for Command {
    fn from(name: String) -> Self {
        Command::new(name)
    }
}

/// Input handed to a command responder.
#[derive(Debug, Clone)]
pub struct CommandCall {
    /// The message that invoked the command.
    pub message: Message,
    /// Arguments following the command name.
    pub args: Vec<String>,
}

struct CommandResponder<H> {
    command: Command,
    handler: H,
}

impl<H: Handler<CommandCall>> Handler<Message> for CommandResponder<H> {
    type Output = H::Output;

    async fn call(&self, message: Message) -> Self::Output {
        let args = self.command.parse(&message.text).unwrap_or_default();
        self.handler.call(CommandCall { message, args }).await
    }
}

/// Derive a feature from a command.
pub fn command_feature<H>(command: Command, handler: H) -> Feature
where
    H: Handler<CommandCall>,
{
    let description = command.help_text();
    let check = command.clone();
    Feature::new(
        move |message: &Message| check.is_match(&message.text),
        CommandResponder { command, handler },
    )
    .with_description(description)
}
