//! Output dialects.
//!
//! The Bot API accepts three formatting dialects, selected per message by
//! the `parse_mode` field. Any other mode name renders as plain text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MarkupError;

/// Target dialect for a render call.
///
/// Modes are never stored on nodes; the same tree renders into any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParseMode {
    /// Tag-based dialect (`<b>`, `<a href>`, `<blockquote>`).
    #[default]
    Html,
    /// Legacy lightweight dialect: bold, italic, links and code only.
    Markdown,
    /// Revised lightweight dialect with underline, strike, spoiler and
    /// code-block languages, at the cost of a much wider escape set.
    MarkdownV2,
    /// No formatting at all: text passes through unescaped.
    Plain,
}

impl ParseMode {
    /// All modes, in declaration order.
    pub const ALL: [ParseMode; 4] = [
        ParseMode::Html,
        ParseMode::Markdown,
        ParseMode::MarkdownV2,
        ParseMode::Plain,
    ];

    /// Map a mode name to a dialect, falling back to [`ParseMode::Plain`]
    /// for anything that is not exactly `HTML`, `Markdown` or `MarkdownV2`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "HTML" => ParseMode::Html,
            "Markdown" => ParseMode::Markdown,
            "MarkdownV2" => ParseMode::MarkdownV2,
            _ => ParseMode::Plain,
        }
    }

    /// The value to send as `parse_mode`, or `None` for plain text.
    pub fn api_name(self) -> Option<&'static str> {
        match self {
            ParseMode::Html => Some("HTML"),
            ParseMode::Markdown => Some("Markdown"),
            ParseMode::MarkdownV2 => Some("MarkdownV2"),
            ParseMode::Plain => None,
        }
    }

    /// Display name; `plain` for the passthrough mode.
    pub fn name(self) -> &'static str {
        self.api_name().unwrap_or("plain")
    }

    /// Whether this is one of the two lightweight (backslash-escaped) dialects.
    pub fn is_lightweight(self) -> bool {
        matches!(self, ParseMode::Markdown | ParseMode::MarkdownV2)
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for ParseMode {
    fn from(name: &str) -> Self {
        ParseMode::from_name(name)
    }
}

impl From<String> for ParseMode {
    fn from(name: String) -> Self {
        ParseMode::from_name(&name)
    }
}

impl From<ParseMode> for String {
    fn from(mode: ParseMode) -> Self {
        mode.name().to_owned()
    }
}

impl FromStr for ParseMode {
    type Err = MarkupError;

    /// Strict parse: only the three dialect names and `plain` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(ParseMode::Plain),
            "HTML" | "Markdown" | "MarkdownV2" => Ok(ParseMode::from_name(s)),
            other => Err(MarkupError::UnknownMode {
                name: other.to_owned(),
            }),
        }
    }
}
