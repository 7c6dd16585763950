//! # tgmarkup
//!
//! Mode-aware message markup for the Telegram Bot API.
//!
//! Build a message as a tree of [`Node`]s once, then render it into any of
//! the platform's dialects. Escaping is applied only at leaves, so the same
//! tree is valid HTML, Markdown, MarkdownV2 or plain text.
//!
//! - **[`escape`]** -- per-dialect escaping of text, URLs and code
//! - **[`language`]** -- code-block language aliases and canonical tags
//! - **[`node`]** / **[`render`]** -- the tree and its renderer
//! - **[`commonmark`]** -- CommonMark input converted into a tree
//! - **[`message`]** -- outbound `sendMessage` payloads
//! - **[`config`]** -- renderer settings and discovery
//!
//! ```
//! use tgmarkup::{Node, ParseMode, escape_text};
//!
//! let msg = Node::group([
//!     Node::bold([Node::text("Build")]),
//!     Node::text(" finished in 1.5s"),
//! ]);
//! assert_eq!(msg.render(ParseMode::Html), "<b>Build</b> finished in 1.5s");
//! assert_eq!(msg.render(ParseMode::MarkdownV2), "*Build* finished in 1\\.5s");
//! assert_eq!(escape_text(ParseMode::Markdown, "a_b"), "a\\_b");
//! ```

pub mod commonmark;
pub mod config;
pub mod error;
pub mod escape;
pub mod language;
pub mod message;
pub mod mode;
pub mod node;
pub mod render;
pub mod showcase;

pub use commonmark::from_commonmark;
pub use config::{RenderConfig, load_config};
pub use error::{MarkupError, Result};
pub use escape::{escape, escape_code, escape_html, escape_html_attr, escape_text, escape_url};
pub use language::{Language, LanguageRegistry};
pub use message::{FormattedText, MAX_MESSAGE_CHARS, SendMessageRequest};
pub use mode::ParseMode;
pub use node::{Node, Style};
pub use render::{debug_dump, render};
pub use showcase::{render_showcase, showcase};
