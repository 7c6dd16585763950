//! Outbound message payloads.
//!
//! The renderer produces a string; the Bot API needs it together with the
//! `parse_mode` it was rendered for. [`FormattedText`] keeps the two
//! together so they cannot drift apart.

use serde::Serialize;

use crate::error::{MarkupError, Result};
use crate::mode::ParseMode;
use crate::node::Node;

/// Maximum length of a message text, in characters.
pub const MAX_MESSAGE_CHARS: usize = 4096;

/// Rendered text plus the mode it was rendered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedText {
    pub text: String,
    pub parse_mode: ParseMode,
}

impl FormattedText {
    /// Render `node` in `mode`.
    pub fn render(node: &Node, mode: ParseMode) -> Self {
        Self {
            text: node.render(mode),
            parse_mode: mode,
        }
    }

    /// Length of the rendered text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Build a `sendMessage` request body for `chat_id`.
    ///
    /// Fails if the text exceeds [`MAX_MESSAGE_CHARS`].
    pub fn into_request(self, chat_id: i64) -> Result<SendMessageRequest> {
        let len = self.char_len();
        if len > MAX_MESSAGE_CHARS {
            return Err(MarkupError::MessageTooLong {
                len,
                max: MAX_MESSAGE_CHARS,
            });
        }
        Ok(SendMessageRequest {
            chat_id,
            text: self.text,
            parse_mode: self.parse_mode.api_name().map(str::to_owned),
            reply_to_message_id: None,
        })
    }
}

/// Request body for the `sendMessage` API method.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    /// Target chat identifier.
    pub chat_id: i64,
    /// Text of the message to send.
    pub text: String,
    /// Parse mode for formatting (e.g., `"HTML"`, `"MarkdownV2"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    /// If set, the sent message will be a reply to this message ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
}

impl SendMessageRequest {
    pub fn reply_to(mut self, message_id: i64) -> Self {
        self.reply_to_message_id = Some(message_id);
        self
    }
}
