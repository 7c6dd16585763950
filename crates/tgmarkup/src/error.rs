//! Error types for markup rendering.
//!
//! Rendering itself never fails. Errors come from the boundaries around it:
//! resolving a language tag, parsing a mode name strictly, building an
//! outbound payload, or loading configuration.

use thiserror::Error;

/// Top-level error type for the `tgmarkup` crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MarkupError {
    /// A code-block language is neither a canonical tag nor a known alias.
    #[error("unsupported language {input:?}")]
    UnknownLanguage {
        /// The input as supplied by the caller, before normalization.
        input: String,
    },

    /// A mode name did not match any recognized dialect.
    #[error("unknown parse mode {name:?} (expected HTML, Markdown, MarkdownV2 or plain)")]
    UnknownMode {
        /// The rejected name.
        name: String,
    },

    /// The rendered text exceeds the platform message limit.
    #[error("message too long: {len} characters (max {max})")]
    MessageTooLong {
        /// Length of the rendered text in characters.
        len: usize,
        /// Maximum allowed length.
        max: usize,
    },

    /// Configuration is malformed or semantically invalid.
    #[error("invalid config: {reason}")]
    ConfigInvalid {
        /// What is wrong with the configuration.
        reason: String,
    },

    /// Underlying I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization / deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MarkupError>;
