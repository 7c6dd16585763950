//! CLI command implementations for `tgm`.
//!
//! - [`render`] -- Document rendering.
//! - [`languages`] -- Language registry inspection.
//! - [`escape`] -- One-off escaping.
//! - [`showcase`] -- The formatting showcase.

pub mod escape;
pub mod languages;
pub mod render;
pub mod showcase;

use std::path::Path;

use anyhow::Context;
use tgmarkup::{MarkupError, ParseMode, RenderConfig};

/// Strict `--mode` parser: only `HTML`, `Markdown`, `MarkdownV2` and
/// `plain` are accepted.
pub fn parse_mode(name: &str) -> Result<ParseMode, MarkupError> {
    name.parse()
}

/// Load configuration from the given path override or via auto-discovery.
///
/// Returns the default config if no config file is found.
pub fn load_settings(config_override: Option<&Path>) -> anyhow::Result<RenderConfig> {
    let config = tgmarkup::load_config(config_override).with_context(|| match config_override {
        Some(path) => format!("failed to load config from {}", path.display()),
        None => "failed to load config".to_owned(),
    })?;
    tracing::debug!(
        default_mode = %config.default_mode,
        strict_languages = config.strict_languages,
        aliases = config.language_aliases.len(),
        "config loaded"
    );
    Ok(config)
}
