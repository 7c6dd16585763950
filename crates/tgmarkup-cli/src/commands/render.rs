//! `tgm render` -- render a document into a parse mode.
//!
//! The input is either CommonMark (default) or a JSON-encoded node tree.
//! With `--chat-id`, the output is the `sendMessage` request body instead
//! of the bare text.
//!
//! # Example
//!
//! ```text
//! tgm render --mode MarkdownV2 notes.md
//! echo '{"type":"text","content":"1+1"}' | tgm render --format json
//! tgm render --chat-id 42 --reply-to 7 notes.md
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, ValueEnum};
use tgmarkup::{FormattedText, Node, ParseMode, debug_dump, from_commonmark};

use super::{load_settings, parse_mode};

/// Input document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputFormat {
    /// CommonMark text.
    #[default]
    Markdown,
    /// A node tree serialized as JSON.
    Json,
}

/// Arguments for the `tgm render` subcommand.
#[derive(Args)]
pub struct RenderArgs {
    /// Parse mode (HTML, Markdown, MarkdownV2, plain). Defaults to the
    /// configured mode.
    #[arg(short, long, value_parser = parse_mode)]
    pub mode: Option<ParseMode>,

    /// Input format.
    #[arg(short, long, value_enum, default_value_t)]
    pub format: InputFormat,

    /// Emit a `sendMessage` request body for this chat.
    #[arg(long)]
    pub chat_id: Option<i64>,

    /// Reply to this message ID (with `--chat-id`).
    #[arg(long, requires = "chat_id")]
    pub reply_to: Option<i64>,

    /// Input file. Reads stdin when omitted.
    pub file: Option<PathBuf>,
}

/// Run the render command.
pub fn run(args: RenderArgs, config_override: Option<&Path>) -> anyhow::Result<()> {
    let config = load_settings(config_override)?;
    let mode = args.mode.unwrap_or(config.default_mode);
    let input = read_input(args.file.as_deref())?;

    let node = match args.format {
        InputFormat::Markdown => {
            let registry = config.build_registry()?;
            from_commonmark(&input, &registry, config.strict_languages)?
        }
        InputFormat::Json => {
            serde_json::from_str::<Node>(&input).context("failed to parse node tree")?
        }
    };

    let formatted = FormattedText::render(&node, mode);
    tracing::debug!("{}", debug_dump(mode.name(), &formatted.text));

    match args.chat_id {
        Some(chat_id) => {
            let mut request = formatted.into_request(chat_id)?;
            if let Some(message_id) = args.reply_to {
                request = request.reply_to(message_id);
            }
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
        None => println!("{}", formatted.text),
    }

    Ok(())
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.md");
        std::fs::write(&path, "**hi**").unwrap();
        assert_eq!(read_input(Some(&path)).unwrap(), "**hi**");
    }

    #[test]
    fn read_input_missing_file() {
        let err = read_input(Some(Path::new("/nonexistent/doc.md"))).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
