//! `tgm escape` -- escape a string for a parse mode.

use clap::Args;
use tgmarkup::{ParseMode, escape_text};

use super::parse_mode;

/// Arguments for the `tgm escape` subcommand.
#[derive(Args)]
pub struct EscapeArgs {
    /// Parse mode (HTML, Markdown, MarkdownV2, plain).
    #[arg(short, long, value_parser = parse_mode)]
    pub mode: ParseMode,

    /// Text to escape.
    pub text: String,
}

pub fn run(args: EscapeArgs) {
    println!("{}", escape_text(args.mode, &args.text));
}
