//! `tgm showcase` -- print a message exercising every formatting construct.
//!
//! Paste the output into a bot's `sendMessage` call to check how a client
//! displays each dialect.

use std::path::Path;

use clap::Args;
use tgmarkup::{ParseMode, render_showcase};

use super::{load_settings, parse_mode};

/// Arguments for the `tgm showcase` subcommand.
#[derive(Args)]
pub struct ShowcaseArgs {
    /// Parse mode (HTML, Markdown, MarkdownV2, plain). Defaults to the
    /// configured mode.
    #[arg(short, long, value_parser = parse_mode)]
    pub mode: Option<ParseMode>,

    /// User ID targeted by the mention line.
    #[arg(long, default_value_t = 0)]
    pub user_id: i64,
}

pub fn run(args: ShowcaseArgs, config_override: Option<&Path>) -> anyhow::Result<()> {
    let mode = match args.mode {
        Some(mode) => mode,
        None => load_settings(config_override)?.default_mode,
    };
    println!("{}", render_showcase(mode, args.user_id));
    Ok(())
}
