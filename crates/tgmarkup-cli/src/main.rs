//! `tgm` -- CLI binary for tgmarkup.
//!
//! Provides the following subcommands:
//!
//! - `tgm render` -- Render a CommonMark or JSON document into a parse mode.
//! - `tgm languages` -- List, resolve and inspect code-block languages.
//! - `tgm escape` -- Escape a string for a parse mode.
//! - `tgm showcase` -- Print the formatting showcase.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

/// Telegram message markup renderer.
#[derive(Parser)]
#[command(name = "tgm", about = "Telegram message markup renderer", version)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path (overrides auto-discovery).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Render a document into a parse mode.
    Render(commands::render::RenderArgs),

    /// List supported code-block languages or resolve an alias.
    Languages(commands::languages::LanguagesArgs),

    /// Escape text for a parse mode.
    Escape(commands::escape::EscapeArgs),

    /// Print a message exercising every formatting construct.
    Showcase(commands::showcase::ShowcaseArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Render(args) => commands::render::run(args, config)?,
        Commands::Languages(args) => commands::languages::run(args, config)?,
        Commands::Escape(args) => commands::escape::run(args),
        Commands::Showcase(args) => commands::showcase::run(args, config)?,
    }

    Ok(())
}
