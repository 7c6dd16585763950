//! `tgm languages` -- inspect the code-block language registry.
//!
//! Without flags, prints every canonical tag, one per line. The registry
//! includes aliases from the config file.
//!
//! # Example
//!
//! ```text
//! tgm languages
//! tgm languages --aliases
//! tgm languages --resolve "C++"
//! ```

use std::path::Path;

use anyhow::bail;
use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use tgmarkup::LanguageRegistry;

use super::load_settings;

/// Arguments for the `tgm languages` subcommand.
#[derive(Args)]
pub struct LanguagesArgs {
    /// Print the canonical tag for this name or alias.
    #[arg(short, long, conflicts_with = "aliases")]
    pub resolve: Option<String>,

    /// Show a table of every tag with its aliases.
    #[arg(short, long)]
    pub aliases: bool,
}

/// Run the languages command.
pub fn run(args: LanguagesArgs, config_override: Option<&Path>) -> anyhow::Result<()> {
    let registry = load_settings(config_override)?.build_registry()?;

    if let Some(name) = args.resolve {
        match registry.normalize(&name) {
            Some(lang) => println!("{lang}"),
            None => bail!("unsupported language: {name:?}"),
        }
    } else if args.aliases {
        println!("{}", alias_table(&registry));
    } else {
        for tag in registry.canonical_tags() {
            println!("{tag}");
        }
    }

    Ok(())
}

fn alias_table(registry: &LanguageRegistry) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["TAG", "ALIASES"]);
    for tag in registry.canonical_tags() {
        let aliases = registry.aliases_of(&tag).join(", ");
        table.add_row([tag.as_str(), aliases.as_str()]);
    }
    table
}
