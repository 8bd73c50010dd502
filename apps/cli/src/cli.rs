use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "voces", version, about = "Inspect the Voces Indígenas catalog and map data")]
pub struct CliArgs {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Filter and sort a card export the way the catalog page does
    Languages(LanguagesArgs),
    /// List the languages placed on the map
    Markers {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a site settings file and print the effective values
    Config {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}

#[derive(Debug, clap::Args)]
pub struct LanguagesArgs {
    /// Override the card export path
    #[arg(long, value_name = "PATH")]
    pub cards: Option<String>,

    /// Only cards with this region tag
    #[arg(long)]
    pub region: Option<String>,

    /// Only cards with this endangerment tag
    #[arg(long)]
    pub endangerment: Option<String>,

    /// Case-insensitive text in the name or content
    #[arg(long)]
    pub search: Option<String>,

    /// name, speakers-asc, speakers-desc or severity
    #[arg(long)]
    pub sort: Option<String>,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Command::Languages(LanguagesArgs {
            cards: Some(cards), ..
        }) = &self.command
        {
            std::env::set_var(crate::config::CARDS_VAR, cards);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}
