use std::fs;
use std::io::{self, Write};

use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::LevelFilter;
use voces_cli::cli::{CliArgs, Command, LanguagesArgs};
use voces_cli::{config, loader, report};
use voces_core::{FilterCriteria, SiteConfig};

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    // `.env` before the logger reads DEBUG; values already set are kept.
    let env_loaded = config::init_app_config();
    init_logging(config::log_level());
    if env_loaded {
        log::debug!("loaded .env");
    }

    let mut out = io::stdout().lock();
    match args.command {
        Command::Languages(languages) => run_languages(&mut out, languages)?,
        Command::Markers { json } => {
            let rows = report::build_marker_rows();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
            } else {
                report::render_markers(&mut out, &rows)?;
            }
        }
        Command::Config { path } => {
            let text = fs::read_to_string(&path)
                .wrap_err_with(|| format!("could not read {}", path.display()))?;
            let settings = SiteConfig::from_json(&text)
                .wrap_err_with(|| format!("{} is not valid site settings", path.display()))?;
            report::render_config(&mut out, &settings)?;
        }
    }
    Ok(())
}

fn init_logging(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn run_languages(out: &mut impl Write, args: LanguagesArgs) -> Result<()> {
    let path = config::cards_path();
    let cards = loader::load_cards(&path)?;
    let criteria = FilterCriteria::from_controls(args.region, args.endangerment, args.search, args.sort);
    let languages = report::build_language_report(&cards, &criteria);

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&languages)?)?;
    } else {
        report::render_languages(out, &languages)?;
    }
    Ok(())
}
