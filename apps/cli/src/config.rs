use dotenv::dotenv;
use log::LevelFilter;
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming the card export.
pub const CARDS_VAR: &str = "VOCES_CARDS";
pub const DEFAULT_CARDS: &str = "languages.json";

/// Loads `.env` if one exists. Variables already set win, so flags applied
/// beforehand keep precedence. Returns whether a file was loaded.
pub fn init_app_config() -> bool {
    dotenv().is_ok()
}

/// Same as [`init_app_config`] for an explicit file.
pub fn load_env_file(path: &Path) -> bool {
    dotenv::from_path(path).is_ok()
}

/// Path of the card export, relative paths against the working directory.
pub fn cards_path() -> PathBuf {
    env::var(CARDS_VAR).map_or_else(|_| PathBuf::from(DEFAULT_CARDS), PathBuf::from)
}

/// Whether `DEBUG` is set to anything but an empty string or `0`.
pub fn debug_enabled() -> bool {
    env::var("DEBUG").is_ok_and(|value| !value.is_empty() && value != "0")
}

pub fn log_level() -> LevelFilter {
    if debug_enabled() {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

#[cfg(test)]
mod tests {
    use super::{cards_path, load_env_file, log_level, CARDS_VAR};
    use log::LevelFilter;
    use std::env;
    use std::fs;

    // One test owns DEBUG and VOCES_CARDS so nothing races on them.
    #[test]
    fn env_file_feeds_level_and_cards_without_overriding_set_values() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(".env");
        fs::write(&file, "DEBUG=1\nVOCES_CARDS=export/cards.json\n").unwrap();

        env::remove_var("DEBUG");
        env::remove_var(CARDS_VAR);
        assert_eq!(log_level(), LevelFilter::Info);

        assert!(load_env_file(&file));
        assert_eq!(log_level(), LevelFilter::Debug);
        assert_eq!(cards_path().to_str(), Some("export/cards.json"));

        env::set_var("DEBUG", "0");
        env::set_var(CARDS_VAR, "flag.json");
        assert!(load_env_file(&file));
        assert_eq!(log_level(), LevelFilter::Info);
        assert_eq!(cards_path().to_str(), Some("flag.json"));

        env::remove_var("DEBUG");
        env::remove_var(CARDS_VAR);
    }
}
