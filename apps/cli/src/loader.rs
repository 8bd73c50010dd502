use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use voces_core::CardRecord;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path} is not a card export: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// A bare array of cards, or an object holding them under `languages`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CardExport {
    Bare(Vec<CardRecord>),
    Wrapped { languages: Vec<CardRecord> },
}

pub fn parse_cards(json: &str) -> Result<Vec<CardRecord>, serde_json::Error> {
    Ok(match serde_json::from_str(json)? {
        CardExport::Bare(cards) | CardExport::Wrapped { languages: cards } => cards,
    })
}

/// Reads the cards in file order, which is the page's display order.
pub fn load_cards(path: &Path) -> Result<Vec<CardRecord>, LoadError> {
    let json = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cards = parse_cards(&json).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} cards from {}", cards.len(), path.display());
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::{load_cards, parse_cards, LoadError};
    use std::io::Write;

    #[test]
    fn speakers_may_be_numbers() {
        let cards = parse_cards(
            r#"[{"name": "Kiliwa", "region": "baja-california", "endangerment": "critical", "speakers": 36},
                {"name": "Huave", "speakers": "12,000-18,000"}]"#,
        )
        .unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].speaker_count(), Some(36));
        assert_eq!(cards[1].speaker_count(), Some(12));
        assert_eq!(cards[1].region, "");
    }

    #[test]
    fn unparsable_speakers_keep_the_export_loadable() {
        let cards = parse_cards(
            r#"[{"name": "Kiliwa", "speakers": null},
                {"name": "Chontal", "speakers": -1},
                {"name": "Huave", "speakers": 12.5}]"#,
        )
        .unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].speaker_count(), None);
        assert_eq!(cards[1].speaker_count(), None);
        assert_eq!(cards[2].speaker_count(), Some(12));
    }

    #[test]
    fn wrapped_export_is_accepted() {
        let cards = parse_cards(r#"{"languages": [{"name": "Ixcateco"}]}"#).unwrap();
        assert_eq!(cards[0].name, "Ixcateco");
    }

    #[test]
    fn reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name": "Zapoteco", "speakers": "450000"}}]"#).unwrap();
        let cards = load_cards(file.path()).unwrap();
        assert_eq!(cards[0].speaker_count(), Some(450_000));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_cards(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(LoadError::Read { .. })));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"name\": ").unwrap();
        assert!(matches!(load_cards(file.path()), Err(LoadError::Parse { .. })));
    }
}
