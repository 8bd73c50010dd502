use serde::{Deserialize, Deserializer, Serialize};

/// One language as displayed in the catalog grid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CardRecord {
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub endangerment: String,
    #[serde(default, deserialize_with = "speakers_from_any")]
    pub speakers: String,
    #[serde(default)]
    pub content: String,
}

impl CardRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    #[must_use]
    pub fn endangerment(mut self, tag: impl Into<String>) -> Self {
        self.endangerment = tag.into();
        self
    }

    #[must_use]
    pub fn speakers(mut self, speakers: impl Into<String>) -> Self {
        self.speakers = speakers.into();
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Leading integer of the speaker text, `None` when there is none.
    pub fn speaker_count(&self) -> Option<u64> {
        leading_integer(&self.speakers)
    }
}

/// Parses the integer prefix of `text`: leading whitespace and a `+` sign
/// are skipped, parsing stops at the first non-digit. `"30-50"` gives 30,
/// `"3,000"` gives 3.
pub fn leading_integer(text: &str) -> Option<u64> {
    let trimmed = text.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..digits_end].parse().ok()
}

fn speakers_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Count(u64),
        Text(String),
        Other(serde_json::Value),
    }

    // Other JSON values keep their text form; null reads as no count.
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Count(count) => count.to_string(),
        Raw::Text(text) => text,
        Raw::Other(serde_json::Value::Null) => String::new(),
        Raw::Other(value) => value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{leading_integer, CardRecord};

    #[test]
    fn leading_integer_stops_at_first_non_digit() {
        assert_eq!(leading_integer("2"), Some(2));
        assert_eq!(leading_integer("30-50"), Some(30));
        assert_eq!(leading_integer("  500000 speakers"), Some(500_000));
        assert_eq!(leading_integer("+12"), Some(12));
        assert_eq!(leading_integer("3,000"), Some(3));
    }

    #[test]
    fn leading_integer_rejects_text_without_digits() {
        assert_eq!(leading_integer(""), None);
        assert_eq!(leading_integer("unknown"), None);
        assert_eq!(leading_integer("-4"), None);
        assert_eq!(leading_integer("99999999999999999999999"), None);
    }

    #[test]
    fn speakers_deserialize_from_number_or_text() -> Result<(), serde_json::Error> {
        let cards: Vec<CardRecord> = serde_json::from_str(
            r#"[
                {"name": "Kiliwa", "speakers": "30-50"},
                {"name": "Huave", "region": "oaxaca", "speakers": 15000}
            ]"#,
        )?;

        assert_eq!(cards[0].speaker_count(), Some(30));
        assert_eq!(cards[1].speakers, "15000");
        assert_eq!(cards[1].region, "oaxaca");
        assert!(cards[0].content.is_empty());
        Ok(())
    }

    #[test]
    fn odd_speaker_values_do_not_reject_the_card() -> Result<(), serde_json::Error> {
        let cards: Vec<CardRecord> = serde_json::from_str(
            r#"[
                {"name": "Kiliwa", "speakers": null},
                {"name": "Chontal", "speakers": 36.5},
                {"name": "Ixcateco", "speakers": -1},
                {"name": "Huave", "speakers": [1, 2]}
            ]"#,
        )?;

        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].speakers, "");
        assert_eq!(cards[0].speaker_count(), None);
        assert_eq!(cards[1].speakers, "36.5");
        assert_eq!(cards[1].speaker_count(), Some(36));
        assert_eq!(cards[2].speakers, "-1");
        assert_eq!(cards[2].speaker_count(), None);
        assert_eq!(cards[3].speaker_count(), None);
        Ok(())
    }
}
