use serde::{Deserialize, Serialize};

/// Severity bucket of a language. Cards and markers carry the raw tag; this
/// enum is only used where the tag needs an ordering or a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Endangerment {
    Critical,
    Severe,
    Endangered,
}

/// Priority given to tags that do not parse.
pub const UNKNOWN_PRIORITY: u8 = 4;

impl Endangerment {
    pub const ALL: [Self; 3] = [Self::Critical, Self::Severe, Self::Endangered];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Severe => "severely-endangered",
            Self::Endangered => "endangered",
        }
    }

    /// Accepts the English tags and the spellings used in the site markup.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "critical" | "critico" => Some(Self::Critical),
            "severely-endangered" | "severely" | "severamente" => Some(Self::Severe),
            "endangered" | "en-peligro" => Some(Self::Endangered),
            _ => None,
        }
    }

    pub const fn priority(self) -> u8 {
        match self {
            Self::Critical => 1,
            Self::Severe => 2,
            Self::Endangered => 3,
        }
    }

    /// Priority of an arbitrary tag, unknown tags last.
    pub fn priority_of(tag: &str) -> u8 {
        Self::parse(tag).map_or(UNKNOWN_PRIORITY, Self::priority)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critically Endangered",
            Self::Severe => "Severely Endangered",
            Self::Endangered => "Definitely Endangered",
        }
    }

    /// Marker fill colour on the map.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Critical => "#C41E3A",
            Self::Severe => "#FF6B35",
            Self::Endangered => "#F4A261",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Name,
    SpeakersAscending,
    SpeakersDescending,
    Severity,
    Unspecified,
}

impl SortKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::SpeakersAscending => "speakers-asc",
            Self::SpeakersDescending => "speakers-desc",
            Self::Severity => "severity",
            Self::Unspecified => "none",
        }
    }

    /// Maps a sort control value. Anything unrecognised keeps input order.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "name" | "nombre" => Self::Name,
            "speakers-asc" | "hablantes-asc" => Self::SpeakersAscending,
            "speakers-desc" | "hablantes-desc" => Self::SpeakersDescending,
            "severity" | "endangerment" | "peligro" => Self::Severity,
            _ => Self::Unspecified,
        }
    }
}
