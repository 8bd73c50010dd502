use log::Level;
use thiserror::Error;

use crate::surface::Role;

#[derive(Debug, Error)]
pub enum SiteError {
    /// An optional control is not on this page.
    #[error("optional element not present: {0}")]
    MissingControl(Role),

    /// The element a feature renders into is not on this page.
    #[error("render target not present: {0}")]
    MissingTarget(Role),

    #[error("{0} is not loaded")]
    LibraryUnavailable(&'static str),

    #[error("{operation} failed: {message}")]
    Surface {
        operation: &'static str,
        message: String,
    },

    #[error("invalid site config: {0}")]
    InvalidConfig(String),

    #[error("unreadable site config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type SiteResult<T> = Result<T, SiteError>;

impl SiteError {
    pub fn surface(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Surface {
            operation,
            message: message.into(),
        }
    }

    /// Level a contained failure is reported at.
    pub const fn level(&self) -> Level {
        match self {
            Self::MissingControl(_) => Level::Debug,
            Self::MissingTarget(_) => Level::Info,
            Self::LibraryUnavailable(_) => Level::Error,
            Self::Surface { .. } | Self::InvalidConfig(_) | Self::ConfigParse(_) => Level::Warn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SiteError;
    use crate::surface::Role;
    use log::Level;

    #[test]
    fn levels_follow_failure_class() {
        assert_eq!(SiteError::MissingControl(Role::SearchInput).level(), Level::Debug);
        assert_eq!(SiteError::MissingTarget(Role::MapContainer).level(), Level::Info);
        assert_eq!(SiteError::LibraryUnavailable("Leaflet").level(), Level::Error);
        assert_eq!(SiteError::surface("append", "detached").level(), Level::Warn);
    }

    #[test]
    fn messages_name_the_element() {
        let error = SiteError::MissingTarget(Role::MapContainer);
        assert_eq!(error.to_string(), "render target not present: map container");
    }
}
