// Export our modules for use by the web app, the CLI and tests
pub mod card;
pub mod collate;
pub mod config;
pub mod counter;
pub mod domain;
pub mod error;
pub mod features;
pub mod markers;
pub mod pipeline;
pub mod references;
pub mod reveal;
pub mod scroll;
pub mod surface;
pub mod timeline;
pub mod timing;

#[cfg(test)]
mod testing;

pub use card::CardRecord;
pub use collate::{Collator, FoldingCollator};
pub use config::SiteConfig;
pub use domain::{Endangerment, SortKey};
pub use error::{SiteError, SiteResult};
pub use pipeline::FilterCriteria;
pub use surface::{Role, UiEvent, UiSurface};
