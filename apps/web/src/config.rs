use voces_core::SiteConfig;
use web_sys::Document;

/// Id of the optional `<script type="application/json">` block holding
/// site settings.
pub const CONFIG_ELEMENT_ID: &str = "voces-config";

/// Reads the page's settings block, falling back to defaults.
pub fn load(document: &Document) -> SiteConfig {
    document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
        .map_or_else(SiteConfig::default, |text| parse_block(&text))
}

/// Blank blocks give the defaults; a block that fails to parse or validate
/// is logged and replaced by the defaults.
pub fn parse_block(text: &str) -> SiteConfig {
    if text.trim().is_empty() {
        return SiteConfig::default();
    }
    match SiteConfig::from_json(text) {
        Ok(config) => {
            log::debug!("loaded settings from #{CONFIG_ELEMENT_ID}");
            config
        }
        Err(error) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {error}");
            SiteConfig::default()
        }
    }
}
