use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

/// Presentation settings. Every field has a default, so a config block only
/// needs the values it changes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Quiet period before a search keystroke re-filters. 0 filters on every
    /// keystroke.
    pub search_debounce_ms: u32,
    pub map: MapSettings,
    pub reveal: RevealSettings,
    pub counter: CounterSettings,
    pub timeline: TimelineSettings,
    pub scroll: ScrollSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapSettings {
    pub container_id: String,
    pub center: [f64; 2],
    pub zoom: u8,
    pub max_zoom: u8,
    pub tile_url: String,
    pub attribution: String,
    /// Wait after `load` before looking for the map library.
    pub init_delay_ms: u32,
    pub marker_radius: f64,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            container_id: "map".to_string(),
            center: [23.6345, -102.5528],
            zoom: 5,
            max_zoom: 18,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "© OpenStreetMap".to_string(),
            init_delay_ms: 300,
            marker_radius: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealSettings {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CounterSettings {
    pub threshold: f64,
    pub duration_ms: u32,
    pub tick_ms: u32,
}

impl Default for CounterSettings {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            duration_ms: 2000,
            tick_ms: 16,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineSettings {
    pub reanimate_delay_ms: u32,
    /// Minimum gap between handled filter clicks. 0 handles every click.
    pub click_throttle_ms: u32,
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            reanimate_delay_ms: 100,
            click_throttle_ms: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollSettings {
    pub extra_offset_px: i32,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self { extra_offset_px: 20 }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> SiteResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SiteResult<()> {
        if self.counter.tick_ms == 0 {
            return Err(SiteError::InvalidConfig("counter.tickMs must be positive".into()));
        }
        if self.counter.duration_ms < self.counter.tick_ms {
            return Err(SiteError::InvalidConfig(
                "counter.durationMs must be at least one tick".into(),
            ));
        }
        for (name, threshold) in [
            ("reveal.threshold", self.reveal.threshold),
            ("counter.threshold", self.counter.threshold),
        ] {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(SiteError::InvalidConfig(format!(
                    "{name} must be within 0..=1, got {threshold}"
                )));
            }
        }
        if self.map.zoom > self.map.max_zoom {
            return Err(SiteError::InvalidConfig(format!(
                "map.zoom {} exceeds map.maxZoom {}",
                self.map.zoom, self.map.max_zoom
            )));
        }
        if self.map.container_id.trim().is_empty() {
            return Err(SiteError::InvalidConfig("map.containerId is empty".into()));
        }
        Ok(())
    }
}
