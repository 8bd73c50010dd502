//! Fixed set of language locations shown on the map, and their placement on
//! any map widget.

use serde::Serialize;

use crate::config::MapSettings;
use crate::domain::Endangerment;
use crate::error::SiteResult;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationMarker {
    pub name: &'static str,
    pub native_name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub status: Endangerment,
    pub speakers: &'static str,
    pub region: &'static str,
}

pub static LOCATIONS: [LocationMarker; 6] = [
    LocationMarker {
        name: "Ayapaneco",
        native_name: "Nuumte Oote",
        latitude: 18.2258,
        longitude: -93.1894,
        status: Endangerment::Critical,
        speakers: "2 speakers (deceased)",
        region: "Tabasco",
    },
    LocationMarker {
        name: "Kiliwa",
        native_name: "Ko'lew",
        latitude: 30.8333,
        longitude: -115.3833,
        status: Endangerment::Critical,
        speakers: "30-50 speakers",
        region: "Baja California",
    },
    LocationMarker {
        name: "Chontal",
        native_name: "Slijuala Xanuc'",
        latitude: 16.2667,
        longitude: -95.6833,
        status: Endangerment::Severe,
        speakers: "3,000-5,000 speakers",
        region: "Oaxaca",
    },
    LocationMarker {
        name: "Huave",
        native_name: "Ikoots",
        latitude: 16.2,
        longitude: -95.0333,
        status: Endangerment::Severe,
        speakers: "12,000-18,000 speakers",
        region: "Oaxaca",
    },
    LocationMarker {
        name: "Ixcateco",
        native_name: "Xwja",
        latitude: 18.0333,
        longitude: -96.8167,
        status: Endangerment::Critical,
        speakers: "150-200 speakers",
        region: "Oaxaca",
    },
    LocationMarker {
        name: "Zapoteco",
        native_name: "Diidxazá",
        latitude: 17.05,
        longitude: -96.7167,
        status: Endangerment::Endangered,
        speakers: "350,000-500,000 speakers",
        region: "Oaxaca",
    },
];

/// Leaflet `circleMarker` path options.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleStyle {
    pub radius: f64,
    pub fill_color: &'static str,
    pub color: &'static str,
    pub weight: u8,
    pub opacity: f64,
    pub fill_opacity: f64,
}

/// Leaflet `tileLayer` options plus its URL template.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayerSpec {
    #[serde(skip)]
    pub url: String,
    pub attribution: String,
    pub max_zoom: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub latitude: f64,
    pub longitude: f64,
    pub style: CircleStyle,
    pub popup_html: String,
}

pub trait MapWidget {
    fn add_base_layer(&mut self, tiles: &TileLayerSpec) -> SiteResult<()>;

    /// Adds a marker whose popup opens on hover.
    fn add_marker(&mut self, marker: &MarkerSpec) -> SiteResult<()>;
}

impl LocationMarker {
    pub fn style(&self, radius: f64) -> CircleStyle {
        CircleStyle {
            radius,
            fill_color: self.status.color(),
            color: "#ffffff",
            weight: 3,
            opacity: 1.0,
            fill_opacity: 0.9,
        }
    }

    pub fn profile_href(&self) -> String {
        format!("perfiles.html#{}", self.name.to_lowercase())
    }

    pub fn popup_html(&self) -> String {
        format!(
            concat!(
                r#"<div style="font-family: sans-serif; min-width: 200px;">"#,
                r#"<h3 style="margin: 0 0 5px 0; color: #D4740F; font-size: 1.1rem;">{name}</h3>"#,
                r#"<p style="margin: 0 0 8px 0; color: #888; font-size: 0.85rem; font-style: italic;">{native}</p>"#,
                r#"<div style="margin-bottom: 8px;"><span style="background: {color}; color: white; padding: 4px 8px; border-radius: 12px; font-size: 0.7rem; font-weight: 600; text-transform: uppercase;">{label}</span></div>"#,
                r#"<p style="margin: 5px 0; color: #666; font-size: 0.85rem;">📍 {region}</p>"#,
                r#"<p style="margin: 5px 0; color: #666; font-size: 0.85rem;">👥 {speakers}</p>"#,
                r#"<a href="{href}" style="display: inline-block; margin-top: 8px; color: #8B5A2B; text-decoration: none; font-size: 0.85rem; font-weight: 500;">View full profile →</a>"#,
                "</div>"
            ),
            name = escape_html(self.name),
            native = escape_html(self.native_name),
            color = self.status.color(),
            label = self.status.label(),
            region = escape_html(self.region),
            speakers = escape_html(self.speakers),
            href = escape_html(&self.profile_href()),
        )
    }
}

pub fn tile_layer(settings: &MapSettings) -> TileLayerSpec {
    TileLayerSpec {
        url: settings.tile_url.clone(),
        attribution: settings.attribution.clone(),
        max_zoom: settings.max_zoom,
    }
}

/// Adds the base layer and one marker per location. Returns the number of
/// markers placed.
pub fn render<W: MapWidget>(
    widget: &mut W,
    settings: &MapSettings,
    locations: &[LocationMarker],
) -> SiteResult<usize> {
    widget.add_base_layer(&tile_layer(settings))?;

    for location in locations {
        widget.add_marker(&MarkerSpec {
            latitude: location.latitude,
            longitude: location.longitude,
            style: location.style(settings.marker_radius),
            popup_html: location.popup_html(),
        })?;
    }

    log::debug!("placed {} map markers", locations.len());
    Ok(locations.len())
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
