use std::io::Write;

use serde::Serialize;
use voces_core::domain::Endangerment;
use voces_core::markers::LOCATIONS;
use voces_core::pipeline::{result_label, select};
use voces_core::{CardRecord, FilterCriteria, FoldingCollator, SiteConfig};

#[derive(Debug, Serialize)]
pub struct LanguageReport {
    pub label: String,
    pub sort: &'static str,
    pub total: usize,
    pub languages: Vec<ReportedLanguage>,
}

#[derive(Debug, Serialize)]
pub struct ReportedLanguage {
    pub name: String,
    pub region: String,
    pub endangerment: String,
    pub speakers: String,
}

/// Runs the catalog pipeline over `cards` and keeps the visible ones in
/// display order.
pub fn build_language_report(cards: &[CardRecord], criteria: &FilterCriteria) -> LanguageReport {
    let visible = select(cards, criteria, &FoldingCollator);
    let languages = visible
        .iter()
        .map(|&index| {
            let card = &cards[index];
            ReportedLanguage {
                name: card.name.clone(),
                region: card.region.clone(),
                endangerment: card.endangerment.clone(),
                speakers: card.speakers.clone(),
            }
        })
        .collect();

    LanguageReport {
        label: result_label(visible.len()),
        sort: criteria.sort_key.as_str(),
        total: cards.len(),
        languages,
    }
}

pub fn render_languages(out: &mut impl Write, report: &LanguageReport) -> std::io::Result<()> {
    writeln!(out, "\n{}", report.label)?;
    writeln!(out, "{}", "=".repeat(report.label.chars().count()))?;
    writeln!(out, "Sorted by: {}", report.sort)?;
    writeln!(out, "Catalog size: {}", report.total)?;
    writeln!(out)?;
    for language in &report.languages {
        writeln!(
            out,
            "- {} | {} | {} | {}",
            language.name, language.region, language.endangerment, language.speakers
        )?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct MarkerRow {
    pub name: &'static str,
    pub native_name: &'static str,
    pub region: &'static str,
    pub status: &'static str,
    pub color: &'static str,
    pub speakers: &'static str,
    pub coordinates: [f64; 2],
    pub profile: String,
}

pub fn build_marker_rows() -> Vec<MarkerRow> {
    LOCATIONS
        .iter()
        .map(|location| MarkerRow {
            name: location.name,
            native_name: location.native_name,
            region: location.region,
            status: location.status.label(),
            color: location.status.color(),
            speakers: location.speakers,
            coordinates: [location.latitude, location.longitude],
            profile: location.profile_href(),
        })
        .collect()
}

pub fn render_markers(out: &mut impl Write, rows: &[MarkerRow]) -> std::io::Result<()> {
    writeln!(out, "\nMap Locations")?;
    writeln!(out, "=============")?;
    for status in Endangerment::ALL {
        let count = rows.iter().filter(|row| row.status == status.label()).count();
        writeln!(out, "{}: {count}", status.label())?;
    }
    writeln!(out)?;
    for row in rows {
        writeln!(
            out,
            "- {} ({}) | {} | {} | {:.4}, {:.4} | {}",
            row.name,
            row.native_name,
            row.region,
            row.speakers,
            row.coordinates[0],
            row.coordinates[1],
            row.profile
        )?;
    }
    Ok(())
}

pub fn render_config(out: &mut impl Write, config: &SiteConfig) -> std::io::Result<()> {
    writeln!(out, "\nSite Settings")?;
    writeln!(out, "=============")?;
    writeln!(out, "Search debounce: {} ms", config.search_debounce_ms)?;
    writeln!(
        out,
        "Map: #{} at [{}, {}] zoom {} (max {}), starts {} ms after load",
        config.map.container_id,
        config.map.center[0],
        config.map.center[1],
        config.map.zoom,
        config.map.max_zoom,
        config.map.init_delay_ms
    )?;
    writeln!(
        out,
        "Reveal: threshold {}, margin {}",
        config.reveal.threshold, config.reveal.root_margin
    )?;
    writeln!(
        out,
        "Counters: threshold {}, {} ms in {} ms ticks",
        config.counter.threshold, config.counter.duration_ms, config.counter.tick_ms
    )?;
    writeln!(
        out,
        "Timeline: reanimate after {} ms, click throttle {} ms",
        config.timeline.reanimate_delay_ms, config.timeline.click_throttle_ms
    )?;
    writeln!(out, "Anchor scroll margin: {} px", config.scroll.extra_offset_px)?;
    Ok(())
}
