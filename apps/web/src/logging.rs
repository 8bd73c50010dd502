use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Sends `log` records to the browser console, one console method per level.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Installs the console logger. A second call keeps the first logger and
/// only adjusts the level.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_err() {
        log::debug!("logger already installed");
    }
    log::set_max_level(level);
}

/// `?debug` anywhere in the query string turns on debug output.
pub fn level_from_query(search: &str) -> LevelFilter {
    let debug = search
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair == "debug" || pair.starts_with("debug="));
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

const BANNER: [(&str, &str); 3] = [
    (
        "%c🪶 Voces Indígenas",
        "color: #C41E3A; font-size: 20px; font-weight: bold;",
    ),
    (
        "%cPreserving the linguistic heritage of Mexico",
        "color: #2D5F3F; font-size: 14px;",
    ),
    (
        "%cAcademic project of the Instituto Tecnológico de Oaxaca",
        "color: #666; font-size: 12px;",
    ),
];

pub fn banner() {
    for (text, style) in BANNER {
        console::log_2(&JsValue::from_str(text), &JsValue::from_str(style));
    }
}
