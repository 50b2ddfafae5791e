#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod dom;
mod pages;
mod tasks;
mod theme;

use std::sync::OnceLock;

use folio_core::config::CONFIG_ELEMENT_ID;
use folio_core::{FolioConfig, FolioError};

/// Page settings, read once from the host document at startup
static PAGE_CONFIG: OnceLock<FolioConfig> = OnceLock::new();

/// Get the page settings (embedded or default)
pub fn page_config() -> &'static FolioConfig {
    PAGE_CONFIG.get_or_init(FolioConfig::default)
}

/// Parse the `<script id="folio-config" type="application/json">` block,
/// if the host page carries one
fn read_embedded_config() -> Result<Option<FolioConfig>, FolioError> {
    let Ok(element) = dom::element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };
    let text = element.text_content().unwrap_or_default();
    if text.trim().is_empty() {
        return Ok(None);
    }
    FolioConfig::from_json(&text).map(Some)
}

fn main() {
    let (config, problem) = match read_embedded_config() {
        Ok(found) => (found.unwrap_or_default(), None),
        Err(e) => (FolioConfig::default(), Some(e)),
    };

    // Logger must exist before anything is reported
    let _ = dioxus::logger::init(config.log_level());

    if let Some(e) = problem {
        tracing::warn!("Ignoring embedded page config: {}", e);
    }
    tracing::info!(
        "Starting portfolio with {} stars, trail of {}",
        config.star_count,
        config.trail_capacity
    );

    let _ = PAGE_CONFIG.set(config);

    dioxus::launch(app::App);
}
