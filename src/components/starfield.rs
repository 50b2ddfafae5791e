//! Static starfield background.

use dioxus::prelude::*;
use folio_core::sky::generate_starfield;
use folio_ui::StarField;

use crate::context::use_rng;
use crate::page_config;

/// Background dots, generated once per page load
#[component]
pub fn Starfield() -> Element {
    let rng = use_rng();
    let stars = use_hook(move || {
        let count = page_config().star_count;
        let stars = rng.with(|r| generate_starfield(count, r));
        tracing::debug!("Generated {} stars", stars.len());
        stars
    });

    rsx! {
        StarField { stars }
    }
}
