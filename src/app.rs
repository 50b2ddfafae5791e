use dioxus::prelude::*;

use crate::context::SharedRng;
use crate::pages::Portfolio;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the shared random source and the page.
#[component]
pub fn App() -> Element {
    use_context_provider(SharedRng::from_entropy);

    rsx! {
        style { {GLOBAL_STYLES} }
        Portfolio {}
    }
}
