//! Black overlay that fades out once after load.

use dioxus::prelude::*;
use folio_core::intro::FadePhase;

use crate::dom;

#[component]
pub fn OpeningFade() -> Element {
    let mut phase = use_signal(FadePhase::default);

    use_effect(move || {
        spawn(async move {
            let mut current = FadePhase::default();
            while let Some((next, wait)) = current.next() {
                dom::sleep(wait).await;
                current = next;
                phase.set(next);
            }
            tracing::debug!("Opening fade removed");
        });
    });

    let current = phase();
    if current.is_removed() {
        return rsx! {};
    }
    let opacity = current.opacity();

    rsx! {
        div {
            class: "opening-fade",
            style: "opacity: {opacity};",
            "aria-hidden": "true",
        }
    }
}
