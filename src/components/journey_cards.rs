//! Flip cards whose backs type out their description.

use dioxus::prelude::*;
use folio_core::content::{JourneyCard, JOURNEY_CARDS};
use folio_core::typewriter::{self, Flip, FlipCard, CARD_CHAR_DELAY};

use crate::dom;

/// One card; clicking flips it, and flipping back clears the typed text
#[component]
pub fn JourneyFlipCard(card: JourneyCard) -> Element {
    let mut state = use_signal(FlipCard::new);
    let mut typed = use_signal(String::new);

    let on_click = move |_: MouseEvent| {
        let flip = state.write().toggle();
        match flip {
            Flip::ToFront => typed.set(String::new()),
            Flip::ToBack { epoch } => {
                typed.set(String::new());
                spawn(async move {
                    typewriter::type_out(card.description, CARD_CHAR_DELAY, dom::sleep, move |text| {
                        // A newer flip owns the text now
                        if !state.peek().is_current(epoch) {
                            return false;
                        }
                        typed.set(text.to_string());
                        true
                    })
                    .await;
                });
            }
        }
    };

    let class = if state.read().is_flipped() {
        "journey-card flipped"
    } else {
        "journey-card"
    };

    rsx! {
        div { id: card.id, class: class, onclick: on_click,
            div { class: "journey-card-inner",
                div { class: "journey-card-front",
                    h3 { class: "journey-card-title", "{card.title}" }
                    div { class: "journey-card-hint", "Tap to read" }
                }
                div { class: "journey-card-back",
                    div { class: "typed-text", "{typed}" }
                }
            }
        }
    }
}

#[component]
pub fn JourneyCards() -> Element {
    rsx! {
        div { class: "journey-cards",
            for card in JOURNEY_CARDS {
                JourneyFlipCard { key: "{card.id}", card }
            }
        }
    }
}
