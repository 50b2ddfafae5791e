//! Hero heading split into per-letter spans with the periodic float.

use dioxus::prelude::*;
use folio_core::letters::{pick_float_pair, split_title, FloatPair, FLOAT_DURATION, LETTER_FLOAT_SCHEDULE};

use crate::context::use_rng;
use crate::dom;
use crate::tasks::RepeatingTask;

/// CSS classes for the glyph at `index`
fn letter_class(pair: Option<FloatPair>, index: usize) -> String {
    match pair.and_then(|p| p.class_for(index)) {
        Some(extra) => format!("letter {extra}"),
        None => "letter".to_string(),
    }
}

/// `h1#hero-title`, one `span.letter` per character.
///
/// After a 2s lead-in an interior letter floats every 4-8s while its
/// neighbour pulls; both classes clear after the float duration.
#[component]
pub fn HeroTitle(text: String) -> Element {
    let rng = use_rng();
    let glyphs = use_hook(|| split_title(&text));
    let mut pair: Signal<Option<FloatPair>> = use_signal(|| None);

    let float_glyphs = glyphs.clone();
    let task = use_hook(move || {
        let picker = rng.clone();
        RepeatingTask::spawn(LETTER_FLOAT_SCHEDULE, rng, move || {
            let Some(next) = picker.with(|r| pick_float_pair(&float_glyphs, r)) else {
                return;
            };
            pair.set(Some(next));
            spawn(async move {
                dom::sleep(FLOAT_DURATION).await;
                if *pair.peek() == Some(next) {
                    pair.set(None);
                }
            });
        })
    });

    use_drop(move || task.stop());

    let current = pair();

    rsx! {
        h1 { id: "hero-title", class: "hero-title", "aria-label": "{text}",
            for (index, glyph) in glyphs.iter().enumerate() {
                span {
                    key: "{index}",
                    class: letter_class(current, index),
                    "aria-hidden": "true",
                    "{glyph}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_mark_the_pair_only() {
        let pair = Some(FloatPair { floating: 3, pulling: 2 });
        assert_eq!(letter_class(pair, 3), "letter floating");
        assert_eq!(letter_class(pair, 2), "letter pulling");
        assert_eq!(letter_class(pair, 4), "letter");
        assert_eq!(letter_class(None, 3), "letter");
    }
}
