//! Hand-written arrow pointing at the profile photo.

use dioxus::prelude::*;
use folio_core::reveal::RevealOptions;
use folio_core::typewriter::{self, Callout};

use crate::context::use_rng;
use crate::dom::{self, EventStream};
use crate::page_config;
use crate::tasks::RepeatingTask;

/// Whether the section with `id` currently meets the reveal threshold
fn section_in_view(id: &str, options: &RevealOptions) -> bool {
    let Ok(section) = dom::element_by_id(id) else {
        return false;
    };
    let (width, height) = dom::viewport_size();
    options.is_revealed(&dom::rect_of(&section), &options.reveal_region(width, height))
}

/// Arrow and typed phrase beside the photo in `section`.
///
/// Each play waits out a lead-in, types the phrase, holds it for a second
/// and fades. Plays repeat every 8-10s while the section is in view and
/// never overlap. Leaving the section and coming back does not shorten
/// the gap.
#[component]
pub fn ArrowCallout(section: String) -> Element {
    let rng = use_rng();
    let mut callout = use_signal(Callout::new);
    let mut typed = use_signal(String::new);

    let play = move || {
        if !callout.write().try_begin(dom::now()) {
            return;
        }
        spawn(async move {
            typewriter::play_callout(
                dom::sleep,
                move |phase| callout.write().set_phase(phase),
                move |text| typed.set(text.to_string()),
            )
            .await;
        });
    };

    use_effect(move || {
        let rng = rng.clone();
        let section = section.clone();
        spawn(async move {
            let options = RevealOptions::from(page_config());
            let mut events = EventStream::on_window(&["scroll", "resize"]);
            let mut replay: Option<RepeatingTask> = None;

            loop {
                let in_view = section_in_view(&section, &options);
                if in_view && replay.is_none() {
                    tracing::debug!("Section {} in view, starting callout", section);
                    let schedule = callout.peek().replay_schedule(dom::now());
                    replay = Some(RepeatingTask::spawn(schedule, rng.clone(), play));
                } else if !in_view {
                    if let Some(task) = replay.take() {
                        task.stop();
                    }
                }
                if events.next().await.is_none() {
                    break;
                }
            }
        });
    });

    let class = callout.read().phase().class();

    rsx! {
        div { class: class, "aria-hidden": "true",
            svg {
                class: "arrow-svg",
                "viewBox": "0 0 120 60",
                "width": "120",
                "height": "60",
                path {
                    d: "M 110 10 Q 60 0, 20 40",
                    fill: "none",
                    stroke: "currentColor",
                    "stroke-width": "2",
                    "stroke-linecap": "round",
                }
                path {
                    d: "M 20 40 L 32 38 M 20 40 L 24 28",
                    fill: "none",
                    stroke: "currentColor",
                    "stroke-width": "2",
                    "stroke-linecap": "round",
                }
            }
            div { class: "arrow-text", "{typed}" }
        }
    }
}
