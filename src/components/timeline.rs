//! Journey timeline: a wiggling line threaded through four markers.

use dioxus::prelude::*;
use folio_core::content::TIMELINE_MILESTONES;
use folio_core::timeline::{marker_center_percent, wiggle_path, TIMELINE_MARKERS, TIMELINE_WIGGLE};

use crate::dom::{self, EventStream};

const CONTAINER_ID: &str = "timeline";

/// Zigzag placement of the markers, in percent of the container
const MARKER_POSITIONS: [(f64, f64); 4] = [(20.0, 10.0), (75.0, 36.0), (25.0, 62.0), (80.0, 88.0)];

/// Measure the markers and build the connecting path
fn measure() -> Option<String> {
    let container = dom::rect_of(&dom::element_by_id(CONTAINER_ID).ok()?);
    let centers = TIMELINE_MARKERS
        .iter()
        .map(|id| {
            let marker = dom::element_by_id(id).ok()?;
            marker_center_percent(&dom::rect_of(&marker), &container)
        })
        .collect::<Option<Vec<_>>>()?;
    wiggle_path(&centers, TIMELINE_WIGGLE)
}

/// `div#timeline` with its markers and the SVG line joining them.
///
/// The line is measured after the first frame and again on every resize.
#[component]
pub fn JourneyTimeline() -> Element {
    let mut line: Signal<Option<String>> = use_signal(|| None);

    use_effect(move || {
        spawn(async move {
            dom::next_frame().await;
            let mut events = EventStream::on_window(&["resize"]);
            loop {
                match measure() {
                    Some(d) => line.set(Some(d)),
                    None => tracing::debug!("Timeline markers not laid out yet"),
                }
                if events.next().await.is_none() {
                    break;
                }
            }
        });
    });

    rsx! {
        div { id: CONTAINER_ID, class: "timeline-container",
            svg {
                class: "timeline-svg",
                "viewBox": "0 0 100 100",
                "preserveAspectRatio": "none",
                "aria-hidden": "true",
                if let Some(d) = line() {
                    path {
                        class: "timeline-path",
                        d: "{d}",
                        fill: "none",
                        "vector-effect": "non-scaling-stroke",
                    }
                }
            }
            for ((id, (x, y)), label) in TIMELINE_MARKERS.iter().zip(MARKER_POSITIONS).zip(TIMELINE_MILESTONES) {
                div {
                    key: "{id}",
                    id: *id,
                    class: "timeline-marker",
                    style: "left: {x}%; top: {y}%;",
                    div { class: "timeline-dot" }
                    div { class: "timeline-label", "{label}" }
                }
            }
        }
    }
}
