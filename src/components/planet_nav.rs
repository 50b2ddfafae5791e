//! Planet cluster: section navigation from the hero banner.

use dioxus::prelude::*;
use folio_core::content::PLANETS;
use folio_core::planets::{scroll_target, ClusterVisibility, PlanetNav, ACTIVE_DURATION};

use crate::dom::{self, EventStream};
use crate::page_config;

/// Class set on `<body>` while the cluster is hidden
const SCROLLED_CLASS: &str = "scrolled";

/// Cluster of planet buttons orbiting the hero title.
///
/// Clicking a planet marks it active for two seconds and smooth-scrolls to
/// its section. The cluster fades out once the page has scrolled past half
/// the viewport height and comes back when scrolled up again.
#[component]
pub fn PlanetCluster() -> Element {
    let mut nav = use_signal(PlanetNav::new);
    let mut visibility = use_signal(|| ClusterVisibility::Shown);

    use_effect(move || {
        spawn(async move {
            let ratio = page_config().cluster_hide_ratio;
            let mut events = EventStream::on_window(&["scroll", "resize"]);
            loop {
                let (_, height) = dom::viewport_size();
                let next = ClusterVisibility::for_scroll(dom::scroll_y(), height, ratio);
                if *visibility.peek() != next {
                    visibility.set(next);
                    dom::set_body_class(SCROLLED_CLASS, next.is_hidden());
                }
                if events.next().await.is_none() {
                    break;
                }
            }
        });
    });

    let mut go_to = move |index: usize| {
        let planet = PLANETS[index];
        let offset = match dom::offset_top(planet.section) {
            Ok(offset) => offset,
            Err(e) => {
                tracing::debug!("Planet {} has no target: {}", planet.label, e);
                return;
            }
        };

        let activation = nav.write().activate(index);
        dom::smooth_scroll_to(scroll_target(offset, page_config().header_offset_px));

        spawn(async move {
            dom::sleep(ACTIVE_DURATION).await;
            nav.write().expire(activation);
        });
    };

    let current = nav.read().active();

    rsx! {
        div { class: "planets-container", style: visibility().style(),
            for (index, planet) in PLANETS.iter().enumerate() {
                folio_ui::PlanetButton {
                    key: "{planet.section}",
                    planet: *planet,
                    active: current == Some(index),
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        evt.stop_propagation();
                        go_to(index);
                    },
                }
            }
            folio_ui::PlanetLegend { planets: PLANETS.to_vec() }
        }
    }
}
