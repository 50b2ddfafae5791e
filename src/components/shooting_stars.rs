//! Shooting stars streaking across the hero banner.

use dioxus::prelude::*;
use folio_core::sky::{ShootingStar, SHOOTING_STAR_SCHEDULE};
use folio_ui::ShootingStarView;

use crate::context::use_rng;
use crate::dom;
use crate::tasks::RepeatingTask;

/// Container that spawns a streak every 5-12 seconds.
///
/// Each streak is inserted inactive, activated on the next frame so the CSS
/// transition runs, and removed after its duration plus a short linger.
#[component]
pub fn ShootingStars() -> Element {
    let rng = use_rng();
    let mut stars: Signal<Vec<ShootingStar>> = use_signal(Vec::new);

    let task = use_hook(move || {
        let mut next_id = 0u64;
        let spawner = rng.clone();
        RepeatingTask::spawn(SHOOTING_STAR_SCHEDULE, rng, move || {
            next_id += 1;
            let star = spawner.with(|r| ShootingStar::spawn(next_id, r));
            let id = star.id;
            let lifetime = star.lifetime();
            stars.write().push(star);

            spawn(async move {
                dom::next_frame().await;
                if let Some(s) = stars.write().iter_mut().find(|s| s.id == id) {
                    s.active = true;
                }
                dom::sleep(lifetime).await;
                stars.write().retain(|s| s.id != id);
            });
        })
    });

    use_drop(move || task.stop());

    rsx! {
        div { class: "shooting-stars-container", "aria-hidden": "true",
            for star in stars() {
                ShootingStarView { key: "{star.id}", star }
            }
        }
    }
}
